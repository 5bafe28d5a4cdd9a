//! Items repository.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::{debug, info};

use shopfront::items::{Item, ItemId, ItemUpdate, NewItem};

use crate::items::{ItemsError, store::ItemStore};

/// In-memory item repository.
///
/// A single lock guards both the items and the identifier counter, so
/// creation, deletion and updates are serialized while reads run
/// concurrently and only ever see whole items.
#[derive(Debug, Default)]
pub struct InMemoryItemsRepository {
    store: RwLock<ItemStore>,
}

impl InMemoryItemsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemsRepository for InMemoryItemsRepository {
    async fn list_items(&self) -> Vec<Item> {
        self.store.read().await.list()
    }

    async fn get_item(&self, id: ItemId) -> Option<Item> {
        self.store.read().await.get(id)
    }

    async fn put_item(&self, item: NewItem) -> Result<Item, ItemsError> {
        let created = self.store.write().await.insert(item)?;

        info!(id = %created.id, "created item");

        Ok(created)
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ItemsError> {
        self.store.write().await.remove(id)?;

        info!(%id, "deleted item");

        Ok(())
    }

    async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, ItemsError> {
        let updated = self.store.write().await.update(id, &update)?;

        debug!(%id, ?update, "updated item");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// Returns a snapshot of every stored item, in no particular order.
    async fn list_items(&self) -> Vec<Item>;

    /// Retrieves a single item, or `None` when the id is unknown.
    async fn get_item(&self, id: ItemId) -> Option<Item>;

    /// Stores a new item under the next identifier.
    ///
    /// Identifiers strictly increase and are never reused, even after deletion.
    async fn put_item(&self, item: NewItem) -> Result<Item, ItemsError>;

    /// Removes an item. Deleting an unknown id is an error.
    async fn delete_item(&self, id: ItemId) -> Result<(), ItemsError>;

    /// Applies a partial update to a stored item and returns the result.
    async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, ItemsError>;
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use rust_decimal_macros::dec;
    use shopfront::items::ItemValidationError;
    use testresult::TestResult;

    use super::*;

    fn new_item(articul: i64) -> NewItem {
        NewItem {
            name: Some(format!("Item {articul}")),
            description: Some(format!("Description {articul}")),
            original_price: Some(dec!(10.00)),
            discount_price: Some(dec!(10.00)),
            articul: Some(articul),
            category: Some("Category 1".to_string()),
            product_of_day: false,
        }
    }

    #[tokio::test]
    async fn fresh_repository_lists_nothing() {
        let repository = InMemoryItemsRepository::new();

        assert!(repository.list_items().await.is_empty(), "store should start empty");
    }

    #[tokio::test]
    async fn put_then_get_round_trips() -> TestResult {
        let repository = InMemoryItemsRepository::new();
        let input = new_item(100_001);

        let created = repository.put_item(input.clone()).await?;
        let fetched = repository.get_item(created.id).await;

        assert_eq!(fetched, Some(Item::from_new(created.id, input)));

        Ok(())
    }

    #[tokio::test]
    async fn first_identifier_is_one() -> TestResult {
        let repository = InMemoryItemsRepository::new();

        let created = repository.put_item(new_item(1)).await?;

        assert_eq!(created.id, ItemId::new(1));

        Ok(())
    }

    #[tokio::test]
    async fn identifiers_are_never_reused() -> TestResult {
        let repository = InMemoryItemsRepository::new();

        let first = repository.put_item(new_item(1)).await?;
        let second = repository.put_item(new_item(2)).await?;

        repository.delete_item(second.id).await?;
        repository.delete_item(first.id).await?;

        let third = repository.put_item(new_item(3)).await?;

        assert!(first.id < second.id, "ids should increase");
        assert!(second.id < third.id, "ids should keep increasing after deletes");

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let repository = InMemoryItemsRepository::new();

        assert_eq!(repository.get_item(ItemId::new(42)).await, None);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() -> TestResult {
        let repository = InMemoryItemsRepository::new();
        let created = repository.put_item(new_item(1)).await?;

        repository.delete_item(created.id).await?;

        let result = repository.delete_item(created.id).await;

        assert_eq!(result, Err(ItemsError::NotFound(created.id)));
        assert_eq!(repository.get_item(created.id).await, None);

        Ok(())
    }

    #[tokio::test]
    async fn empty_item_is_rejected_without_consuming_an_id() -> TestResult {
        let repository = InMemoryItemsRepository::new();

        let rejected = repository
            .put_item(NewItem {
                category: None,
                ..new_item(1)
            })
            .await;

        assert_eq!(
            rejected,
            Err(ItemsError::Validation(ItemValidationError::MissingFields(
                vec!["category"]
            )))
        );

        let created = repository.put_item(new_item(2)).await?;

        assert_eq!(created.id, ItemId::new(1));
        assert_eq!(repository.list_items().await.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_changes_only_requested_fields() -> TestResult {
        let repository = InMemoryItemsRepository::new();
        let created = repository.put_item(new_item(1)).await?;

        let updated = repository
            .update_item(
                created.id,
                ItemUpdate {
                    discount_price: Some(dec!(8.50)),
                    product_of_day: Some(true),
                },
            )
            .await?;

        assert_eq!(updated.discount_price, Some(dec!(8.50)));
        assert!(updated.product_of_day, "flag should be set");
        assert_eq!(updated.name, created.name);
        assert_eq!(repository.get_item(created.id).await, Some(updated));

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repository = InMemoryItemsRepository::new();

        let result = repository
            .update_item(ItemId::new(9), ItemUpdate::default())
            .await;

        assert_eq!(result, Err(ItemsError::NotFound(ItemId::new(9))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_puts_get_distinct_ids() -> TestResult {
        let repository = Arc::new(InMemoryItemsRepository::new());

        let handles: Vec<_> = (1..=64)
            .map(|articul| {
                let repository = Arc::clone(&repository);

                tokio::spawn(async move { repository.put_item(new_item(articul)).await })
            })
            .collect();

        let mut ids = HashSet::new();

        for handle in handles {
            let created = handle.await??;

            assert!(ids.insert(created.id), "id {} handed out twice", created.id);
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(repository.list_items().await.len(), 64);

        Ok(())
    }
}
