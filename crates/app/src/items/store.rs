//! In-memory item storage.

use std::collections::HashMap;

use shopfront::items::{Item, ItemId, ItemUpdate, NewItem};

use crate::items::ItemsError;

const FIRST_ITEM_ID: u64 = 1;

/// Items plus the identifier counter. Callers provide the locking.
#[derive(Debug)]
pub(crate) struct ItemStore {
    next_id: u64,
    items: HashMap<ItemId, Item>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            next_id: FIRST_ITEM_ID,
            items: HashMap::new(),
        }
    }
}

impl ItemStore {
    pub(crate) fn list(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).cloned()
    }

    pub(crate) fn insert(&mut self, item: NewItem) -> Result<Item, ItemsError> {
        item.validate()?;

        let id = self.allocate_id();
        let item = Item::from_new(id, item);

        self.items.insert(id, item.clone());

        Ok(item)
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> Result<Item, ItemsError> {
        self.items.remove(&id).ok_or(ItemsError::NotFound(id))
    }

    pub(crate) fn update(&mut self, id: ItemId, update: &ItemUpdate) -> Result<Item, ItemsError> {
        let item = self.items.get_mut(&id).ok_or(ItemsError::NotFound(id))?;

        item.apply(update);

        Ok(item.clone())
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);

        self.next_id += 1;

        id
    }
}
