//! Items repository errors.

use thiserror::Error;

use shopfront::items::{ItemId, ItemValidationError};

/// Items repository failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemsError {
    /// No item is stored under this id.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// The item failed validation and was not stored.
    #[error("invalid item")]
    Validation(#[from] ItemValidationError),
}
