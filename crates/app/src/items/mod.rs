//! Items

pub mod errors;
pub mod repository;
mod store;

pub use errors::ItemsError;
pub use repository::*;
