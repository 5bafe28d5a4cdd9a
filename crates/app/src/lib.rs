//! Shopfront application: the item repository and the discount sync job.

pub mod context;
pub mod items;
pub mod sync;

#[cfg(test)]
mod test;
