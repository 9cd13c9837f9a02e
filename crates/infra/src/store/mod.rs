//! Persistence client boundary for inventory records.
//!
//! The view model never writes; every create/update/delete goes through an
//! `InventoryStore`, and callers re-read the full list afterwards.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use r#trait::{InventoryStore, StoreError};
