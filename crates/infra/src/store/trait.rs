use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use wigstock_core::ItemId;
use wigstock_inventory::{InventoryItem, ItemFields};

/// Persistence client operation error.
///
/// Every call is all-or-nothing: on error nothing was written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(ItemId),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Persistence client for inventory records.
///
/// `list_all` returns records newest first (by `created_at`). The store
/// assigns `id` and `created_at` on insert. Barcode uniqueness is left to
/// the implementation.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError>;

    async fn insert(&self, fields: ItemFields) -> Result<InventoryItem, StoreError>;

    /// Replace every field of `id` wholesale.
    async fn update(&self, id: ItemId, fields: ItemFields) -> Result<(), StoreError>;

    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;

    /// Exact match on barcode or id string (scanner lookup).
    async fn find_by_code(&self, code: &str) -> Result<Option<InventoryItem>, StoreError>;
}

#[async_trait]
impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        (**self).list_all().await
    }

    async fn insert(&self, fields: ItemFields) -> Result<InventoryItem, StoreError> {
        (**self).insert(fields).await
    }

    async fn update(&self, id: ItemId, fields: ItemFields) -> Result<(), StoreError> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<InventoryItem>, StoreError> {
        (**self).find_by_code(code).await
    }
}
