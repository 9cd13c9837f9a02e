use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use wigstock_core::ItemId;
use wigstock_inventory::{InventoryItem, ItemFields};

use super::r#trait::{InventoryStore, StoreError};
use crate::clock::{Clock, SystemClock};

/// In-memory inventory store.
///
/// Intended for tests/dev. Rows are kept in insertion order; ids are
/// UUIDv7 and never reused. Can be switched offline to exercise failure
/// paths.
#[derive(Debug)]
pub struct InMemoryInventoryStore<C = SystemClock> {
    rows: RwLock<Vec<InventoryItem>>,
    offline: AtomicBool,
    clock: C,
}

impl InMemoryInventoryStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryInventoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryInventoryStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            offline: AtomicBool::new(false),
            clock,
        }
    }

    /// While offline every call fails with `StoreError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline() {
            return Err(StoreError::Unavailable("store is offline".to_string()));
        }
        Ok(())
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

#[async_trait]
impl<C: Clock> InventoryStore for InMemoryInventoryStore<C> {
    async fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        self.ensure_online()?;
        let rows = self.rows.read().map_err(|_| poisoned())?;

        // Newest insert first on equal timestamps.
        let mut out: Vec<InventoryItem> = rows.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn insert(&self, fields: ItemFields) -> Result<InventoryItem, StoreError> {
        self.ensure_online()?;
        let item = InventoryItem::new(ItemId::new(), fields, self.clock.now());

        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, fields: ItemFields) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().map_err(|_| poisoned())?;

        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        row.fields = fields;
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().map_err(|_| poisoned())?;

        let idx = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        rows.remove(idx);
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<InventoryItem>, StoreError> {
        self.ensure_online()?;
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|r| r.matches_code(code)).cloned())
    }
}
