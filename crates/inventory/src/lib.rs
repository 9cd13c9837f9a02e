//! Inventory domain module.
//!
//! Records, form drafts and their validation, and the view model that turns
//! a snapshot of records into the filtered, searched and sorted rows a table
//! renders. Pure logic: no IO, no storage.

pub mod column;
pub mod draft;
pub mod item;
pub mod view_model;

#[cfg(test)]
pub(crate) mod fixtures;

pub use column::{Column, FieldValue};
pub use draft::{DraftField, ItemDraft, ValidationError, ValidationErrors, ValidationReason, validate};
pub use item::{InventoryItem, ItemFields, ItemStatus};
pub use view_model::{InventoryViewModel, SortDirection, SortState};
