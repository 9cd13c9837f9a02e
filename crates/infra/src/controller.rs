//! Inventory controller: the view model plus the collaborators it feeds on.
//!
//! Owns the record snapshot (through [`InventoryViewModel`]) and the dialog
//! state of the inventory screen: the details target, the add and edit
//! forms, the pending delete and the last scanner lookup. Every store call
//! is a single request with no retry; after a successful mutation the whole
//! list is re-read instead of patching the snapshot, and a failed call
//! leaves the snapshot as it was.

use thiserror::Error;
use tracing::{debug, error, info, warn};

use wigstock_core::ItemId;
use wigstock_inventory::{
    Column, InventoryItem, InventoryViewModel, ItemDraft, ItemStatus, SortState, ValidationErrors,
};

use crate::clock::{Clock, SystemClock};
use crate::notify::{Notification, Notifier};
use crate::session::Session;
use crate::store::{InventoryStore, StoreError};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("sign in required")]
    Unauthenticated,

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("item not in current inventory: {0}")]
    NotFound(ItemId),

    #[error("no add form open")]
    NoAddInProgress,

    #[error("no edit in progress")]
    NoEditInProgress,

    #[error("no delete pending")]
    NoPendingDelete,
}

/// A form being filled in, with the errors of its last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: ItemDraft,
    pub errors: ValidationErrors,
}

impl FormState {
    fn new(draft: ItemDraft) -> Self {
        Self {
            draft,
            errors: ValidationErrors::default(),
        }
    }
}

/// Edit dialog state for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ItemId,
    /// Status when editing began; decides sold-date stamping on save.
    pub original_status: ItemStatus,
    pub form: FormState,
}

pub struct InventoryController<S, N, C = SystemClock> {
    store: S,
    notifier: N,
    clock: C,
    session: Session,
    view: InventoryViewModel,
    selected: Option<ItemId>,
    add: Option<FormState>,
    edit: Option<EditSession>,
    pending_delete: Option<ItemId>,
    last_lookup: Option<InventoryItem>,
}

impl<S, N> InventoryController<S, N, SystemClock>
where
    S: InventoryStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N, session: Session) -> Self {
        Self::with_clock(store, notifier, SystemClock, session)
    }
}

impl<S, N, C> InventoryController<S, N, C>
where
    S: InventoryStore,
    N: Notifier,
    C: Clock,
{
    pub fn with_clock(store: S, notifier: N, clock: C, session: Session) -> Self {
        Self {
            store,
            notifier,
            clock,
            session,
            view: InventoryViewModel::new(),
            selected: None,
            add: None,
            edit: None,
            pending_delete: None,
            last_lookup: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = session;
    }

    /// Drop the session together with everything read under it.
    pub fn sign_out(&mut self) {
        self.session = Session::Anonymous;
        self.view.replace_records(Vec::new());
        self.selected = None;
        self.add = None;
        self.edit = None;
        self.pending_delete = None;
        self.last_lookup = None;
    }

    fn require_session(&self) -> Result<(), ControllerError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            warn!("inventory access without a session");
            Err(ControllerError::Unauthenticated)
        }
    }

    pub fn view(&self) -> &InventoryViewModel {
        &self.view
    }

    pub fn visible_records(&self) -> Vec<&InventoryItem> {
        self.view.visible_records()
    }

    pub fn set_filter(&mut self, column: Column, value: impl Into<String>) {
        self.view.set_filter(column, value);
    }

    pub fn clear_filter(&mut self, column: Column) {
        self.view.clear_filter(column);
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.view.set_search_term(text);
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.view.set_sort(sort);
    }

    pub fn cycle_sort(&mut self, column: Column) -> SortState {
        let sort = self.view.cycle_sort(column);
        debug!(?sort, "sort changed");
        sort
    }

    /// Re-read every record from the store.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&mut self) -> Result<usize, ControllerError> {
        self.require_session()?;
        match self.store.list_all().await {
            Ok(records) => {
                let count = records.len();
                self.view.replace_records(records);
                self.forget_missing_targets();
                debug!(count, "inventory refreshed");
                Ok(count)
            }
            Err(err) => {
                error!(error = %err, "failed to load inventory");
                self.notifier
                    .notify(Notification::error("Failed to load inventory"));
                Err(err.into())
            }
        }
    }

    async fn refresh_after_mutation(&mut self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "refresh after mutation failed; keeping previous snapshot");
        }
    }

    fn forget_missing_targets(&mut self) {
        if self.selected.is_some_and(|id| self.view.find(id).is_none()) {
            self.selected = None;
        }
        if self
            .pending_delete
            .is_some_and(|id| self.view.find(id).is_none())
        {
            self.pending_delete = None;
        }
        if self
            .edit
            .as_ref()
            .is_some_and(|edit| self.view.find(edit.id).is_none())
        {
            debug!("edited record is gone; closing edit form");
            self.edit = None;
        }
    }

    // --- details dialog ---

    pub fn select(&mut self, id: ItemId) -> Result<&InventoryItem, ControllerError> {
        let item = self.view.find(id).ok_or(ControllerError::NotFound(id))?;
        self.selected = Some(id);
        Ok(item)
    }

    pub fn selected(&self) -> Option<&InventoryItem> {
        self.selected.and_then(|id| self.view.find(id))
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    // --- add form ---

    /// Open a blank add form (receive date = today).
    pub fn open_add(&mut self) -> &mut ItemDraft {
        let draft = ItemDraft::new(self.clock.today());
        &mut self.add.insert(FormState::new(draft)).draft
    }

    pub fn add_form(&self) -> Option<&FormState> {
        self.add.as_ref()
    }

    pub fn add_draft_mut(&mut self) -> Option<&mut ItemDraft> {
        self.add.as_mut().map(|form| &mut form.draft)
    }

    pub fn cancel_add(&mut self) {
        self.add = None;
    }

    pub async fn submit_add(&mut self) -> Result<InventoryItem, ControllerError> {
        self.require_session()?;
        let today = self.clock.today();
        let form = self.add.as_mut().ok_or(ControllerError::NoAddInProgress)?;

        form.errors = form.draft.validate();
        if !form.errors.is_empty() {
            let errors = form.errors.clone();
            debug!(fields = ?errors.fields(), "add form rejected");
            self.notifier.notify(Notification::error(
                "Please fill in all required fields correctly",
            ));
            return Err(errors.into());
        }
        let mut fields = form.draft.to_fields(today)?;
        fields.stamp_sold_date(None, today);

        match self.store.insert(fields).await {
            Ok(item) => {
                info!(id = %item.id, barcode = item.barcode(), "inventory item added");
                self.notifier
                    .notify(Notification::success("Wig added successfully"));
                self.add = None;
                self.refresh_after_mutation().await;
                Ok(item)
            }
            Err(err) => {
                error!(error = %err, "failed to add inventory item");
                self.notifier.notify(Notification::error("Failed to add wig"));
                Err(err.into())
            }
        }
    }

    // --- edit form ---

    /// Open the edit form pre-filled from the snapshot's copy of `id`.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<&mut ItemDraft, ControllerError> {
        let item = self.view.find(id).ok_or(ControllerError::NotFound(id))?;
        let session = EditSession {
            id,
            original_status: item.status(),
            form: FormState::new(ItemDraft::from_item(item)),
        };
        Ok(&mut self.edit.insert(session).form.draft)
    }

    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut ItemDraft> {
        self.edit.as_mut().map(|edit| &mut edit.form.draft)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Validate and write the edit form wholesale.
    ///
    /// Validation or store failure keeps the form open.
    pub async fn save_edit(&mut self) -> Result<(), ControllerError> {
        self.require_session()?;
        let today = self.clock.today();
        let edit = self.edit.as_mut().ok_or(ControllerError::NoEditInProgress)?;

        edit.form.errors = edit.form.draft.validate();
        if !edit.form.errors.is_empty() {
            let errors = edit.form.errors.clone();
            debug!(id = %edit.id, fields = ?errors.fields(), "edit form rejected");
            self.notifier.notify(Notification::error(
                "Please fill in all required fields correctly",
            ));
            return Err(errors.into());
        }
        let mut fields = edit.form.draft.to_fields(today)?;
        fields.stamp_sold_date(Some(edit.original_status), today);
        let id = edit.id;

        match self.store.update(id, fields).await {
            Ok(()) => {
                info!(%id, "inventory item updated");
                self.notifier
                    .notify(Notification::success("Wig updated successfully"));
                self.edit = None;
                self.refresh_after_mutation().await;
                Ok(())
            }
            Err(err) => {
                error!(%id, error = %err, "failed to update inventory item");
                self.notifier
                    .notify(Notification::error("Failed to update wig"));
                Err(err.into())
            }
        }
    }

    // --- delete confirmation ---

    pub fn request_delete(&mut self, id: ItemId) -> Result<&InventoryItem, ControllerError> {
        let item = self.view.find(id).ok_or(ControllerError::NotFound(id))?;
        self.pending_delete = Some(id);
        Ok(item)
    }

    pub fn pending_delete(&self) -> Option<&InventoryItem> {
        self.pending_delete.and_then(|id| self.view.find(id))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> Result<ItemId, ControllerError> {
        self.require_session()?;
        let id = self
            .pending_delete
            .ok_or(ControllerError::NoPendingDelete)?;

        match self.store.delete(id).await {
            Ok(()) => {
                info!(%id, "inventory item deleted");
                self.notifier
                    .notify(Notification::success("Wig deleted successfully"));
                self.pending_delete = None;
                if self.selected == Some(id) {
                    self.selected = None;
                }
                self.refresh_after_mutation().await;
                Ok(id)
            }
            Err(err) => {
                error!(%id, error = %err, "failed to delete inventory item");
                self.notifier
                    .notify(Notification::error("Failed to delete wig"));
                Err(err.into())
            }
        }
    }

    // --- scanner ---

    /// Look a record up by exact barcode or id, as scanned or typed.
    pub async fn lookup(&mut self, code: &str) -> Result<Option<InventoryItem>, ControllerError> {
        self.require_session()?;
        let code = code.trim();
        if code.is_empty() {
            self.notifier
                .notify(Notification::info("Enter a barcode to search"));
            self.last_lookup = None;
            return Ok(None);
        }
        debug!(code, "scanner lookup");

        match self.store.find_by_code(code).await {
            Ok(found) => {
                let notification = if found.is_some() {
                    Notification::success("Wig found")
                } else {
                    Notification::error("Wig not found")
                };
                self.notifier.notify(notification);
                self.last_lookup = found.clone();
                Ok(found)
            }
            Err(err) => {
                error!(code, error = %err, "scanner lookup failed");
                self.notifier
                    .notify(Notification::error("Error searching for wig"));
                self.last_lookup = None;
                Err(err.into())
            }
        }
    }

    pub fn last_lookup(&self) -> Option<&InventoryItem> {
        self.last_lookup.as_ref()
    }
}
