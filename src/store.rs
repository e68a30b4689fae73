//! Bill Store
//!
//! Uses Leptos reactive_stores so views track the split and the upload
//! status independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ItemDraft;
use crate::split::{SplitEvent, SplitState};

/// Progress of the receipt upload
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Upload succeeded; number of items read from the response
    Done(usize),
    Failed(String),
}

#[derive(Clone, Debug, Default, Store)]
pub struct BillState {
    /// Form state; views are a projection of it
    pub split: SplitState,
    /// Name of the selected receipt image
    pub file_name: Option<String>,
    pub submit_status: SubmitStatus,
}

impl BillState {
    pub fn new(split: SplitState) -> Self {
        Self {
            split,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BillStore = Store<BillState>;

// ========================
// Store Helper Functions
// ========================

/// Apply one user event to the split
pub fn store_dispatch(store: &BillStore, event: SplitEvent) {
    store.split().write().dispatch(event);
}

/// Swap in items read from a receipt
pub fn store_replace_items(store: &BillStore, drafts: Vec<ItemDraft>) {
    store.split().write().replace_items(drafts);
}

pub fn store_set_file_name(store: &BillStore, name: Option<String>) {
    *store.file_name().write() = name;
}

pub fn store_set_status(store: &BillStore, status: SubmitStatus) {
    *store.submit_status().write() = status;
}

/// Read-only access to the split for views
pub fn store_with_split<T>(store: &BillStore, f: impl FnOnce(&SplitState) -> T) -> T {
    f(&store.split().read())
}

pub fn store_file_name(store: &BillStore) -> Option<String> {
    store.file_name().read().clone()
}

pub fn store_status(store: &BillStore) -> SubmitStatus {
    store.submit_status().read().clone()
}
