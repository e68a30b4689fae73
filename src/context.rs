//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::money::{format_money, Cents};
use crate::split::SplitEvent;
use crate::store::{store_dispatch, BillStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: BillStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: BillStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Apply a user event to the split (always ends in a totals pass)
    pub fn dispatch(&self, event: SplitEvent) {
        store_dispatch(&self.store, event);
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Cents) -> String {
        self.config.with_value(|c| format_money(amount, &c.currency_symbol))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
