//! Application state for the salary estimation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateTable;
use crate::leads::{InMemoryLeadStore, LeadStore};

/// Shared application state.
///
/// Holds the read-only salary guide and the lead store. Cloning is cheap;
/// both live behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    table: Arc<RateTable>,
    leads: Arc<dyn LeadStore>,
}

impl AppState {
    /// Creates a new application state from a rate table and lead store.
    pub fn new(table: RateTable, leads: Arc<dyn LeadStore>) -> Self {
        Self {
            table: Arc::new(table),
            leads,
        }
    }

    /// Creates an application state with an empty in-memory lead store.
    pub fn with_in_memory_leads(table: RateTable) -> Self {
        Self::new(table, Arc::new(InMemoryLeadStore::new()))
    }

    /// Returns the salary guide.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Returns the lead store.
    pub fn leads(&self) -> &dyn LeadStore {
        self.leads.as_ref()
    }
}
