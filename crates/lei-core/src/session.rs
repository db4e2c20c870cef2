//! Session: the explicit state every front end drives.
//!
//! A session starts empty, makes at most one load-completion transition, and
//! is read-only afterwards. Searches before the load (or after a failed load)
//! run against the empty store and return nothing.
//!
//! ```text
//! Session::new ──► Empty ──on_load_complete──► Loaded
//!                    │
//!                    └──on_load_failed──► Empty (warning logged)
//! ```

use crate::config::Config;
use crate::dropdown::{self, Dropdown};
use crate::error::LoadError;
use crate::fields::SearchField;
use crate::query::Query;
use crate::search::{search, search_indices};
use crate::table::{Row, Table};

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
    table: Table,
    dropdowns: Vec<Dropdown>,
    loaded: bool,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            table: Table::default(),
            dropdowns: Vec::new(),
            loaded: false,
        }
    }

    /// Install the loaded dataset and derive the dropdown values.
    ///
    /// Only the first completed load is accepted; later calls are ignored.
    pub fn on_load_complete(&mut self, table: Table) {
        if self.loaded {
            tracing::warn!("session: dataset already loaded, ignoring second load");
            return;
        }
        tracing::info!(
            rows = table.len(),
            headers = table.headers().len(),
            "session: dataset loaded"
        );
        tracing::debug!(headers = ?table.headers(), "session: header list");
        self.dropdowns = dropdown::build_all(table.rows());
        self.table = table;
        self.loaded = true;
    }

    /// Record a failed load. The store stays empty.
    pub fn on_load_failed(&mut self, error: &LoadError) {
        tracing::warn!(error = %error, "session: dataset load failed, store stays empty");
    }

    /// Apply the outcome of a load attempt.
    pub fn on_load_result(&mut self, result: Result<Table, LoadError>) {
        match result {
            Ok(table) => self.on_load_complete(table),
            Err(e) => self.on_load_failed(&e),
        }
    }

    /// Rows matching `query`, in load order.
    pub fn on_search_requested(&self, query: &Query) -> Vec<&Row> {
        search(self.table.rows(), query)
    }

    /// Positions of the matching rows, for front ends that keep a cursor.
    pub fn on_search_indices(&self, query: &Query) -> Vec<usize> {
        search_indices(self.table.rows(), query)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn headers(&self) -> &[String] {
        self.table.headers()
    }

    pub fn rows(&self) -> &[Row] {
        self.table.rows()
    }

    pub fn dropdowns(&self) -> &[Dropdown] {
        &self.dropdowns
    }

    pub fn dropdown(&self, field: SearchField) -> Option<&Dropdown> {
        self.dropdowns.iter().find(|d| d.field == field)
    }
}
