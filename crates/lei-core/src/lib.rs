//! lei-core: search core for the LEI Latinismi article index.
//!
//! This crate owns everything between "a TSV resource has been fetched" and
//! "a table of matching rows has been rendered": the row store, the field
//! classification, range expansion, the query matcher, dropdown values and
//! the HTML renderer.
//!
//! # Architecture
//!
//! ```text
//! TSV ──► Table ──► Session ──► Search ──► HTML / TUI / JSON
//!                      │
//!                      └──► Dropdowns
//! ```
//!
//! Nothing in here does I/O beyond reading the config file; fetching the
//! dataset lives in `lei-source`, presentation shells in `lei-tui` and the
//! root binary.

pub mod collate;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod fields;
pub mod html;
pub mod link;
pub mod matcher;
pub mod query;
pub mod range;
pub mod search;
pub mod session;
pub mod table;
pub mod tsv;

pub use error::LoadError;
pub use fields::{FieldKind, SearchField};
pub use query::Query;
pub use session::Session;
pub use table::{Row, Table};
