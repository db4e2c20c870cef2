//! lei-search: search and render the LEI Latinismi article index.
//!
//! The binary wires one dataset load into a [`Session`] and hands it to one
//! of three front ends: the ratatui TUI (`lei-tui`), the headless CLI
//! ([`headless`]) and the HTTP search page ([`server`]).
//!
//! # Architecture
//!
//! ```text
//! Source ──load──► Session ──search──► TUI
//!                     │                Headless (tsv / json / html)
//!                     └───────────────► HTTP page
//! ```
//!
//! Loading is the only async step; searches are synchronous over the
//! read-only session.

pub mod headless;
pub mod server;

use lei_core::config::Config;
use lei_core::Session;
use lei_source::AnySource;

/// Load the dataset named by `location` into a fresh session.
///
/// A failed load is logged and leaves the session empty: every search then
/// returns no rows.
pub async fn load_session(config: Config, location: &str) -> Session {
    let source = AnySource::parse(location);
    let mut session = Session::new(config);
    session.on_load_result(lei_source::load_table(&source).await);
    session
}
