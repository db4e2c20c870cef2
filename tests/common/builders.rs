//! Test builders: ergonomic constructors for sessions, tables and queries.
//!
//! These helpers panic on invalid input rather than returning `Result`.

use super::fixtures::CORPUS_TSV;
use lei_core::config::Config;
use lei_core::{tsv, Query, SearchField, Session, Table};
use std::path::{Path, PathBuf};

/// Parse TSV text that is known to be valid.
pub fn table(text: &str) -> Table {
    tsv::parse(text).expect("fixture TSV must parse")
}

/// A loaded session over `text` with default configuration.
pub fn session_from(text: &str) -> Session {
    let mut session = Session::new(Config::defaults());
    session.on_load_complete(table(text));
    session
}

/// A loaded session over [`CORPUS_TSV`].
pub fn corpus_session() -> Session {
    session_from(CORPUS_TSV)
}

/// Build a query from `(field, value)` pairs.
pub fn query(criteria: &[(SearchField, &str)]) -> Query {
    criteria
        .iter()
        .fold(Query::new(), |q, &(field, value)| q.field(field, value))
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write test file");
    path
}

/// A config file that keeps tests away from the user's XDG directory.
pub fn write_config(dir: &Path, data: &Path) -> PathBuf {
    let body = format!(
        "[data]\nsource = {:?}\n\n[links]\nsector = \"germanismi\"\n",
        data.display().to_string()
    );
    write_file(dir, "config.toml", body)
}
