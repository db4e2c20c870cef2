//! Headless output: search results and dropdown values as text.

use lei_core::{html, link::deep_link, Query, Row, Session};
use serde::Serialize;
use std::fmt::Write;

/// Result formats for the `search` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Header line, then one tab-separated line per row.
    #[default]
    Tsv,
    /// Array of `{ "link", "fields" }` objects.
    Json,
    /// The HTML result table.
    Html,
}

#[derive(Serialize)]
struct Hit<'a> {
    link: String,
    fields: &'a Row,
}

/// Run `query` against the session and render the hits.
pub fn render_search(session: &Session, query: &Query, format: OutputFormat) -> anyhow::Result<String> {
    let rows = session.on_search_requested(query);
    tracing::debug!(hits = rows.len(), ?format, "headless: search");
    let headers = session.headers();

    let out = match format {
        OutputFormat::Tsv => {
            let mut out = headers.join("\t");
            out.push('\n');
            for row in &rows {
                let cells: Vec<&str> = row.cells_in(headers).collect();
                let _ = writeln!(out, "{}", cells.join("\t"));
            }
            out
        }
        OutputFormat::Json => {
            let links = &session.config().links;
            let hits: Vec<Hit> = rows
                .iter()
                .map(|row| Hit { link: deep_link(row, links), fields: row })
                .collect();
            let mut out = serde_json::to_string_pretty(&hits)?;
            out.push('\n');
            out
        }
        OutputFormat::Html => {
            let mut out = html::render_table(&rows, headers, session.config());
            out.push('\n');
            out
        }
    };
    Ok(out)
}

/// Dropdown values, one `label: v1, v2, …` line per field, or as JSON.
pub fn render_values(session: &Session, json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(session.dropdowns())?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = String::new();
    for d in session.dropdowns() {
        let _ = writeln!(out, "{}: {}", d.label, d.values.join(", "));
    }
    Ok(out)
}
