//! Tab-separated dataset parsing.
//!
//! The first non-blank line holds the headers; each later non-blank line is
//! a row. Header names and cells are trimmed. Short rows are padded with
//! empty cells; cells past the last header are dropped. A leading UTF-8 byte
//! order mark is discarded.

use crate::error::LoadError;
use crate::table::{Row, Table};

const BOM: char = '\u{feff}';

/// Parse a whole TSV resource into a [`Table`].
pub fn parse(text: &str) -> Result<Table, LoadError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut lines = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty());

    let headers: Vec<String> = lines
        .next()
        .ok_or(LoadError::MissingHeader)?
        .split('\t')
        .map(|h| h.trim().to_string())
        .collect();

    let rows: Vec<Row> = lines.map(|line| parse_row(&headers, line)).collect();
    tracing::debug!(rows = rows.len(), headers = headers.len(), "tsv: parsed");
    Ok(Table::new(headers, rows))
}

fn parse_row(headers: &[String], line: &str) -> Row {
    let mut cells = line.split('\t').map(str::trim);
    headers
        .iter()
        .map(|h| (h.as_str(), cells.next().unwrap_or("")))
        .collect()
}
