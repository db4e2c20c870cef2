//! Row store: the immutable, ordered table produced once by the loader.
//!
//! A [`Row`] is a mapping from header name to cell value. Row identity is its
//! position in [`Table::rows`]; there is no primary key.

use serde::Serialize;
use std::collections::BTreeMap;

/// One data row. Every row of a table carries the same field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `field`, or `""` when the row does not carry it.
    pub fn get(&self, field: &str) -> &str {
        self.cells.get(field).map(String::as_str).unwrap_or("")
    }

    /// Set `field`; a repeated header keeps the last value written.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Cells in `headers` order, for rendering.
    pub fn cells_in<'a>(&'a self, headers: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        headers.iter().map(move |h| self.get(h))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// The loaded dataset: header list plus rows in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
