//! Query matcher: decides whether a row satisfies a [`Query`].
//!
//! Criteria combine with AND across columns. Inside a free-text column the
//! words and phrases combine with OR (any positive score is a match).
//!
//! The query is compiled once into a [`Matcher`] so wildcard regexes are not
//! rebuilt for every row.

use crate::fields::FieldKind;
use crate::query::{FreeText, Query};
use crate::range::Expansion;
use crate::table::Row;

/// One compiled, non-empty criterion.
#[derive(Debug, Clone)]
enum Criterion {
    /// Literal token looked up in the row's expanded range.
    Range(String),
    Exact(String),
    FreeText(FreeText),
}

impl Criterion {
    fn compile(column: &str, value: &str) -> Self {
        match FieldKind::of(column) {
            FieldKind::Range => Criterion::Range(value.to_string()),
            FieldKind::Exact => Criterion::Exact(value.to_string()),
            FieldKind::FreeText => Criterion::FreeText(FreeText::parse(value)),
        }
    }

    fn accepts(&self, cell: &str) -> bool {
        match self {
            Criterion::Range(token) => Expansion::of(cell).contains(token),
            Criterion::Exact(expected) => cell == expected,
            Criterion::FreeText(text) => text.matches(cell),
        }
    }
}

/// A [`Query`] compiled for repeated evaluation.
#[derive(Debug, Clone)]
pub struct Matcher {
    criteria: Vec<(String, Criterion)>,
}

impl Matcher {
    pub fn new(query: &Query) -> Self {
        let criteria = query
            .active()
            .map(|(column, value)| (column.to_string(), Criterion::compile(column, value)))
            .collect();
        Self { criteria }
    }

    /// Number of active criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// True when no criterion is active; every row matches.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.criteria
            .iter()
            .all(|(column, criterion)| criterion.accepts(row.get(column)))
    }
}

/// Match a single row without keeping the compiled query around.
pub fn matches(row: &Row, query: &Query) -> bool {
    Matcher::new(query).matches(row)
}
