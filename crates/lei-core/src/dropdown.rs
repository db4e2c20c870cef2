//! Dropdown values: the selectable values offered for each dropdown field.
//!
//! Range fields offer every token their cells expand to, sorted
//! numerically. The author field offers its distinct raw values in plain
//! string order. Empty cells and the `?` placeholder never appear.
//!
//! A range spanning more than [`MAX_RANGE_SPAN`] values is offered as its
//! raw text instead of being expanded. Searching still matches inside it.

use crate::collate::sort_natural;
use crate::fields::{FieldKind, SearchField};
use crate::range::Expansion;
use crate::table::Row;
use serde::Serialize;
use std::collections::BTreeSet;

/// Cell value used in the dataset for "unknown".
pub const PLACEHOLDER: &str = "?";

/// Widest range expanded into dropdown values.
pub const MAX_RANGE_SPAN: u64 = 10_000;

/// Values for one dropdown, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    pub field: SearchField,
    pub column: &'static str,
    pub label: &'static str,
    pub values: Vec<String>,
}

fn present(value: &&str) -> bool {
    !value.is_empty() && *value != PLACEHOLDER
}

/// Expanded, de-duplicated, numerically sorted values of a range column.
pub fn range_values(rows: &[Row], column: &str) -> Vec<String> {
    let mut tokens = BTreeSet::new();
    for raw in rows.iter().map(|r| r.get(column)).filter(present) {
        let expansion = Expansion::of(raw);
        if expansion.span() > MAX_RANGE_SPAN {
            tracing::warn!(
                column,
                value = raw,
                span = expansion.span(),
                "dropdown: range too wide, listing it unexpanded"
            );
            tokens.insert(raw.to_string());
        } else {
            tokens.extend(expansion.tokens());
        }
    }
    let mut values: Vec<String> = tokens.into_iter().collect();
    sort_natural(&mut values);
    values
}

/// Distinct raw values of a column in lexicographic order.
pub fn distinct_values(rows: &[Row], column: &str) -> Vec<String> {
    rows.iter()
        .map(|r| r.get(column))
        .filter(present)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Values for a single dropdown field.
pub fn build(rows: &[Row], field: SearchField) -> Dropdown {
    let column = field.column();
    let values = match field.kind() {
        FieldKind::Range => range_values(rows, column),
        _ => distinct_values(rows, column),
    };
    Dropdown {
        field,
        column,
        label: field.label(),
        values,
    }
}

/// All dropdowns: the five range fields, then the author field.
pub fn build_all(rows: &[Row]) -> Vec<Dropdown> {
    SearchField::DROPDOWNS
        .into_iter()
        .map(|f| build(rows, f))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<Row> {
        [
            ("10", "Rossi"),
            ("2-4", "bianchi"),
            ("3", "?"),
            ("?", ""),
            ("", "Rossi"),
            ("9-3", "Álvarez"),
            ("1", "Bianchi"),
        ]
        .into_iter()
        .map(|(v, a)| Row::new().with("Volume", v).with("Autore1", a))
        .collect()
    }

    #[test]
    fn range_dropdown_expands_dedups_and_sorts_numerically() {
        assert_eq!(
            range_values(&rows(), "Volume"),
            vec!["1", "2", "3", "4", "9-3", "10"]
        );
    }

    #[test]
    fn author_dropdown_is_distinct_and_lexicographic() {
        assert_eq!(
            distinct_values(&rows(), "Autore1"),
            vec!["Bianchi", "Rossi", "bianchi", "Álvarez"]
        );
    }

    #[test]
    fn build_all_has_fixed_order() {
        let fields: Vec<SearchField> = build_all(&rows()).into_iter().map(|d| d.field).collect();
        assert_eq!(fields, SearchField::DROPDOWNS.to_vec());
    }

    #[test]
    fn oversized_range_is_listed_unexpanded() {
        let rows = vec![
            Row::new().with("Volume", "1-4000000000"),
            Row::new().with("Volume", "2-3"),
        ];
        assert_eq!(range_values(&rows, "Volume"), vec!["1-4000000000", "2", "3"]);

        let widest = format!("1-{}", MAX_RANGE_SPAN);
        let rows = vec![Row::new().with("Volume", widest.as_str())];
        assert_eq!(range_values(&rows, "Volume").len() as u64, MAX_RANGE_SPAN);
    }

    #[test]
    fn missing_column_gives_no_values() {
        assert!(build(&rows(), SearchField::Fascicolo).values.is_empty());
    }
}
