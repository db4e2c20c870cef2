//! Search engine: a stable filter of the row store by a [`Query`].
//!
//! Results keep load order. Free-text scores only gate membership; there is
//! no ranking.

use crate::matcher::Matcher;
use crate::query::Query;
use crate::table::Row;

/// Rows of `rows` matching `query`, in their original order.
///
/// A blank query returns every row without evaluating any criterion.
pub fn search<'a>(rows: &'a [Row], query: &Query) -> Vec<&'a Row> {
    if query.is_blank() {
        tracing::debug!(total = rows.len(), "search: blank query, returning all rows");
        return rows.iter().collect();
    }

    let matcher = Matcher::new(query);
    let hits: Vec<&Row> = rows.iter().filter(|row| matcher.matches(row)).collect();
    tracing::debug!(
        criteria = matcher.len(),
        total = rows.len(),
        hits = hits.len(),
        "search: done"
    );
    hits
}

/// Like [`search`], returning positions in the store instead of references.
pub fn search_indices(rows: &[Row], query: &Query) -> Vec<usize> {
    if query.is_blank() {
        return (0..rows.len()).collect();
    }
    let matcher = Matcher::new(query);
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matcher.matches(row))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::SearchField;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<Row> {
        vec![
            Row::new()
                .with("Volume", "1-2")
                .with("Autore1", "Rossi")
                .with("Titolo articolo", "De Lingua"),
            Row::new()
                .with("Volume", "5")
                .with("Autore1", "Bianchi")
                .with("Titolo articolo", "Varia"),
            Row::new()
                .with("Volume", "2")
                .with("Autore1", "Rossi")
                .with("Titolo articolo", "Lingue romanze"),
        ]
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let rows = rows();
        let hits = search(&rows, &Query::new().field(SearchField::Title, ""));
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().zip(rows.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn results_preserve_load_order() {
        let rows = rows();
        let q = Query::new().field(SearchField::Volume, "2");
        assert_eq!(search_indices(&rows, &q), vec![0, 2]);
    }

    #[test]
    fn empty_store_yields_nothing() {
        let q = Query::new().field(SearchField::Volume, "2");
        assert!(search(&[], &q).is_empty());
        assert!(search(&[], &Query::new()).is_empty());
    }

    #[test]
    fn conjunction_across_fields() {
        let rows = rows();
        let q = Query::new()
            .field(SearchField::Author, "Rossi")
            .field(SearchField::Title, "lingue");
        assert_eq!(search_indices(&rows, &q), vec![2]);
    }
}
