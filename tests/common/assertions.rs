//! Assertion helpers shared across harnesses.

use lei_core::fields::TITLE;
use lei_core::Row;

/// Titles of `rows`, in order.
pub fn titles<'a>(rows: &[&'a Row]) -> Vec<&'a str> {
    rows.iter().map(|r| r.get(TITLE)).collect()
}

/// Assert that `hits` are exactly the rows titled `expected`, in order.
pub fn assert_titles(hits: &[&Row], expected: &[&str]) {
    pretty_assertions::assert_eq!(titles(hits), expected.to_vec());
}

/// Assert that `hits` is a subsequence of `store`: every hit is a row of the
/// store and the store order is preserved.
pub fn assert_subsequence(store: &[Row], hits: &[&Row]) {
    let mut positions = store.iter();
    for hit in hits {
        assert!(
            positions.any(|row| std::ptr::eq(row, *hit)),
            "hit {hit:?} is not in store order"
        );
    }
}
