//! Numeric-aware ordering for dropdown values.
//!
//! Digit runs compare by magnitude (`"2" < "10"`, `"007" == "7"` at the
//! first level); everything else compares case-insensitively first. Ties fall
//! back to plain string order so the result is a total order.

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digit)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(if digit { Chunk::Digits(head) } else { Chunk::Text(head) })
    })
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compare two strings the way a numeric-aware collator would.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => cmp_text(x, y),
            // Digits sort before letters, as in most collations.
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Sort `values` in place with [`natural_cmp`].
pub fn sort_natural(values: &mut [String]) {
    values.sort_by(|a, b| natural_cmp(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2", "10", Ordering::Less)]
    #[case("10", "9", Ordering::Greater)]
    #[case("1990", "1990", Ordering::Equal)]
    #[case("vol 2", "vol 10", Ordering::Less)]
    #[case("a", "B", Ordering::Less)]
    #[case("9", "a", Ordering::Less)]
    #[case("12", "12a", Ordering::Less)]
    fn compares(#[case] a: &str, #[case] b: &str, #[case] ord: Ordering) {
        assert_eq!(natural_cmp(a, b), ord);
    }

    #[test]
    fn leading_zeros_tie_break_deterministically() {
        assert_ne!(natural_cmp("07", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("07", "7"), natural_cmp("07", "7"));
        assert_eq!(natural_cmp("07", "7"), natural_cmp("7", "07").reverse());
    }

    #[test]
    fn sorts_mixed_values() {
        let mut v: Vec<String> = ["10", "2", "1", "1-bis", "20", "3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort_natural(&mut v);
        assert_eq!(v, vec!["1", "1-bis", "2", "3", "10", "20"]);
    }
}
