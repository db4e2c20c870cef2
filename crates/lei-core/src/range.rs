//! Range expansion: turn a raw cell such as `"12-15"` into the discrete
//! tokens it denotes.
//!
//! A value is a range when splitting it on `-` or `–` yields exactly two
//! trimmed parts that both parse as integers and the start does not exceed
//! the end. Anything else, including the empty string and reversed ranges
//! like `"9-3"`, is a single opaque token equal to the raw value.

use std::collections::BTreeSet;

const SEPARATORS: [char; 2] = ['-', '–'];

/// The token set of one raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion<'a> {
    /// Inclusive integer interval, `start <= end`.
    Range { start: i64, end: i64 },
    /// The raw value itself.
    Single(&'a str),
}

impl<'a> Expansion<'a> {
    pub fn of(raw: &'a str) -> Self {
        let mut parts = raw.split(SEPARATORS).map(str::trim);
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Expansion::Single(raw);
        };
        match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(start), Ok(end)) if start <= end => Expansion::Range { start, end },
            _ => Expansion::Single(raw),
        }
    }

    /// Whether `token` is one of the tokens, compared as a literal string.
    ///
    /// `"04"` is not a member of `1-5`: range tokens are canonical decimals.
    pub fn contains(&self, token: &str) -> bool {
        match *self {
            Expansion::Single(raw) => raw == token,
            Expansion::Range { start, end } => token
                .parse::<i64>()
                .ok()
                .filter(|n| (start..=end).contains(n))
                .is_some_and(|n| n.to_string() == token),
        }
    }

    /// Number of tokens, without materialising them.
    pub fn span(&self) -> u64 {
        match *self {
            Expansion::Single(_) => 1,
            Expansion::Range { start, end } => end.abs_diff(start).saturating_add(1),
        }
    }

    pub fn tokens(&self) -> Tokens<'a> {
        match *self {
            Expansion::Single(raw) => Tokens::Single(Some(raw)),
            Expansion::Range { start, end } => Tokens::Range(start..=end),
        }
    }
}

/// Lazy iterator over the tokens of an [`Expansion`].
#[derive(Debug, Clone)]
pub enum Tokens<'a> {
    Single(Option<&'a str>),
    Range(std::ops::RangeInclusive<i64>),
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            Tokens::Single(raw) => raw.take().map(str::to_string),
            Tokens::Range(r) => r.next().map(|n| n.to_string()),
        }
    }
}

/// Expand one raw value into its set of tokens.
pub fn expand(raw: &str) -> BTreeSet<String> {
    Expansion::of(raw).tokens().collect()
}

/// Expand many raw values into one de-duplicated token set.
///
/// The set is case-sensitive; ordering for display is the caller's concern
/// (see [`crate::collate`]).
pub fn expand_all<'a, I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .flat_map(|v| Expansion::of(v).tokens())
        .collect()
}
