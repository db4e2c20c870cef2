//! Queries: the per-field criteria a user submits, and the parsed form of a
//! free-text criterion.
//!
//! # Free-text syntax
//!
//! | Input | Meaning | Score |
//! |-------|---------|-------|
//! | `"de lingua"` | case-insensitive substring | +5 |
//! | `ling*` | word, `*` = any run of characters | +1 |
//! | `lingua latina` | two independent words | +1 each |
//!
//! A row satisfies a free-text criterion when its score is above zero.

use crate::fields::SearchField;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(.*?)""#).expect("phrase pattern is a valid regex"));

pub const WORD_SCORE: u32 = 1;
pub const PHRASE_SCORE: u32 = 5;

/// Per-column criteria. An empty value places no constraint on its column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    criteria: BTreeMap<String, String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the criterion for a dataset column.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.criteria.insert(column.into(), value.into());
    }

    /// Builder form of [`Query::set`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Set the criterion for one of the form fields.
    pub fn field(self, field: SearchField, value: impl Into<String>) -> Self {
        self.with(field.column(), value)
    }

    pub fn get(&self, column: &str) -> &str {
        self.criteria.get(column).map(String::as_str).unwrap_or("")
    }

    /// True when no criterion carries a value.
    pub fn is_blank(&self) -> bool {
        self.criteria.values().all(String::is_empty)
    }

    /// Columns with a non-empty criterion.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.criteria
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build a query from `key=value` form input keyed by [`SearchField::key`].
    /// Unknown keys are ignored.
    pub fn from_form<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .filter_map(|(k, v)| SearchField::from_key(k).map(|f| (f, v)))
            .fold(Query::new(), |q, (f, v)| q.field(f, v))
    }
}

/// A parsed free-text criterion: quoted phrases plus wildcard words.
#[derive(Debug, Clone)]
pub struct FreeText {
    phrases: Vec<String>,
    words: Vec<Regex>,
}

impl FreeText {
    pub fn parse(input: &str) -> Self {
        let phrases = PHRASE
            .captures_iter(input)
            .map(|c| c[1].to_lowercase())
            .collect();
        let remainder = PHRASE.replace_all(input, "");
        let words = remainder
            .split_whitespace()
            .filter_map(|w| match wildcard(w) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(word = w, error = %e, "free-text: skipping word");
                    None
                }
            })
            .collect();
        Self { phrases, words }
    }

    /// Relevance of `value`: +1 per matching word, +5 per contained phrase.
    pub fn score(&self, value: &str) -> u32 {
        let words = self.words.iter().filter(|re| re.is_match(value)).count() as u32;
        let phrases = if self.phrases.is_empty() {
            0
        } else {
            let lower = value.to_lowercase();
            self.phrases
                .iter()
                .filter(|p| lower.contains(p.as_str()))
                .count() as u32
        };
        words * WORD_SCORE + phrases * PHRASE_SCORE
    }

    pub fn matches(&self, value: &str) -> bool {
        self.score(value) > 0
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Compile a word into an unanchored, case-insensitive regex where `*` is
/// any run of characters and everything else is literal.
fn wildcard(word: &str) -> Result<Regex, regex::Error> {
    let pattern = word
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn phrases_and_words_are_split() {
        let q = FreeText::parse(r#"lingua "De Re" lat*  "#);
        assert_eq!(q.phrases(), &["de re".to_string()]);
        assert_eq!(q.word_count(), 2);
    }

    #[test]
    fn unterminated_quote_is_a_word() {
        let q = FreeText::parse(r#""lingua"#);
        assert!(q.phrases().is_empty());
        assert!(q.matches(r#"x "lingua y"#));
        assert!(!q.matches("lingua"));
    }

    #[rstest]
    #[case("fo*", "foobar", true)]
    #[case("fo*", "fo", true)]
    #[case("fo*", "bar", false)]
    #[case("FOO", "a foo b", true)]
    #[case("a.c", "abc", false)]
    #[case("a.c", "xa.cx", true)]
    #[case("(x", "(X)", true)]
    #[case("*", "", true)]
    #[case(r#""foo""#, "XFOOX", true)]
    #[case(r#""foo bar""#, "foo  bar", false)]
    #[case("ling* varia", "Varia", true)]
    fn matching(#[case] query: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(FreeText::parse(query).matches(value), expected, "{query:?} vs {value:?}");
    }

    #[test]
    fn score_accumulates() {
        let q = FreeText::parse(r#"de ling* "de lingua""#);
        assert_eq!(q.score("De Lingua"), 1 + 1 + 5);
        assert_eq!(q.score("Varia"), 0);
    }

    #[test]
    fn empty_phrase_matches_everything() {
        assert!(FreeText::parse(r#""""#).matches("anything"));
    }

    #[test]
    fn blank_and_active_criteria() {
        let q = Query::new().with("Volume", "").with("Autore1", "");
        assert!(q.is_blank());
        let q = q.with("Volume", "2");
        assert!(!q.is_blank());
        assert_eq!(q.active().collect::<Vec<_>>(), vec![("Volume", "2")]);
    }

    #[test]
    fn form_keys_map_to_columns() {
        let q = Query::from_form([("volume", "2"), ("author", "Rossi"), ("bogus", "x")]);
        assert_eq!(q.get("Volume"), "2");
        assert_eq!(q.get("Autore1"), "Rossi");
        assert_eq!(q.get("bogus"), "");
    }
}
