//! Field classification and the seven recognised search fields.
//!
//! Every column falls into exactly one [`FieldKind`]. The range and exact
//! sets are fixed; every other column, including ones the dataset adds later,
//! is free text.

use phf::{phf_set, Set};
use serde::{Deserialize, Serialize};

pub const TITLE: &str = "Titolo articolo";
pub const VOLUME: &str = "Volume";
pub const FASCICOLO: &str = "Fascicolo";
pub const PUBLICATION_DATE: &str = "Data pubbl.";
pub const START_COLUMN: &str = "Nr. col. inizio";
pub const END_COLUMN: &str = "Nr. col. fine";
pub const AUTHOR_1: &str = "Autore1";

static RANGE_FIELDS: Set<&'static str> = phf_set! {
    "Volume",
    "Fascicolo",
    "Data pubbl.",
    "Nr. col. inizio",
    "Nr. col. fine",
};

static EXACT_FIELDS: Set<&'static str> = phf_set! {
    "Autore1",
    "Autore2",
    "Autore3",
    "Autore4",
};

/// How a column is matched against a query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Value may encode `A-B`; matched by membership after expansion.
    Range,
    /// Matched by strict string equality.
    Exact,
    /// Matched by word / phrase scoring.
    FreeText,
}

impl FieldKind {
    pub fn of(field: &str) -> Self {
        if RANGE_FIELDS.contains(field) {
            FieldKind::Range
        } else if EXACT_FIELDS.contains(field) {
            FieldKind::Exact
        } else {
            FieldKind::FreeText
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Range => write!(f, "range"),
            FieldKind::Exact => write!(f, "exact"),
            FieldKind::FreeText => write!(f, "free-text"),
        }
    }
}

/// The query keys a front end can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Volume,
    Fascicolo,
    Date,
    ColStart,
    ColEnd,
    Author,
}

impl SearchField {
    /// All search fields in form order.
    pub const ALL: [SearchField; 7] = [
        SearchField::Title,
        SearchField::Volume,
        SearchField::Fascicolo,
        SearchField::Date,
        SearchField::ColStart,
        SearchField::ColEnd,
        SearchField::Author,
    ];

    /// Fields backed by a dropdown, in display order.
    pub const DROPDOWNS: [SearchField; 6] = [
        SearchField::Volume,
        SearchField::Fascicolo,
        SearchField::Date,
        SearchField::ColStart,
        SearchField::ColEnd,
        SearchField::Author,
    ];

    /// Dataset column this field queries.
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Title => TITLE,
            SearchField::Volume => VOLUME,
            SearchField::Fascicolo => FASCICOLO,
            SearchField::Date => PUBLICATION_DATE,
            SearchField::ColStart => START_COLUMN,
            SearchField::ColEnd => END_COLUMN,
            SearchField::Author => AUTHOR_1,
        }
    }

    /// Stable key used on the command line and in query strings.
    pub fn key(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Volume => "volume",
            SearchField::Fascicolo => "fascicolo",
            SearchField::Date => "date",
            SearchField::ColStart => "col_start",
            SearchField::ColEnd => "col_end",
            SearchField::Author => "author",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Human label for forms.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Title => "Titolo",
            SearchField::Volume => "Volume",
            SearchField::Fascicolo => "Fascicolo",
            SearchField::Date => "Data pubbl.",
            SearchField::ColStart => "Col. inizio",
            SearchField::ColEnd => "Col. fine",
            SearchField::Author => "Autore",
        }
    }

    pub fn kind(self) -> FieldKind {
        FieldKind::of(self.column())
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Volume", FieldKind::Range)]
    #[case("Fascicolo", FieldKind::Range)]
    #[case("Data pubbl.", FieldKind::Range)]
    #[case("Nr. col. inizio", FieldKind::Range)]
    #[case("Nr. col. fine", FieldKind::Range)]
    #[case("Autore1", FieldKind::Exact)]
    #[case("Autore4", FieldKind::Exact)]
    #[case("Titolo articolo", FieldKind::FreeText)]
    #[case("volume", FieldKind::FreeText)]
    #[case("", FieldKind::FreeText)]
    fn classification(#[case] field: &str, #[case] kind: FieldKind) {
        assert_eq!(FieldKind::of(field), kind);
    }

    #[test]
    fn search_field_keys_round_trip() {
        for f in SearchField::ALL {
            assert_eq!(SearchField::from_key(f.key()), Some(f));
        }
        assert_eq!(SearchField::from_key("nope"), None);
    }

    #[test]
    fn only_title_is_free_text() {
        let free: Vec<_> = SearchField::ALL
            .into_iter()
            .filter(|f| f.kind() == FieldKind::FreeText)
            .collect();
        assert_eq!(free, vec![SearchField::Title]);
        assert_eq!(SearchField::Author.kind(), FieldKind::Exact);
    }
}
