//! Deep links from a row to the scanned volume page.

use crate::config::LinksConfig;
use crate::fields::{START_COLUMN, VOLUME};
use crate::table::Row;

const FALLBACK: &str = "1";

/// Leading run of ASCII digits, or `"1"` when there is none.
pub fn leading_number(value: &str) -> &str {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    if end == 0 {
        FALLBACK
    } else {
        &value[..end]
    }
}

/// `<base>?sector=<sector>&volume=<V>&page=<P>` for `row`.
pub fn deep_link(row: &Row, links: &LinksConfig) -> String {
    format!(
        "{}?sector={}&volume={}&page={}",
        links.base_url,
        links.sector,
        leading_number(row.get(VOLUME)),
        leading_number(row.get(START_COLUMN)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rstest::rstest;

    #[rstest]
    #[case("12", "12")]
    #[case("3-5", "3")]
    #[case("007bis", "007")]
    #[case("", "1")]
    #[case("?", "1")]
    #[case(" 4", "1")]
    #[case("IV", "1")]
    fn leading_numbers(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(leading_number(value), expected);
    }

    #[test]
    fn builds_default_link() {
        let row = Row::new().with("Volume", "2-3").with("Nr. col. inizio", "145");
        let cfg = Config::defaults();
        assert_eq!(
            deep_link(&row, &cfg.links),
            "https://stampa.lei-digitale.it/volumes/?sector=germanismi&volume=2&page=145"
        );
    }

    #[test]
    fn missing_fields_default_to_one() {
        let cfg = Config::defaults();
        assert!(deep_link(&Row::new(), &cfg.links).ends_with("&volume=1&page=1"));
    }
}
