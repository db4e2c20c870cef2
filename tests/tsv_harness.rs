#![allow(unused)]
//! TSV loading harness: on-disk datasets through the file source.
//!
//! # What this covers
//!
//! - **Format**: header row, a leading byte order mark, trimming of
//!   headers and cells, CRLF line endings, blank lines, short rows padded,
//!   long rows truncated.
//! - **File source**: loading the corpus from a temp file end to end into a
//!   session, missing files, invalid UTF-8, empty files.
//! - **Degraded loads**: a failed load leaves the session empty.
//!
//! # What this does NOT cover
//!
//! - HTTP datasets (see source_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test tsv_harness
//! ```

mod common;
use common::*;

use lei_core::config::Config;
use lei_core::{tsv, LoadError, SearchField};
use lei_source::{load_table, AnySource, FileSource};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

#[test]
fn corpus_headers_and_rows() {
    let t = table(CORPUS_TSV);
    assert_eq!(t.headers(), HEADERS);
    assert_eq!(t.len(), TITLES.len());
    assert_eq!(t.rows()[3].get("Volume"), "3–4");
    // The last line's trailing tab is eaten by the whole-text trim and the
    // row is padded instead.
    assert_eq!(t.rows()[5].get("Autore2"), "");
    assert_eq!(t.rows()[4].get("Data pubbl."), "");
}

#[test]
fn crlf_and_blank_lines() {
    let t = table("Volume\tAutore1\r\n\r\n 3 \t Rossi \r\n   \r\n5\tBianchi\r\n");
    assert_eq!(t.len(), 2);
    assert_eq!(t.rows()[0].get("Volume"), "3");
    assert_eq!(t.rows()[0].get("Autore1"), "Rossi");
    assert_eq!(t.rows()[1].get("Autore1"), "Bianchi");
}

#[test]
fn short_rows_pad_and_long_rows_truncate() {
    let t = table("A\tB\tC\n1\n1\t2\t3\t4\t5\n");
    assert_eq!(t.rows()[0].get("B"), "");
    assert_eq!(t.rows()[0].get("C"), "");
    assert_eq!(t.rows()[1].fields().count(), 3);
    assert_eq!(t.rows()[1].get("C"), "3");
}

#[test]
fn header_only_dataset_has_no_rows() {
    let t = table("Volume\tAutore1\n");
    assert_eq!(t.headers().len(), 2);
    assert!(t.is_empty());
}

#[test]
fn byte_order_mark_does_not_hide_the_title_column() {
    let with_bom = format!("\u{feff}{CORPUS_TSV}");
    let session = session_from(&with_bom);
    assert_eq!(session.headers(), HEADERS);
    let hits = session.on_search_requested(&query(&[(SearchField::Title, "ling*")]));
    assert_titles(&hits, &["De lingua latina", "Lingua e dialetto"]);
}

#[test]
fn whitespace_only_text_has_no_header() {
    assert!(matches!(tsv::parse(" \n\t\n"), Err(LoadError::MissingHeader)));
}

// ---------------------------------------------------------------------------
// File source
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corpus_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "Latinismi.tsv", CORPUS_TSV);
    let source = FileSource::new(path.to_string_lossy());

    let t = load_table(&source).await.unwrap();
    assert_eq!(t.headers(), HEADERS);
    assert_eq!(t.len(), 6);
}

#[tokio::test]
async fn session_built_from_disk_answers_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "Latinismi.tsv", CORPUS_TSV);

    let session = lei_search::load_session(Config::defaults(), &path.to_string_lossy()).await;
    assert!(session.is_loaded());
    let hits = session.on_search_requested(&query(&[(SearchField::Volume, "2")]));
    assert_titles(&hits, &["De lingua latina", "Lingua e dialetto"]);
}

#[tokio::test]
async fn byte_order_mark_from_disk_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = vec![0xef, 0xbb, 0xbf];
    bytes.extend_from_slice(CORPUS_TSV.as_bytes());
    let path = write_file(dir.path(), "Latinismi.tsv", bytes);

    let t = load_table(&FileSource::new(path.to_string_lossy())).await.unwrap();
    assert_eq!(t.headers()[0], "Titolo articolo");
    assert_eq!(t.rows()[0].get("Titolo articolo"), "Abbreviatura");
}

#[tokio::test]
async fn empty_file_is_missing_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "empty.tsv", "");
    let err = load_table(&AnySource::parse(&path.to_string_lossy())).await.unwrap_err();
    assert!(matches!(err, LoadError::MissingHeader));
}

#[tokio::test]
async fn invalid_utf8_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "latin1.tsv", b"Titolo\n\xe0 la carte\n");
    let err = load_table(&FileSource::new(path.to_string_lossy())).await.unwrap_err();
    match err {
        LoadError::Io { location, source } => {
            assert_eq!(location, path.to_string_lossy());
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_file_leaves_session_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.tsv");

    let session = lei_search::load_session(Config::defaults(), &path.to_string_lossy()).await;
    assert!(!session.is_loaded());
    assert!(session.on_search_requested(&Default::default()).is_empty());
}
