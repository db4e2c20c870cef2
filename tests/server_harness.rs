#![allow(unused)]
//! HTTP page harness: the axum router driven in-process with `oneshot`.
//!
//! # What this covers
//!
//! - **Search page**: empty results before a search, hits after one,
//!   the no-results notice, form values echoed back, URL-encoded phrases.
//! - **Values endpoint**: dropdown values as JSON.
//! - **Unknown paths**: 404.
//!
//! # What this does NOT cover
//!
//! - Binding a real socket (`serve`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test server_harness
//! ```

mod common;
use common::*;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use lei_search::server::router;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, String) {
    let app = router(Arc::new(corpus_session()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Search page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_visit_shows_form_only() {
    let (status, page) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("id=\"searchBtn\""));
    assert!(page.contains("<div id=\"results\"></div>"));
}

#[tokio::test]
async fn volume_search_lists_matching_rows() {
    let (status, page) = get("/?volume=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<td>De lingua latina</td>"));
    assert!(page.contains("<td>Lingua e dialetto</td>"));
    assert!(!page.contains("<td>Varia</td>"));
    assert!(page.contains("<option value=\"2\" selected>2</option>"));
}

#[tokio::test]
async fn empty_submission_lists_everything() {
    let (_, page) = get("/?title=&volume=").await;
    for title in TITLES {
        assert!(page.contains(&format!("<td>{title}</td>")), "missing {title}");
    }
}

#[tokio::test]
async fn no_hits_shows_the_notice() {
    let (_, page) = get("/?volume=99").await;
    assert!(page.contains("No results found."));
}

#[tokio::test]
async fn encoded_phrase_is_decoded_and_echoed() {
    let (_, page) = get("/?title=%22lingua+latina%22").await;
    assert!(page.contains("value=\"&quot;lingua latina&quot;\""));
    assert!(page.contains("<td>De lingua latina</td>"));
    assert!(!page.contains("<td>Lingua e dialetto</td>"));
}

#[tokio::test]
async fn unknown_parameters_are_not_a_search() {
    let (_, page) = get("/?utm_source=mail").await;
    assert!(page.contains("<div id=\"results\"></div>"));
}

// ---------------------------------------------------------------------------
// Values endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn values_are_json() {
    let (status, body) = get("/values").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    let fields: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert_eq!(fields, ["volume", "fascicolo", "date", "col_start", "col_end", "author"]);
    assert_eq!(v[1]["values"], serde_json::json!(["1", "2", "3", "4", "10"]));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, _) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
