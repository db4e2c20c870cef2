//! HTTP search page.
//!
//! - `GET /`: the search form; when any search parameter is present the
//!   matching rows are rendered below it.
//! - `GET /values`: the dropdown values as JSON.
//!
//! The loaded session is shared read-only behind an [`Arc`].

use axum::{
    extract::{Query as Params, State},
    response::Html,
    routing::get,
    Json, Router,
};
use lei_core::{dropdown::Dropdown, html, Query, SearchField, Session};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn router(session: Arc<Session>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/values", get(values))
        .with_state(session)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(session: Arc<Session>, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, rows = session.rows().len(), "server: listening");
    axum::serve(listener, router(session)).await?;
    Ok(())
}

async fn index(
    State(session): State<Arc<Session>>,
    Params(params): Params<HashMap<String, String>>,
) -> Html<String> {
    let submitted = params.keys().any(|k| SearchField::from_key(k).is_some());
    let query = Query::from_form(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let rows = submitted.then(|| session.on_search_requested(&query));
    tracing::debug!(submitted, hits = rows.as_ref().map(Vec::len), "server: page");

    Html(html::render_page(
        session.dropdowns(),
        &query,
        session.headers(),
        rows.as_deref(),
        session.config(),
    ))
}

async fn values(State(session): State<Arc<Session>>) -> Json<Vec<Dropdown>> {
    Json(session.dropdowns().to_vec())
}
