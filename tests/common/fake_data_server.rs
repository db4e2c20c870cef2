//! Fake dataset host for HTTP source tests.
//!
//! Spins up a minimal `axum` server on a random TCP port bound to 127.0.0.1.
//! Serves:
//! - `GET /Latinismi.tsv`: the configured dataset body
//! - `GET /binary.tsv`: bytes that are not valid UTF-8
//! - anything else: `404 Not Found`
//!
//! # Example
//!
//! ```rust,no_run
//! let server = FakeDataServer::start(CORPUS_TSV).await.unwrap();
//! let source = HttpSource::new(server.url("/Latinismi.tsv"));
//! ```

use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Handle to the running fake server. The server task lives until the
/// test's runtime shuts down.
pub struct FakeDataServer {
    addr: SocketAddr,
}

impl FakeDataServer {
    /// Start serving `body` as the dataset. Returns once the server is
    /// listening.
    pub async fn start(body: &str) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let body: Arc<str> = Arc::from(body);

        let app = Router::new()
            .route("/Latinismi.tsv", get(dataset))
            .route("/binary.tsv", get(binary))
            .fallback(|| async { (StatusCode::NOT_FOUND, "no such dataset") })
            .with_state(body);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr })
    }

    /// Base URL, e.g. `http://127.0.0.1:PORT`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

async fn dataset(State(body): State<Arc<str>>) -> String {
    body.to_string()
}

async fn binary() -> Vec<u8> {
    vec![0xff, 0xfe, b'\t', 0x00]
}
