//! HTTP source: one GET against a plain-HTTP URL.
//!
//! Non-2xx answers are errors; the body must be UTF-8.

use crate::{Source, SourceError};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::Uri;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn transport(&self, e: impl std::fmt::Display) -> SourceError {
        SourceError::Transport {
            url: self.url.clone(),
            reason: e.to_string(),
        }
    }
}

impl Source for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let uri: Uri = self
            .url
            .parse()
            .map_err(|_| SourceError::InvalidUri(self.url.clone()))?;

        let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build_http();
        let response = client.get(uri).await.map_err(|e| self.transport(e))?;

        let status = response.status();
        tracing::debug!(url = %self.url, status = status.as_u16(), "http source: response");
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| self.transport(e))?
            .to_bytes();

        String::from_utf8(body.to_vec()).map_err(|_| SourceError::Encoding(self.url.clone()))
    }
}
