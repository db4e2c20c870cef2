//! lei-source: dataset sources for lei-search.
//!
//! A source fetches the raw TSV text; [`load_table`] turns it into a
//! [`lei_core::Table`]. Fetching is the only suspend point in a session's
//! life: everything after it is synchronous.

pub mod file;
pub mod http;

use lei_core::{LoadError, Table};
use thiserror::Error;

pub use file::FileSource;
pub use http::HttpSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URL {0:?}")]
    InvalidUri(String),

    #[error("requesting {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{0} is not valid UTF-8")]
    Encoding(String),

    #[error("unsupported scheme {scheme:?} in {location} (only http:// and local paths)")]
    UnsupportedScheme { location: String, scheme: String },
}

/// Something that can produce the dataset text.
pub trait Source: Send + Sync {
    /// Where the data comes from, for logs and error messages.
    fn location(&self) -> &str;

    /// Fetch the whole resource as text.
    fn fetch(&self) -> impl std::future::Future<Output = Result<String, SourceError>> + Send;
}

/// A source chosen from a location string.
#[derive(Debug, Clone)]
pub enum AnySource {
    File(FileSource),
    Http(HttpSource),
    /// A URL with a scheme no source handles; fetching it fails.
    Unsupported { location: String, scheme: String },
}

impl AnySource {
    /// `http://…` locations are fetched over HTTP, other `scheme://`
    /// locations are unsupported, and anything else is a path.
    pub fn parse(location: &str) -> Self {
        match location.split_once("://") {
            Some((scheme, _)) if scheme.eq_ignore_ascii_case("http") => {
                AnySource::Http(HttpSource::new(location))
            }
            Some((scheme, _)) if is_scheme(scheme) => AnySource::Unsupported {
                location: location.to_string(),
                scheme: scheme.to_string(),
            },
            _ => AnySource::File(FileSource::new(location)),
        }
    }
}

/// RFC 3986 scheme syntax: a letter followed by letters, digits, `+`, `-`, `.`.
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl Source for AnySource {
    fn location(&self) -> &str {
        match self {
            AnySource::File(s) => s.location(),
            AnySource::Http(s) => s.location(),
            AnySource::Unsupported { location, .. } => location.as_str(),
        }
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        match self {
            AnySource::File(s) => s.fetch().await,
            AnySource::Http(s) => s.fetch().await,
            AnySource::Unsupported { location, scheme } => Err(SourceError::UnsupportedScheme {
                location: location.clone(),
                scheme: scheme.clone(),
            }),
        }
    }
}

/// Fetch from `source` and parse the TSV.
pub async fn load_table<S: Source>(source: &S) -> Result<Table, LoadError> {
    tracing::debug!(location = source.location(), "source: fetching dataset");
    let text = source.fetch().await.map_err(|e| match e {
        SourceError::Io { path, source: err } => LoadError::Io { location: path, source: err },
        other => LoadError::Source {
            location: source.location().to_string(),
            reason: other.to_string(),
        },
    })?;
    tracing::debug!(bytes = text.len(), "source: dataset fetched");
    lei_core::tsv::parse(&text)
}
