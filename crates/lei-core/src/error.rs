//! Errors raised while producing the row store.
//!
//! Searching never fails: a failed load leaves the session empty and every
//! search then yields zero rows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource had no non-blank line to read headers from.
    #[error("dataset is empty: no header line")]
    MissingHeader,

    /// A local dataset could not be read as UTF-8 text.
    #[error("reading dataset {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other transport failure (HTTP, unsupported location).
    #[error("fetching dataset from {location}: {reason}")]
    Source { location: String, reason: String },
}
