//! Local file source.

use crate::{Source, SourceError};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSource {
    location: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<String>) -> Self {
        let location = path.into();
        Self {
            path: PathBuf::from(&location),
            location,
        }
    }
}

impl Source for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.location.clone(),
                source,
            })
    }
}
