//! Changelog file access.
//!
//! The changelog is a plain UTF-8 text file, fully read before parsing and
//! fully rewritten on save. A missing file is an empty document, not an
//! error.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::document::Document;

/// Errors from reading or writing the changelog file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The changelog exists but could not be read.
    #[error("failed to read changelog: {0}")]
    Read(#[source] io::Error),
    /// The changelog could not be written.
    #[error("failed to write changelog: {0}")]
    Write(#[source] io::Error),
}

/// Loads and parses the changelog at `path`.
pub fn load(path: &Path) -> Result<Document, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "loaded changelog");
            Ok(Document::parse(&text))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "changelog missing, starting empty");
            Ok(Document::new())
        }
        Err(e) => Err(StoreError::Read(e)),
    }
}

/// Serializes `doc` and replaces the changelog at `path`.
pub fn save(path: &Path, doc: &Document) -> Result<(), StoreError> {
    let text = doc.render();
    fs::write(path, &text).map_err(StoreError::Write)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved changelog");
    Ok(())
}
