//! Error types for sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

use roster_model::EntityKind;

/// Errors that can occur while loading sheets or project configuration.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Failed to read or parse a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No sheet for an entity kind was found in the data folder.
    #[error("no {kind} sheet found in {dir}")]
    MissingSheet { kind: EntityKind, dir: PathBuf },

    // === Config Errors ===
    /// Failed to read the project config file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Project config is not valid TOML or has the wrong shape.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Project config parsed but is inconsistent.
    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingSheet {
            kind: EntityKind::Worker,
            dir: PathBuf::from("/data"),
        };
        assert_eq!(err.to_string(), "no worker sheet found in /data");
    }
}
