use std::path::PathBuf;
use thiserror::Error;

/// Why a source unit could not become a catalog entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("no recognizable example block")]
    NoExampleBlock,

    #[error("unreadable: {0}")]
    Unreadable(String),

    #[error("duplicate identifier '{0}' in category")]
    DuplicateIdentifier(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed entry {}: {reason}", .path.display())]
    MalformedEntry {
        path: PathBuf,
        reason: MalformedReason,
    },

    #[error("No entry '{identifier}' in category '{category}'")]
    NotFound {
        category: String,
        identifier: String,
    },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Whether the error is a lookup miss the caller can recover from
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound { .. } | CatalogError::UnknownCategory(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
