//! Error types for Fridge
//!
//! The catalog loader absorbs its own failures at the `load` boundary; the
//! variants here surface from the fallible inner layer and from the
//! terminal/CLI code.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Fridge operations
#[derive(Error, Debug)]
pub enum FridgeError {
    #[error("Failed to open catalog resource '{0}': {1}")]
    ResourceOpen(PathBuf, std::io::Error),

    #[error("Failed to parse catalog resource '{0}': {1}")]
    ResourceParse(PathBuf, serde_json::Error),

    #[error("No record number {0} in the catalog ({1} records)")]
    RecordOutOfRange(usize, usize),

    #[error("Record '{0}' has no link to open")]
    MissingLink(String),

    #[error("Failed to open '{0}' in the browser: {1}")]
    BrowserLaunch(String, std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Fridge operations
pub type Result<T> = std::result::Result<T, FridgeError>;

impl FridgeError {
    /// Errors the catalog loader swallows rather than propagating.
    pub fn is_absorbed_by_loader(&self) -> bool {
        matches!(
            self,
            FridgeError::ResourceOpen(_, _) | FridgeError::ResourceParse(_, _)
        )
    }
}
