//! Error types for Notespace

use thiserror::Error;

/// Main error type for workspace operations
///
/// Display strings are user-facing: the rename dialog surfaces them
/// directly as its error message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Folder was not found in the workspace
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    /// Note was not found in the workspace
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// A sibling folder already uses this name
    #[error("A folder named \"{0}\" already exists here")]
    NameTaken(String),

    /// Error from the backing store
    #[error("Storage error: {0}")]
    Storage(String),
}
