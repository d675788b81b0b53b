//! Page components for Notespace.

mod workspace;

pub use workspace::{FolderView, WorkspaceRoot};
