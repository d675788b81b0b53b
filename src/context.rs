//! Workspace context provider.
//!
//! Hands the in-memory workspace store to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| workspace_signal);
//!
//! // In child components
//! let workspace = use_workspace();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use notespace_core::Workspace;
use tokio::sync::RwLock;

/// Shared workspace type for context.
///
/// The store is wrapped in Arc<RwLock<>> so pages read concurrently while
/// the rename dialog takes a write lock for the persistence call.
pub type SharedWorkspace = Arc<RwLock<Workspace>>;

/// Hook to access the workspace store from context.
///
/// # Example
///
/// ```ignore
/// let workspace = use_workspace();
///
/// spawn(async move {
///     let shared = workspace();
///     let guard = shared.read().await;
///     let folders = guard.subfolders(None);
/// });
/// ```
pub fn use_workspace() -> Signal<SharedWorkspace> {
    use_context::<Signal<SharedWorkspace>>()
}
