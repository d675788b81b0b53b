use std::sync::Arc;

use dioxus::prelude::*;
use notespace_core::Workspace;
use tokio::sync::RwLock;

use crate::context::SharedWorkspace;
use crate::pages::{FolderView, WorkspaceRoot};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Workspace root: top-level folders
/// - `/folders/:id` - A folder's subfolders and notes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    WorkspaceRoot {},
    #[route("/folders/:id")]
    FolderView { id: String },
}

/// Root application component.
///
/// Provides global styles, the workspace store context, and routing.
#[component]
pub fn App() -> Element {
    // The demo workspace is the Entity Provider for the whole shell.
    let workspace: Signal<SharedWorkspace> =
        use_signal(|| Arc::new(RwLock::new(Workspace::demo())));

    use_context_provider(|| workspace);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
