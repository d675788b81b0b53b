//! Workspace pages - folder browsing.
//!
//! Both routes render the same browser: `/` shows the workspace root,
//! `/folders/:id` shows one folder's subfolders and notes. The browser
//! owns the rename dialog and reloads its lists after a rename lands.

use dioxus::prelude::*;
use notespace_core::rename::RenameTarget;
use notespace_core::{Crumb, Folder, FolderId, Note};
use notespace_ui::{Breadcrumb, IconButton, ImageIndicator};

use crate::app::Route;
use crate::components::RenameFolderDialog;
use crate::context::use_workspace;

/// Workspace root: top-level folders.
#[component]
pub fn WorkspaceRoot() -> Element {
    rsx! {
        FolderBrowser { folder: None::<FolderId> }
    }
}

/// One folder's contents, addressed by id in the route.
///
/// An unparseable or unknown id falls back to the workspace root.
#[component]
pub fn FolderView(id: String) -> Element {
    let navigator = use_navigator();

    let parsed = id.parse::<FolderId>().ok();
    if parsed.is_none() {
        tracing::warn!(%id, "unparseable folder id in route");
    }

    let redirect = parsed.clone();
    use_effect(move || {
        if redirect.is_none() {
            navigator.push(Route::WorkspaceRoot {});
        }
    });

    match parsed {
        Some(folder_id) => rsx! {
            FolderBrowser { folder: Some(folder_id) }
        },
        None => rsx! {
            div { class: "loading-state",
                p { class: "loading-message", "loading..." }
            }
        },
    }
}

/// Folder browser: breadcrumb, subfolder list, note list, rename dialog.
#[component]
fn FolderBrowser(folder: ReadOnlySignal<Option<FolderId>>) -> Element {
    let workspace = use_workspace();
    let navigator = use_navigator();

    let mut folders: Signal<Vec<Folder>> = use_signal(Vec::new);
    let mut notes: Signal<Vec<Note>> = use_signal(Vec::new);
    let mut trail: Signal<Vec<Crumb>> = use_signal(|| vec![Crumb::root()]);

    // Rename dialog state: which folder is under edit
    let mut rename_target: Signal<Option<RenameTarget>> = use_signal(|| None);

    // Bumped after a rename lands so the lists reload
    let mut reload: Signal<u32> = use_signal(|| 0);

    // Load folder contents whenever the location or reload counter changes
    use_effect(move || {
        let _ = reload();
        let current = folder();
        spawn(async move {
            let shared = workspace();
            let guard = shared.read().await;
            match &current {
                Some(id) => {
                    folders.set(guard.subfolders(Some(id)));
                    notes.set(guard.notes_in(id));
                    trail.set(guard.trail(id));
                }
                None => {
                    folders.set(guard.subfolders(None));
                    notes.set(Vec::new());
                    trail.set(vec![Crumb::root()]);
                }
            }
        });
    });

    let navigate = move |target: Option<FolderId>| match target {
        Some(id) => {
            navigator.push(Route::FolderView { id: id.to_string() });
        }
        None => {
            navigator.push(Route::WorkspaceRoot {});
        }
    };

    rsx! {
        div { class: "app-shell",
            Breadcrumb {
                trail: trail(),
                on_navigate: navigate,
            }

            div { class: "folder-list",
                for entry in folders() {
                    div { class: "folder-row", key: "{entry.id}",
                        button {
                            class: "folder-open",
                            onclick: {
                                let id = entry.id.clone();
                                move |_| navigate(Some(id.clone()))
                            },
                            span { class: "folder-icon", "\u{1F4C1}" }
                            span { class: "folder-name", "{entry.name}" }
                        }
                        IconButton {
                            aria_label: "Rename folder".to_string(),
                            onclick: {
                                let target =
                                    RenameTarget::new(entry.id.to_string(), entry.name.clone());
                                move |_| rename_target.set(Some(target.clone()))
                            },
                            "\u{270E}"
                        }
                    }
                }
            }

            div { class: "note-list",
                for note in notes() {
                    div { class: "note-row", key: "{note.id}",
                        span { class: "note-title", "{note.title}" }
                        ImageIndicator { count: note.image_count }
                    }
                }
            }

            RenameFolderDialog {
                show: rename_target().is_some(),
                target: rename_target(),
                on_close: move |_| rename_target.set(None),
                on_renamed: move |_| reload.set(reload() + 1),
            }
        }
    }
}
