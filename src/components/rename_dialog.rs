//! Rename Folder Dialog Component
//!
//! Modal wrapper around the core rename state machine. The machine owns
//! the draft, validation and submit phases; this component renders it and
//! runs the persistence call against the workspace store.

use dioxus::prelude::*;
use notespace_core::rename::{RenameDialog, RenameTarget, SubmitError, SubmitStep};
use notespace_core::FolderId;
use notespace_ui::{Button, ButtonVariant, Input};

use crate::context::use_workspace;

/// Rename Folder Dialog
///
/// # Example
///
/// ```ignore
/// rsx! {
///     RenameFolderDialog {
///         show: rename_target().is_some(),
///         target: rename_target(),
///         on_close: move |_| rename_target.set(None),
///         on_renamed: move |_| reload(),
///     }
/// }
/// ```
#[component]
pub fn RenameFolderDialog(
    /// Whether to show the dialog
    show: ReadOnlySignal<bool>,
    /// The folder under edit (id + current name)
    target: ReadOnlySignal<Option<RenameTarget>>,
    /// Callback when the dialog closes (cancel, backdrop, or success)
    on_close: EventHandler<()>,
    /// Callback after a successful rename was persisted
    on_renamed: EventHandler<()>,
) -> Element {
    let workspace = use_workspace();
    let mut dialog = use_signal(RenameDialog::closed);

    // Re-seed the machine whenever the dialog is shown for a target;
    // open() resets the draft so nothing leaks across entities.
    use_effect(move || {
        if show() {
            if let Some(t) = target() {
                dialog.write().open(t);
            }
        } else {
            dialog.write().dismiss();
        }
    });

    let mut submit = move |_| {
        let step = dialog.write().begin_submit();
        match step {
            SubmitStep::Persist { id, name } => {
                spawn(async move {
                    let shared = workspace();
                    let result = {
                        let mut guard = shared.write().await;
                        match id.parse::<FolderId>() {
                            Ok(folder_id) => guard
                                .rename_folder(&folder_id, &name)
                                .map_err(SubmitError::from),
                            Err(_) => Err(SubmitError::new("Folder no longer exists")),
                        }
                    };
                    let renamed = result.is_ok();
                    dialog.write().finish_submit(result);
                    if renamed {
                        on_renamed.call(());
                        on_close.call(());
                    }
                });
            }
            SubmitStep::CloseUnchanged => on_close.call(()),
            SubmitStep::Rejected => {}
        }
    };

    let mut handle_close = move |_| {
        // dismiss() refuses while a submission is in flight
        dialog.write().dismiss();
        if !dialog.read().is_submitting() {
            on_close.call(());
        }
    };

    if !show() {
        return rsx! {};
    }

    let submitting = dialog.read().is_submitting();
    let draft = dialog.read().draft().to_string();
    let error = dialog.read().error().map(|e| e.to_string());

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| handle_close(()),

            div {
                class: "rename-modal",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title", "Rename folder" }

                Input {
                    value: draft,
                    oninput: move |s| dialog.write().edit(s),
                    label: "folder name".to_string(),
                    disabled: submitting,
                    autofocus: true,
                    onkeydown: move |e: KeyboardEvent| match e.key() {
                        Key::Enter => submit(()),
                        Key::Escape => handle_close(()),
                        _ => {}
                    },
                }

                if let Some(err) = error {
                    p { class: "error-text", "\u{26A0} {err}" }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: submitting,
                        onclick: move |_| submit(()),
                        if submitting { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: submitting,
                        onclick: move |_| handle_close(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
