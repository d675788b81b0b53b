//! Rename dialog end-to-end flow tests.
//!
//! Exercises the dialog contract against an async persistence operation:
//! the operation runs at most once per submit, re-entrant submits are
//! rejected while one is in flight, and failures keep the dialog open
//! with the attempted draft.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use notespace_core::rename::{
    RenameDialog, RenameTarget, SubmitError, SubmitStep, NAME_REQUIRED, NAME_TOO_LONG,
    RENAME_FAILED,
};
use notespace_core::{CoreError, Workspace};

fn open_dialog(name: &str) -> RenameDialog {
    let mut dialog = RenameDialog::closed();
    dialog.open(RenameTarget::new("f1", name));
    dialog
}

#[tokio::test]
async fn whitespace_name_never_reaches_persistence() {
    let mut dialog = open_dialog("Reports");
    dialog.edit("   \t  ");

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let step = dialog
        .submit(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

    assert_eq!(step, SubmitStep::Rejected);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(dialog.error(), Some(NAME_REQUIRED));
    assert!(dialog.is_open());
}

#[tokio::test]
async fn over_long_name_never_reaches_persistence() {
    let mut dialog = open_dialog("Reports");
    dialog.edit("x".repeat(51));

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let step = dialog
        .submit(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

    assert_eq!(step, SubmitStep::Rejected);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(dialog.error(), Some(NAME_TOO_LONG));
}

#[tokio::test]
async fn unchanged_name_closes_without_persistence() {
    let mut dialog = open_dialog("Reports");
    dialog.edit("  Reports  ");

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let step = dialog
        .submit(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

    assert_eq!(step, SubmitStep::CloseUnchanged);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn valid_changed_name_persists_exactly_once_and_closes() {
    let mut dialog = open_dialog("Reports");
    dialog.edit("  Reports 2024  ");

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let step = dialog
        .submit(move |id, name| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                assert_eq!(id, "f1");
                assert_eq!(name, "Reports 2024");
                Ok(())
            }
        })
        .await;

    assert!(matches!(step, SubmitStep::Persist { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!dialog.is_open());
    assert_eq!(dialog.draft(), "");
}

#[tokio::test]
async fn failed_persistence_reopens_with_message_and_allows_retry() {
    let mut dialog = open_dialog("Reports");
    dialog.edit("Reports 2024");

    let step = dialog
        .submit(|_, _| async { Err(SubmitError::new("folder is locked")) })
        .await;

    assert!(matches!(step, SubmitStep::Persist { .. }));
    assert!(dialog.is_open());
    assert!(!dialog.is_submitting());
    assert_eq!(dialog.error(), Some("folder is locked"));
    assert_eq!(dialog.draft(), "Reports 2024");

    // User can resubmit the preserved draft; second attempt succeeds.
    let step = dialog.submit(|_, _| async { Ok(()) }).await;
    assert!(matches!(step, SubmitStep::Persist { .. }));
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn messageless_failure_shows_generic_fallback() {
    let mut dialog = open_dialog("Reports");
    dialog.edit("Reports 2024");

    dialog
        .submit(|_, _| async { Err(SubmitError::unspecified()) })
        .await;

    assert_eq!(dialog.error(), Some(RENAME_FAILED));
}

#[tokio::test]
async fn persistence_call_sees_submitting_phase() {
    // The suspension point is the persist call; the dialog must already be
    // in Submitting there so any re-entrant submit is rejected.
    let mut dialog = open_dialog("Reports");
    dialog.edit("Reports 2024");

    let observed = Arc::new(AtomicUsize::new(0));
    let step = dialog.begin_submit();
    assert!(dialog.is_submitting());
    assert_eq!(dialog.begin_submit(), SubmitStep::Rejected);

    if let SubmitStep::Persist { .. } = step {
        observed.fetch_add(1, Ordering::SeqCst);
        dialog.finish_submit(Ok(()));
    }
    assert_eq!(observed.load(Ordering::SeqCst), 1);
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn dialog_drives_workspace_rename() {
    let mut ws = Workspace::new();
    let id = ws.create_folder("Reports", None).unwrap();

    let mut dialog = RenameDialog::closed();
    dialog.open(RenameTarget::new(id.to_string(), "Reports"));
    dialog.edit("  Reports 2024  ");

    let step = dialog
        .submit(|raw_id, name| {
            let result = raw_id
                .parse()
                .map_err(|_| SubmitError::unspecified())
                .and_then(|fid| ws.rename_folder(&fid, &name).map_err(SubmitError::from));
            async move { result }
        })
        .await;

    assert!(matches!(step, SubmitStep::Persist { .. }));
    assert!(!dialog.is_open());
    assert_eq!(ws.folder(&id).unwrap().name, "Reports 2024");
}

#[tokio::test]
async fn workspace_conflict_surfaces_as_dialog_error() {
    let mut ws = Workspace::new();
    let _ = ws.create_folder("Reports", None).unwrap();
    let other = ws.create_folder("Projects", None).unwrap();

    let mut dialog = RenameDialog::closed();
    dialog.open(RenameTarget::new(other.to_string(), "Projects"));
    dialog.edit("Reports");

    dialog
        .submit(|raw_id, name| {
            let result = raw_id
                .parse()
                .map_err(|_| SubmitError::unspecified())
                .and_then(|fid| ws.rename_folder(&fid, &name).map_err(SubmitError::from));
            async move { result }
        })
        .await;

    assert!(dialog.is_open());
    assert_eq!(
        dialog.error(),
        Some(CoreError::NameTaken("Reports".to_string()).to_string().as_str())
    );
    assert_eq!(ws.folder(&other).unwrap().name, "Projects");
}
