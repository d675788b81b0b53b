//! Notespace Core Library
//!
//! Data model and UI-facing state machines for Notespace, a local-first
//! notes and files desktop app.
//!
//! ## Overview
//!
//! The workspace is a tree of folders holding notes; the desktop shell
//! renders it and edits it through this crate. The one stateful flow with
//! real contracts is the folder rename dialog, modeled in [`rename`] as an
//! explicit state machine so the UI layer can stay a thin shell over it.
//!
//! ## Quick Start
//!
//! ```
//! use notespace_core::rename::{RenameDialog, RenameTarget, SubmitStep};
//!
//! let mut dialog = RenameDialog::closed();
//! dialog.open(RenameTarget::new("f1", "Reports"));
//! dialog.edit("  Reports 2024  ");
//!
//! match dialog.begin_submit() {
//!     SubmitStep::Persist { id, name } => {
//!         assert_eq!((id.as_str(), name.as_str()), ("f1", "Reports 2024"));
//!         // run the persistence operation, then:
//!         dialog.finish_submit(Ok(()));
//!     }
//!     other => panic!("expected persist, got {other:?}"),
//! }
//! assert!(!dialog.is_open());
//! ```

pub mod error;
pub mod rename;
pub mod types;
pub mod workspace;

// Re-exports
pub use error::CoreError;
pub use rename::{
    DialogPhase, RenameDialog, RenameTarget, SubmitError, SubmitStep, MAX_NAME_LEN,
};
pub use types::{Crumb, Folder, FolderId, Note, NoteId};
pub use workspace::Workspace;
