//! Store-wired components for the Notespace shell.
//!
//! Presentational primitives live in `notespace-ui`; components here talk
//! to the workspace store through context.

mod rename_dialog;

pub use rename_dialog::RenameFolderDialog;
