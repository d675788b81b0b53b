//! Rename dialog state machine.
//!
//! Models the folder rename flow as one tagged state instead of a pile of
//! booleans, so impossible combinations (submitting while showing an
//! error) cannot be represented. The UI owns a [`RenameDialog`] and drives
//! it through [`open`](RenameDialog::open), [`edit`](RenameDialog::edit),
//! [`begin_submit`](RenameDialog::begin_submit),
//! [`finish_submit`](RenameDialog::finish_submit) and
//! [`dismiss`](RenameDialog::dismiss). Persistence stays outside: the
//! machine hands back a [`SubmitStep::Persist`] request and the caller
//! runs the asynchronous operation, at most once per submit.

use std::future::Future;

use crate::error::CoreError;

/// Maximum folder name length after trimming
pub const MAX_NAME_LEN: usize = 50;

/// Error shown when the trimmed name is empty
pub const NAME_REQUIRED: &str = "Folder name is required";

/// Error shown when the trimmed name exceeds [`MAX_NAME_LEN`]
pub const NAME_TOO_LONG: &str = "Folder name must be 50 characters or less";

/// Fallback shown when a persistence failure carries no message
pub const RENAME_FAILED: &str = "Could not rename the folder";

/// Transient copy of the entity under edit.
///
/// The workspace keeps owning the real folder; the dialog only needs its
/// id and current display name. Ids are plain strings so the dialog is
/// not welded to one id type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTarget {
    pub id: String,
    pub name: String,
}

impl RenameTarget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Where the dialog currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogPhase {
    /// Not shown; no entity referenced
    #[default]
    Closed,
    /// Shown, waiting for input
    Idle,
    /// Persistence operation in flight; controls disabled
    Submitting,
    /// Shown with a validation or persistence error
    Error(String),
}

/// What a submit attempt decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// Validation failed (or the dialog was not in a submittable phase);
    /// the dialog stays open showing the error
    Rejected,
    /// Trimmed draft equals the current name; closed without persisting
    CloseUnchanged,
    /// Valid changed name; the caller must run the persistence operation
    /// and report back through [`RenameDialog::finish_submit`]
    Persist { id: String, name: String },
}

/// Failure reported by the persistence operation.
///
/// `message: None` makes the dialog show the [`RENAME_FAILED`] fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    message: Option<String>,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A failure without a usable message
    pub fn unspecified() -> Self {
        Self { message: None }
    }

    /// The message to surface in the dialog
    pub fn display_message(&self) -> &str {
        match &self.message {
            Some(m) if !m.trim().is_empty() => m,
            _ => RENAME_FAILED,
        }
    }
}

impl From<CoreError> for SubmitError {
    fn from(err: CoreError) -> Self {
        Self::new(err.to_string())
    }
}

/// Validate a raw draft name, returning the trimmed name on success.
///
/// Ordered rules, first failing one wins:
/// 1. empty after trim -> [`NAME_REQUIRED`]
/// 2. more than [`MAX_NAME_LEN`] characters after trim -> [`NAME_TOO_LONG`]
pub fn validate_name(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NAME_REQUIRED.to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(NAME_TOO_LONG.to_string());
    }
    Ok(trimmed.to_string())
}

/// Modal rename dialog state.
///
/// Starts [`DialogPhase::Closed`]. Every [`open`](Self::open) re-seeds the
/// draft from the target's current name, so stale draft state never leaks
/// across entities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenameDialog {
    phase: DialogPhase,
    target: Option<RenameTarget>,
    draft: String,
}

impl RenameDialog {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DialogPhase {
        &self.phase
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn target(&self) -> Option<&RenameTarget> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, DialogPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, DialogPhase::Submitting)
    }

    /// Current error message, if the dialog is showing one
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DialogPhase::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Open the dialog for a target.
    ///
    /// Re-initializes the draft from the target's current name and clears
    /// any error left over from an earlier entity. Ignored while a
    /// submission is in flight.
    pub fn open(&mut self, target: RenameTarget) {
        if self.is_submitting() {
            tracing::debug!(id = %target.id, "ignoring open while submitting");
            return;
        }
        self.draft = target.name.clone();
        self.target = Some(target);
        self.phase = DialogPhase::Idle;
    }

    /// Update the draft name. No validation happens until submit.
    ///
    /// Ignored while closed or while a submission is in flight. A shown
    /// error stays visible until the next submit attempt.
    pub fn edit(&mut self, text: impl Into<String>) {
        match self.phase {
            DialogPhase::Closed | DialogPhase::Submitting => {}
            DialogPhase::Idle | DialogPhase::Error(_) => self.draft = text.into(),
        }
    }

    /// Cancel / backdrop dismissal.
    ///
    /// Ignored while submitting so the in-flight persistence call always
    /// gets to report its outcome through [`finish_submit`](Self::finish_submit).
    pub fn dismiss(&mut self) {
        if self.is_submitting() {
            tracing::debug!("ignoring dismiss while submitting");
            return;
        }
        self.close();
    }

    fn close(&mut self) {
        self.phase = DialogPhase::Closed;
        self.target = None;
        self.draft.clear();
    }

    /// Validate the draft and move to the next phase.
    ///
    /// * invalid draft -> [`DialogPhase::Error`], returns [`SubmitStep::Rejected`]
    /// * unchanged name -> closes, returns [`SubmitStep::CloseUnchanged`]
    ///   (the persistence operation is never invoked)
    /// * valid changed name -> [`DialogPhase::Submitting`], returns
    ///   [`SubmitStep::Persist`] with the trimmed name
    ///
    /// Calling this while closed or already submitting is a no-op returning
    /// [`SubmitStep::Rejected`]; the submit control is disabled in those
    /// phases anyway.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if matches!(self.phase, DialogPhase::Closed | DialogPhase::Submitting) {
            return SubmitStep::Rejected;
        }
        let Some(target) = &self.target else {
            return SubmitStep::Rejected;
        };

        match validate_name(&self.draft) {
            Err(msg) => {
                self.phase = DialogPhase::Error(msg);
                SubmitStep::Rejected
            }
            Ok(trimmed) if trimmed == target.name => {
                tracing::debug!(id = %target.id, "name unchanged, closing without persist");
                self.close();
                SubmitStep::CloseUnchanged
            }
            Ok(trimmed) => {
                let id = target.id.clone();
                self.phase = DialogPhase::Submitting;
                SubmitStep::Persist { id, name: trimmed }
            }
        }
    }

    /// Record the persistence outcome.
    ///
    /// Success closes the dialog. Failure keeps it open with the attempted
    /// draft preserved and the failure message shown. Only meaningful in
    /// [`DialogPhase::Submitting`]; ignored otherwise.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => self.close(),
            Err(err) => {
                let msg = err.display_message().to_string();
                tracing::debug!(error = %msg, "rename persistence failed");
                self.phase = DialogPhase::Error(msg);
            }
        }
    }

    /// Drive one full submit attempt.
    ///
    /// Validates the draft and, when a changed valid name was entered,
    /// runs `persist(id, trimmed_name)` and records its outcome. `persist`
    /// is invoked at most once per call; re-entrant submits are rejected
    /// because the phase is already [`DialogPhase::Submitting`] at the
    /// suspension point.
    pub async fn submit<F, Fut>(&mut self, persist: F) -> SubmitStep
    where
        F: FnOnce(String, String) -> Fut,
        Fut: Future<Output = Result<(), SubmitError>>,
    {
        let step = self.begin_submit();
        if let SubmitStep::Persist { id, name } = &step {
            let result = persist(id.clone(), name.clone()).await;
            self.finish_submit(result);
        }
        step
    }
}
