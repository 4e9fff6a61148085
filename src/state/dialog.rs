//! Create-board dialog state machine.
//!
//! ```text
//! Closed --open--> Open --confirm(valid)--> Submitting --created--> Closed
//!                   ^  \--confirm(blank)--> Open (warning)
//!                   |                       Submitting --failed--> Open (error)
//!                   +--------- cancel from Open or Submitting --> Closed
//! ```
//!
//! The dialog closes only once the POST succeeds; a failure keeps the draft so
//! the user can retry. Each confirm gets a ticket so the result of an abandoned
//! submission cannot close or annotate a dialog opened afterwards.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Inline warning for a blank board name.
pub const EMPTY_NAME_WARNING: &str = "Board name cannot be empty.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
    /// Confirmed; the POST is in flight.
    Submitting,
}

/// A confirmed name together with the ticket identifying this submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct CreateBoardDialogState {
    pub phase: DialogPhase,
    pub draft: String,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub ticket: u64,
}

impl CreateBoardDialogState {
    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    /// Show an empty dialog. No-op if it is already showing.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.phase = DialogPhase::Open;
        self.draft.clear();
        self.warning = None;
        self.error = None;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.warning = None;
    }

    /// Validate the draft. Blank names set the warning and stay `Open`.
    pub fn confirm(&mut self) -> Option<Submission> {
        if self.phase != DialogPhase::Open {
            return None;
        }
        let name = self.draft.trim();
        if name.is_empty() {
            self.warning = Some(EMPTY_NAME_WARNING.to_owned());
            return None;
        }
        let name = name.to_owned();
        self.ticket += 1;
        self.phase = DialogPhase::Submitting;
        self.warning = None;
        self.error = None;
        Some(Submission { ticket: self.ticket, name })
    }

    /// The POST for `ticket` succeeded.
    pub fn finish_created(&mut self, ticket: u64) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.phase = DialogPhase::Closed;
        self.draft.clear();
        true
    }

    /// The POST for `ticket` failed; reopen with the draft intact.
    pub fn finish_failed(&mut self, ticket: u64, message: impl Into<String>) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.phase = DialogPhase::Open;
        self.error = Some(message.into());
        true
    }

    /// Discard the draft and close, whatever the current phase.
    pub fn cancel(&mut self) {
        self.phase = DialogPhase::Closed;
        self.draft.clear();
        self.warning = None;
        self.error = None;
    }

    fn owns(&self, ticket: u64) -> bool {
        self.phase == DialogPhase::Submitting && self.ticket == ticket
    }
}
