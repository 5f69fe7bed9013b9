//! ==============================================================================
//! form.rs - contact form submit-button state machine
//! ==============================================================================
//!
//! states:
//!     Idle --begin--> Sending --finish(ok)--> Sent
//!                             --finish(err)--> Failed --recover--> Idle
//!     Failed --begin--> Sending   (manual resubmit, no retry limit)
//!
//! the browser side renders each `ButtonView` onto the submit button and arms
//! a timer for `recover` after a failure. a recover from an older failure is
//! ignored once the user has resubmitted.
//!
//! ==============================================================================

use crate::error::SubmitError;

pub const SENDING_LABEL: &str = "Sending...";
pub const ERROR_LABEL: &str = "Error — Try Again";
/// delay before the original label comes back after a failure
pub const ERROR_RESET_MS: u32 = 3000;

/// map an http status onto the submission outcome (any 2xx is accepted)
pub fn outcome_from_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// what the submit button should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
    Failed,
    Sent,
}

/// ui effect of a finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// hide the form, show the success panel
    ShowSuccess,
    /// render `view`, then call `recover(generation)` after `reset_after_ms`
    ShowError {
        view: ButtonView,
        reset_after_ms: u32,
        generation: u64,
    },
}

#[derive(Debug, Clone)]
pub struct SubmitFlow {
    original_label: String,
    phase: Phase,
    failures: u64,
}

impl SubmitFlow {
    /// `original_label` is the button text as rendered by the page
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            original_label: original_label.into(),
            phase: Phase::Idle,
            failures: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }

    /// start a submission; `None` while one is in flight or after success
    pub fn begin(&mut self) -> Option<ButtonView> {
        match self.phase {
            Phase::Idle | Phase::Failed => {
                self.phase = Phase::Sending;
                Some(ButtonView {
                    label: SENDING_LABEL.to_string(),
                    disabled: true,
                })
            }
            Phase::Sending | Phase::Sent => None,
        }
    }

    /// record the request outcome
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> Completion {
        match outcome {
            Ok(()) => {
                self.phase = Phase::Sent;
                Completion::ShowSuccess
            }
            Err(_) => {
                self.phase = Phase::Failed;
                self.failures += 1;
                Completion::ShowError {
                    view: ButtonView {
                        label: ERROR_LABEL.to_string(),
                        disabled: false,
                    },
                    reset_after_ms: ERROR_RESET_MS,
                    generation: self.failures,
                }
            }
        }
    }

    /// timed reset after a failure; `None` when superseded
    pub fn recover(&mut self, generation: u64) -> Option<ButtonView> {
        if self.phase != Phase::Failed || generation != self.failures {
            return None;
        }
        self.phase = Phase::Idle;
        Some(ButtonView {
            label: self.original_label.clone(),
            disabled: false,
        })
    }
}
