use thiserror::Error;

use crate::form::gate::{plan_step_change, NavigationOutcome};
use crate::form::signature::{SaveOutcome, SignatureArtifact, SignaturePad, Stroke};
use crate::form::steps::STEPS;
use crate::standard_validator;
use crate::models::ConsultationForm;
use crate::validation::ValidationError;

/// Where a single client session is in the submission lifecycle.
///
/// ```text
/// Editing(1..N) -> AwaitingSignature -> Submitting -> LockedUnprinted
///                                                        -> LockedPrintView
/// ```
/// `LockedPrintView` is terminal for the session. Reset is only possible
/// while unlocked and returns to `Editing(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Editing(usize),
    AwaitingSignature,
    Submitting,
    LockedUnprinted,
    LockedPrintView,
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Form sudah terkunci; data tidak dapat diubah")]
    Locked,

    #[error("Step \"{title}\" belum lengkap: {}", missing.join(", "))]
    Blocked {
        step: usize,
        title: String,
        missing: Vec<String>,
    },

    #[error("Form belum valid ({} kesalahan)", errors.len())]
    Validation { errors: Vec<ValidationError> },

    #[error("Silakan berikan tanda tangan terlebih dahulu")]
    EmptySignature,

    #[error("Operation not valid in the current workflow state")]
    InvalidState,
}

/// Drives one public submission from first edit to the locked print view.
/// Persistence happens outside; the caller reports the outcome back via
/// `persistence_succeeded` / `persistence_failed`.
#[derive(Debug)]
pub struct SubmissionWorkflow {
    state: WorkflowState,
    form: ConsultationForm,
    pad: SignaturePad,
    signature: Option<SignatureArtifact>,
}

impl SubmissionWorkflow {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Editing(1),
            form: ConsultationForm::default(),
            pad: SignaturePad::new(),
            signature: None,
        }
    }

    pub fn final_step() -> usize {
        STEPS.len()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn form(&self) -> &ConsultationForm {
        &self.form
    }

    pub fn signature(&self) -> Option<&SignatureArtifact> {
        self.signature.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        matches!(
            self.state,
            WorkflowState::LockedUnprinted | WorkflowState::LockedPrintView
        )
    }

    fn current_step(&self) -> Option<usize> {
        match self.state {
            WorkflowState::Editing(step) => Some(step),
            _ => None,
        }
    }

    // -----------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------

    /// Mutates form values. Only possible while editing; a locked session
    /// reports `Locked`, never a validation error.
    pub fn update_form<F>(&mut self, apply: F) -> Result<(), WorkflowError>
    where
        F: FnOnce(&mut ConsultationForm),
    {
        if self.is_locked() {
            return Err(WorkflowError::Locked);
        }
        if self.current_step().is_none() {
            return Err(WorkflowError::InvalidState);
        }
        apply(&mut self.form);
        Ok(())
    }

    /// Step-gated navigation. On a blocked forward move the current step is
    /// driven back to the first incomplete step, matching the gate contract.
    pub fn goto_step(&mut self, target: usize) -> Result<usize, WorkflowError> {
        let Some(current) = self.current_step() else {
            return if self.is_locked() {
                Err(WorkflowError::Locked)
            } else {
                Err(WorkflowError::InvalidState)
            };
        };

        let target = target.clamp(1, Self::final_step());
        match plan_step_change(current, target, false, &self.form) {
            NavigationOutcome::Moved(step) => {
                self.state = WorkflowState::Editing(step);
                Ok(step)
            }
            NavigationOutcome::Blocked {
                step,
                title,
                missing,
            } => {
                self.state = WorkflowState::Editing(step);
                Err(WorkflowError::Blocked {
                    step,
                    title,
                    missing,
                })
            }
            NavigationOutcome::Locked => Err(WorkflowError::Locked),
        }
    }

    pub fn next_step(&mut self) -> Result<usize, WorkflowError> {
        let current = self.current_step().ok_or(WorkflowError::InvalidState)?;
        self.goto_step(current + 1)
    }

    pub fn prev_step(&mut self) -> Result<usize, WorkflowError> {
        let current = self.current_step().ok_or(WorkflowError::InvalidState)?;
        self.goto_step(current.saturating_sub(1).max(1))
    }

    // -----------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------

    /// Final-step submit: validates every step plus the schema rules, then
    /// waits for the user's explicit confirmation before asking for a
    /// signature. Declining the prompt keeps the session editable.
    pub fn request_submit(&mut self, confirmed: bool) -> Result<(), WorkflowError> {
        let Some(current) = self.current_step() else {
            return if self.is_locked() {
                Err(WorkflowError::Locked)
            } else {
                Err(WorkflowError::InvalidState)
            };
        };

        // Gate over every remaining step; drives back on the first failure.
        if current < Self::final_step() {
            self.goto_step(Self::final_step())?;
        }

        let errors = standard_validator().run(&self.form);
        if !errors.is_empty() {
            return Err(WorkflowError::Validation { errors });
        }

        if !confirmed {
            // User cancelled the confirmation prompt.
            return Ok(());
        }

        self.pad = SignaturePad::new();
        self.state = WorkflowState::AwaitingSignature;
        Ok(())
    }

    pub fn add_signature_stroke(&mut self, stroke: Stroke) -> Result<(), WorkflowError> {
        self.require_awaiting_signature()?;
        self.pad.add_stroke(stroke);
        Ok(())
    }

    pub fn clear_signature(&mut self) -> Result<(), WorkflowError> {
        self.require_awaiting_signature()?;
        self.pad.clear();
        Ok(())
    }

    /// Serializes the signature and moves to `Submitting`. An untouched
    /// pad is rejected and the session stays in `AwaitingSignature`.
    pub fn save_signature(&mut self) -> Result<(), WorkflowError> {
        self.require_awaiting_signature()?;
        match self.pad.save() {
            SaveOutcome::Empty => Err(WorkflowError::EmptySignature),
            SaveOutcome::Saved(artifact) => {
                self.signature = Some(artifact);
                self.state = WorkflowState::Submitting;
                Ok(())
            }
        }
    }

    /// Backs out of the signature prompt to the final editing step.
    pub fn cancel_signature(&mut self) -> Result<(), WorkflowError> {
        self.require_awaiting_signature()?;
        self.state = WorkflowState::Editing(Self::final_step());
        Ok(())
    }

    /// The data handed to the persistence layer while `Submitting`.
    pub fn submission_payload(&self) -> Result<(&ConsultationForm, String), WorkflowError> {
        if self.state != WorkflowState::Submitting {
            return Err(WorkflowError::InvalidState);
        }
        let artifact = self.signature.as_ref().ok_or(WorkflowError::InvalidState)?;
        Ok((&self.form, artifact.data_url()))
    }

    pub fn persistence_succeeded(&mut self) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::Submitting {
            return Err(WorkflowError::InvalidState);
        }
        self.state = WorkflowState::LockedUnprinted;
        Ok(())
    }

    /// Persistence failed: the session reverts to the final editing step
    /// with all values intact so the user can retry.
    pub fn persistence_failed(&mut self) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::Submitting {
            return Err(WorkflowError::InvalidState);
        }
        self.state = WorkflowState::Editing(Self::final_step());
        Ok(())
    }

    // -----------------------------------------------------------------
    // Locked
    // -----------------------------------------------------------------

    /// `LockedUnprinted -> LockedPrintView`; fired automatically shortly
    /// after a successful save, or manually by the user.
    pub fn show_print_view(&mut self) -> Result<(), WorkflowError> {
        match self.state {
            WorkflowState::LockedUnprinted | WorkflowState::LockedPrintView => {
                self.state = WorkflowState::LockedPrintView;
                Ok(())
            }
            _ => Err(WorkflowError::InvalidState),
        }
    }

    /// Discards everything and returns to `Editing(1)`. Requires explicit
    /// confirmation and is refused outright once locked.
    pub fn reset(&mut self, confirmed: bool) -> Result<(), WorkflowError> {
        if self.is_locked() {
            return Err(WorkflowError::Locked);
        }
        if !confirmed {
            return Ok(());
        }
        *self = SubmissionWorkflow::new();
        Ok(())
    }

    fn require_awaiting_signature(&self) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::AwaitingSignature {
            return Err(WorkflowError::InvalidState);
        }
        Ok(())
    }
}

impl Default for SubmissionWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
