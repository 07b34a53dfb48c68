use serde::Deserialize;

use konsul_core::form::{SubmissionWorkflow, WorkflowState};
use konsul_core::models::{ConsultationForm, ConsultationRecord};
use konsul_core::standard_validator;
use konsul_db::ConsultationRepository;

use crate::error::{Error, Result};
use crate::KonsulService;

/// The public create procedure's input: the full form plus the signature
/// artifact the client captured.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    #[serde(flatten)]
    pub form: ConsultationForm,
    #[serde(default)]
    pub signature_data: Option<String>,
}

impl KonsulService {
    /// Server side of the submission flow: validate the complete form,
    /// then persist it in a single insert, locked, with status SUBMITTED.
    pub async fn submit_consultation(&self, request: IntakeRequest) -> Result<ConsultationRecord> {
        let errors = standard_validator().run(&request.form);
        if !errors.is_empty() {
            tracing::warn!(count = errors.len(), "intake rejected by validation");
            return Err(Error::Validation(errors));
        }

        let repo = ConsultationRepository::new(self.pool.clone());
        let record = repo
            .create(&request.form, request.signature_data.as_deref())
            .await?;
        Ok(record)
    }

    /// Drives a workflow instance through its persistence edge: takes a
    /// session in `Submitting`, performs the insert, and reports the
    /// outcome back so the state machine can lock or revert.
    pub async fn finalize_workflow(
        &self,
        workflow: &mut SubmissionWorkflow,
    ) -> Result<ConsultationRecord> {
        if workflow.state() != WorkflowState::Submitting {
            return Err(Error::BusinessRule(
                "workflow is not ready to be persisted".to_string(),
            ));
        }

        let (form, signature) = workflow
            .submission_payload()
            .map_err(|e| Error::BusinessRule(e.to_string()))?;
        let form: ConsultationForm = form.clone();

        let repo = ConsultationRepository::new(self.pool.clone());
        match repo.create(&form, Some(&signature)).await {
            Ok(record) => {
                // Submitting -> LockedUnprinted
                let _ = workflow.persistence_succeeded();
                Ok(record)
            }
            Err(err) => {
                // Submitting -> Editing(N); the user may retry.
                let _ = workflow.persistence_failed();
                tracing::error!(error = %err, "persistence failed; workflow reverted");
                Err(err.into())
            }
        }
    }
}
