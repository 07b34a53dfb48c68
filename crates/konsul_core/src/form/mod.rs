pub mod gate;
pub mod signature;
pub mod steps;
pub mod workflow;

pub use gate::{plan_step_change, NavigationOutcome};
pub use signature::{SaveOutcome, SignatureArtifact, SignaturePad, Stroke};
pub use steps::{field_label, missing_fields, step, StepDescriptor, STEPS};
pub use workflow::{SubmissionWorkflow, WorkflowError, WorkflowState};
