pub mod consultation;
pub mod vocab;

pub use consultation::{
    ConsultationForm, ConsultationRecord, ConsultationStatus, ConsultationUpdate, ContractIssue,
    IssueType,
};
