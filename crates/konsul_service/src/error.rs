use konsul_core::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("Concurrent update conflict: {0}")]
    Conflict(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("[{}] {}", e.code, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<konsul_db::Error> for Error {
    fn from(err: konsul_db::Error) -> Self {
        match err {
            konsul_db::Error::NotFound(msg) => Error::NotFound(msg),
            konsul_db::Error::Conflict(msg) => Error::Conflict(msg),
            konsul_db::Error::Database(msg) | konsul_db::Error::Corrupt(msg) => {
                Error::Database(msg)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
