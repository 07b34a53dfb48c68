pub mod error;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use repository::ConsultationRepository;
