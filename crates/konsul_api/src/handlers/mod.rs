pub mod admin;
pub mod consultation;
pub mod error;

use axum::http::StatusCode;
use serde::Serialize;

pub use error::ApiError;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// The `{ success, message, data }` envelope the original clients expect.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Envelope {
            success: true,
            message: message.into(),
            data,
        }
    }
}
