//! Admin gate. The server holds the credential and checks it on every
//! admin call; client-side storage is never the authority.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, StatusCode};

use crate::AppState;

/// Extractor that admits a request only when it carries the admin bearer
/// token. Usable as a handler argument on any admin route.
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = &state.admin_token else {
            // No token configured: open admin surface (development mode).
            return Ok(AdminAuth);
        };

        let presented = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match presented {
            Some(token) if token == expected => Ok(AdminAuth),
            _ => {
                tracing::warn!("admin request rejected: missing or wrong token");
                Err((
                    StatusCode::UNAUTHORIZED,
                    "Admin credential required".to_string(),
                ))
            }
        }
    }
}
