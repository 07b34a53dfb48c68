pub mod auth;
pub mod handlers;
pub mod routes;

use konsul_service::KonsulService;

#[derive(Clone)]
pub struct AppState {
    pub service: KonsulService,
    /// Server-held admin credential. When unset, admin routes are open
    /// (development mode only).
    pub admin_token: Option<String>,
}
