use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{admin, consultation, health_check};
use crate::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Public intake
        .route(
            "/api/consultations",
            post(consultation::create).get(admin::list),
        )
        // Admin surface (each handler carries the AdminAuth extractor)
        .route(
            "/api/consultations/{id}",
            get(admin::get).patch(admin::update).delete(admin::delete),
        )
        .route(
            "/api/consultations/{id}/status",
            axum::routing::patch(admin::update_status),
        )
        .route("/api/statistics", get(admin::statistics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
