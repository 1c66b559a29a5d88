//! API handlers for CC6 Tracker REST endpoints

pub mod auth;
pub mod daily_counts;
pub mod health;
pub mod openapi;
pub mod save_requests;
pub mod stats;
pub mod tallies;


use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::Session, AppState};

/// Extractor for the caller's session. Requests without an Authorization
/// header get an anonymous session; a present but invalid token is rejected.
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(CurrentSession(Session::anonymous()));
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let session = state.services.auth.session(Some(token.trim()))?;
        Ok(CurrentSession(session))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/login", post(auth::login))
        // Daily counts
        .route("/daily-counts", get(daily_counts::list_daily_counts))
        .route("/daily-counts/:date", put(daily_counts::save_daily_counts))
        .route("/tallies", post(tallies::record_tally))
        // Approval workflow
        .route(
            "/save-requests",
            get(save_requests::list_pending_requests).post(save_requests::submit_save_request),
        )
        .route("/save-requests/:id/approve", post(save_requests::approve_request))
        .route("/save-requests/:id/reject", post(save_requests::reject_request))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
