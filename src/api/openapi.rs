//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, daily_counts, health, save_requests, stats, tallies};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CC6 Tracker API",
        version = "1.0.0",
        description = "Classroom engagement tally REST API",
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Daily counts
        daily_counts::list_daily_counts,
        daily_counts::save_daily_counts,
        tallies::record_tally,
        // Save requests
        save_requests::submit_save_request,
        save_requests::list_pending_requests,
        save_requests::approve_request,
        save_requests::reject_request,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Daily counts
            crate::models::DailyCount,
            crate::models::SaveDailyCount,
            crate::models::TallyInput,
            crate::models::HistoryQuery,
            tallies::RecordResponse,
            crate::services::tally::RecordOutcome,
            // Save requests
            crate::models::SaveRequest,
            crate::models::RequestStatus,
            save_requests::SubmitResponse,
            save_requests::DecisionResponse,
            // Stats
            stats::StatsResponse,
            stats::CounterSummary,
            stats::CounterTotal,
            stats::Counter,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Admin authentication"),
        (name = "daily_counts", description = "Daily counts history"),
        (name = "save_requests", description = "Save request approval workflow"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
