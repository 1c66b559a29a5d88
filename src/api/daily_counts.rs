//! Daily counts API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{daily_count::parse_class_date, DailyCount, HistoryQuery, SaveDailyCount},
};

use super::CurrentSession;

/// List saved daily counts, ascending by date
#[utoipa::path(
    get,
    path = "/daily-counts",
    tag = "daily_counts",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Daily counts history", body = Vec<DailyCount>)
    )
)]
pub async fn list_daily_counts(
    State(state): State<crate::AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<DailyCount>>> {
    let history = query.apply(state.services.history.load_history().await)?;
    Ok(Json(history))
}

/// Save the totals for a date, replacing any existing entry.
///
/// With a remote backend only admins may write directly.
#[utoipa::path(
    put,
    path = "/daily-counts/{date}",
    tag = "daily_counts",
    security(("bearer_auth" = [])),
    params(("date" = String, Path, description = "Class date (YYYY-MM-DD)")),
    request_body = SaveDailyCount,
    responses(
        (status = 200, description = "Daily counts saved", body = DailyCount),
        (status = 403, description = "Admin session required", body = crate::error::ErrorResponse)
    )
)]
pub async fn save_daily_counts(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Path(date): Path<String>,
    Json(data): Json<SaveDailyCount>,
) -> AppResult<Json<DailyCount>> {
    if state.services.has_remote_backend() {
        session.require_admin()?;
    }
    data.validate()?;
    let date = parse_class_date(&date)?;

    let saved = state
        .services
        .history
        .save_daily_counts(date, data.are_you_with_me, data.thumbs_up)
        .await?;
    Ok(Json(saved))
}
