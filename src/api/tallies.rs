//! Tally recording endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::TallyInput, services::tally::RecordOutcome};

use super::CurrentSession;

#[derive(Serialize, ToSchema)]
pub struct RecordResponse {
    pub outcome: RecordOutcome,
    pub message: String,
}

/// Record a class date's totals.
///
/// Saved directly for admins and in local-only mode, otherwise queued for
/// admin review.
#[utoipa::path(
    post,
    path = "/tallies",
    tag = "daily_counts",
    security(("bearer_auth" = [])),
    request_body = TallyInput,
    responses(
        (status = 201, description = "Saved to history", body = RecordResponse),
        (status = 202, description = "Submitted for approval", body = RecordResponse)
    )
)]
pub async fn record_tally(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Json(data): Json<TallyInput>,
) -> AppResult<(StatusCode, Json<RecordResponse>)> {
    let count = data.into_daily_count()?;
    let outcome = state.services.tally.record(count, session.is_admin()).await?;

    let (status, message) = match outcome {
        RecordOutcome::Saved => (
            StatusCode::CREATED,
            "Date saved to history (existing entry, if any, was updated).",
        ),
        RecordOutcome::Submitted => (
            StatusCode::ACCEPTED,
            "Submitted for approval. The admin will review your counts.",
        ),
    };

    Ok((
        status,
        Json(RecordResponse {
            outcome,
            message: message.to_string(),
        }),
    ))
}
