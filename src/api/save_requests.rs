//! Save request (approval workflow) API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{SaveRequest, TallyInput},
};

use super::CurrentSession;

#[derive(Serialize, ToSchema)]
pub struct SubmitResponse {
    /// False when no remote backend is configured
    pub submitted: bool,
}

#[derive(Serialize, ToSchema)]
pub struct DecisionResponse {
    /// False when the request was unknown or already decided
    pub changed: bool,
}

/// Submit counts for admin review
#[utoipa::path(
    post,
    path = "/save-requests",
    tag = "save_requests",
    request_body = TallyInput,
    responses(
        (status = 202, description = "Request queued", body = SubmitResponse),
        (status = 200, description = "No remote backend, nothing queued", body = SubmitResponse)
    )
)]
pub async fn submit_save_request(
    State(state): State<crate::AppState>,
    Json(data): Json<TallyInput>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    let count = data.into_daily_count()?;
    let submitted = state
        .services
        .approvals
        .submit_save_request(count.date, count.are_you_with_me, count.thumbs_up)
        .await?;

    let status = if submitted {
        StatusCode::ACCEPTED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(SubmitResponse { submitted })))
}

/// List pending save requests, newest first
#[utoipa::path(
    get,
    path = "/save-requests",
    tag = "save_requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pending save requests", body = Vec<SaveRequest>)
    )
)]
pub async fn list_pending_requests(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<Vec<SaveRequest>>> {
    session.require_admin()?;
    Ok(Json(state.services.approvals.get_pending_requests().await))
}

/// Approve a save request, merging its counts into history
#[utoipa::path(
    post,
    path = "/save-requests/{id}/approve",
    tag = "save_requests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Save request ID")),
    responses(
        (status = 200, description = "Decision applied", body = DecisionResponse)
    )
)]
pub async fn approve_request(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DecisionResponse>> {
    session.require_admin()?;
    let changed = state.services.approvals.approve_request(id).await?;
    Ok(Json(DecisionResponse { changed }))
}

/// Reject a save request
#[utoipa::path(
    post,
    path = "/save-requests/{id}/reject",
    tag = "save_requests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Save request ID")),
    responses(
        (status = 200, description = "Decision applied", body = DecisionResponse)
    )
)]
pub async fn reject_request(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DecisionResponse>> {
    session.require_admin()?;
    let changed = state.services.approvals.reject_request(id).await?;
    Ok(Json(DecisionResponse { changed }))
}
