//! Statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::HistoryQuery};

/// The two tallied phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    AreYouWithMe,
    ThumbsUp,
}

/// Statistics response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of saved dates
    pub days: usize,
    /// Summary of "are you with me?" counts, absent without history
    pub are_you_with_me: Option<CounterSummary>,
    /// Summary of "thumbs up" counts, absent without history
    pub thumbs_up: Option<CounterSummary>,
    /// Totals across all dates, only for counters above zero
    pub totals: Vec<CounterTotal>,
}

/// Distribution of one counter over the saved dates
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CounterSummary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    pub min: i32,
    pub p25: i32,
    pub p50: i32,
    pub p75: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CounterTotal {
    pub counter: Counter,
    pub total: i64,
}

/// Summary statistics over the saved history
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    params(HistoryQuery),
    responses(
        (status = 200, description = "History statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<StatsResponse>> {
    let history = query.apply(state.services.history.load_history().await)?;
    Ok(Json(state.services.stats.summarize(&history)))
}
