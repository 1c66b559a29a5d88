//! Daily count model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Totals recorded for one class date. At most one record exists per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DailyCount {
    /// Class date (YYYY-MM-DD)
    #[sqlx(rename = "class_date")]
    pub date: NaiveDate,
    /// Times "are you with me?" was said
    pub are_you_with_me: i32,
    /// Times "thumbs up" was said
    pub thumbs_up: i32,
}

impl DailyCount {
    pub fn new(date: NaiveDate, are_you_with_me: i32, thumbs_up: i32) -> Self {
        Self {
            date,
            are_you_with_me,
            thumbs_up,
        }
    }
}

/// Body of a direct save for a date given in the path
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveDailyCount {
    #[validate(range(min = 0))]
    pub are_you_with_me: i32,
    #[validate(range(min = 0))]
    pub thumbs_up: i32,
}

/// Counts for a class date, as submitted from the counter screen
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TallyInput {
    /// Class date (YYYY-MM-DD)
    pub date: String,
    #[validate(range(min = 0))]
    pub are_you_with_me: i32,
    #[validate(range(min = 0))]
    pub thumbs_up: i32,
}

impl TallyInput {
    /// Validate the counts and parse the date
    pub fn into_daily_count(self) -> AppResult<DailyCount> {
        self.validate()?;
        let date = parse_class_date(&self.date)?;
        Ok(DailyCount::new(date, self.are_you_with_me, self.thumbs_up))
    }
}

/// Optional date range for history queries
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct HistoryQuery {
    /// Start date, inclusive (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date, inclusive (YYYY-MM-DD)
    pub end_date: Option<String>,
}

impl HistoryQuery {
    /// Keep the records inside the requested range
    pub fn apply(&self, history: Vec<DailyCount>) -> AppResult<Vec<DailyCount>> {
        let start = self.start_date.as_deref().map(parse_class_date).transpose()?;
        let end = self.end_date.as_deref().map(parse_class_date).transpose()?;

        Ok(history
            .into_iter()
            .filter(|c| start.map_or(true, |s| c.date >= s) && end.map_or(true, |e| c.date <= e))
            .collect())
    }
}

/// Parse an ISO class date
pub fn parse_class_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid class date: {}", value)))
}
