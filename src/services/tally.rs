//! Recording a class date's totals
//!
//! Admins write straight to history. Everyone else goes through the
//! approval queue when a remote backend exists; in local-only mode there is
//! no queue and all users write directly.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::DailyCount,
};

use super::{approvals::ApprovalService, history::HistoryService};

/// What happened to recorded counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordOutcome {
    /// Written to history
    Saved,
    /// Queued for admin review
    Submitted,
}

#[derive(Clone)]
pub struct TallyService {
    history: HistoryService,
    approvals: ApprovalService,
    has_remote_backend: bool,
}

impl TallyService {
    pub fn new(history: HistoryService, approvals: ApprovalService, has_remote_backend: bool) -> Self {
        Self {
            history,
            approvals,
            has_remote_backend,
        }
    }

    pub async fn record(&self, count: DailyCount, is_admin: bool) -> AppResult<RecordOutcome> {
        if is_admin || !self.has_remote_backend {
            self.history
                .save_daily_counts(count.date, count.are_you_with_me, count.thumbs_up)
                .await?;
            return Ok(RecordOutcome::Saved);
        }

        let submitted = self
            .approvals
            .submit_save_request(count.date, count.are_you_with_me, count.thumbs_up)
            .await?;
        if submitted {
            Ok(RecordOutcome::Submitted)
        } else {
            Err(AppError::Unavailable(
                "Could not submit, database may not be configured".to_string(),
            ))
        }
    }
}
