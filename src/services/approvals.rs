//! Save request approval workflow
//!
//! Without a remote backend there is nothing to approve: everyone writes
//! straight to local history, so every operation here is a no-op.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{DailyCount, RequestStatus, SaveRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct ApprovalService {
    repository: Repository,
}

impl ApprovalService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Queue counts for admin review. Returns false when no remote backend
    /// is configured.
    pub async fn submit_save_request(
        &self,
        date: NaiveDate,
        are_you_with_me: i32,
        thumbs_up: i32,
    ) -> AppResult<bool> {
        let Some(remote) = &self.repository.remote else {
            return Ok(false);
        };

        let request = remote
            .save_requests
            .insert(&DailyCount::new(date, are_you_with_me, thumbs_up))
            .await?;

        tracing::info!(id = %request.id, date = %date, "Save request submitted");
        Ok(true)
    }

    /// Pending requests, newest first. Failures yield an empty list.
    pub async fn get_pending_requests(&self) -> Vec<SaveRequest> {
        let Some(remote) = &self.repository.remote else {
            return Vec::new();
        };

        match remote.save_requests.list_pending().await {
            Ok(requests) => requests,
            Err(e) => {
                tracing::warn!("Failed to list pending save requests: {}", e);
                Vec::new()
            }
        }
    }

    /// Merge a pending request into daily counts, then mark it approved.
    ///
    /// Unknown, unreadable or already decided requests are left alone and
    /// report `false`. The merge happens before the status update, so a
    /// failed update leaves an already merged request pending; approving it
    /// again writes the same values.
    pub async fn approve_request(&self, id: Uuid) -> AppResult<bool> {
        let Some(remote) = &self.repository.remote else {
            return Ok(false);
        };

        let request = match remote.save_requests.get(id).await {
            Ok(Some(request)) => request,
            Ok(None) => return Ok(false),
            Err(e) => {
                tracing::debug!(id = %id, "Save request lookup failed: {}", e);
                return Ok(false);
            }
        };

        if !request.status.can_transition_to(RequestStatus::Approved) {
            tracing::debug!(id = %id, status = %request.status, "Save request already decided");
            return Ok(false);
        }

        remote.daily_counts.upsert(&request.payload()).await?;
        let changed = remote
            .save_requests
            .resolve(id, RequestStatus::Approved)
            .await?;

        tracing::info!(id = %id, date = %request.class_date, changed, "Save request approved");
        Ok(changed)
    }

    /// Mark a pending request rejected. Daily counts are not touched.
    pub async fn reject_request(&self, id: Uuid) -> AppResult<bool> {
        let Some(remote) = &self.repository.remote else {
            return Ok(false);
        };

        let changed = remote
            .save_requests
            .resolve(id, RequestStatus::Rejected)
            .await?;

        tracing::info!(id = %id, changed, "Save request rejected");
        Ok(changed)
    }
}
