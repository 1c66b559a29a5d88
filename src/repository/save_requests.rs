//! Save requests repository (remote)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{DailyCount, RequestStatus, SaveRequest},
};

use super::SaveRequestsStore;

#[derive(Clone)]
pub struct SaveRequestsRepository {
    pool: Pool<Postgres>,
}

impl SaveRequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaveRequestsStore for SaveRequestsRepository {
    async fn insert(&self, payload: &DailyCount) -> AppResult<SaveRequest> {
        let row = sqlx::query_as::<_, SaveRequest>(
            r#"
            INSERT INTO save_requests (class_date, are_you_with_me, thumbs_up, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(payload.date)
        .bind(payload.are_you_with_me)
        .bind(payload.thumbs_up)
        .bind(RequestStatus::Pending)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_pending(&self) -> AppResult<Vec<SaveRequest>> {
        let rows = sqlx::query_as::<_, SaveRequest>(
            "SELECT * FROM save_requests WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(RequestStatus::Pending)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<SaveRequest>> {
        let row = sqlx::query_as::<_, SaveRequest>("SELECT * FROM save_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn resolve(&self, id: Uuid, status: RequestStatus) -> AppResult<bool> {
        let result = sqlx::query("UPDATE save_requests SET status = $2 WHERE id = $1 AND status = $3")
            .bind(id)
            .bind(status)
            .bind(RequestStatus::Pending)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
