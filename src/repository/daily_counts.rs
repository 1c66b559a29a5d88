//! Daily counts repository (remote)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::DailyCount};

use super::DailyCountsStore;

#[derive(Clone)]
pub struct DailyCountsRepository {
    pool: Pool<Postgres>,
}

impl DailyCountsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DailyCountsStore for DailyCountsRepository {
    async fn list(&self) -> AppResult<Vec<DailyCount>> {
        let rows = sqlx::query_as::<_, DailyCount>(
            "SELECT class_date, are_you_with_me, thumbs_up FROM daily_counts ORDER BY class_date",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn upsert(&self, count: &DailyCount) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO daily_counts (class_date, are_you_with_me, thumbs_up)
            VALUES ($1, $2, $3)
            ON CONFLICT (class_date) DO UPDATE
            SET are_you_with_me = EXCLUDED.are_you_with_me,
                thumbs_up = EXCLUDED.thumbs_up
            "#,
        )
        .bind(count.date)
        .bind(count.are_you_with_me)
        .bind(count.thumbs_up)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
