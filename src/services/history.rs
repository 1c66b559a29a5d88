//! Daily counts history service

use chrono::NaiveDate;

use crate::{error::AppResult, models::DailyCount, repository::Repository};

#[derive(Clone)]
pub struct HistoryService {
    repository: Repository,
}

impl HistoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Load every saved date, ascending.
    ///
    /// A failing remote query is logged and answered from local storage.
    pub async fn load_history(&self) -> Vec<DailyCount> {
        if let Some(remote) = &self.repository.remote {
            match remote.daily_counts.list().await {
                Ok(mut rows) => {
                    rows.sort_by_key(|c| c.date);
                    return rows;
                }
                Err(e) => tracing::warn!("Remote history load failed, using local storage: {}", e),
            }
        }

        match self.repository.local_history.list().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Local history load failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Save the totals for a date, replacing any existing record for it.
    ///
    /// Goes to the remote store when one is configured; its errors are
    /// returned to the caller.
    pub async fn save_daily_counts(
        &self,
        date: NaiveDate,
        are_you_with_me: i32,
        thumbs_up: i32,
    ) -> AppResult<DailyCount> {
        let count = DailyCount::new(date, are_you_with_me, thumbs_up);

        match &self.repository.remote {
            Some(remote) => remote.daily_counts.upsert(&count).await?,
            None => self.repository.local_history.upsert(&count).await?,
        }

        tracing::info!(
            date = %date,
            are_you_with_me,
            thumbs_up,
            "Daily counts saved"
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        error::AppError,
        repository::{
            memory, DailyCountsStore, MockDailyCountsStore, MockSaveRequestsStore, RemoteStores,
        },
    };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn failing_remote() -> MockDailyCountsStore {
        let mut remote = MockDailyCountsStore::new();
        remote
            .expect_list()
            .returning(|| Err(AppError::Internal("connection refused".to_string())));
        remote
            .expect_upsert()
            .returning(|_| Err(AppError::Internal("connection refused".to_string())));
        remote
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_local_history() {
        let local = Arc::new(memory::MemoryDailyCounts::default());
        local
            .upsert(&DailyCount::new(date("2024-01-10"), 5, 3))
            .await
            .unwrap();

        let repository = Repository::with_stores(
            Some(RemoteStores {
                daily_counts: Arc::new(failing_remote()),
                save_requests: Arc::new(MockSaveRequestsStore::new()),
            }),
            local,
        );
        let service = HistoryService::new(repository);

        assert_eq!(
            service.load_history().await,
            vec![DailyCount::new(date("2024-01-10"), 5, 3)]
        );
    }

    #[tokio::test]
    async fn test_remote_save_failure_is_returned() {
        let local = Arc::new(memory::MemoryDailyCounts::default());
        let repository = Repository::with_stores(
            Some(RemoteStores {
                daily_counts: Arc::new(failing_remote()),
                save_requests: Arc::new(MockSaveRequestsStore::new()),
            }),
            local.clone(),
        );
        let service = HistoryService::new(repository);

        let result = service.save_daily_counts(date("2024-01-10"), 1, 1).await;
        tokio_test::assert_err!(result);
        assert_eq!(local.row_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_history_is_sorted() {
        let mut remote = MockDailyCountsStore::new();
        remote.expect_list().returning(|| {
            Ok(vec![
                DailyCount::new(date("2024-01-12"), 1, 0),
                DailyCount::new(date("2024-01-10"), 2, 0),
            ])
        });
        let mut local = MockDailyCountsStore::new();
        local.expect_list().never();

        let repository = Repository::with_stores(
            Some(RemoteStores {
                daily_counts: Arc::new(remote),
                save_requests: Arc::new(MockSaveRequestsStore::new()),
            }),
            Arc::new(local),
        );

        let dates: Vec<_> = HistoryService::new(repository)
            .load_history()
            .await
            .into_iter()
            .map(|c| c.date)
            .collect();
        assert_eq!(dates, vec![date("2024-01-10"), date("2024-01-12")]);
    }

    #[tokio::test]
    async fn test_repeated_saves_upsert_one_record() {
        let (remote, daily_counts, _) = memory::remote_stores();
        let repository =
            Repository::with_stores(Some(remote), Arc::new(memory::MemoryDailyCounts::default()));
        let service = HistoryService::new(repository);

        for (are, thumbs) in [(1, 2), (3, 4), (0, 0)] {
            tokio_test::assert_ok!(service.save_daily_counts(date("2024-01-10"), are, thumbs).await);
        }

        assert_eq!(daily_counts.row_count(), 1);
        assert_eq!(
            daily_counts.get(date("2024-01-10")),
            Some(DailyCount::new(date("2024-01-10"), 0, 0))
        );
    }

    #[tokio::test]
    async fn test_local_only_mode_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let backend = crate::backend::Backend::local_only();
        let local = crate::config::LocalConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let service = HistoryService::new(Repository::new(&backend, &local));

        service.save_daily_counts(date("2024-02-01"), 3, 1).await.unwrap();
        service.save_daily_counts(date("2024-02-01"), 0, 7).await.unwrap();

        assert_eq!(
            service.load_history().await,
            vec![DailyCount::new(date("2024-02-01"), 0, 7)]
        );
    }
}
