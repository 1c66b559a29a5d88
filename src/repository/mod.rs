//! Repository layer for the daily counts and save requests collections
//!
//! Each collection is reached through a trait so the services work the same
//! over the remote tables and the local storage slot.

pub mod daily_counts;
pub mod local_history;
pub mod local_storage;
pub mod save_requests;

#[cfg(test)]
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    backend::Backend,
    config::LocalConfig,
    error::AppResult,
    models::{DailyCount, RequestStatus, SaveRequest},
};

/// Daily counts collection, keyed by date
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DailyCountsStore: Send + Sync {
    /// All records, ascending by date
    async fn list(&self) -> AppResult<Vec<DailyCount>>;

    /// Insert or overwrite the record for `count.date`
    async fn upsert(&self, count: &DailyCount) -> AppResult<()>;
}

/// Save requests collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaveRequestsStore: Send + Sync {
    /// Insert a new pending request; the store assigns id and timestamp
    async fn insert(&self, payload: &DailyCount) -> AppResult<SaveRequest>;

    /// Pending requests, newest first
    async fn list_pending(&self) -> AppResult<Vec<SaveRequest>>;

    async fn get(&self, id: Uuid) -> AppResult<Option<SaveRequest>>;

    /// Move a pending request to `status`. Returns false when the request
    /// does not exist or is no longer pending.
    async fn resolve(&self, id: Uuid, status: RequestStatus) -> AppResult<bool>;
}

/// Stores backed by the shared remote database
#[derive(Clone)]
pub struct RemoteStores {
    pub daily_counts: Arc<dyn DailyCountsStore>,
    pub save_requests: Arc<dyn SaveRequestsStore>,
}

/// Main repository struct holding the selected stores
#[derive(Clone)]
pub struct Repository {
    pub remote: Option<RemoteStores>,
    pub local_history: Arc<dyn DailyCountsStore>,
}

impl Repository {
    /// Create the repository for the backend chosen at startup
    pub fn new(backend: &Backend, local: &LocalConfig) -> Self {
        let remote = backend.pool().map(|pool| RemoteStores {
            daily_counts: Arc::new(daily_counts::DailyCountsRepository::new(pool.clone())),
            save_requests: Arc::new(save_requests::SaveRequestsRepository::new(pool.clone())),
        });

        let local_history = Arc::new(local_history::LocalHistoryRepository::new(
            local_storage::LocalStorage::new(local.data_dir.clone()),
            local.history_key.clone(),
        ));

        Self {
            remote,
            local_history,
        }
    }

    /// Assemble a repository from explicit stores
    pub fn with_stores(
        remote: Option<RemoteStores>,
        local_history: Arc<dyn DailyCountsStore>,
    ) -> Self {
        Self {
            remote,
            local_history,
        }
    }

    pub fn has_remote_backend(&self) -> bool {
        self.remote.is_some()
    }
}
