//! In-memory remote stores for tests

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{DailyCount, RequestStatus, SaveRequest},
};

use super::{DailyCountsStore, RemoteStores, SaveRequestsStore};

#[derive(Default)]
pub struct MemoryDailyCounts {
    rows: Mutex<BTreeMap<NaiveDate, DailyCount>>,
}

impl MemoryDailyCounts {
    pub fn get(&self, date: NaiveDate) -> Option<DailyCount> {
        self.rows.lock().unwrap().get(&date).cloned()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl DailyCountsStore for MemoryDailyCounts {
    async fn list(&self) -> AppResult<Vec<DailyCount>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn upsert(&self, count: &DailyCount) -> AppResult<()> {
        self.rows.lock().unwrap().insert(count.date, count.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySaveRequests {
    rows: Mutex<Vec<SaveRequest>>,
}

impl MemorySaveRequests {
    pub fn status_of(&self, id: Uuid) -> Option<RequestStatus> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.status)
    }
}

#[async_trait]
impl SaveRequestsStore for MemorySaveRequests {
    async fn insert(&self, payload: &DailyCount) -> AppResult<SaveRequest> {
        let mut rows = self.rows.lock().unwrap();
        // Strictly increasing timestamps keep ordering deterministic
        let created_at = Utc::now() + Duration::milliseconds(rows.len() as i64);
        let request = SaveRequest {
            id: Uuid::new_v4(),
            class_date: payload.date,
            are_you_with_me: payload.are_you_with_me,
            thumbs_up: payload.thumbs_up,
            status: RequestStatus::Pending,
            created_at,
        };
        rows.push(request.clone());
        Ok(request)
    }

    async fn list_pending(&self) -> AppResult<Vec<SaveRequest>> {
        let mut pending: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .cloned()
            .collect();
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pending)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<SaveRequest>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn resolve(&self, id: Uuid, status: RequestStatus) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.id == id && r.status == RequestStatus::Pending)
        {
            Some(row) => {
                row.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Remote stores plus handles for inspecting them
pub fn remote_stores() -> (RemoteStores, Arc<MemoryDailyCounts>, Arc<MemorySaveRequests>) {
    let daily_counts = Arc::new(MemoryDailyCounts::default());
    let save_requests = Arc::new(MemorySaveRequests::default());
    let stores = RemoteStores {
        daily_counts: daily_counts.clone(),
        save_requests: save_requests.clone(),
    };
    (stores, daily_counts, save_requests)
}
