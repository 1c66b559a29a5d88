//! Daily counts kept in a local storage slot
//!
//! The slot holds one JSON array of `{date, are_you_with_me, thumbs_up}`
//! objects. Reading never fails: a missing, unreadable or malformed slot is
//! treated as an empty history.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::DailyCount,
};

use super::{local_storage::LocalStorage, DailyCountsStore};

/// Keys that may carry the date, in lookup order. `week_date` is what older
/// exports used.
const DATE_KEYS: [&str; 3] = ["date", "class_date", "week_date"];

#[derive(Clone)]
pub struct LocalHistoryRepository {
    storage: LocalStorage,
    key: String,
    write_lock: Arc<Mutex<()>>,
}

impl LocalHistoryRepository {
    pub fn new(storage: LocalStorage, key: String) -> Self {
        Self {
            storage,
            key,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_all(&self) -> Vec<DailyCount> {
        let raw = match self.storage.get_item(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Local history unreadable, treating as empty: {}", e);
                return Vec::new();
            }
        };

        let mut history = parse_history(&raw);
        history.sort_by_key(|c| c.date);
        history
    }
}

#[async_trait]
impl DailyCountsStore for LocalHistoryRepository {
    async fn list(&self) -> AppResult<Vec<DailyCount>> {
        Ok(self.read_all().await)
    }

    async fn upsert(&self, count: &DailyCount) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut history = self.read_all().await;
        history.retain(|c| c.date != count.date);
        history.push(count.clone());
        history.sort_by_key(|c| c.date);

        let raw = serde_json::to_string(&history)
            .map_err(|e| AppError::Internal(format!("Failed to encode history: {}", e)))?;
        self.storage.set_item(&self.key, &raw).await?;

        tracing::debug!(date = %count.date, entries = history.len(), "Local history saved");
        Ok(())
    }
}

/// Decode a slot value, keeping every entry that has a usable date
fn parse_history(raw: &str) -> Vec<DailyCount> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries.iter().filter_map(parse_entry).collect(),
        Ok(_) => {
            tracing::warn!("Local history is not a list, treating as empty");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("Local history is not valid JSON, treating as empty: {}", e);
            Vec::new()
        }
    }
}

fn parse_entry(entry: &Value) -> Option<DailyCount> {
    let date = DATE_KEYS
        .iter()
        .filter_map(|key| entry.get(*key).and_then(Value::as_str))
        .find_map(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())?;

    Some(DailyCount::new(
        date,
        parse_count(entry.get("are_you_with_me")),
        parse_count(entry.get("thumbs_up")),
    ))
}

/// Numbers and numeric strings are accepted; anything else counts as zero
fn parse_count(value: Option<&Value>) -> i32 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() && n > 0.0 {
        n.min(i32::MAX as f64) as i32
    } else {
        0
    }
}
