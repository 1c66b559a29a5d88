//! CC6 Tracker
//!
//! Classroom engagement tally server: daily "are you with me?" and
//! "thumbs up" totals, kept in a shared database when one is configured and
//! in local storage otherwise, with admin review of non-admin submissions.

use std::sync::Arc;

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
