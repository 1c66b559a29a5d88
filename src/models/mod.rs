//! Data models for CC6 Tracker

pub mod daily_count;
pub mod save_request;
pub mod session;

pub use daily_count::{DailyCount, HistoryQuery, SaveDailyCount, TallyInput};
pub use save_request::{RequestStatus, SaveRequest};
pub use session::{Session, SessionClaims};
