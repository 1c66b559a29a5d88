//! Business logic services

pub mod approvals;
pub mod auth;
pub mod history;
pub mod stats;
pub mod tally;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub history: history::HistoryService,
    pub approvals: approvals::ApprovalService,
    pub tally: tally::TallyService,
    pub stats: stats::StatsService,
    has_remote_backend: bool,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        let has_remote_backend = repository.has_remote_backend();
        let history = history::HistoryService::new(repository.clone());
        let approvals = approvals::ApprovalService::new(repository);

        Self {
            auth: auth::AuthService::new(auth_config),
            tally: tally::TallyService::new(history.clone(), approvals.clone(), has_remote_backend),
            history,
            approvals,
            stats: stats::StatsService::new(),
            has_remote_backend,
        }
    }

    pub fn has_remote_backend(&self) -> bool {
        self.has_remote_backend
    }
}
