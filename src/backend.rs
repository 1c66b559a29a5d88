//! Remote backend selection
//!
//! The remote store is optional. It is constructed once at startup from the
//! configured connection URL and access key; when either is missing, or the
//! pool cannot be built from them, the server runs in local-only mode.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};

use crate::config::RemoteConfig;

/// Handle on the optional remote store, owned by the entry point
#[derive(Clone, Default)]
pub struct Backend {
    pool: Option<Pool<Postgres>>,
}

impl Backend {
    /// Build the remote pool if credentials are configured.
    ///
    /// The pool connects lazily, so an unreachable database does not fail
    /// here; individual operations degrade or report errors instead.
    pub fn from_config(config: &RemoteConfig) -> Self {
        let Some((url, key)) = config.credentials() else {
            tracing::info!("No remote backend configured, using local storage");
            return Self::local_only();
        };

        let options = match PgConnectOptions::from_str(url) {
            Ok(options) => options.password(key),
            Err(e) => {
                tracing::warn!("Remote backend init failed, using local storage: {}", e);
                return Self::local_only();
            }
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .min_connections(config.min_connections)
            .connect_lazy_with(options);

        tracing::info!("Remote backend configured");
        Self { pool: Some(pool) }
    }

    pub fn local_only() -> Self {
        Self { pool: None }
    }

    pub fn has_remote_backend(&self) -> bool {
        self.pool.is_some()
    }

    pub fn pool(&self) -> Option<&Pool<Postgres>> {
        self.pool.as_ref()
    }

    /// Apply schema migrations on the remote store. Failures are logged and
    /// leave the selected mode unchanged.
    pub async fn migrate(&self) {
        let Some(pool) = &self.pool else {
            return;
        };

        match sqlx::migrate!("./migrations").run(pool).await {
            Ok(()) => tracing::info!("Database migrations completed"),
            Err(e) => tracing::warn!("Database migrations failed: {}", e),
        }
    }

    pub fn mode(&self) -> &'static str {
        if self.has_remote_backend() {
            "remote"
        } else {
            "local"
        }
    }
}
