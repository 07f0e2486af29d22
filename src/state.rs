use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tracing::warn;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let mut options = PgConnectOptions::from_str(&config.database_url)
            .context("parse DATABASE_URL")?;
        if config.accept_invalid_certs {
            // `Require` encrypts the connection but skips certificate checks.
            warn!("DATABASE_ACCEPT_INVALID_CERTS is set; store TLS certificates will not be verified");
            options = options.ssl_mode(PgSslMode::Require);
        }

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .context("connect to database")?;

        Ok(Self { db, config })
    }
}
