use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Skip TLS certificate verification for the store connection.
    /// Off unless DATABASE_ACCEPT_INVALID_CERTS=true is set explicitly.
    pub accept_invalid_certs: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL is not set"))?;
        let accept_invalid_certs = std::env::var("DATABASE_ACCEPT_INVALID_CERTS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        Ok(Self {
            database_url,
            accept_invalid_certs,
        })
    }
}
