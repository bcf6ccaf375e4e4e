use anyhow::Context;
use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// When unset the service keeps everything in memory.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = get("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse::<u32>().context("DB_MAX_CONNECTIONS must be an integer")?,
            None => 10,
        };
        let port = match get("APP_PORT") {
            Some(v) => v.parse::<u16>().context("APP_PORT must be a port number")?,
            None => 3001,
        };
        let cors_origin = get("CORS_ORIGIN")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .parse::<HeaderValue>()
            .context("CORS_ORIGIN is not a valid header value")?;

        Ok(Self {
            database_url,
            db_max_connections,
            host: get("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            cors_origin,
        })
    }
}
