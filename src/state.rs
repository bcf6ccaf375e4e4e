use crate::config::AppConfig;
use crate::store::{memory::MemoryStore, postgres::PgStore, PlanStore};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlanStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store = match config.database_url.as_deref() {
            Some(url) => {
                let pg = PgStore::connect(url, config.db_max_connections).await?;
                if let Err(e) = pg.migrate().await {
                    warn!(error = %e, "migration failed; continuing");
                }
                Arc::new(pg) as Arc<dyn PlanStore>
            }
            None => {
                warn!("DATABASE_URL not set; using in-memory store, data will not survive a restart");
                Arc::new(MemoryStore::new()) as Arc<dyn PlanStore>
            }
        };

        Ok(Self::from_parts(store, Arc::new(config)))
    }

    pub fn from_parts(store: Arc<dyn PlanStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// State backed by an empty in-memory store and default config.
    #[cfg(test)]
    pub fn fake() -> Self {
        let config = AppConfig::from_lookup(|_| None).expect("default config is valid");
        Self::from_parts(Arc::new(MemoryStore::new()), Arc::new(config))
    }
}
