use std::sync::Arc;

use roster::{ContactStore, MemoryStore};
use tracing::info;

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ContactStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }

    pub async fn load() -> anyhow::Result<Arc<Self>> {
        let config = Config::load();

        let store = if config.seed {
            MemoryStore::seeded()?
        } else {
            MemoryStore::new()
        };

        let store: Arc<dyn ContactStore> = Arc::new(store);
        info!("Loaded contacts: {}", store.list(None).await.len());

        Ok(Self::new(config, store))
    }
}
