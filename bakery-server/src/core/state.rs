//! Shared server state
//!
//! Cloned into every handler. All fields are cheap handles.

use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::repository::{AddonRepository, CakeRepository, CategoryRepository};
use crate::db::seed::seed_defaults;
use crate::db::CollectionStore;
use crate::orders::OrdersManager;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: CollectionStore,
    pub orders: OrdersManager,
}

impl ServerState {
    pub fn new(config: Config, store: CollectionStore) -> Self {
        Self {
            config: Arc::new(config),
            orders: OrdersManager::new(store.clone()),
            store,
        }
    }

    /// Open the database under the work dir and seed it if configured
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let db_path = config.db_path();
        let store = CollectionStore::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Database opened");

        let state = Self::new(config.clone(), store);
        state.seed()?;
        Ok(state)
    }

    /// In-memory database, for tests and demos
    pub fn in_memory(config: &Config) -> Result<Self> {
        let state = Self::new(config.clone(), CollectionStore::open_in_memory()?);
        state.seed()?;
        Ok(state)
    }

    fn seed(&self) -> Result<()> {
        if self.config.seed_defaults {
            seed_defaults(&self.store)?;
        }
        Ok(())
    }

    pub fn cakes(&self) -> CakeRepository {
        CakeRepository::new(self.store.clone(), self.config.max_image_bytes)
    }

    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.store.clone(), self.config.max_image_bytes)
    }

    pub fn addons(&self) -> AddonRepository {
        AddonRepository::new(self.store.clone())
    }
}
