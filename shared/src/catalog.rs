//! Catalog capability interface
//!
//! Every catalog collection (cakes, categories, add-ons) exposes the same
//! five operations. The server implements [`CatalogStore`] over its local
//! store; `bakery-client` implements it over HTTP. Callers never know which
//! one they hold.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AppResult, ErrorCode};
use crate::models::{Addon, AddonCreate, AddonUpdate};
use crate::models::{Cake, CakeCreate, CakeUpdate};
use crate::models::{Category, CategoryCreate, CategoryUpdate};

/// A catalog record with its create/update payloads
pub trait CatalogEntity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Create: Serialize + DeserializeOwned + Send + Sync + 'static;
    type Update: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// REST resource name, e.g. `Cakes` in `/api/Cakes`
    const RESOURCE: &'static str;
    /// Human label used in error messages
    const LABEL: &'static str;
    /// Error code returned when a lookup by id misses
    const NOT_FOUND: ErrorCode;

    fn id(&self) -> i64;
}

/// CRUD over one catalog collection
#[async_trait]
pub trait CatalogStore<E: CatalogEntity>: Send + Sync {
    async fn list(&self) -> AppResult<Vec<E>>;

    async fn get(&self, id: i64) -> AppResult<E>;

    async fn create(&self, data: E::Create) -> AppResult<E>;

    /// Shallow merge; absent fields are left untouched
    async fn update(&self, id: i64, data: E::Update) -> AppResult<E>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

impl CatalogEntity for Cake {
    type Create = CakeCreate;
    type Update = CakeUpdate;
    const RESOURCE: &'static str = "Cakes";
    const LABEL: &'static str = "Cake";
    const NOT_FOUND: ErrorCode = ErrorCode::CakeNotFound;

    fn id(&self) -> i64 {
        self.id
    }
}

impl CatalogEntity for Category {
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    const RESOURCE: &'static str = "Categories";
    const LABEL: &'static str = "Category";
    const NOT_FOUND: ErrorCode = ErrorCode::CategoryNotFound;

    fn id(&self) -> i64 {
        self.id
    }
}

impl CatalogEntity for Addon {
    type Create = AddonCreate;
    type Update = AddonUpdate;
    const RESOURCE: &'static str = "Addons";
    const LABEL: &'static str = "Add-on";
    const NOT_FOUND: ErrorCode = ErrorCode::AddonNotFound;

    fn id(&self) -> i64 {
        self.id
    }
}
