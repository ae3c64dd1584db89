//! Generic catalog handlers
//!
//! Handlers only see [`CatalogStore`]; [`CatalogSource`] tells them which
//! store backs a given entity.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use shared::models::{Addon, Cake, Category};
use shared::{CatalogEntity, CatalogStore};

use crate::api::{ApiJson, ApiPath};
use crate::core::ServerState;
use crate::utils::AppResult;

/// Resolves the catalog store for `E`
pub trait CatalogSource<E: CatalogEntity> {
    fn catalog(&self) -> Box<dyn CatalogStore<E>>;
}

impl CatalogSource<Cake> for ServerState {
    fn catalog(&self) -> Box<dyn CatalogStore<Cake>> {
        Box::new(self.cakes())
    }
}

impl CatalogSource<Category> for ServerState {
    fn catalog(&self) -> Box<dyn CatalogStore<Category>> {
        Box::new(self.categories())
    }
}

impl CatalogSource<Addon> for ServerState {
    fn catalog(&self) -> Box<dyn CatalogStore<Addon>> {
        Box::new(self.addons())
    }
}

/// `GET/POST /api/<Resource>` and `GET/PUT/DELETE /api/<Resource>/{id}`
pub fn routes<E>() -> Router<ServerState>
where
    E: CatalogEntity,
    ServerState: CatalogSource<E>,
{
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/{id}", get(get_by_id::<E>).put(update::<E>).delete(delete::<E>))
}

/// GET /api/<Resource>
pub async fn list<E>(State(state): State<ServerState>) -> AppResult<Json<Vec<E>>>
where
    E: CatalogEntity,
    ServerState: CatalogSource<E>,
{
    Ok(Json(state.catalog().list().await?))
}

/// GET /api/<Resource>/{id}
pub async fn get_by_id<E>(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<E>>
where
    E: CatalogEntity,
    ServerState: CatalogSource<E>,
{
    Ok(Json(state.catalog().get(id).await?))
}

/// POST /api/<Resource>
pub async fn create<E>(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<E::Create>,
) -> AppResult<Json<E>>
where
    E: CatalogEntity,
    ServerState: CatalogSource<E>,
{
    Ok(Json(state.catalog().create(payload).await?))
}

/// PUT /api/<Resource>/{id}
pub async fn update<E>(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<E::Update>,
) -> AppResult<Json<E>>
where
    E: CatalogEntity,
    ServerState: CatalogSource<E>,
{
    Ok(Json(state.catalog().update(id, payload).await?))
}

/// DELETE /api/<Resource>/{id}
pub async fn delete<E>(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode>
where
    E: CatalogEntity,
    ServerState: CatalogSource<E>,
{
    state.catalog().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
