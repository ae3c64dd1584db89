//! HTTP catalog adapter
//!
//! Implements [`CatalogStore`] over `/api/<Resource>`, so code written
//! against the trait runs unchanged against a remote server.

use std::marker::PhantomData;

use async_trait::async_trait;
use shared::models::Cake;
use shared::{AppResult, CatalogEntity, CatalogStore};

use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct HttpCatalog<E> {
    http: HttpClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: CatalogEntity> HttpCatalog<E> {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            _entity: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("api/{}", E::RESOURCE)
    }

    fn item_path(id: i64) -> String {
        format!("api/{}/{id}", E::RESOURCE)
    }
}

impl HttpCatalog<Cake> {
    /// Cakes tagged with `category`; `all` lists every cake
    pub async fn list_by_category(&self, category: &str) -> ClientResult<Vec<Cake>> {
        self.http
            .get_with_query(&Self::collection_path(), &[("category", category)])
            .await
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogStore<E> for HttpCatalog<E> {
    async fn list(&self) -> AppResult<Vec<E>> {
        Ok(self.http.get(&Self::collection_path()).await?)
    }

    async fn get(&self, id: i64) -> AppResult<E> {
        Ok(self.http.get(&Self::item_path(id)).await?)
    }

    async fn create(&self, data: E::Create) -> AppResult<E> {
        Ok(self.http.post(&Self::collection_path(), &data).await?)
    }

    async fn update(&self, id: i64, data: E::Update) -> AppResult<E> {
        Ok(self.http.put(&Self::item_path(id), &data).await?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        Ok(self.http.delete(&Self::item_path(id)).await?)
    }
}
