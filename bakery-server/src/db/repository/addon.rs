//! Add-on Repository

use async_trait::async_trait;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Addon, AddonCreate, AddonUpdate};
use shared::{CatalogEntity, CatalogStore};

use super::{RepoError, RepoResult};
use crate::db::store::{Collection, CollectionStore};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_price,
    validate_required_text,
};

#[derive(Clone)]
pub struct AddonRepository {
    store: CollectionStore,
}

impl AddonRepository {
    pub fn new(store: CollectionStore) -> Self {
        Self { store }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Addon>> {
        Ok(self.store.get_all(Collection::Addons)?)
    }

    /// Add-ons customers can currently select
    pub fn find_available(&self) -> RepoResult<Vec<Addon>> {
        Ok(self
            .store
            .find_where(Collection::Addons, |a: &Addon| a.is_available)?)
    }

    pub fn find_by_id(&self, id: i64) -> RepoResult<Option<Addon>> {
        Ok(self.store.find_by_id(Collection::Addons, id)?)
    }

    pub fn create(&self, data: AddonCreate) -> RepoResult<Addon> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_price(data.price, "price")?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&data.kind, "type", MAX_SHORT_TEXT_LEN)?;

        let addon = Addon {
            id: 0,
            name: data.name.trim().to_string(),
            price: data.price,
            description: data.description.filter(|d| !d.trim().is_empty()),
            kind: data.kind.filter(|k| !k.trim().is_empty()),
            is_available: data.is_available.unwrap_or(true),
        };
        let created: Addon = self.store.add(Collection::Addons, &addon)?;
        tracing::info!(addon_id = created.id, name = %created.name, "Add-on created");
        Ok(created)
    }

    pub fn update(&self, id: i64, data: AddonUpdate) -> RepoResult<Addon> {
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(price) = data.price {
            validate_price(price, "price")?;
        }
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&data.kind, "type", MAX_SHORT_TEXT_LEN)?;

        let updated: Option<Addon> = self.store.update(Collection::Addons, id, &data)?;
        let updated = updated.ok_or_else(|| not_found(id))?;
        tracing::info!(addon_id = id, "Add-on updated");
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> RepoResult<bool> {
        let removed = self.store.remove(Collection::Addons, id)?;
        if removed {
            tracing::info!(addon_id = id, "Add-on deleted");
        }
        Ok(removed)
    }
}

fn not_found(id: i64) -> RepoError {
    RepoError::NotFound(ErrorCode::AddonNotFound, format!("Add-on {id} not found"))
}

#[async_trait]
impl CatalogStore<Addon> for AddonRepository {
    async fn list(&self) -> AppResult<Vec<Addon>> {
        Ok(self.find_all()?)
    }

    async fn get(&self, id: i64) -> AppResult<Addon> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::from(not_found(id)))
    }

    async fn create(&self, data: AddonCreate) -> AppResult<Addon> {
        Ok(AddonRepository::create(self, data)?)
    }

    async fn update(&self, id: i64, data: AddonUpdate) -> AppResult<Addon> {
        Ok(AddonRepository::update(self, id, data)?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if AddonRepository::delete(self, id)? {
            Ok(())
        } else {
            Err(AppError::with_message(
                Addon::NOT_FOUND,
                format!("{} {id} not found", Addon::LABEL),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> AddonRepository {
        AddonRepository::new(CollectionStore::open_in_memory().unwrap())
    }

    #[test]
    fn test_create_defaults_available() {
        let repo = repo();
        let addon = repo
            .create(AddonCreate {
                name: "Sparklers".into(),
                price: 120.0,
                kind: Some("accessory".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(addon.is_available);
        assert_eq!(repo.find_available().unwrap(), vec![addon]);
    }

    #[test]
    fn test_price_must_be_non_negative() {
        let repo = repo();
        let err: AppError = repo
            .create(AddonCreate {
                name: "Gold Leaf".into(),
                price: -1.0,
                ..Default::default()
            })
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
    }

    #[test]
    fn test_unavailable_addons_are_hidden_from_selection() {
        let repo = repo();
        let addon = repo
            .create(AddonCreate {
                name: "Candle Pack".into(),
                price: 100.0,
                ..Default::default()
            })
            .unwrap();
        let updated = repo
            .update(
                addon.id,
                AddonUpdate {
                    is_available: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!updated.is_available);
        assert_eq!(updated.price, 100.0);
        assert!(repo.find_available().unwrap().is_empty());
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }
}
