//! Category Repository

use async_trait::async_trait;
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::{CatalogEntity, CatalogStore};

use super::{RepoError, RepoResult};
use crate::db::store::{Collection, CollectionStore};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_image, validate_optional_text, validate_required_text,
};

#[derive(Clone)]
pub struct CategoryRepository {
    store: CollectionStore,
    max_image_bytes: usize,
}

impl CategoryRepository {
    pub fn new(store: CollectionStore, max_image_bytes: usize) -> Self {
        Self {
            store,
            max_image_bytes,
        }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Category>> {
        Ok(self.store.get_all(Collection::Categories)?)
    }

    pub fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        Ok(self.store.find_by_id(Collection::Categories, id)?)
    }

    /// Find category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let name = name.trim().to_lowercase();
        let found = self
            .store
            .find_where(Collection::Categories, |c: &Category| {
                c.name.to_lowercase() == name
            })?;
        Ok(found.into_iter().next())
    }

    pub fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        let image = data.image.filter(|i| !i.trim().is_empty());
        if let Some(image) = &image {
            validate_image(image, "image", self.max_image_bytes)?;
        }

        let category = Category {
            id: 0,
            name: data.name.trim().to_string(),
            description: data.description.filter(|d| !d.trim().is_empty()),
            image,
        };
        let created: Category = self
            .store
            .add_guarded(Collection::Categories, &category, |other| {
                ensure_name_free(other, &category.name)
            })?;
        tracing::info!(category_id = created.id, name = %created.name, "Category created");
        Ok(created)
    }

    pub fn update(&self, id: i64, mut data: CategoryUpdate) -> RepoResult<Category> {
        if let Some(name) = data.name.take() {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            data.name = Some(name.trim().to_string());
        }
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        if let Some(image) = &data.image {
            validate_image(image, "image", self.max_image_bytes)?;
        }

        let name = data.name.as_deref();
        let updated: Option<Category> = self
            .store
            .update_guarded(Collection::Categories, id, &data, |other| match name {
                Some(name) => ensure_name_free(other, name),
                None => Ok(()),
            })?;
        let updated = updated.ok_or_else(|| not_found(id))?;
        tracing::info!(category_id = id, "Category updated");
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> RepoResult<bool> {
        let removed = self.store.remove(Collection::Categories, id)?;
        if removed {
            tracing::info!(category_id = id, "Category deleted");
        }
        Ok(removed)
    }
}

/// Case-insensitive name check against one stored category record
fn ensure_name_free(record: &Value, name: &str) -> RepoResult<()> {
    let taken = record
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|existing| existing.to_lowercase() == name.to_lowercase());
    if taken { Err(duplicate(name)) } else { Ok(()) }
}

fn duplicate(name: &str) -> RepoError {
    RepoError::Duplicate(
        ErrorCode::CategoryNameExists,
        format!("Category '{name}' already exists"),
    )
}

fn not_found(id: i64) -> RepoError {
    RepoError::NotFound(ErrorCode::CategoryNotFound, format!("Category {id} not found"))
}

#[async_trait]
impl CatalogStore<Category> for CategoryRepository {
    async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.find_all()?)
    }

    async fn get(&self, id: i64) -> AppResult<Category> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::from(not_found(id)))
    }

    async fn create(&self, data: CategoryCreate) -> AppResult<Category> {
        Ok(CategoryRepository::create(self, data)?)
    }

    async fn update(&self, id: i64, data: CategoryUpdate) -> AppResult<Category> {
        Ok(CategoryRepository::update(self, id, data)?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if CategoryRepository::delete(self, id)? {
            Ok(())
        } else {
            Err(AppError::with_message(
                Category::NOT_FOUND,
                format!("{} {id} not found", Category::LABEL),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_defaults;
    use crate::utils::validation::DEFAULT_MAX_IMAGE_BYTES;

    fn repo() -> CategoryRepository {
        let store = CollectionStore::open_in_memory().unwrap();
        seed_defaults(&store).unwrap();
        CategoryRepository::new(store, DEFAULT_MAX_IMAGE_BYTES)
    }

    fn payload(name: &str) -> CategoryCreate {
        CategoryCreate {
            name: name.into(),
            description: Some("Small bites".into()),
            image: None,
        }
    }

    #[test]
    fn test_create_and_find() {
        let repo = repo();
        let created = repo.create(payload("Cupcakes")).unwrap();
        assert_eq!(repo.find_by_id(created.id).unwrap(), Some(created.clone()));
        assert_eq!(repo.find_by_name("cupcakes").unwrap(), Some(created));
        assert_eq!(repo.find_all().unwrap().len(), 4);
    }

    #[test]
    fn test_duplicate_name_is_conflict() {
        let repo = repo();
        let err: AppError = repo.create(payload("Wedding")).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::CategoryNameExists);
        assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
        assert_eq!(repo.find_all().unwrap().len(), 3);
    }

    #[test]
    fn test_rename_checks_other_categories_only() {
        let repo = repo();
        let wedding = repo.find_by_name("wedding").unwrap().unwrap();

        // renaming to its own name (different case) is fine
        let renamed = repo
            .update(
                wedding.id,
                CategoryUpdate {
                    name: Some("Wedding".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "Wedding");

        let err: AppError = repo
            .update(
                wedding.id,
                CategoryUpdate {
                    name: Some("birthday".into()),
                    ..Default::default()
                },
            )
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::CategoryNameExists);
    }

    #[test]
    fn test_concurrent_creates_keep_names_unique() {
        use std::sync::Barrier;

        let repo = repo();
        let writers = 8;
        let barrier = Barrier::new(writers);
        let created = std::thread::scope(|s| {
            let handles: Vec<_> = (0..writers)
                .map(|_| {
                    let repo = repo.clone();
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        repo.create(payload("Vegan")).is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().is_ok_and(|ok| ok))
                .filter(|&ok| ok)
                .count()
        });

        assert_eq!(created, 1);
        let named: Vec<_> = repo
            .find_all()
            .unwrap()
            .into_iter()
            .filter(|c| c.name.eq_ignore_ascii_case("vegan"))
            .collect();
        assert_eq!(named.len(), 1);
    }

    #[test]
    fn test_name_required() {
        let repo = repo();
        let err: AppError = repo.create(payload("")).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_delete() {
        let repo = repo();
        let custom = repo.find_by_name("custom").unwrap().unwrap();
        assert!(repo.delete(custom.id).unwrap());
        assert!(!repo.delete(custom.id).unwrap());
        assert!(repo.find_by_id(custom.id).unwrap().is_none());
    }
}
