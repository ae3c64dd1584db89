//! Cake Repository

use async_trait::async_trait;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Cake, CakeCreate, CakeSize, CakeUpdate};
use shared::{CatalogEntity, CatalogStore};

use super::{RepoError, RepoResult};
use crate::db::seed::placeholder_image;
use crate::db::store::{Collection, CollectionStore};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_image, validate_labels,
    validate_optional_text, validate_price, validate_required_text,
};

const DEFAULT_FLAVOURS: [&str; 3] = ["Vanilla", "Chocolate", "Strawberry"];
const DEFAULT_COLORS: [&str; 3] = ["White", "Pink", "Brown"];
const DEFAULT_DELIVERY_TIME: &str = "24 hours";

/// Category filter that matches every cake
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone)]
pub struct CakeRepository {
    store: CollectionStore,
    max_image_bytes: usize,
}

impl CakeRepository {
    pub fn new(store: CollectionStore, max_image_bytes: usize) -> Self {
        Self {
            store,
            max_image_bytes,
        }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Cake>> {
        Ok(self.store.get_all(Collection::Cakes)?)
    }

    /// Cakes tagged with `category`; `all` matches every cake
    pub fn find_by_category(&self, category: &str) -> RepoResult<Vec<Cake>> {
        let category = category.trim();
        if category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return self.find_all();
        }
        Ok(self
            .store
            .find_where(Collection::Cakes, |c: &Cake| c.category == category)?)
    }

    pub fn find_by_id(&self, id: i64) -> RepoResult<Option<Cake>> {
        Ok(self.store.find_by_id(Collection::Cakes, id)?)
    }

    pub fn create(&self, data: CakeCreate) -> RepoResult<Cake> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.category, "category", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&data.delivery_time, "deliveryTime", MAX_SHORT_TEXT_LEN)?;
        let sizes = normalize_sizes(data.sizes)?;
        validate_labels(&data.flavours, "flavours")?;
        validate_labels(&data.colors, "colors")?;

        let image = match data.image.filter(|i| !i.trim().is_empty()) {
            Some(image) => {
                validate_image(&image, "image", self.max_image_bytes)?;
                image
            }
            None => placeholder_image("Cake"),
        };
        let base_price = match data.base_price {
            Some(price) => {
                validate_price(price, "basePrice")?;
                price
            }
            None => sizes[0].price,
        };

        let cake = Cake {
            id: 0,
            name: data.name.trim().to_string(),
            category: data.category.trim().to_string(),
            description: data.description.unwrap_or_default(),
            image,
            base_price,
            sizes,
            flavours: or_defaults(data.flavours, &DEFAULT_FLAVOURS),
            colors: or_defaults(data.colors, &DEFAULT_COLORS),
            delivery_time: data
                .delivery_time
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DELIVERY_TIME.to_string()),
            is_available: data.is_available.unwrap_or(true),
        };

        let created: Cake = self.store.add(Collection::Cakes, &cake)?;
        tracing::info!(cake_id = created.id, name = %created.name, "Cake created");
        Ok(created)
    }

    /// In-place update keyed by the stable id
    pub fn update(&self, id: i64, mut data: CakeUpdate) -> RepoResult<Cake> {
        if let Some(name) = data.name.take() {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            data.name = Some(name.trim().to_string());
        }
        if let Some(category) = data.category.take() {
            validate_required_text(&category, "category", MAX_NAME_LEN)?;
            data.category = Some(category.trim().to_string());
        }
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&data.delivery_time, "deliveryTime", MAX_SHORT_TEXT_LEN)?;
        if let Some(delivery_time) = data.delivery_time.take() {
            data.delivery_time = Some(match delivery_time.trim() {
                "" => DEFAULT_DELIVERY_TIME.to_string(),
                _ => delivery_time,
            });
        }
        if let Some(image) = data.image.take() {
            if image.trim().is_empty() {
                data.image = Some(placeholder_image("Cake"));
            } else {
                validate_image(&image, "image", self.max_image_bytes)?;
                data.image = Some(image);
            }
        }
        if let Some(price) = data.base_price {
            validate_price(price, "basePrice")?;
        }
        if let Some(sizes) = data.sizes.take() {
            let sizes = normalize_sizes(sizes)?;
            if data.base_price.is_none() {
                data.base_price = Some(sizes[0].price);
            }
            data.sizes = Some(sizes);
        }
        if let Some(flavours) = data.flavours.take() {
            validate_labels(&flavours, "flavours")?;
            data.flavours = Some(or_defaults(flavours, &DEFAULT_FLAVOURS));
        }
        if let Some(colors) = data.colors.take() {
            validate_labels(&colors, "colors")?;
            data.colors = Some(or_defaults(colors, &DEFAULT_COLORS));
        }

        let updated: Option<Cake> = self.store.update(Collection::Cakes, id, &data)?;
        let updated = updated.ok_or_else(|| not_found(id))?;
        tracing::info!(cake_id = id, "Cake updated");
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> RepoResult<bool> {
        let removed = self.store.remove(Collection::Cakes, id)?;
        if removed {
            tracing::info!(cake_id = id, "Cake deleted");
        }
        Ok(removed)
    }
}

fn not_found(id: i64) -> RepoError {
    RepoError::NotFound(ErrorCode::CakeNotFound, format!("Cake {id} not found"))
}

/// Drop blank rows, then require at least one valid size
fn normalize_sizes(sizes: Vec<CakeSize>) -> RepoResult<Vec<CakeSize>> {
    let sizes: Vec<CakeSize> = sizes
        .into_iter()
        .filter(|s| !s.weight.trim().is_empty())
        .map(|s| CakeSize::new(s.weight.trim(), s.price))
        .collect();
    if sizes.is_empty() {
        return Err(AppError::new(ErrorCode::CakeSizeRequired)
            .with_detail("field", "sizes")
            .into());
    }
    for (i, size) in sizes.iter().enumerate() {
        validate_required_text(&size.weight, "sizes.weight", MAX_SHORT_TEXT_LEN)?;
        validate_price(size.price, "sizes.price")?;
        if sizes[..i].iter().any(|s| s.weight == size.weight) {
            return Err(AppError::validation(format!("Duplicate size '{}'", size.weight))
                .with_detail("field", "sizes")
                .into());
        }
    }
    Ok(sizes)
}

fn or_defaults(values: Vec<String>, defaults: &[&str]) -> Vec<String> {
    let values: Vec<String> = values.into_iter().map(|v| v.trim().to_string()).collect();
    if values.is_empty() {
        defaults.iter().map(|d| d.to_string()).collect()
    } else {
        values
    }
}

#[async_trait]
impl CatalogStore<Cake> for CakeRepository {
    async fn list(&self) -> AppResult<Vec<Cake>> {
        Ok(self.find_all()?)
    }

    async fn get(&self, id: i64) -> AppResult<Cake> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::from(not_found(id)))
    }

    async fn create(&self, data: CakeCreate) -> AppResult<Cake> {
        Ok(CakeRepository::create(self, data)?)
    }

    async fn update(&self, id: i64, data: CakeUpdate) -> AppResult<Cake> {
        Ok(CakeRepository::update(self, id, data)?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if CakeRepository::delete(self, id)? {
            Ok(())
        } else {
            Err(AppError::with_message(
                Cake::NOT_FOUND,
                format!("{} {id} not found", Cake::LABEL),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::DEFAULT_MAX_IMAGE_BYTES;

    fn repo() -> CakeRepository {
        CakeRepository::new(
            CollectionStore::open_in_memory().unwrap(),
            DEFAULT_MAX_IMAGE_BYTES,
        )
    }

    fn create_payload() -> CakeCreate {
        CakeCreate {
            name: "Lemon Drizzle".into(),
            category: "birthday".into(),
            sizes: vec![CakeSize::new("0.5kg", 500.0), CakeSize::new("1kg", 900.0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let repo = repo();
        let cake = repo.create(create_payload()).unwrap();
        assert!(cake.id > 0);
        assert_eq!(cake.base_price, 500.0);
        assert_eq!(cake.flavours, vec!["Vanilla", "Chocolate", "Strawberry"]);
        assert_eq!(cake.colors, vec!["White", "Pink", "Brown"]);
        assert_eq!(cake.delivery_time, "24 hours");
        assert_eq!(cake.image, placeholder_image("Cake"));
        assert!(cake.is_available);
        assert_eq!(repo.find_by_id(cake.id).unwrap(), Some(cake));
    }

    #[test]
    fn test_create_requires_name_category_and_size() {
        let repo = repo();

        let mut payload = create_payload();
        payload.name = " ".into();
        let err: AppError = repo.create(payload).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let mut payload = create_payload();
        payload.category = String::new();
        let err: AppError = repo.create(payload).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let mut payload = create_payload();
        payload.sizes = vec![CakeSize::new("  ", 100.0)];
        let err: AppError = repo.create(payload).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::CakeSizeRequired);

        let mut payload = create_payload();
        payload.sizes = vec![CakeSize::new("1kg", -5.0)];
        let err: AppError = repo.create(payload).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidPrice);

        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_unbounded_image() {
        let repo = CakeRepository::new(CollectionStore::open_in_memory().unwrap(), 16);
        let mut payload = create_payload();
        payload.image = Some(format!("data:image/png;base64,{}", "A".repeat(400)));
        let err: AppError = repo.create(payload).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ImageTooLarge);
    }

    #[test]
    fn test_update_in_place_keeps_id() {
        let repo = repo();
        let cake = repo.create(create_payload()).unwrap();

        let updated = repo
            .update(
                cake.id,
                CakeUpdate {
                    name: Some("Lemon Drizzle Deluxe".into()),
                    sizes: Some(vec![CakeSize::new("2kg", 1600.0)]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, cake.id);
        assert_eq!(updated.name, "Lemon Drizzle Deluxe");
        assert_eq!(updated.base_price, 1600.0);
        assert_eq!(updated.category, "birthday");
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_normalizes_like_create() {
        let repo = repo();
        let cake = repo.create(create_payload()).unwrap();

        let updated = repo
            .update(
                cake.id,
                CakeUpdate {
                    name: Some("  Lemon Slice ".into()),
                    category: Some(" wedding ".into()),
                    image: Some("  ".into()),
                    delivery_time: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Lemon Slice");
        assert_eq!(updated.category, "wedding");
        assert_eq!(updated.image, placeholder_image("Cake"));
        assert_eq!(updated.delivery_time, "24 hours");
        assert_eq!(repo.find_by_category("wedding").unwrap(), vec![updated]);
    }

    #[test]
    fn test_update_missing_cake() {
        let repo = repo();
        let err: AppError = repo
            .update(99, CakeUpdate::default())
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::CakeNotFound);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_find_by_category_with_wildcard() {
        let repo = repo();
        repo.create(create_payload()).unwrap();
        let mut wedding = create_payload();
        wedding.category = "wedding".into();
        repo.create(wedding).unwrap();

        assert_eq!(repo.find_by_category("wedding").unwrap().len(), 1);
        assert_eq!(repo.find_by_category("all").unwrap().len(), 2);
        assert!(repo.find_by_category("kids").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_store_delete() {
        let repo = repo();
        let cake = repo.create(create_payload()).unwrap();
        let store: &dyn CatalogStore<Cake> = &repo;

        store.delete(cake.id).await.unwrap();
        let err = store.delete(cake.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CakeNotFound);
        assert!(store.list().await.unwrap().is_empty());
    }
}
