//! Default catalog
//!
//! Populates every collection that has never been written. Collections that
//! already exist are left alone, even if empty, so running the seeder twice
//! is the same as running it once.

use shared::models::{Addon, Cake, CakeSize, Category, Order};

use super::store::{Collection, CollectionStore, StoreResult};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com";

/// Placeholder image used when a cake is created without one
pub fn placeholder_image(text: &str) -> String {
    format!("{PLACEHOLDER_IMAGE}/300x300?text={}", text.replace(' ', "+"))
}

/// Seed absent collections; returns the collections that were populated
pub fn seed_defaults(store: &CollectionStore) -> StoreResult<Vec<Collection>> {
    let mut seeded = Vec::new();

    if store.insert_if_absent(Collection::Cakes, &default_cakes())? {
        seeded.push(Collection::Cakes);
    }
    if store.insert_if_absent(Collection::Addons, &default_addons())? {
        seeded.push(Collection::Addons);
    }
    if store.insert_if_absent(Collection::Categories, &default_categories())? {
        seeded.push(Collection::Categories);
    }
    if store.insert_if_absent::<Order>(Collection::Orders, &[])? {
        seeded.push(Collection::Orders);
    }

    if seeded.is_empty() {
        tracing::debug!("All collections present, nothing to seed");
    } else {
        tracing::info!(collections = ?seeded, "Seeded default data");
    }
    Ok(seeded)
}

#[allow(clippy::too_many_arguments)]
fn cake(
    id: i64,
    name: &str,
    category: &str,
    image_text: &str,
    description: &str,
    sizes: &[(&str, f64)],
    flavours: &[&str],
    colors: &[&str],
    delivery_time: &str,
) -> Cake {
    let sizes: Vec<CakeSize> = sizes
        .iter()
        .map(|(weight, price)| CakeSize::new(*weight, *price))
        .collect();
    Cake {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        image: placeholder_image(image_text),
        base_price: sizes.first().map(|s| s.price).unwrap_or_default(),
        sizes,
        flavours: flavours.iter().map(|f| f.to_string()).collect(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        delivery_time: delivery_time.to_string(),
        is_available: true,
    }
}

pub fn default_cakes() -> Vec<Cake> {
    vec![
        cake(
            1,
            "Classic Wedding Elegance",
            "wedding",
            "Wedding Cake",
            "Elegant multi-tier wedding cake with beautiful decorations",
            &[("0.5kg", 5000.0), ("1kg", 8000.0), ("2kg", 15000.0), ("4kg", 28000.0)],
            &["Vanilla", "Chocolate", "Strawberry", "Red Velvet"],
            &["White", "Pink", "Gold", "Ivory"],
            "48 hours",
        ),
        cake(
            2,
            "Birthday Celebration",
            "birthday",
            "Birthday Cake",
            "Colorful birthday cake perfect for celebrations",
            &[("0.5kg", 800.0), ("1kg", 1200.0), ("2kg", 2000.0), ("4kg", 3500.0)],
            &["Chocolate", "Vanilla", "Butter-scotch", "Strawberry"],
            &["Rainbow", "Blue", "Pink", "Red"],
            "24 hours",
        ),
        cake(
            3,
            "Chocolate Brownie Delight",
            "brownies",
            "Brownies",
            "Rich and fudgy chocolate brownies",
            &[("0.5kg", 500.0), ("1kg", 900.0), ("2kg", 1700.0)],
            &["Chocolate", "Walnut Chocolate", "Triple Chocolate"],
            &["Brown"],
            "12 hours",
        ),
        cake(
            4,
            "Cupcake Collection",
            "cupcakes",
            "Cupcakes",
            "Assorted cupcakes with various toppings",
            &[("0.5kg", 600.0), ("1kg", 1000.0), ("2kg", 1800.0)],
            &["Vanilla", "Chocolate", "Red Velvet", "Lemon"],
            &["Mixed", "Pink", "Blue", "White"],
            "12 hours",
        ),
        cake(
            5,
            "Custom Designer Cake",
            "custom",
            "Custom Cake",
            "Fully customizable cake based on your requirements",
            &[("1kg", 2000.0), ("2kg", 3500.0), ("4kg", 6500.0)],
            &["Chocolate", "Vanilla", "Strawberry", "Black Forest", "Pineapple"],
            &["Any Color"],
            "48 hours",
        ),
        cake(
            6,
            "Anniversary Romance",
            "anniversary",
            "Anniversary Cake",
            "Romantic cake perfect for anniversaries",
            &[("0.5kg", 1500.0), ("1kg", 2200.0), ("2kg", 4000.0)],
            &["Red Velvet", "Chocolate", "Vanilla", "Strawberry"],
            &["Red", "Pink", "Gold", "White"],
            "24 hours",
        ),
        cake(
            7,
            "Kids Cartoon Special",
            "kids",
            "Kids Cake",
            "Fun cartoon-themed cakes for kids",
            &[("0.5kg", 1200.0), ("1kg", 1800.0), ("2kg", 3200.0)],
            &["Chocolate", "Vanilla", "Butter-scotch", "Strawberry"],
            &["Colorful", "Blue", "Pink", "Yellow"],
            "24 hours",
        ),
        cake(
            8,
            "Premium Gift Box",
            "giftbox",
            "Gift Box",
            "Beautiful gift box with assorted treats",
            &[("0.5kg", 800.0), ("1kg", 1400.0), ("2kg", 2600.0)],
            &["Mixed", "Chocolate", "Vanilla"],
            &["Gift Wrapped"],
            "12 hours",
        ),
    ]
}

pub fn default_addons() -> Vec<Addon> {
    [
        (1, "Icing Design", 200.0, "decoration"),
        (2, "Chocolate Syrup", 100.0, "topping"),
        (3, "Extra Toppings", 150.0, "topping"),
        (4, "Ribbon Decoration", 80.0, "decoration"),
        (5, "Fresh Flowers", 300.0, "decoration"),
        (6, "Custom Message", 50.0, "message"),
        (7, "Photo Print Top", 250.0, "photo"),
        (8, "Candle Pack", 100.0, "accessory"),
    ]
    .into_iter()
    .map(|(id, name, price, kind)| Addon {
        id,
        name: name.to_string(),
        price,
        description: None,
        kind: Some(kind.to_string()),
        is_available: true,
    })
    .collect()
}

pub fn default_categories() -> Vec<Category> {
    [
        (1, "wedding", "Wedding", "Cakes suitable for weddings and large celebrations"),
        (2, "birthday", "Birthday", "Birthday cakes and themed designs"),
        (3, "custom", "Custom", "Fully customizable designer cakes"),
    ]
    .into_iter()
    .map(|(id, name, image_text, description)| Category {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        image: Some(format!("{PLACEHOLDER_IMAGE}/200x120?text={image_text}")),
    })
    .collect()
}
