//! Cake Model

use serde::{Deserialize, Serialize};

/// One purchasable weight of a cake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CakeSize {
    /// Display label, e.g. "0.5kg"
    pub weight: String,
    pub price: f64,
}

impl CakeSize {
    pub fn new(weight: impl Into<String>, price: f64) -> Self {
        Self {
            weight: weight.into(),
            price,
        }
    }
}

/// Cake entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    pub id: i64,
    pub name: String,
    /// Category name tag (not a foreign key)
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// http(s) URL or embedded `data:image/...` URL
    #[serde(alias = "imageUrl")]
    pub image: String,
    pub base_price: f64,
    /// Ordered, never empty
    pub sizes: Vec<CakeSize>,
    pub flavours: Vec<String>,
    pub colors: Vec<String>,
    pub delivery_time: String,
    #[serde(default = "super::default_true")]
    pub is_available: bool,
}

impl Cake {
    /// Look up a size by its weight label
    pub fn size(&self, weight: &str) -> Option<&CakeSize> {
        self.sizes.iter().find(|s| s.weight == weight)
    }

    pub fn offers_flavour(&self, flavour: &str) -> bool {
        self.flavours.iter().any(|f| f == flavour)
    }

    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

/// Create cake payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeCreate {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    #[serde(alias = "imageUrl")]
    pub image: Option<String>,
    /// Defaults to the first size's price
    pub base_price: Option<f64>,
    #[serde(default)]
    pub sizes: Vec<CakeSize>,
    #[serde(default)]
    pub flavours: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub delivery_time: Option<String>,
    pub is_available: Option<bool>,
}

/// Update cake payload
///
/// Absent fields are left untouched (shallow merge).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<CakeSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavours: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birthday() -> Cake {
        Cake {
            id: 2,
            name: "Birthday Celebration".into(),
            category: "birthday".into(),
            description: String::new(),
            image: "https://example.com/b.png".into(),
            base_price: 800.0,
            sizes: vec![CakeSize::new("0.5kg", 800.0), CakeSize::new("1kg", 1200.0)],
            flavours: vec!["Chocolate".into(), "Vanilla".into()],
            colors: vec!["Blue".into()],
            delivery_time: "24 hours".into(),
            is_available: true,
        }
    }

    #[test]
    fn test_option_lookups() {
        let cake = birthday();
        assert_eq!(cake.size("1kg").map(|s| s.price), Some(1200.0));
        assert!(cake.size("3kg").is_none());
        assert!(cake.offers_flavour("Vanilla"));
        assert!(!cake.offers_flavour("Lemon"));
        assert!(cake.offers_color("Blue"));
        assert!(!cake.offers_color("Gold"));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(birthday()).unwrap();
        assert_eq!(json["basePrice"], 800.0);
        assert_eq!(json["deliveryTime"], "24 hours");
        assert_eq!(json["isAvailable"], true);
        assert_eq!(json["sizes"][0]["weight"], "0.5kg");
    }

    #[test]
    fn test_create_accepts_image_url_alias() {
        let json = r#"{"name":"X","category":"custom","imageUrl":"https://x/y.png",
                       "sizes":[{"weight":"1kg","price":2000}]}"#;
        let create: CakeCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.image.as_deref(), Some("https://x/y.png"));
        assert!(create.flavours.is_empty());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = CakeUpdate {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Renamed" }));
    }
}
