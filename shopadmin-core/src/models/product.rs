use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a missing product image.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Product category.
///
/// The console offers a fixed set of categories when creating products.
/// Values the remote catalog uses outside that set are preserved verbatim so
/// foreign data still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Fashion,
    HomeAndKitchen,
    Sports,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeAndKitchen => "Home & Kitchen",
            Category::Sports => "Sports",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Electronics" => Category::Electronics,
            "Fashion" => Category::Fashion,
            "Home & Kitchen" => Category::HomeAndKitchen,
            "Sports" => Category::Sports,
            _ => Category::Other(name),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate rating reported by the catalog. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Creates a product with a fresh id derived from the current timestamp.
    ///
    /// The catalog service echoes caller-assigned ids on create, so new
    /// products pick one up front the way the console always has.
    pub fn new(title: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id: Utc::now().timestamp_millis() as u64,
            title: title.into(),
            price,
            category,
            image: None,
            description: None,
            rating: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Image URL for display, falling back to the placeholder.
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}
