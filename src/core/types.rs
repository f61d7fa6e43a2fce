// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A unique identifier for a product in the catalog.
pub type ProductId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub business_name: String,
}

impl Producer {
    /// The name shown to shoppers; falls back to the business name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.business_name
        } else {
            &self.name
        }
    }
}

/// One catalog entry as returned by the products endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub producer: Producer,
    /// RFC 3339 timestamp; sorts correctly as a string.
    #[serde(default)]
    pub created_at: String,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// The text a query is matched against: name, description, category
    /// names and producer name, space separated.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.name.as_str()];
        if let Some(description) = &self.description {
            parts.push(description);
        }
        parts.extend(self.categories.iter().map(|c| c.name.as_str()));
        parts.push(self.producer.display_name());
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Everything the shopper can narrow the catalog by. `None` and empty
/// strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilters {
    pub search: String,
    /// Category name or slug, compared after normalization.
    pub category: Option<String>,
    pub producer_id: Option<u64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub organic: Option<bool>,
    pub sort: SortField,
    pub direction: SortDirection,
}

/// Filter dropdown contents derived from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub producers: Vec<(u64, String)>,
}
