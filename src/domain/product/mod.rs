//! The single managed resource: a product record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod schema;

pub use schema::{validate_new, validate_patch, FieldError, ValidationErrors};

/// A persisted product, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Materializes a validated candidate with a fresh identifier and both timestamps at `now`.
    pub fn from_new(new: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            stock: new.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields present in `patch` and refreshes `updated_at`.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        self.updated_at = now;
    }
}

/// A candidate record that passed validation, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
}

/// Validated field replacements for an update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
    }
}

/// Request body shape, for the OpenAPI document only. Bodies are validated from raw JSON.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Defaults to `Uncategorized`.
    pub category: Option<String>,
    /// Defaults to 0, must not be negative.
    pub stock: Option<i64>,
}
