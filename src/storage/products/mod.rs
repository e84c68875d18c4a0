//! Persistence seam for product records.
//!
//! Handlers only see [`ProductStore`]; the server binary wires in [`PgProductStore`], tests
//! usually use [`MemoryProductStore`].

use crate::domain::product::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists a validated candidate, assigning identifier and timestamps.
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    /// Applies `patch` and refreshes `updated_at`. `None` if no record matches.
    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError>;

    /// Hard delete. Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
