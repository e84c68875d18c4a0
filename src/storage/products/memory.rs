//! In-process product store. Backs the HTTP tests; has no durability.

use super::{ProductStore, StoreError};
use crate::domain::product::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryProductStore {
    // Insertion order.
    records: RwLock<Vec<Product>>,
    unavailable: AtomicBool,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail, the way an unreachable database would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        self.check_available()?;
        let record = Product::from_new(product, Utc::now());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.check_available()?;
        let mut out: Vec<Product> = self.records.read().await.iter().rev().cloned().collect();
        // Stable sort keeps newest-inserted first among equal timestamps.
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        self.check_available()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|p| p.id == id).map(|p| {
            p.apply(patch, Utc::now());
            p.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|p| p.id != id);
        Ok(records.len() != before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
