//! PostgreSQL-backed product store.

use super::{ProductStore, StoreError};
use crate::domain::product::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, category, stock, created_at, updated_at";

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Connects to the database and makes sure the `products` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Self::with_pool(pool).await
    }

    pub async fn with_pool(pool: PgPool) -> Result<Self, StoreError> {
        // `seq` only orders records that share a creation timestamp.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id UUID PRIMARY KEY,
                seq BIGSERIAL NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                category TEXT NOT NULL DEFAULT 'Uncategorized',
                stock BIGINT NOT NULL DEFAULT 0 CHECK (stock >= 0),
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS products_created_at_idx ON products (created_at DESC, seq DESC)",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO products (id, name, description, price, category, stock, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {}",
            PRODUCT_COLUMNS
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(Uuid::new_v4())
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.category)
            .bind(product.stock)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let sql = format!(
            "SELECT {} FROM products ORDER BY created_at DESC, seq DESC",
            PRODUCT_COLUMNS
        );
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category = COALESCE($5, category),
                stock = COALESCE($6, stock),
                updated_at = $7
             WHERE id = $1
             RETURNING {}",
            PRODUCT_COLUMNS
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(patch.name)
            .bind(patch.description)
            .bind(patch.price)
            .bind(patch.category)
            .bind(patch.stock)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
