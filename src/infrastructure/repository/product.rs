use anyhow::{bail, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::domain::product::Product;
use crate::domain::Repository;

// ============================================================================
// Product Repository
// ============================================================================

type ProductRow = (String, String, f64);

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn create(&self, entity: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(entity.id())
            .bind(entity.name())
            .bind(entity.price())
            .execute(&self.pool)
            .await?;

        tracing::info!(product_id = %entity.id(), "Product persisted");
        Ok(())
    }

    async fn update(&self, entity: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(entity.name())
            .bind(entity.price())
            .bind(entity.id())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            bail!("Product not found: {}", entity.id());
        }

        tracing::info!(product_id = %entity.id(), "Product updated");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product> {
        let row: Option<ProductRow> = sqlx::query_as("SELECT id, name, price FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some((product_id, name, price)) = row else {
            bail!("Product not found: {}", id);
        };

        tracing::debug!(product_id = %product_id, "Loaded product");
        Ok(Product::new(product_id, name, price)?)
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as("SELECT id, name, price FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = rows.len(), "Loaded products");
        rows.into_iter()
            .map(|(id, name, price)| Product::new(id, name, price).map_err(anyhow::Error::from))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
