use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::products::models::{NewProduct, Product};

/// Storage for products
pub trait ProductRepository: Repository<Product, NewProduct, i64> {}

/// MySQL-backed product repository
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product, NewProduct, i64> for MySqlProductRepository {
    async fn create(&self, product: &NewProduct) -> Result<Product> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (product_name, image_url, price)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&product.product_name)
        .bind(&product.image_url)
        .bind(product.price)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        tracing::debug!(product_id = id, "Inserted product");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Product {} missing after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, image_url, price, created_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, image_url, price, created_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

impl ProductRepository for MySqlProductRepository {}
