use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::orders::models::{NewOrderDetail, OrderDetail};
use crate::modules::products::models::Product;

/// Storage for order detail lines. Every returned line has its product loaded.
#[async_trait]
pub trait OrderDetailRepository: Repository<OrderDetail, NewOrderDetail, i64> {
    /// All lines of one order, ordered by line ID
    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<OrderDetail>>;
}

/// MySQL-backed order detail repository
#[derive(Clone)]
pub struct MySqlOrderDetailRepository {
    pool: MySqlPool,
}

impl MySqlOrderDetailRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const SELECT_DETAIL: &str = r#"
    SELECT
        d.id, d.order_id, d.product_id, d.quantity,
        p.product_name, p.image_url, p.price, p.created_at AS product_created_at
    FROM order_details d
    INNER JOIN products p ON p.id = d.product_id
"#;

#[async_trait]
impl Repository<OrderDetail, NewOrderDetail, i64> for MySqlOrderDetailRepository {
    async fn create(&self, detail: &NewOrderDetail) -> Result<OrderDetail> {
        let result = sqlx::query(
            r#"
            INSERT INTO order_details (order_id, product_id, quantity)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(detail.order_id)
        .bind(detail.product_id)
        .bind(detail.quantity)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Order detail {} missing after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderDetail>> {
        let row = sqlx::query_as::<_, DetailRow>(&format!("{} WHERE d.id = ?", SELECT_DETAIL))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(DetailRow::into_detail))
    }

    async fn find_all(&self) -> Result<Vec<OrderDetail>> {
        let rows = sqlx::query_as::<_, DetailRow>(&format!("{} ORDER BY d.id", SELECT_DETAIL))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DetailRow::into_detail).collect())
    }
}

#[async_trait]
impl OrderDetailRepository for MySqlOrderDetailRepository {
    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<OrderDetail>> {
        let rows = sqlx::query_as::<_, DetailRow>(&format!(
            "{} WHERE d.order_id = ? ORDER BY d.id",
            SELECT_DETAIL
        ))
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DetailRow::into_detail).collect())
    }
}

#[derive(Debug, FromRow)]
struct DetailRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i32,
    product_name: String,
    image_url: Option<String>,
    price: Decimal,
    product_created_at: DateTime<Utc>,
}

impl DetailRow {
    fn into_detail(self) -> OrderDetail {
        OrderDetail {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            product: Product {
                id: self.product_id,
                product_name: self.product_name,
                image_url: self.image_url,
                price: self.price,
                created_at: self.product_created_at,
            },
            quantity: self.quantity,
        }
    }
}
