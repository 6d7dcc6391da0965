// order_service/src/services/order_store.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::errors::StoreError;
use crate::models::{NewOrder, Order};

#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Persists a new order. The returned record carries the assigned id and timestamp.
  async fn create(&self, order: NewOrder) -> Result<Order, StoreError>;

  async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, StoreError>;
}

#[derive(Clone)]
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  #[instrument(name = "store::create_order", skip(self, order), fields(user_id = order.user_id))]
  async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
    let created: Order = sqlx::query_as(
      "INSERT INTO orders (user_id, order_details) VALUES ($1, $2) \
       RETURNING order_id, user_id, order_details, created_at",
    )
    .bind(order.user_id)
    .bind(&order.order_details)
    .fetch_one(&self.pool)
    .await?;
    debug!(order_id = created.order_id, "Order row inserted.");
    Ok(created)
  }

  #[instrument(name = "store::find_order", skip(self))]
  async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, StoreError> {
    let order: Option<Order> = sqlx::query_as("SELECT order_id, user_id, order_details, created_at FROM orders WHERE order_id = $1")
      .bind(order_id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(order)
  }
}
