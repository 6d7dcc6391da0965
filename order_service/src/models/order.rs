// order_service/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A placed order. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Order {
  pub order_id: i64,
  pub user_id: i64,
  /// The `order_details` JSON string exactly as it passed validation.
  pub order_details: String,
  pub created_at: DateTime<Utc>,
}

/// Insert payload; the store assigns `order_id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
  pub user_id: i64,
  pub order_details: String,
}
