// order_service/src/models/notification.rs

use serde::Serialize;

/// Body POSTed to the user notification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
  pub user_id: i64,
  pub message: String,
}

impl Notification {
  pub fn order_placed(user_id: i64, order_id: i64) -> Self {
    Self {
      user_id,
      message: format!("Your order #{} has been placed.", order_id),
    }
  }
}
