// order_service/src/models/user.rs

use serde::Serialize;
use sqlx::FromRow;

// Owned by the user service; this crate only checks that a row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
  pub id: i64,
}
