// order_service/src/services/user_store.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::errors::StoreError;
use crate::models::User;

/// Read-only view of the externally owned users table.
#[async_trait]
pub trait UserStore: Send + Sync {
  async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
  pool: PgPool,
}

impl PgUserStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserStore for PgUserStore {
  #[instrument(name = "store::find_user", skip(self))]
  async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
    let user: Option<User> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    debug!(found = user.is_some(), "User lookup finished.");
    Ok(user)
  }
}
