// order_service/tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use order_service::errors::{NotifyError, StoreError};
use order_service::models::{NewOrder, Notification, Order, User};
use order_service::services::{Notifier, OrderStore, UserStore};
use order_service::state::{AppState, Services};

pub const VALID_DETAILS: &str = r#"{"items":[{"productId":1,"quantity":2}],"totalAmount":99.99}"#;

#[derive(Debug, Clone)]
pub enum StoreFailure {
  Rejected(&'static str),
  Backend,
}

impl StoreFailure {
  fn to_error(&self) -> StoreError {
    match self {
      StoreFailure::Rejected(code) => StoreError::Rejected {
        code: code.to_string(),
        message: "rejected by test store".to_string(),
      },
      StoreFailure::Backend => StoreError::Backend(sqlx::Error::PoolTimedOut),
    }
  }
}

pub struct InMemoryUserStore {
  ids: HashSet<i64>,
  failure: Option<StoreFailure>,
}

impl InMemoryUserStore {
  pub fn with_users(ids: &[i64]) -> Self {
    Self {
      ids: ids.iter().copied().collect(),
      failure: None,
    }
  }

  pub fn failing(failure: StoreFailure) -> Self {
    Self {
      ids: HashSet::new(),
      failure: Some(failure),
    }
  }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
  async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, StoreError> {
    if let Some(failure) = &self.failure {
      return Err(failure.to_error());
    }
    Ok(self.ids.contains(&user_id).then_some(User { id: user_id }))
  }
}

#[derive(Default)]
struct OrderTable {
  next_id: i64,
  rows: HashMap<i64, Order>,
}

#[derive(Default)]
pub struct InMemoryOrderStore {
  table: Mutex<OrderTable>,
  failure: Option<StoreFailure>,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing(failure: StoreFailure) -> Self {
    Self {
      table: Mutex::default(),
      failure: Some(failure),
    }
  }

  pub fn orders(&self) -> Vec<Order> {
    let table = self.table.lock().unwrap();
    let mut rows: Vec<Order> = table.rows.values().cloned().collect();
    rows.sort_by_key(|o| o.order_id);
    rows
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
    if let Some(failure) = &self.failure {
      return Err(failure.to_error());
    }

    let mut table = self.table.lock().unwrap();
    table.next_id += 1;
    let created = Order {
      order_id: table.next_id,
      user_id: order.user_id,
      order_details: order.order_details,
      created_at: Utc::now(),
    };
    table.rows.insert(created.order_id, created.clone());
    Ok(created)
  }

  async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, StoreError> {
    Ok(self.table.lock().unwrap().rows.get(&order_id).cloned())
  }
}

pub struct RecordingNotifier {
  fail: bool,
  sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
  pub fn succeeding() -> Self {
    Self {
      fail: false,
      sent: Mutex::default(),
    }
  }

  pub fn failing() -> Self {
    Self {
      fail: true,
      sent: Mutex::default(),
    }
  }

  /// Every notification attempted, including refused ones.
  pub fn sent(&self) -> Vec<Notification> {
    self.sent.lock().unwrap().clone()
  }
}

#[async_trait]
impl Notifier for RecordingNotifier {
  async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
    self.sent.lock().unwrap().push(notification.clone());
    if self.fail {
      Err(NotifyError::Status(503))
    } else {
      Ok(())
    }
  }
}

pub fn app_state(users: Arc<dyn UserStore>, orders: Arc<dyn OrderStore>, notifier: Arc<dyn Notifier>) -> AppState {
  AppState::new(Services { users, orders, notifier })
}
