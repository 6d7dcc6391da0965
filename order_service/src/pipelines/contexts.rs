// order_service/src/pipelines/contexts.rs

//! Data structs the flows operate on. Handlers receive them wrapped in `order_flow::FlowContext`.

use crate::models::Order;
use crate::state::Services;
use crate::validation::PlaceOrderRequest;
use serde_json::Value;

/// Where a single placement request got to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStage {
  Received,
  Validated,
  UserChecked,
  OrderCreated,
  Notified,
  NotifyFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
  NotAttempted,
  Delivered,
  Failed(String),
}

/// Per-request state of the `place_order` flow.
#[derive(Clone)]
pub struct PlaceOrderCtxData {
  pub services: Services,
  /// Raw body; `Value::Null` when it was not JSON at all.
  pub body: Value,
  // Filled in by the steps:
  pub request: Option<PlaceOrderRequest>,
  pub order: Option<Order>,
  pub notification: NotificationStatus,
  pub stage: PlacementStage,
}

impl PlaceOrderCtxData {
  pub fn new(services: Services, body: Value) -> Self {
    Self {
      services,
      body,
      request: None,
      order: None,
      notification: NotificationStatus::NotAttempted,
      stage: PlacementStage::Received,
    }
  }
}
