// order_service/src/state.rs
use crate::errors::AppError;
use crate::pipelines::contexts::PlaceOrderCtxData;
use crate::pipelines::place_order_pipeline;
use crate::services::{Notifier, OrderStore, UserStore};
use order_flow::Flow;
use std::sync::Arc;

/// Collaborator handles injected into every flow run.
#[derive(Clone)]
pub struct Services {
  pub users: Arc<dyn UserStore>,
  pub orders: Arc<dyn OrderStore>,
  pub notifier: Arc<dyn Notifier>,
}

#[derive(Clone)]
pub struct AppState {
  pub services: Services,
  pub place_order_flow: Arc<Flow<PlaceOrderCtxData, AppError>>,
}

impl AppState {
  /// Builds the flows once; handlers only clone `Arc`s afterwards.
  pub fn new(services: Services) -> Self {
    Self {
      services,
      place_order_flow: Arc::new(place_order_pipeline::build_place_order_flow()),
    }
  }
}
