// order_flow/src/core/context_data.rs
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Per-run state shared by every handler of a flow.
///
/// Cloning is cheap and yields another handle to the same data, so the caller
/// keeps one clone to read results once [`crate::Flow::run`] returns.
///
/// Guards are blocking and must be dropped before any `.await`.
#[derive(Debug)]
pub struct FlowContext<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> FlowContext<T> {
  pub fn new(data: T) -> Self {
    FlowContext(Arc::new(RwLock::new(data)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }
}

impl<T: Send + Sync + 'static> Clone for FlowContext<T> {
  fn clone(&self) -> Self {
    FlowContext(Arc::clone(&self.0))
  }
}
