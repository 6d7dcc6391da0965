// tests/common/mod.rs
#![allow(dead_code)]

use order_flow::{FlowContext, FlowError, StepControl, StepHandler};
use tracing::Level;

#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub trail: Vec<String>,
  pub stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  // FlowError is not PartialEq; keep its Debug rendering for assertions.
  #[error("Flow framework error: {0}")]
  Flow(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<FlowError> for TestError {
  fn from(fe: FlowError) -> Self {
    TestError::Flow(format!("{:?}", fe))
  }
}

/// Appends `fragment` to the message and records `label` in the trail.
/// Stops the run when `label` matches `stop_at`.
pub fn recording_handler(label: &'static str, fragment: &'static str) -> StepHandler<TestContext, TestError> {
  Box::new(move |ctx: FlowContext<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.message.push_str(fragment);
      guard.trail.push(label.to_string());
      tracing::debug!(target: "test_handlers", %label, counter = guard.counter, "handler executed");
      if guard.stop_at.as_deref() == Some(label) {
        return Ok::<_, TestError>(StepControl::Stop);
      }
      Ok(StepControl::Continue)
    })
  })
}

pub fn failing_handler(label: &'static str, error_message: &'static str) -> StepHandler<TestContext, TestError> {
  Box::new(move |ctx: FlowContext<TestContext>| {
    Box::pin(async move {
      ctx.write().trail.push(label.to_string());
      tracing::warn!(target: "test_handlers", %label, "failing with: '{}'", error_message);
      Err(TestError::Handler(error_message.to_string()))
    })
  })
}

use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
