// order_flow/src/core/step.rs

use super::{FlowContext, StepControl};
use std::future::Future;
use std::pin::Pin;

/// A boxed async step handler.
///
/// Receives its own clone of the run's [`FlowContext`] and resolves to a
/// [`StepControl`] or the flow's error type.
pub type StepHandler<TData, Err> = Box<
  dyn Fn(FlowContext<TData>) -> Pin<Box<dyn Future<Output = Result<StepControl, Err>> + Send>>
    + Send
    + Sync,
>;

/// A named step and whether the flow may run without it succeeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
  pub name: String,
  pub optional: bool,
}
