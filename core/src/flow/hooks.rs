// order_flow/src/flow/hooks.rs

//! Registration of `before`, `on` and `after` handlers.
//!
//! Handlers may fail with any error convertible into the flow's `Err`, so an
//! application can keep a narrower error type per step.

use crate::core::context_data::FlowContext;
use crate::core::control::StepControl;
use crate::core::step::StepHandler;
use crate::error::FlowError;
use crate::flow::definition::Flow;
use std::collections::HashMap;
use std::future::Future;
use tracing::{event, Level};

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Registers a handler that runs before the step's `on` handlers.
  pub fn before_step<F, HandlerErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    push_handler(&mut self.before, step_name, handler_fn);
    event!(Level::DEBUG, flow = %self.name, %step_name, "'before' handler registered.");
  }

  /// Registers one of the step's main handlers.
  pub fn on_step<F, HandlerErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    push_handler(&mut self.on, step_name, handler_fn);
    event!(Level::DEBUG, flow = %self.name, %step_name, "'on' handler registered.");
  }

  /// Registers a handler that runs once the step's `on` handlers are done.
  pub fn after_step<F, HandlerErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    push_handler(&mut self.after, step_name, handler_fn);
    event!(Level::DEBUG, flow = %self.name, %step_name, "'after' handler registered.");
  }
}

fn push_handler<TData, Err, F, HandlerErr>(
  phase: &mut HashMap<String, Vec<StepHandler<TData, Err>>>,
  step_name: &str,
  handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
) where
  TData: 'static + Send + Sync,
  Err: Send + 'static,
  F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
  HandlerErr: Into<Err> + Send + Sync + 'static,
{
  let boxed: StepHandler<TData, Err> = Box::new(move |ctx| {
    let fut = handler_fn(ctx);
    Box::pin(async move { fut.await.map_err(Into::into) })
  });
  phase.entry(step_name.to_string()).or_default().push(boxed);
}
