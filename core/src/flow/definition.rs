// order_flow/src/flow/definition.rs

use crate::core::step::{StepHandler, StepSpec};
use crate::error::FlowError;
use std::collections::HashMap;

/// An ordered set of named steps over the context data `TData`.
///
/// `Err` is what handlers fail with and what [`Flow::run`] returns. It must
/// absorb [`FlowError`] so that setup problems detected at run time (a
/// required step with no handlers) come back through the same type.
pub struct Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepSpec>,

  pub(crate) before: HashMap<String, Vec<StepHandler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<StepHandler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<StepHandler<TData, Err>>>,
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a flow from `(step_name, optional)` pairs, in execution order.
  ///
  /// Panics on a duplicate step name.
  pub fn new(name: impl Into<String>, steps: &[(&str, bool)]) -> Self {
    let mut specs: Vec<StepSpec> = Vec::with_capacity(steps.len());
    for (step_name, optional) in steps {
      if specs.iter().any(|s| s.name == *step_name) {
        panic!("order_flow setup error: step '{}' declared twice.", step_name);
      }
      specs.push(StepSpec {
        name: (*step_name).to_string(),
        optional: *optional,
      });
    }

    Self {
      name: name.into(),
      steps: specs,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// `None` if the flow has no such step.
  pub fn is_optional(&self, step_name: &str) -> Option<bool> {
    self.steps.iter().find(|s| s.name == step_name).map(|s| s.optional)
  }

  /// Panics if `step_name` was never declared. A typo here is a programming
  /// error, caught the first time the flow is built.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!(
        "order_flow setup error: step '{}' not found in flow '{}'.",
        step_name, self.name
      );
    }
  }
}
