// order_flow/src/core/control.rs

//! Signals returned by handlers and the outcome of a whole run.

/// Returned by every handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
  /// Run the next handler, or the next step once this one is done.
  Continue,
  /// Halt the run. No further handlers of any step execute.
  Stop,
}

/// How a run that did not error ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  /// Every step ran (or was passed over as optional).
  Completed,
  /// A handler returned [`StepControl::Stop`].
  Stopped,
}
