// order_flow/src/error.rs
use thiserror::Error;

/// Errors raised by the engine itself rather than by step handlers.
///
/// Every error type used with [`crate::Flow`] must be constructible from this
/// so that framework failures surface through the same channel as handler
/// failures.
#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Handler missing for required step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Internal flow error: {0}")]
  Internal(String),
}
