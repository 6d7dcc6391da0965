// order_flow/src/lib.rs

//! order_flow: a small asynchronous, named-step workflow engine.
//!
//! A [`Flow`] is an ordered list of named steps. Each step carries `before`,
//! `on` and `after` handlers that operate on a shared [`FlowContext`]:
//!  - Handlers are async and may suspend on I/O.
//!  - A handler returns [`StepControl::Stop`] to end the run early.
//!  - Required steps must have at least one handler.
//!  - Optional steps may have none, and a failing optional step is logged
//!    and passed over instead of aborting the run.
//!
//! The order service builds one flow per request type at startup and runs it
//! once per incoming request against a fresh context.

pub mod core;
pub mod error;
pub mod flow;

pub use crate::core::context_data::FlowContext;
pub use crate::core::control::{FlowOutcome, StepControl};
pub use crate::core::step::{StepHandler, StepSpec};

pub use crate::flow::definition::Flow;

pub use crate::error::FlowError;
