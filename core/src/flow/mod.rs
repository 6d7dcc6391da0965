// order_flow/src/flow/mod.rs

//! The `Flow<TData, Err>` type: its definition, handler registration and execution.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Flow;
