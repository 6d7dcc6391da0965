// order_service/src/pipelines/mod.rs

//! Flow definitions for the order service and the context data they run on.

pub mod contexts;
pub mod place_order_pipeline;
