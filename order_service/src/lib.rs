// order_service/src/lib.rs

//! Order placement service: `POST /order` validates the request, checks the
//! user, stores the order and notifies the user service. The steps run as an
//! `order_flow::Flow`; the notification step is optional, so a failed
//! notification never undoes a stored order.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod validation;
pub mod web;
