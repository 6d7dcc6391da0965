// order_service/src/services/mod.rs

//! Collaborators the order flow talks to: the user and order stores and the
//! notification client. Each is a trait so handlers receive injected handles.

pub mod notifier;
pub mod order_store;
pub mod user_store;

pub use notifier::{HttpNotifier, Notifier};
pub use order_store::{OrderStore, PgOrderStore};
pub use user_store::{PgUserStore, UserStore};
