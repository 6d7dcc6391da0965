// order_service/src/models/mod.rs

//! Records read from and written to the data store, plus the outbound notification payload.

pub mod notification;
pub mod order;
pub mod user;

pub use notification::Notification;
pub use order::{NewOrder, Order};
pub use user::User;
