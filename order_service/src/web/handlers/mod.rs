// order_service/src/web/handlers/mod.rs

pub mod order_handlers;
