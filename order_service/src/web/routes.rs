// order_service/src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::web::handlers::order_handlers;

// Liveness only; does not touch the database or the user service.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Called from `main.rs` and from the integration tests to mount every route.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/order")
        .route("", web::post().to(order_handlers::place_order_handler))
        .route("/{order_id}", web::get().to(order_handlers::get_order_handler)),
    );
}
