// order_service/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use order_flow::{FlowContext, FlowOutcome};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipelines::contexts::{NotificationStatus, PlaceOrderCtxData};
use crate::state::AppState;

pub const ORDER_NOTIFIED_MESSAGE: &str = "Order placed and user notified";
pub const ORDER_NOTIFY_FAILED_MESSAGE: &str = "Order created but notification failed";

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
  pub order_id: i64,
  pub message: &'static str,
}

/// `POST /order`. The body is taken raw so that malformed JSON reaches
/// validation instead of being rejected by an extractor.
pub async fn place_order_handler(app_state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, AppError> {
  let correlation_id = Uuid::new_v4();
  let received_at = Utc::now();
  place_order(app_state, body, correlation_id, received_at).await
}

#[instrument(
  name = "handler::place_order",
  skip_all,
  fields(correlation_id = %correlation_id, received_at = %received_at)
)]
async fn place_order(
  app_state: web::Data<AppState>,
  body: web::Bytes,
  correlation_id: Uuid,
  received_at: DateTime<Utc>,
) -> Result<HttpResponse, AppError> {
  let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
  info!(body = %body, "Order request received.");

  let ctx = FlowContext::new(PlaceOrderCtxData::new(app_state.services.clone(), body));

  let result = match app_state.place_order_flow.run(ctx.clone()).await {
    Ok(FlowOutcome::Completed) => {
      let guard = ctx.read();
      let response = match guard.order.as_ref() {
        Some(order) => {
          let message = match guard.notification {
            NotificationStatus::Delivered => ORDER_NOTIFIED_MESSAGE,
            NotificationStatus::Failed(_) | NotificationStatus::NotAttempted => ORDER_NOTIFY_FAILED_MESSAGE,
          };
          Ok(PlaceOrderResponse {
            order_id: order.order_id,
            message,
          })
        }
        None => Err(AppError::Internal("Place-order flow completed without an order.".to_string())),
      };
      response
    }
    Ok(FlowOutcome::Stopped) => {
      let stage = ctx.read().stage;
      warn!(?stage, "Place-order flow stopped before completing.");
      Err(AppError::Internal("Order placement was halted.".to_string()))
    }
    Err(app_err) => Err(app_err),
  };

  match result {
    Ok(response) => {
      info!(status = 201, order_id = response.order_id, message = response.message, "Order request answered.");
      Ok(HttpResponse::Created().json(response))
    }
    Err(err) => {
      let status = actix_web::ResponseError::status_code(&err).as_u16();
      warn!(status, error = %err, "Order request failed.");
      Err(err)
    }
  }
}

/// `GET /order/{order_id}`.
#[instrument(name = "handler::get_order", skip(app_state))]
pub async fn get_order_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  match app_state.services.orders.find_by_id(order_id).await? {
    Some(order) => Ok(HttpResponse::Ok().json(order)),
    None => Err(AppError::NotFound("Order not found".to_string())),
  }
}
