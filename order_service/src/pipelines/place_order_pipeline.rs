// order_service/src/pipelines/place_order_pipeline.rs

use crate::errors::AppError;
use crate::models::{NewOrder, Notification};
use crate::pipelines::contexts::{NotificationStatus, PlaceOrderCtxData, PlacementStage};
use crate::validation::validate_place_order;
use order_flow::{Flow, FlowContext, StepControl};
use tracing::{debug, info, warn};

pub const PLACE_ORDER_FLOW: &str = "place_order";

/// validate → user check → insert (commit point) → notify.
///
/// `notify_user` is optional: its failure is recorded in the context and the
/// run still completes, so the order is reported as created either way.
pub fn build_place_order_flow() -> Flow<PlaceOrderCtxData, AppError> {
  let mut flow = Flow::<PlaceOrderCtxData, AppError>::new(
    PLACE_ORDER_FLOW,
    &[
      ("validate_request", false),
      ("check_user_exists", false),
      ("create_order", false),
      ("notify_user", true),
    ],
  );

  flow.on_step("validate_request", validate_request);
  flow.on_step("check_user_exists", check_user_exists);
  flow.on_step("create_order", create_order);
  flow.after_step("create_order", confirm_commit);
  flow.on_step("notify_user", notify_user);

  info!(flow = PLACE_ORDER_FLOW, "Place-order flow built.");
  flow
}

async fn validate_request(ctx: FlowContext<PlaceOrderCtxData>) -> Result<StepControl, AppError> {
  let validated = validate_place_order(&ctx.read().body);
  let request = validated.map_err(|e| {
    warn!(reason = %e, "Order request failed validation.");
    e
  })?;

  debug!(user_id = request.user_id, "Order request validated.");
  let mut guard = ctx.write();
  guard.request = Some(request);
  guard.stage = PlacementStage::Validated;
  Ok(StepControl::Continue)
}

async fn check_user_exists(ctx: FlowContext<PlaceOrderCtxData>) -> Result<StepControl, AppError> {
  let (user_id, users) = {
    let guard = ctx.read();
    (guard.request.as_ref().map(|r| r.user_id), guard.services.users.clone())
  };
  let user_id = user_id.ok_or_else(|| AppError::Internal("User check ran before validation.".to_string()))?;

  match users.find_by_id(user_id).await? {
    Some(_) => {
      debug!(user_id, "User exists.");
      ctx.write().stage = PlacementStage::UserChecked;
      Ok(StepControl::Continue)
    }
    None => {
      warn!(user_id, "Order rejected: user not found.");
      Err(AppError::NotFound("User not found".to_string()))
    }
  }
}

async fn create_order(ctx: FlowContext<PlaceOrderCtxData>) -> Result<StepControl, AppError> {
  let (new_order, orders) = {
    let guard = ctx.read();
    let new_order = guard.request.as_ref().map(|r| NewOrder {
      user_id: r.user_id,
      order_details: r.order_details.clone(),
    });
    (new_order, guard.services.orders.clone())
  };
  let new_order = new_order.ok_or_else(|| AppError::Internal("Order insert ran before validation.".to_string()))?;

  let order = orders.create(new_order).await.map_err(|e| {
    warn!(error = %e, "Order insert failed.");
    e
  })?;

  info!(order_id = order.order_id, user_id = order.user_id, "Order created.");
  let mut guard = ctx.write();
  guard.order = Some(order);
  guard.stage = PlacementStage::OrderCreated;
  Ok(StepControl::Continue)
}

// Past this point the request succeeds regardless of what follows.
async fn confirm_commit(ctx: FlowContext<PlaceOrderCtxData>) -> Result<StepControl, AppError> {
  let guard = ctx.read();
  match guard.order.as_ref() {
    Some(order) => {
      debug!(order_id = order.order_id, "Commit point reached.");
      Ok(StepControl::Continue)
    }
    None => Err(AppError::Internal("create_order finished without an order.".to_string())),
  }
}

async fn notify_user(ctx: FlowContext<PlaceOrderCtxData>) -> Result<StepControl, AppError> {
  let (notification, notifier) = {
    let guard = ctx.read();
    let notification = guard
      .order
      .as_ref()
      .map(|o| Notification::order_placed(o.user_id, o.order_id));
    (notification, guard.services.notifier.clone())
  };
  let Some(notification) = notification else {
    return Err(AppError::Internal("Notification attempted without an order.".to_string()));
  };

  match notifier.notify(&notification).await {
    Ok(()) => {
      let mut guard = ctx.write();
      guard.notification = NotificationStatus::Delivered;
      guard.stage = PlacementStage::Notified;
      Ok(StepControl::Continue)
    }
    Err(e) => {
      warn!(error = %e, user_id = notification.user_id, "User notification failed; order stands.");
      {
        let mut guard = ctx.write();
        guard.notification = NotificationStatus::Failed(e.to_string());
        guard.stage = PlacementStage::NotifyFailed;
      }
      Err(AppError::Notification(e))
    }
  }
}
