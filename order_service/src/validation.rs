// order_service/src/validation.rs

//! Shape checks for `POST /order` bodies. Runs before any side effect.

use serde_json::Value;
use thiserror::Error;

/// A request body that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderRequest {
  pub user_id: i64,
  /// Kept as the original string; it is stored verbatim.
  pub order_details: String,
}

/// The first check a body failed. Display text is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("user_id must be a number")]
  UserIdNotNumber,

  #[error("order_details must be a JSON string")]
  OrderDetailsNotString,

  #[error("Invalid JSON in order_details")]
  OrderDetailsInvalidJson,

  #[error("order_details must contain items array")]
  ItemsMissing,

  #[error("totalAmount must be a number")]
  TotalAmountNotNumber,
}

/// Checks run in order and stop at the first failure.
///
/// `user_id` must be a JSON number with an `i64` value; `1.0` counts, `1.5`
/// does not. `items` must be a non-empty array; the entries themselves are
/// not inspected.
pub fn validate_place_order(body: &Value) -> Result<PlaceOrderRequest, ValidationError> {
  let user_id = body
    .get("user_id")
    .and_then(integral_user_id)
    .ok_or(ValidationError::UserIdNotNumber)?;

  let order_details = body
    .get("order_details")
    .and_then(Value::as_str)
    .ok_or(ValidationError::OrderDetailsNotString)?;

  let details: Value =
    serde_json::from_str(order_details).map_err(|_| ValidationError::OrderDetailsInvalidJson)?;

  match details.get("items").and_then(Value::as_array) {
    Some(items) if !items.is_empty() => {}
    _ => return Err(ValidationError::ItemsMissing),
  }

  if !details.get("totalAmount").is_some_and(Value::is_number) {
    return Err(ValidationError::TotalAmountNotNumber);
  }

  Ok(PlaceOrderRequest {
    user_id,
    order_details: order_details.to_string(),
  })
}

// serde_json keeps `1.0` and `1e0` as floats.
fn integral_user_id(value: &Value) -> Option<i64> {
  if let Some(id) = value.as_i64() {
    return Some(id);
  }
  let f = value.as_f64()?;
  // 2^63 itself is out of range, hence the strict upper bound.
  if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
    Some(f as i64)
  } else {
    None
  }
}
