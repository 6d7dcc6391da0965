// order_service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use order_flow::FlowError;

use crate::validation::ValidationError;

/// Failure reported by a [`crate::services::UserStore`] or [`crate::services::OrderStore`].
#[derive(Debug, Error)]
pub enum StoreError {
  /// The database refused the data itself: an integrity constraint
  /// (SQLSTATE class `23`, e.g. `23503`) or a data exception (class `22`).
  /// Surfaced to the client as a 400 with the code.
  #[error("database rejected the operation (code {code}): {message}")]
  Rejected { code: String, message: String },

  /// Anything else: pool exhaustion, I/O, decoding, and server-side database
  /// errors such as `57P01` or `53300`. Surfaced as a 500.
  #[error("database backend failure: {0}")]
  Backend(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
  fn from(err: sqlx::Error) -> Self {
    let classified = err.as_database_error().and_then(|db_err| {
      db_err
        .code()
        .filter(|code| is_rejection_class(code))
        .map(|code| (code.into_owned(), db_err.message().to_string()))
    });

    match classified {
      Some((code, message)) => StoreError::Rejected { code, message },
      None => StoreError::Backend(err),
    }
  }
}

// SQLSTATE classes 22 (data exception) and 23 (integrity constraint violation).
fn is_rejection_class(code: &str) -> bool {
  code.starts_with("22") || code.starts_with("23")
}

/// Failure of the outbound notification call. Never fatal to a request.
#[derive(Debug, Error)]
pub enum NotifyError {
  #[error("notification request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("notification service responded with status {0}")]
  Status(u16),
}

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(#[from] ValidationError),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Store Error: {0}")]
  Store(#[from] StoreError),

  #[error("Notification Error: {0}")]
  Notification(#[from] NotifyError),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Flow Error: {source}")]
  Flow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Store(StoreError::Rejected { .. }) => StatusCode::BAD_REQUEST,
      AppError::Store(StoreError::Backend(_))
      | AppError::Notification(_)
      | AppError::Config(_)
      | AppError::Flow { .. }
      | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let body = match self {
      AppError::Validation(e) => json!({ "error": e.to_string() }),
      AppError::NotFound(m) => json!({ "error": m }),
      AppError::Store(StoreError::Rejected { code, .. }) => {
        json!({ "error": "Database operation failed", "code": code })
      }
      // Details stay in the logs.
      _ => json!({ "error": "Internal server error" }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
