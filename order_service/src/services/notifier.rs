// order_service/src/services/notifier.rs

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::errors::NotifyError;
use crate::models::Notification;

/// Fire-and-forget delivery of a [`Notification`]. No retries.
#[async_trait]
pub trait Notifier: Send + Sync {
  async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// POSTs notifications as JSON to the user service.
#[derive(Clone)]
pub struct HttpNotifier {
  client: reqwest::Client,
  endpoint: String,
}

impl HttpNotifier {
  /// `timeout` bounds the whole request, connect included.
  pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      endpoint: endpoint.into(),
    })
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }
}

#[async_trait]
impl Notifier for HttpNotifier {
  #[instrument(name = "notifier::notify", skip(self, notification), fields(endpoint = %self.endpoint, user_id = notification.user_id))]
  async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
    let response = self.client.post(&self.endpoint).json(notification).send().await?;

    let status = response.status();
    if !status.is_success() {
      warn!(%status, "Notification service refused the message.");
      return Err(NotifyError::Status(status.as_u16()));
    }

    info!(%status, "Notification delivered.");
    Ok(())
  }
}
