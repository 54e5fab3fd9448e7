use crate::services::store::{Store, StoreError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when delivering a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Notification endpoint rejected the request with status {0}")]
    Rejected(u16),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

/// Outbound notification sink
///
/// Delivery is best-effort: callers log failures and carry on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, volunteer_id: i64, message: &str) -> Result<(), NotifyError>;
}

/// Writes notifications into the data store
pub struct StoreNotifier {
    store: Arc<dyn Store>,
}

impl StoreNotifier {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Notifier for StoreNotifier {
    async fn notify(&self, volunteer_id: i64, message: &str) -> Result<(), NotifyError> {
        let notification = self.store.insert_notification(volunteer_id, message).await?;
        tracing::debug!("Stored notification {} for {}", notification.id, volunteer_id);
        Ok(())
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    #[serde(rename = "userId")]
    user_id: i64,
    message: &'a str,
}

/// Posts notifications as JSON to an HTTP endpoint
pub struct WebhookNotifier {
    url: String,
    client: Client,
}

impl WebhookNotifier {
    pub fn new(url: String, timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, volunteer_id: i64, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload {
                user_id: volunteer_id,
                message,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Rejected(response.status().as_u16()));
        }

        tracing::debug!("Delivered notification for {} to {}", volunteer_id, self.url);
        Ok(())
    }
}
