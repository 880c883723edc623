use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::error::{NotifierError, NotifierResult, TransportError};
use crate::logging::{log_debug, log_warn};
use crate::models::NotificationMessage;

/// Posts messages to a Mattermost incoming webhook.
pub struct WebhookNotifier {
    client: Client,
    url: String,
    insecure: bool,
}

impl WebhookNotifier {
    pub fn new(url: &str, insecure_skip_verify: bool) -> NotifierResult<Self> {
        if insecure_skip_verify {
            log_warn("TLS certificate verification is disabled for the webhook");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(insecure_skip_verify)
            .build()
            .map_err(|e| NotifierError::Config(format!("failed to build webhook client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
            insecure: insecure_skip_verify,
        })
    }

    /// One POST, no retry. Anything but 200 is a delivery failure.
    pub async fn send(&self, message: &NotificationMessage) -> NotifierResult<()> {
        if self.insecure {
            log_warn("Skipping TLS certificate verification for this request");
        }

        let body = serde_json::to_vec(message)
            .map_err(|e| NotifierError::Delivery(TransportError::Json(e)))?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| NotifierError::Delivery(TransportError::Request(e)))?;

        let status = response.status();
        log_debug(&format!("Webhook responded {}", status.as_u16()));
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifierError::Delivery(TransportError::Status {
                status: status.as_u16(),
                body,
            }));
        }

        Ok(())
    }
}
