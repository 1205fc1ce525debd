use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::EmailError;

pub const RESEND_API_BASE: &str = "https://api.resend.com";

/// Outbound message as the provider's `POST /emails` endpoint expects
/// it. `reply_to` carries the submitter's address so replies route
/// straight back to them.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Dispatches one email and returns the provider's message id.
    async fn send(&self, email: &OutgoingEmail) -> Result<String, EmailError>;
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// Transactional email client for the Resend HTTP API.
#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ResendMailer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, RESEND_API_BASE)
    }

    /// Tests point this at a local mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        ResendMailer {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSender for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, EmailError> {
        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| EmailError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the provider's own error detail when it sends one
            let detail = match response.json::<ProviderError>().await {
                Ok(err) => err.message,
                Err(_) => format!("HTTP {}", status),
            };
            return Err(EmailError::ProviderRejected(detail));
        }

        let body: SendResponse = response
            .json()
            .await
            .map_err(|e| EmailError::MalformedResponse(e.to_string()))?;

        Ok(body.id)
    }
}
