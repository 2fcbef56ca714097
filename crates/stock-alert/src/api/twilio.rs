//! Twilio Messages API client

use crate::error::{AlertError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const BASE_URL: &str = "https://api.twilio.com";

#[derive(Debug, Deserialize)]
struct MessageResponse {
    status: String,
}

/// Twilio client for sending SMS through the Messages API
#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
}

impl TwilioClient {
    /// Create a new Twilio client
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Self::with_base_url(account_sid, auth_token, timeout, BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests)
    pub fn with_base_url(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        timeout: Duration,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        })
    }

    /// Send one SMS and return the provider's delivery status for it
    /// (e.g. `queued`).
    pub async fn send_sms(&self, from: &str, to: &str, body: &str) -> Result<String> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );
        let form = [("From", from), ("To", to), ("Body", body)];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::Twilio(format!("HTTP error {status}: {body}")));
        }

        let message: MessageResponse = response.json().await?;
        Ok(message.status)
    }
}
