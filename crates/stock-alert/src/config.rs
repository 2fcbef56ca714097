//! Configuration for one alert run

use crate::error::{AlertError, Result};
use std::time::Duration;

/// Default symbol checked when `STOCK_SYMBOL` is not set
pub const DEFAULT_SYMBOL: &str = "TSLA";

/// Default company name used for the news title query when `COMPANY_NAME` is not set
pub const DEFAULT_COMPANY_NAME: &str = "Tesla Inc";

/// Immutable configuration for one check-and-notify cycle.
///
/// Loaded once at startup and passed into each component constructor;
/// nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Alpha Vantage API key
    pub alpha_vantage_api_key: String,

    /// NewsAPI key
    pub news_api_key: String,

    /// Twilio account SID
    pub twilio_account_sid: String,

    /// Twilio auth token
    pub twilio_auth_token: String,

    /// Twilio sender number (the virtual number)
    pub sms_from: String,

    /// Twilio recipient number (the verified number)
    pub sms_to: String,

    /// Stock symbol to check
    pub symbol: String,

    /// Company display name for the news title query
    pub company_name: String,

    /// Request timeout applied to every outbound HTTP call
    pub request_timeout: Duration,
}

impl AlertConfig {
    /// Load configuration from the process environment.
    ///
    /// Fails fast with a [`AlertError::Config`] naming the first missing
    /// variable; no network call is attempted on a partial configuration.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration through a lookup closure.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(AlertError::Config(format!("{key} is not set"))),
            }
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            alpha_vantage_api_key: required("ALPHA_VANTAGE_API_KEY")?,
            news_api_key: required("NEWS_API_KEY")?,
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            sms_from: required("TWILIO_VIRTUAL_NUMBER")?,
            sms_to: required("TWILIO_VERIFIED_NUMBER")?,
            symbol: optional("STOCK_SYMBOL", DEFAULT_SYMBOL),
            company_name: optional("COMPANY_NAME", DEFAULT_COMPANY_NAME),
            request_timeout: Duration::from_secs(30),
        })
    }
}
