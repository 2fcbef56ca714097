//! Error types for the alert pipeline

use thiserror::Error;

/// Errors raised while running one check-and-notify cycle
#[derive(Debug, Error)]
pub enum AlertError {
    /// Required configuration value missing or empty
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Alpha Vantage API error (bad status or error body)
    #[error("Alpha Vantage error: {0}")]
    AlphaVantage(String),

    /// NewsAPI error (bad status or error body)
    #[error("NewsAPI error: {0}")]
    NewsApi(String),

    /// Twilio API error (bad status or error body)
    #[error("Twilio error: {0}")]
    Twilio(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was well-formed but missing the data the pipeline needs
    #[error("Invalid data: {0}")]
    Data(String),
}

impl AlertError {
    /// Process exit code for this error class.
    ///
    /// `0` is reserved for success (including the informational
    /// below-threshold and no-news outcomes), so errors start at 2:
    /// configuration 2, request failures 3, data-validity failures 4.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Http(_) | Self::AlphaVantage(_) | Self::NewsApi(_) | Self::Twilio(_) => 3,
            Self::Json(_) | Self::Data(_) => 4,
        }
    }
}

/// Result type alias for alert operations
pub type Result<T> = std::result::Result<T, AlertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlertError::Config("ALPHA_VANTAGE_API_KEY is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: ALPHA_VANTAGE_API_KEY is not set"
        );

        let err = AlertError::Data("no stock data found".to_string());
        assert_eq!(err.to_string(), "Invalid data: no stock data found");
    }

    #[test]
    fn test_exit_codes_per_class() {
        assert_eq!(AlertError::Config(String::new()).exit_code(), 2);
        assert_eq!(AlertError::AlphaVantage(String::new()).exit_code(), 3);
        assert_eq!(AlertError::NewsApi(String::new()).exit_code(), 3);
        assert_eq!(AlertError::Twilio(String::new()).exit_code(), 3);
        assert_eq!(AlertError::Data(String::new()).exit_code(), 4);
    }
}
