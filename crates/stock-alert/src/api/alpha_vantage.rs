//! Alpha Vantage API client

use crate::error::{AlertError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const BASE_URL: &str = "https://www.alphavantage.co";

/// One daily close from the provider's time series
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSample {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily time-series response body
#[derive(Debug, Deserialize)]
struct DailySeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    series: Option<HashMap<String, DailyBar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

/// One OHLC record; only the close is carried forward
#[derive(Debug, Deserialize)]
struct DailyBar {
    #[serde(rename = "4. close")]
    close: String,
}

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, timeout, BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests)
    pub fn with_base_url(
        api_key: impl Into<String>,
        timeout: Duration,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch the daily close series for a symbol, newest first.
    ///
    /// The provider's key order is not trusted: samples are re-sorted by
    /// parsed date so the two most recent closes are always the first two
    /// entries regardless of how the response serialized its map.
    pub async fn daily_closes(&self, symbol: &str) -> Result<Vec<PriceSample>> {
        let url = format!("{}/query", self.base_url);
        let params = [
            ("function", "TIME_SERIES_DAILY"),
            ("symbol", symbol),
            ("apikey", &self.api_key),
        ];

        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(AlertError::AlphaVantage(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let data: DailySeriesResponse = response.json().await?;

        // The API reports problems in-band with a 200 status
        if let Some(error) = data.error_message {
            return Err(AlertError::AlphaVantage(error));
        }
        if let Some(note) = data.note {
            return Err(AlertError::AlphaVantage(format!("rate limited: {note}")));
        }

        let series = data
            .series
            .filter(|series| !series.is_empty())
            .ok_or_else(|| AlertError::Data("no stock data found".to_string()))?;

        let mut samples = Vec::with_capacity(series.len());
        for (date, bar) in series {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                AlertError::Data(format!("unparseable time series date {date:?}: {e}"))
            })?;
            let close: f64 = bar.close.parse().map_err(|e| {
                AlertError::Data(format!("unparseable close {:?} for {date}: {e}", bar.close))
            })?;
            samples.push(PriceSample { date, close });
        }

        samples.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AlphaVantageClient::new("test_key", Duration::from_secs(30)).unwrap();
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.base_url, BASE_URL);
    }

    #[test]
    fn test_daily_bar_parses_provider_field_names() {
        let body = r#"{
            "Time Series (Daily)": {
                "2024-01-02": { "4. close": "105.0000" },
                "2024-01-01": { "4. close": "100.0000" }
            }
        }"#;
        let parsed: DailySeriesResponse = serde_json::from_str(body).unwrap();
        let series = parsed.series.unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series["2024-01-02"].close, "105.0000");
    }

    #[test]
    fn test_error_message_field_is_captured() {
        let body = r#"{ "Error Message": "Invalid API call." }"#;
        let parsed: DailySeriesResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.series.is_none());
        assert_eq!(parsed.error_message.as_deref(), Some("Invalid API call."));
    }
}
