#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::time::Duration;
use std::{fs, path::Path};
use stock_alert::{AlertConfig, AlertPipeline, AlphaVantageClient, NewsClient, TwilioClient};

pub const SMS_FROM: &str = "+15550001";
pub const SMS_TO: &str = "+15550002";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

pub fn test_config() -> AlertConfig {
    AlertConfig::from_lookup(|key| {
        let value = match key {
            "ALPHA_VANTAGE_API_KEY" => "av-key",
            "NEWS_API_KEY" => "news-key",
            "TWILIO_ACCOUNT_SID" => "AC123",
            "TWILIO_AUTH_TOKEN" => "token",
            "TWILIO_VIRTUAL_NUMBER" => SMS_FROM,
            "TWILIO_VERIFIED_NUMBER" => SMS_TO,
            _ => return None,
        };
        Some(value.to_string())
    })
    .expect("test config should be complete")
}

/// Wire a pipeline so each client talks to its own mock server.
pub fn pipeline_against(
    av_server: &MockServer,
    news_server: &MockServer,
    twilio_server: &MockServer,
) -> AlertPipeline {
    let config = test_config();
    let timeout = Duration::from_secs(5);
    let alpha_vantage =
        AlphaVantageClient::with_base_url("av-key", timeout, av_server.base_url())
            .expect("alpha vantage client");
    let news = NewsClient::with_base_url("news-key", timeout, news_server.base_url())
        .expect("news client");
    let twilio = TwilioClient::with_base_url("AC123", "token", timeout, twilio_server.base_url())
        .expect("twilio client");
    AlertPipeline::with_clients(config, alpha_vantage, news, twilio)
}

pub fn mock_daily_series<'a>(server: &'a MockServer, body: &str) -> Mock<'a> {
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", "TSLA")
            .query_param("apikey", "av-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_headlines<'a>(server: &'a MockServer, body: &str) -> Mock<'a> {
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("qInTitle", "Tesla Inc")
            .query_param("apiKey", "news-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
