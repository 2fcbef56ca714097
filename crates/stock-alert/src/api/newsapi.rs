//! NewsAPI client for company headline lookup

use crate::error::{AlertError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BASE_URL: &str = "https://newsapi.org";

/// One article as returned by the news provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// News headline
    pub title: String,
    /// Article summary; the provider may omit or null this
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

/// NewsAPI client
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    /// Create a new NewsAPI client
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

    /// Search for articles whose title mentions the company name.
    ///
    /// Returns the provider's list in its own relevance ordering; the caller
    /// decides how many to keep.
    pub async fn headlines(&self, company_name: &str) -> Result<Vec<Article>> {
        let url = format!("{}/v2/everything", self.base_url);
        let params = [("qInTitle", company_name), ("apiKey", &self.api_key)];

        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::NewsApi(format!("HTTP error {status}: {body}")));
        }

        let data: EverythingResponse = response.json().await?;

        // NewsAPI signals failures in-band with "status": "error"
        if data.status != "ok" {
            return Err(AlertError::NewsApi(
                data.message
                    .unwrap_or_else(|| format!("provider status {:?}", data.status)),
            ));
        }

        Ok(data.articles)
    }
}
