//! The single-pass check-and-notify pipeline

use crate::api::{AlphaVantageClient, NewsClient, TwilioClient};
use crate::change::{DayChange, MAX_ARTICLES};
use crate::config::AlertConfig;
use crate::error::{AlertError, Result};
use crate::notify::{Notifier, format_alert};
use tracing::info;

/// How one run ended. All three variants are successes; the informational
/// ones carry the percent for the operator-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The move did not clear the threshold; nothing further was fetched
    BelowThreshold { percent: i64 },
    /// The move was significant but the news search came back empty
    NoNews { percent: i64 },
    /// Messages were dispatched, possibly with best-effort failures
    Notified { sent: usize, failed: usize },
}

/// One check-and-notify cycle over the three external APIs.
///
/// Every call is awaited in sequence; nothing runs concurrently and
/// nothing is retried.
pub struct AlertPipeline {
    config: AlertConfig,
    alpha_vantage: AlphaVantageClient,
    news: NewsClient,
    notifier: Notifier,
}

impl AlertPipeline {
    /// Build the pipeline and its clients from an immutable configuration
    pub fn new(config: AlertConfig) -> Result<Self> {
        let alpha_vantage =
            AlphaVantageClient::new(&config.alpha_vantage_api_key, config.request_timeout)?;
        let news = NewsClient::new(&config.news_api_key, config.request_timeout)?;
        let twilio = TwilioClient::new(
            &config.twilio_account_sid,
            &config.twilio_auth_token,
            config.request_timeout,
        )?;
        Ok(Self::with_clients(config, alpha_vantage, news, twilio))
    }

    /// Assemble the pipeline from prebuilt clients (used by tests to point
    /// each client at a mock server)
    pub fn with_clients(
        config: AlertConfig,
        alpha_vantage: AlphaVantageClient,
        news: NewsClient,
        twilio: TwilioClient,
    ) -> Self {
        let notifier = Notifier::new(twilio, config.sms_from.clone(), config.sms_to.clone());
        Self {
            config,
            alpha_vantage,
            news,
            notifier,
        }
    }

    /// Run the cycle: fetch closes, compute the change, and if it is
    /// significant fetch headlines and dispatch them as SMS.
    pub async fn run(&self) -> Result<RunOutcome> {
        let symbol = &self.config.symbol;

        let samples = self.alpha_vantage.daily_closes(symbol).await?;
        let [latest, previous] = samples.first_chunk::<2>().ok_or_else(|| {
            AlertError::Data(format!(
                "need at least 2 daily closes for {symbol}, got {}",
                samples.len()
            ))
        })?;

        let change = DayChange::between(latest, previous)?;
        info!(
            %symbol,
            latest = latest.close,
            previous = previous.close,
            percent = change.percent,
            "computed day-over-day change"
        );

        if !change.is_significant() {
            return Ok(RunOutcome::BelowThreshold {
                percent: change.percent,
            });
        }

        let articles = self.news.headlines(&self.config.company_name).await?;
        if articles.is_empty() {
            return Ok(RunOutcome::NoNews {
                percent: change.percent,
            });
        }

        // First MAX_ARTICLES in the provider's own ordering
        let bodies: Vec<String> = articles
            .iter()
            .take(MAX_ARTICLES)
            .map(|article| format_alert(symbol, &change, article))
            .collect();

        let summary = self.notifier.send_all(&bodies).await?;
        Ok(RunOutcome::Notified {
            sent: summary.sent,
            failed: summary.failed,
        })
    }
}
