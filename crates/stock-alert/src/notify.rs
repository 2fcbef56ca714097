//! Message formatting and the best-effort SMS send loop

use crate::api::newsapi::Article;
use crate::api::twilio::TwilioClient;
use crate::change::DayChange;
use crate::error::Result;
use tracing::{info, warn};

/// Placeholder used when an article carries no description
const NO_SUMMARY: &str = "(no summary)";

/// Build the message body for one article.
///
/// A missing or empty description is replaced with a placeholder rather
/// than dropped, so every message keeps the same shape.
pub fn format_alert(symbol: &str, change: &DayChange, article: &Article) -> String {
    let brief = article
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_SUMMARY);

    format!(
        "{symbol}: {}{}% \nHeadline: {}. \nBrief: {brief}",
        change.direction.marker(),
        change.percent,
        article.title,
    )
}

/// Outcome of one send loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendSummary {
    pub sent: usize,
    pub failed: usize,
}

/// Sends formatted alerts through Twilio, one message per article
pub struct Notifier {
    twilio: TwilioClient,
    from: String,
    to: String,
}

impl Notifier {
    pub fn new(twilio: TwilioClient, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            twilio,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Send each body as its own SMS, sequentially and best-effort.
    ///
    /// A failed send is logged and does not stop the remaining sends; only
    /// when every send fails does the loop surface the last error.
    pub async fn send_all(&self, bodies: &[String]) -> Result<SendSummary> {
        let mut summary = SendSummary { sent: 0, failed: 0 };
        let mut last_error = None;

        for (index, body) in bodies.iter().enumerate() {
            match self.twilio.send_sms(&self.from, &self.to, body).await {
                Ok(status) => {
                    info!(message = index + 1, %status, "sent message");
                    summary.sent += 1;
                }
                Err(e) => {
                    warn!(message = index + 1, error = %e, "failed to send message");
                    summary.failed += 1;
                    last_error = Some(e);
                }
            }
        }

        if summary.sent == 0 {
            if let Some(e) = last_error {
                return Err(e);
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::alpha_vantage::PriceSample;
    use chrono::NaiveDate;

    fn change(latest: f64, previous: f64) -> DayChange {
        let a = PriceSample {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            close: latest,
        };
        let b = PriceSample {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            close: previous,
        };
        DayChange::between(&a, &b).unwrap()
    }

    #[test]
    fn test_format_down_move() {
        let article = Article {
            title: "Tesla Inc slides".to_string(),
            description: Some("Shares fell sharply.".to_string()),
        };
        let body = format_alert("TSLA", &change(90.0, 100.0), &article);
        assert_eq!(
            body,
            "TSLA: 🔻-11% \nHeadline: Tesla Inc slides. \nBrief: Shares fell sharply."
        );
    }

    #[test]
    fn test_format_up_move() {
        let article = Article {
            title: "Tesla Inc surges".to_string(),
            description: Some("Shares jumped.".to_string()),
        };
        let body = format_alert("TSLA", &change(115.0, 100.0), &article);
        assert!(body.starts_with("TSLA: 🔺13% "));
    }

    #[test]
    fn test_format_tolerates_missing_description() {
        let article = Article {
            title: "Tesla Inc news".to_string(),
            description: None,
        };
        let body = format_alert("TSLA", &change(90.0, 100.0), &article);
        assert!(body.ends_with("Brief: (no summary)"));

        let article = Article {
            title: "Tesla Inc news".to_string(),
            description: Some("   ".to_string()),
        };
        let body = format_alert("TSLA", &change(90.0, 100.0), &article);
        assert!(body.ends_with("Brief: (no summary)"));
    }
}
