//! Stock move alerter CLI
//!
//! Performs one check-and-notify cycle and exits.
//!
//! # Usage
//!
//! ```bash
//! # Required credentials
//! export ALPHA_VANTAGE_API_KEY="..."
//! export NEWS_API_KEY="..."
//! export TWILIO_ACCOUNT_SID="..."
//! export TWILIO_AUTH_TOKEN="..."
//! export TWILIO_VIRTUAL_NUMBER="+1..."
//! export TWILIO_VERIFIED_NUMBER="+1..."
//!
//! # Optional overrides (default: TSLA / "Tesla Inc")
//! export STOCK_SYMBOL="AAPL"
//! export COMPANY_NAME="Apple Inc"
//!
//! cargo run --bin stock-alert -p stock-alert
//! ```
//!
//! Exit codes: 0 on success (including the informational below-threshold and
//! no-news outcomes), 2 on configuration errors, 3 on request errors, 4 on
//! data-validity errors.

use std::env;
use stock_alert::{AlertConfig, AlertPipeline, RunOutcome};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let result = run().await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> stock_alert::Result<()> {
    let config = AlertConfig::from_env()?;
    let symbol = config.symbol.clone();
    let pipeline = AlertPipeline::new(config)?;

    match pipeline.run().await? {
        RunOutcome::BelowThreshold { percent } => {
            println!("Stock change of {percent}% is not significant enough to send news.");
        }
        RunOutcome::NoNews { percent } => {
            println!("{symbol} moved {percent}% but no relevant news articles were found.");
        }
        RunOutcome::Notified { sent, failed } => {
            println!("Sent {sent} message(s) for {symbol} ({failed} failed).");
        }
    }

    Ok(())
}
