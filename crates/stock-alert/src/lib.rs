//! One-shot stock move alerter.
//!
//! A single invocation performs one check-and-notify cycle and exits:
//!
//! 1. Fetch the daily close series for one symbol from Alpha Vantage.
//! 2. Compute the day-over-day change between the two most recent closes.
//! 3. If the rounded percent move exceeds the threshold, search NewsAPI for
//!    headlines mentioning the company name.
//! 4. Format up to three articles into SMS bodies and send each through
//!    Twilio's Messages API.
//!
//! Every external call is awaited in sequence with no retries; errors
//! propagate to a single top-level handler in the binary, which maps each
//! error class to an exit code.
//!
//! # Example
//!
//! ```rust,ignore
//! use stock_alert::{AlertConfig, AlertPipeline, RunOutcome};
//!
//! #[tokio::main]
//! async fn main() -> stock_alert::Result<()> {
//!     let config = AlertConfig::from_env()?;
//!     let pipeline = AlertPipeline::new(config)?;
//!     match pipeline.run().await? {
//!         RunOutcome::Notified { sent, failed } => {
//!             println!("sent {sent} message(s), {failed} failed");
//!         }
//!         outcome => println!("{outcome:?}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod change;
pub mod config;
pub mod error;
pub mod notify;
pub mod pipeline;

// Re-export main types for convenience
pub use api::{AlphaVantageClient, Article, NewsClient, PriceSample, TwilioClient};
pub use change::{DayChange, Direction, MAX_ARTICLES, SIGNIFICANT_MOVE_PCT};
pub use config::AlertConfig;
pub use error::{AlertError, Result};
pub use pipeline::{AlertPipeline, RunOutcome};
