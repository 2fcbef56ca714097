//! External API clients

pub mod alpha_vantage;
pub mod newsapi;
pub mod twilio;

pub use alpha_vantage::{AlphaVantageClient, PriceSample};
pub use newsapi::{Article, NewsClient};
pub use twilio::TwilioClient;
