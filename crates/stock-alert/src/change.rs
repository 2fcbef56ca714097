//! Day-over-day price change computation and the significance gate

use crate::api::alpha_vantage::PriceSample;
use crate::error::{AlertError, Result};
use serde::{Deserialize, Serialize};

/// Absolute percent move above which a change is worth notifying about
pub const SIGNIFICANT_MOVE_PCT: u64 = 5;

/// Maximum number of articles turned into messages
pub const MAX_ARTICLES: usize = 3;

/// Sign of the day-over-day move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Marker prepended to the message body
    pub fn marker(self) -> &'static str {
        match self {
            Self::Up => "🔺",
            Self::Down => "🔻",
        }
    }
}

/// Change between the two most recent daily closes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayChange {
    /// `latest close - previous close`
    pub difference: f64,
    /// Percent change relative to the latest close, rounded to the nearest
    /// integer. Ties round half away from zero (`f64::round`).
    pub percent: i64,
    /// `Up` iff the difference is strictly positive
    pub direction: Direction,
}

impl DayChange {
    /// Compute the change between the latest and previous close.
    ///
    /// The latest close is the denominator; a zero latest close is a data
    /// error rather than a division by zero.
    pub fn between(latest: &PriceSample, previous: &PriceSample) -> Result<Self> {
        if latest.close == 0.0 {
            return Err(AlertError::Data(format!(
                "latest close for {} is zero, cannot compute percent change",
                latest.date
            )));
        }

        let difference = latest.close - previous.close;
        let percent = ((difference / latest.close) * 100.0).round() as i64;
        let direction = if difference > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };

        Ok(Self {
            difference,
            percent,
            direction,
        })
    }

    /// Whether the move clears the notification threshold
    pub fn is_significant(&self) -> bool {
        self.percent.unsigned_abs() > SIGNIFICANT_MOVE_PCT
    }
}
