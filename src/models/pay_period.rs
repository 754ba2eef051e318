//! Pay period model.
//!
//! Payroll is run once per employee per calendar month, so a pay period is
//! identified by its month and year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A monthly pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod { month: 2, year: 2024 };
/// let (first, last) = period.date_range().unwrap();
///
/// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl PayPeriod {
    /// Returns the first and last day of the period, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayPeriod`] if the month is outside 1 to 12
    /// or the year is outside the range chrono can represent.
    pub fn date_range(&self) -> EngineResult<(NaiveDate, NaiveDate)> {
        let invalid = |message: &str| EngineError::InvalidPayPeriod {
            month: self.month,
            year: self.year,
            message: message.to_string(),
        };

        if !(1..=12).contains(&self.month) {
            return Err(invalid("month must be between 1 and 12"));
        }

        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| invalid("year is out of range"))?;

        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };

        let last = next_first
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| invalid("year is out of range"))?;

        Ok((first, last))
    }

    /// Checks the period denotes a real calendar month.
    pub fn validate(&self) -> EngineResult<()> {
        self.date_range().map(|_| ())
    }

    /// Checks if a given date falls within this pay period.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
