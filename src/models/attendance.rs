//! Attendance record model.
//!
//! An attendance record is one clock-in/clock-out pair. Records stay open
//! (no clock-out) until the employee clocks out or the auto clock-out job
//! closes them.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single clock-in/clock-out event pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The working date the record is booked against.
    pub date: NaiveDate,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out, if they have.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

impl AttendanceRecord {
    /// Returns true while the record has no clock-out.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Calculates the hours between clock-in and clock-out, to the minute.
    ///
    /// Returns `None` for an open record. The result is negative when
    /// clock-out precedes clock-in; callers reject such records.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
    ///     clock_in: NaiveDateTime::parse_from_str("2025-03-03 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     clock_out: Some(NaiveDateTime::parse_from_str("2025-03-03 18:30:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    /// };
    /// assert_eq!(record.worked_hours(), Some(Decimal::new(95, 1))); // 9.5 hours
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        self.clock_out.map(|out| {
            let minutes = (out - self.clock_in).num_minutes();
            Decimal::new(minutes, 0) / Decimal::new(60, 0)
        })
    }
}
