//! Attendance aggregation.
//!
//! Turns the clock-in/clock-out records for a pay period into the regular and
//! overtime hours the payroll aggregator expects. Hours are summed per
//! calendar date and each date is split at the daily overtime threshold.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AuditWarning, PayPeriod};

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Regular and overtime hours for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Distinct dates with at least one closed record.
    pub days_worked: u32,
    /// Hours up to the daily threshold, summed over the period.
    pub regular_hours: Decimal,
    /// Hours beyond the daily threshold, summed over the period.
    pub overtime_hours: Decimal,
    /// Records that were skipped, and why.
    pub warnings: Vec<AuditWarning>,
}

/// Splits one day's hours into regular and overtime portions.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{split_daily_hours, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let (regular, overtime) = split_daily_hours(Decimal::new(10, 0), DEFAULT_DAILY_OVERTIME_THRESHOLD);
/// assert_eq!(regular, Decimal::new(8, 0));
/// assert_eq!(overtime, Decimal::new(2, 0));
/// ```
pub fn split_daily_hours(worked_hours: Decimal, threshold: Decimal) -> (Decimal, Decimal) {
    if worked_hours > threshold {
        (threshold, worked_hours - threshold)
    } else {
        (worked_hours, Decimal::ZERO)
    }
}

/// Aggregates a pay period's attendance records.
///
/// Open records and records dated outside the pay period are skipped with a
/// warning. A record whose clock-out precedes its clock-in is rejected.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAttendance`] for an inverted record.
pub fn summarize_attendance(
    records: &[AttendanceRecord],
    pay_period: &PayPeriod,
    daily_threshold: Decimal,
) -> EngineResult<AttendanceSummary> {
    let mut hours_by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut warnings = Vec::new();

    for record in records {
        if !pay_period.contains_date(record.date) {
            warnings.push(AuditWarning {
                code: "OUTSIDE_PAY_PERIOD".to_string(),
                message: format!(
                    "Record on {} is outside pay period {}/{} and was skipped",
                    record.date, pay_period.month, pay_period.year
                ),
                severity: "low".to_string(),
            });
            continue;
        }

        let Some(hours) = record.worked_hours() else {
            warnings.push(AuditWarning {
                code: "OPEN_ATTENDANCE".to_string(),
                message: format!(
                    "Record on {} has no clock-out and was skipped",
                    record.date
                ),
                severity: "medium".to_string(),
            });
            continue;
        };

        if hours < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                date: record.date,
                message: "clock-out is before clock-in".to_string(),
            });
        }

        *hours_by_date.entry(record.date).or_insert(Decimal::ZERO) += hours;
    }

    let (regular_hours, overtime_hours) = hours_by_date.values().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(regular, overtime), day| {
            let (day_regular, day_overtime) = split_daily_hours(*day, daily_threshold);
            (regular + day_regular, overtime + day_overtime)
        },
    );

    Ok(AttendanceSummary {
        days_worked: hours_by_date.len() as u32,
        regular_hours,
        overtime_hours,
        warnings,
    })
}
