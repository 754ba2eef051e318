//! Daily-rate payslip calculation.
//!
//! A second gross-pay formula used by the daily-rate payslip layout: a flat
//! rate per day worked that depends only on employment category, a flat rate
//! per overtime hour, and an optional fixed project bonus. Deductions are
//! supplied by the caller. This path does not touch EPF, SOCSO or EIS and its
//! net figure is not expected to match [`calculate_payroll`](super::calculate_payroll).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DailyRateSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmploymentCategory, MAX_MONETARY_AMOUNT, MonetaryAmount};

use super::rate_tables::round_money;

/// Most days a monthly payslip can cover.
pub const MAX_DAYS_WORKED: Decimal = Decimal::from_parts(31, 0, 0, false, 0);

/// Hours in a 31-day month.
pub const MAX_MONTHLY_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

fn check_range(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    if value > max {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {}, got {}", max, value),
        });
    }
    Ok(())
}

/// Inputs for one daily-rate payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRateInput {
    /// Employment category, which selects the daily rate.
    pub employment_type: EmploymentCategory,
    /// Days worked in the period. Half days are allowed.
    pub days_worked: Decimal,
    /// Overtime hours worked in the period.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Whether the fixed project bonus is paid this period.
    #[serde(default)]
    pub project_bonus: bool,
    /// Deductions computed elsewhere and passed through.
    #[serde(default)]
    pub deductions: MonetaryAmount,
}

impl DailyRateInput {
    /// Checks the input before a payslip is calculated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if a value is negative, days
    /// exceed [`MAX_DAYS_WORKED`], overtime exceeds [`MAX_MONTHLY_HOURS`], or
    /// deductions exceed [`MAX_MONETARY_AMOUNT`].
    pub fn validate(&self) -> EngineResult<()> {
        check_range("days_worked", self.days_worked, MAX_DAYS_WORKED)?;
        check_range("overtime_hours", self.overtime_hours, MAX_MONTHLY_HOURS)?;
        check_range("deductions", self.deductions, MAX_MONETARY_AMOUNT)
    }
}

/// A computed daily-rate payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRatePayslip {
    /// Employment category the rate was chosen for.
    pub employment_type: EmploymentCategory,
    /// Days worked in the period.
    pub days_worked: Decimal,
    /// Flat daily rate applied.
    pub daily_rate: MonetaryAmount,
    /// Days worked times the daily rate.
    pub basic_pay: MonetaryAmount,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Flat overtime rate applied.
    pub overtime_rate: MonetaryAmount,
    /// Overtime hours times the overtime rate.
    pub overtime_pay: MonetaryAmount,
    /// Project bonus paid, zero when not awarded.
    pub project_bonus: MonetaryAmount,
    /// Basic pay plus overtime pay plus project bonus.
    pub gross_pay: MonetaryAmount,
    /// Deductions supplied by the caller.
    pub deductions: MonetaryAmount,
    /// Gross pay minus deductions.
    pub net_pay: MonetaryAmount,
}

/// Calculates a daily-rate payslip.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_daily_rate_payslip, DailyRateInput};
/// use payroll_engine::config::{DailyRateSchedule, DailyRates};
/// use payroll_engine::models::EmploymentCategory;
/// use rust_decimal::Decimal;
///
/// let schedule = DailyRateSchedule {
///     rates: DailyRates {
///         permanent: Decimal::new(120, 0),
///         contract: Decimal::new(100, 0),
///         part_time: Decimal::new(80, 0),
///         intern: Decimal::new(50, 0),
///     },
///     overtime_hourly_rate: Decimal::new(15, 0),
///     project_bonus: Decimal::new(200, 0),
/// };
///
/// let payslip = calculate_daily_rate_payslip(
///     &schedule,
///     &DailyRateInput {
///         employment_type: EmploymentCategory::Contract,
///         days_worked: Decimal::new(20, 0),
///         overtime_hours: Decimal::new(4, 0),
///         project_bonus: true,
///         deductions: Decimal::new(150, 0),
///     },
/// );
///
/// assert_eq!(payslip.gross_pay, Decimal::new(2260, 0));
/// assert_eq!(payslip.net_pay, Decimal::new(2110, 0));
/// ```
pub fn calculate_daily_rate_payslip(
    schedule: &DailyRateSchedule,
    input: &DailyRateInput,
) -> DailyRatePayslip {
    let daily_rate = schedule.rate_for(input.employment_type);
    let basic_pay = round_money(input.days_worked * daily_rate);
    let overtime_pay = round_money(input.overtime_hours * schedule.overtime_hourly_rate);
    let project_bonus = if input.project_bonus {
        round_money(schedule.project_bonus)
    } else {
        Decimal::ZERO
    };

    let gross_pay = round_money(basic_pay + overtime_pay + project_bonus);
    let deductions = round_money(input.deductions);
    let net_pay = round_money(gross_pay - deductions);

    DailyRatePayslip {
        employment_type: input.employment_type,
        days_worked: input.days_worked,
        daily_rate,
        basic_pay,
        overtime_hours: input.overtime_hours,
        overtime_rate: schedule.overtime_hourly_rate,
        overtime_pay,
        project_bonus,
        gross_pay,
        deductions,
        net_pay,
    }
}
