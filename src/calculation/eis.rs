//! Employment Insurance System contribution.
//!
//! Employee and employer each pay 0.2% of gross salary, with the salary
//! capped at RM 4,000 before the rate is applied.

use crate::models::{ContributionResult, MonetaryAmount};

use super::rate_tables::{EIS_RATE, EIS_WAGE_CEILING, round_money};

/// Calculates the EIS contribution for one pay period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_eis;
/// use rust_decimal::Decimal;
///
/// let eis = calculate_eis(Decimal::new(10000, 0));
/// assert_eq!(eis.employee, Decimal::new(800, 2));
/// assert_eq!(eis.employee, eis.employer);
/// ```
pub fn calculate_eis(gross_salary: MonetaryAmount) -> ContributionResult {
    let capped_salary = gross_salary.min(EIS_WAGE_CEILING);
    let share = round_money(capped_salary * EIS_RATE);

    ContributionResult::new(share, share)
}
