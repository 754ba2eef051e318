//! Employees Provident Fund contribution.
//!
//! EPF applies to citizens and permanent residents. The employee pays 11% of
//! gross salary; the employer pays 13% up to and including RM 5,000 and 12%
//! above it.

use rust_decimal::Decimal;

use crate::models::{CitizenshipStatus, ContributionResult, MonetaryAmount};

use super::rate_tables::{
    EPF_EMPLOYEE_RATE, EPF_EMPLOYER_RATE_LOWER, EPF_EMPLOYER_RATE_THRESHOLD,
    EPF_EMPLOYER_RATE_UPPER, round_money,
};

/// Returns the employer EPF rate that applies to a gross salary.
pub fn epf_employer_rate(gross_salary: MonetaryAmount) -> Decimal {
    if gross_salary <= EPF_EMPLOYER_RATE_THRESHOLD {
        EPF_EMPLOYER_RATE_LOWER
    } else {
        EPF_EMPLOYER_RATE_UPPER
    }
}

/// Calculates the EPF contribution for one pay period.
///
/// Foreigners are exempt and get `{0, 0}`. Each share is rounded to sen on
/// its own, never derived from a rounded total.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_epf;
/// use payroll_engine::models::CitizenshipStatus;
/// use rust_decimal::Decimal;
///
/// let epf = calculate_epf(Decimal::new(5000, 0), CitizenshipStatus::Citizen);
/// assert_eq!(epf.employee, Decimal::new(55000, 2));
/// assert_eq!(epf.employer, Decimal::new(65000, 2));
///
/// let foreign = calculate_epf(Decimal::new(5000, 0), CitizenshipStatus::Foreigner);
/// assert!(foreign.is_zero());
/// ```
pub fn calculate_epf(
    gross_salary: MonetaryAmount,
    citizenship_status: CitizenshipStatus,
) -> ContributionResult {
    if citizenship_status == CitizenshipStatus::Foreigner {
        return ContributionResult::zero();
    }

    let employee = round_money(gross_salary * EPF_EMPLOYEE_RATE);
    let employer = round_money(gross_salary * epf_employer_rate(gross_salary));

    ContributionResult::new(employee, employer)
}
