//! Statutory payroll aggregation.
//!
//! Combines regular and overtime pay into gross pay and applies EPF, SOCSO
//! and EIS according to the employee's category and citizenship.

use rust_decimal::Decimal;

use crate::models::{
    CitizenshipStatus, ContributionResult, EmploymentCategory, MonetaryAmount, PayrollBreakdown,
};

use super::eis::calculate_eis;
use super::epf::calculate_epf;
use super::rate_tables::{OVERTIME_MULTIPLIER, STANDARD_MONTHLY_HOURS, round_money};
use super::socso::calculate_socso;

/// Returns the unrounded regular and overtime pay for the period.
///
/// Hourly staff are paid for the hours they worked. Salaried staff receive
/// their basic salary regardless of hours, and overtime is paid at an hourly
/// rate derived from a 160-hour month.
fn pay_components(
    basic_salary: MonetaryAmount,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Option<MonetaryAmount>,
) -> (Decimal, Decimal) {
    match hourly_rate {
        Some(rate) => (
            regular_hours * rate,
            overtime_hours * rate * OVERTIME_MULTIPLIER,
        ),
        None => (
            basic_salary,
            basic_salary / STANDARD_MONTHLY_HOURS * overtime_hours * OVERTIME_MULTIPLIER,
        ),
    }
}

/// Calculates the full payroll breakdown for one employee and one period.
///
/// Interns skip all three statutory schemes. Everyone else has EPF, SOCSO and
/// EIS calculated on the rounded gross pay. The function is pure: the same
/// inputs always produce the same breakdown.
///
/// # Arguments
///
/// * `basic_salary` - Monthly salary, used when `hourly_rate` is `None`
/// * `regular_hours` - Regular hours worked (informational for salaried staff)
/// * `overtime_hours` - Overtime hours worked
/// * `hourly_rate` - Hourly rate for hourly staff
/// * `citizenship_status` - Decides EPF eligibility
/// * `employment_type` - Decides eligibility for every scheme
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::{CitizenshipStatus, EmploymentCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = calculate_payroll(
///     Decimal::new(3000, 0),
///     Decimal::new(160, 0),
///     Decimal::new(10, 0),
///     None,
///     CitizenshipStatus::Citizen,
///     EmploymentCategory::Permanent,
/// );
///
/// assert_eq!(breakdown.overtime_pay, Decimal::from_str("281.25").unwrap());
/// assert_eq!(breakdown.gross_pay, Decimal::from_str("3281.25").unwrap());
/// assert_eq!(breakdown.net_pay, Decimal::from_str("2896.25").unwrap());
/// ```
pub fn calculate_payroll(
    basic_salary: MonetaryAmount,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Option<MonetaryAmount>,
    citizenship_status: CitizenshipStatus,
    employment_type: EmploymentCategory,
) -> PayrollBreakdown {
    let (regular_pay, overtime_pay) =
        pay_components(basic_salary, regular_hours, overtime_hours, hourly_rate);
    let gross_pay = round_money(regular_pay + overtime_pay);

    let (epf, socso, eis) = if employment_type.is_statutory_eligible() {
        (
            calculate_epf(gross_pay, citizenship_status),
            calculate_socso(gross_pay),
            calculate_eis(gross_pay),
        )
    } else {
        (
            ContributionResult::zero(),
            ContributionResult::zero(),
            ContributionResult::zero(),
        )
    };

    let total_deductions = round_money(epf.employee + socso.employee + eis.employee);
    let net_pay = round_money(gross_pay - total_deductions);

    PayrollBreakdown {
        regular_hours,
        overtime_hours,
        regular_pay: round_money(regular_pay),
        overtime_pay: round_money(overtime_pay),
        gross_pay,
        epf,
        socso,
        eis,
        total_deductions,
        net_pay,
    }
}
