//! Social Security Organization contribution.

use crate::models::{ContributionResult, MonetaryAmount};

use super::rate_tables::{SOCSO_BANDS, SOCSO_WAGE_CEILING, SocsoBand};

/// Finds the SOCSO band covering a gross salary.
///
/// Returns the first band, in ascending order, whose upper bound is at or
/// above the salary. Returns `None` above the wage ceiling.
pub fn find_socso_band(gross_salary: MonetaryAmount) -> Option<&'static SocsoBand> {
    if gross_salary > SOCSO_WAGE_CEILING {
        return None;
    }

    SOCSO_BANDS
        .iter()
        .find(|band| gross_salary <= band.upper_bound)
}

/// Calculates the SOCSO contribution for one pay period.
///
/// Salaries above RM 5,000 contribute nothing. Below that the amounts come
/// straight from the band table without interpolation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_socso;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let socso = calculate_socso(Decimal::from_str("1000.01").unwrap());
/// assert_eq!(socso.employee, Decimal::from_str("7.50").unwrap());
/// assert_eq!(socso.employer, Decimal::from_str("26.25").unwrap());
///
/// assert!(calculate_socso(Decimal::new(6000, 0)).is_zero());
/// ```
pub fn calculate_socso(gross_salary: MonetaryAmount) -> ContributionResult {
    match find_socso_band(gross_salary) {
        Some(band) => ContributionResult::new(band.employee, band.employer),
        None => ContributionResult::zero(),
    }
}
