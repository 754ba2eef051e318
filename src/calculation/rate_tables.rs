//! Statutory contribution rate tables.
//!
//! Every rate, threshold and band used by the EPF, SOCSO and EIS calculators
//! lives here as constant data. Nothing is loaded at runtime.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places every returned monetary amount is rounded to.
pub const MONEY_DP: u32 = 2;

/// EPF employee share: 11% of gross salary.
pub const EPF_EMPLOYEE_RATE: Decimal = Decimal::from_parts(11, 0, 0, false, 2);

/// EPF employer share for gross salary up to and including the threshold: 13%.
pub const EPF_EMPLOYER_RATE_LOWER: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// EPF employer share for gross salary above the threshold: 12%.
pub const EPF_EMPLOYER_RATE_UPPER: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Highest gross salary that still attracts the 13% employer rate.
pub const EPF_EMPLOYER_RATE_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Gross salary above which no SOCSO contribution is payable.
pub const SOCSO_WAGE_CEILING: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// EIS contributions are computed on gross salary capped at this amount.
pub const EIS_WAGE_CEILING: Decimal = Decimal::from_parts(4000, 0, 0, false, 0);

/// EIS rate applied to each side: 0.2%.
pub const EIS_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 3);

/// Overtime is paid at one and a half times the base rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Monthly hours used to derive an hourly rate from a basic salary.
pub const STANDARD_MONTHLY_HOURS: Decimal = Decimal::from_parts(160, 0, 0, false, 0);

/// One row of the SOCSO contribution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocsoBand {
    /// Highest gross salary (inclusive) covered by this band.
    pub upper_bound: Decimal,
    /// Employee share for the band.
    pub employee: Decimal,
    /// Employer share for the band.
    pub employer: Decimal,
}

const fn band(upper_bound: u32, employee_sen: u32, employer_sen: u32) -> SocsoBand {
    SocsoBand {
        upper_bound: Decimal::from_parts(upper_bound, 0, 0, false, 0),
        employee: Decimal::from_parts(employee_sen, 0, 0, false, 2),
        employer: Decimal::from_parts(employer_sen, 0, 0, false, 2),
    }
}

/// SOCSO bands in ascending order of upper bound.
///
/// This is a simplified schedule in RM 500 steps. Salaries at or below the
/// first bound fall into the first band; there is no lower band.
pub const SOCSO_BANDS: [SocsoBand; 9] = [
    band(1000, 500, 1750),
    band(1500, 750, 2625),
    band(2000, 1000, 3500),
    band(2500, 1250, 4375),
    band(3000, 1500, 5250),
    band(3500, 1750, 6125),
    band(4000, 2000, 7000),
    band(4500, 2250, 7875),
    band(5000, 2500, 8750),
];

/// Rounds a monetary amount to sen, halves away from zero.
///
/// `rust_decimal`'s default `round_dp` uses banker's rounding, which would
/// turn 2.345 into 2.34 instead of 2.35.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("6.5625").unwrap()), Decimal::from_str("6.56").unwrap());
/// assert_eq!(round_money(Decimal::from_str("2.345").unwrap()), Decimal::from_str("2.35").unwrap());
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// assert_eq!(round_money(Decimal::from_str("-0.125").unwrap()), Decimal::from_str("-0.13").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}
