//! Payroll breakdown models.
//!
//! [`PayrollBreakdown`] is the value the payroll aggregator produces for one
//! employee and one pay period. Persistence, payslip rendering and the
//! statutory report read these fields; none of them recompute them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An amount of Malaysian Ringgit.
pub type MonetaryAmount = Decimal;

/// Largest monthly amount the engine accepts, RM10,000,000.
pub const MAX_MONETARY_AMOUNT: MonetaryAmount = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Rejects an amount whose magnitude exceeds [`MAX_MONETARY_AMOUNT`].
pub(crate) fn check_amount(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount.abs() > MAX_MONETARY_AMOUNT {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!(
                "must not exceed {} in magnitude, got {}",
                MAX_MONETARY_AMOUNT, amount
            ),
        });
    }
    Ok(())
}

/// The employee and employer halves of one statutory scheme for one period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ContributionResult;
/// use rust_decimal::Decimal;
///
/// let socso = ContributionResult::new(Decimal::new(1750, 2), Decimal::new(6125, 2));
/// assert_eq!(socso.total(), Decimal::new(7875, 2));
/// assert!(ContributionResult::zero().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContributionResult {
    /// Deducted from the employee's gross pay.
    pub employee: MonetaryAmount,
    /// Paid by the employer on top of gross pay.
    pub employer: MonetaryAmount,
}

impl ContributionResult {
    /// Creates a contribution pair.
    pub fn new(employee: MonetaryAmount, employer: MonetaryAmount) -> Self {
        Self { employee, employer }
    }

    /// A scheme that does not apply.
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }

    /// Returns true when neither side contributes.
    pub fn is_zero(&self) -> bool {
        self.employee.is_zero() && self.employer.is_zero()
    }

    /// Employee plus employer share.
    pub fn total(&self) -> MonetaryAmount {
        self.employee + self.employer
    }
}

/// The complete payroll figures for one employee and one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Regular hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Pay for regular hours, or the basic salary for salaried staff.
    pub regular_pay: MonetaryAmount,
    /// Pay for overtime hours.
    pub overtime_pay: MonetaryAmount,
    /// Regular pay plus overtime pay.
    pub gross_pay: MonetaryAmount,
    /// Employees Provident Fund contribution.
    pub epf: ContributionResult,
    /// Social Security Organization contribution.
    pub socso: ContributionResult,
    /// Employment Insurance System contribution.
    pub eis: ContributionResult,
    /// Sum of the employee halves of EPF, SOCSO and EIS.
    pub total_deductions: MonetaryAmount,
    /// Gross pay minus total deductions.
    pub net_pay: MonetaryAmount,
}

impl PayrollBreakdown {
    /// Sum of the employer halves of EPF, SOCSO and EIS.
    pub fn total_employer_contributions(&self) -> MonetaryAmount {
        self.epf.employer + self.socso.employer + self.eis.employer
    }

    /// Gross pay plus every employer contribution.
    pub fn employer_cost(&self) -> MonetaryAmount {
        self.gross_pay + self.total_employer_contributions()
    }

    /// Checks a breakdown received from outside the engine before it is summed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if any summed amount exceeds
    /// [`MAX_MONETARY_AMOUNT`] in magnitude.
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("gross_pay", self.gross_pay)?;
        check_amount("net_pay", self.net_pay)?;
        let schemes = [("epf", &self.epf), ("socso", &self.socso), ("eis", &self.eis)];
        for (scheme, contribution) in schemes {
            check_amount(&format!("{}.employee", scheme), contribution.employee)?;
            check_amount(&format!("{}.employer", scheme), contribution.employer)?;
        }
        Ok(())
    }
}
