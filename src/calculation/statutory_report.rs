//! Statutory contribution totals across many payroll records.
//!
//! Monthly EPF, SOCSO and EIS remittances are the sums of the per-record
//! amounts already held in each [`PayrollBreakdown`]. Nothing is recomputed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ContributionResult, MonetaryAmount, PayrollBreakdown};

/// Totals for one statutory scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeTotals {
    /// Sum of employee shares.
    pub employee: MonetaryAmount,
    /// Sum of employer shares.
    pub employer: MonetaryAmount,
    /// Employee plus employer, the amount remitted.
    pub total: MonetaryAmount,
}

impl SchemeTotals {
    fn add(&mut self, contribution: &ContributionResult) {
        self.employee += contribution.employee;
        self.employer += contribution.employer;
        self.total += contribution.total();
    }
}

/// Totals across a set of payroll records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryTotals {
    /// Number of payroll records summed.
    pub record_count: u32,
    /// Sum of gross pay.
    pub gross_pay: MonetaryAmount,
    /// Sum of net pay.
    pub net_pay: MonetaryAmount,
    /// EPF totals.
    pub epf: SchemeTotals,
    /// SOCSO totals.
    pub socso: SchemeTotals,
    /// EIS totals.
    pub eis: SchemeTotals,
}

impl StatutoryTotals {
    /// Amount the employer remits across all three schemes.
    pub fn total_remittance(&self) -> MonetaryAmount {
        self.epf.total + self.socso.total + self.eis.total
    }
}

/// Sums the statutory contributions of a set of payroll records.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_payroll, summarize_contributions};
/// use payroll_engine::models::{CitizenshipStatus, EmploymentCategory};
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_payroll(
///     Decimal::new(2000, 0),
///     Decimal::new(160, 0),
///     Decimal::ZERO,
///     None,
///     CitizenshipStatus::Citizen,
///     EmploymentCategory::Permanent,
/// );
///
/// let totals = summarize_contributions(&[breakdown.clone(), breakdown]);
/// assert_eq!(totals.record_count, 2);
/// assert_eq!(totals.epf.employee, Decimal::new(440, 0));
/// ```
pub fn summarize_contributions(breakdowns: &[PayrollBreakdown]) -> StatutoryTotals {
    breakdowns
        .iter()
        .fold(StatutoryTotals::default(), |mut totals, breakdown| {
            totals.record_count += 1;
            totals.gross_pay += breakdown.gross_pay;
            totals.net_pay += breakdown.net_pay;
            totals.epf.add(&breakdown.epf);
            totals.socso.add(&breakdown.socso);
            totals.eis.add(&breakdown.eis);
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_payroll;
    use crate::models::{CitizenshipStatus, EmploymentCategory};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn breakdown(
        basic: &str,
        citizenship: CitizenshipStatus,
        category: EmploymentCategory,
    ) -> PayrollBreakdown {
        calculate_payroll(
            dec(basic),
            dec("160"),
            Decimal::ZERO,
            None,
            citizenship,
            category,
        )
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let totals = summarize_contributions(&[]);
        assert_eq!(totals.record_count, 0);
        assert_eq!(totals.total_remittance(), Decimal::ZERO);
    }

    #[test]
    fn test_mixed_workforce_totals() {
        let records = vec![
            breakdown("3000", CitizenshipStatus::Citizen, EmploymentCategory::Permanent),
            breakdown("2000", CitizenshipStatus::Foreigner, EmploymentCategory::Contract),
            breakdown("1500", CitizenshipStatus::Citizen, EmploymentCategory::Intern),
        ];

        let totals = summarize_contributions(&records);

        assert_eq!(totals.record_count, 3);
        assert_eq!(totals.gross_pay, dec("6500"));
        // Only the citizen on 3000 pays EPF
        assert_eq!(totals.epf.employee, dec("330.00"));
        assert_eq!(totals.epf.employer, dec("390.00"));
        // 3000 band + 2000 band, the intern is exempt
        assert_eq!(totals.socso.employee, dec("25.00"));
        assert_eq!(totals.socso.employer, dec("87.50"));
        assert_eq!(totals.eis.employee, dec("10.00"));
        assert_eq!(totals.eis.total, dec("20.00"));
    }

    #[test]
    fn test_totals_are_additive_per_record() {
        let records = vec![
            breakdown("3281.25", CitizenshipStatus::Citizen, EmploymentCategory::Permanent),
            breakdown("5200", CitizenshipStatus::PermanentResident, EmploymentCategory::Contract),
        ];

        let totals = summarize_contributions(&records);

        let expected_epf: Decimal = records.iter().map(|r| r.epf.total()).sum();
        let expected_net: Decimal = records.iter().map(|r| r.net_pay).sum();
        assert_eq!(totals.epf.total, expected_epf);
        assert_eq!(totals.net_pay, expected_net);
        assert_eq!(
            totals.total_remittance(),
            records
                .iter()
                .map(|r| r.epf.total() + r.socso.total() + r.eis.total())
                .sum::<Decimal>()
        );
    }
}
