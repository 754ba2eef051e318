//! Property tests for the statutory contribution calculators.

use payroll_engine::calculation::{
    EIS_WAGE_CEILING, SOCSO_WAGE_CEILING, calculate_eis, calculate_epf, calculate_payroll,
    calculate_socso, summarize_contributions,
};
use payroll_engine::models::{CitizenshipStatus, EmploymentCategory};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Gross pay in sen, up to RM20,000.
fn gross_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=2_000_000).prop_map(|sen| Decimal::new(sen, 2))
}

fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=2_400).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn citizenship_strategy() -> impl Strategy<Value = CitizenshipStatus> {
    prop_oneof![
        Just(CitizenshipStatus::Citizen),
        Just(CitizenshipStatus::PermanentResident),
        Just(CitizenshipStatus::Foreigner),
    ]
}

fn category_strategy() -> impl Strategy<Value = EmploymentCategory> {
    prop_oneof![
        Just(EmploymentCategory::Permanent),
        Just(EmploymentCategory::Contract),
        Just(EmploymentCategory::PartTime),
        Just(EmploymentCategory::Intern),
    ]
}

fn has_at_most_two_places(amount: Decimal) -> bool {
    amount.round_dp(2) == amount
}

proptest! {
    #[test]
    fn socso_is_zero_above_ceiling(sen in 1i64..=1_500_000) {
        let gross = SOCSO_WAGE_CEILING + Decimal::new(sen, 2);
        let socso = calculate_socso(gross);
        prop_assert_eq!(socso.employee, Decimal::ZERO);
        prop_assert_eq!(socso.employer, Decimal::ZERO);
    }

    #[test]
    fn socso_employer_is_three_and_a_half_times_employee(gross in gross_strategy()) {
        let socso = calculate_socso(gross);
        prop_assert_eq!(socso.employer, socso.employee * Decimal::new(35, 1));
    }

    #[test]
    fn eis_shares_are_equal(gross in gross_strategy()) {
        let eis = calculate_eis(gross);
        prop_assert_eq!(eis.employee, eis.employer);
    }

    #[test]
    fn eis_is_capped_at_ceiling(sen in 1i64..=1_600_000) {
        let gross = EIS_WAGE_CEILING + Decimal::new(sen, 2);
        prop_assert_eq!(calculate_eis(gross), calculate_eis(EIS_WAGE_CEILING));
    }

    #[test]
    fn foreigners_never_pay_epf(gross in gross_strategy()) {
        let epf = calculate_epf(gross, CitizenshipStatus::Foreigner);
        prop_assert!(epf.is_zero());
    }

    #[test]
    fn epf_is_the_same_for_citizens_and_residents(gross in gross_strategy()) {
        prop_assert_eq!(
            calculate_epf(gross, CitizenshipStatus::Citizen),
            calculate_epf(gross, CitizenshipStatus::PermanentResident)
        );
    }

    #[test]
    fn interns_take_home_gross(
        basic in gross_strategy(),
        overtime in hours_strategy(),
        citizenship in citizenship_strategy(),
    ) {
        let breakdown = calculate_payroll(
            basic,
            Decimal::new(160, 0),
            overtime,
            None,
            citizenship,
            EmploymentCategory::Intern,
        );
        prop_assert!(breakdown.epf.is_zero());
        prop_assert!(breakdown.socso.is_zero());
        prop_assert!(breakdown.eis.is_zero());
        prop_assert_eq!(breakdown.net_pay, breakdown.gross_pay);
    }

    #[test]
    fn breakdown_is_internally_consistent(
        basic in gross_strategy(),
        regular in hours_strategy(),
        overtime in hours_strategy(),
        hourly_sen in prop::option::of(100i64..=20_000),
        citizenship in citizenship_strategy(),
        category in category_strategy(),
    ) {
        let hourly_rate = hourly_sen.map(|sen| Decimal::new(sen, 2));
        let breakdown =
            calculate_payroll(basic, regular, overtime, hourly_rate, citizenship, category);

        prop_assert!(has_at_most_two_places(breakdown.gross_pay));
        prop_assert!(has_at_most_two_places(breakdown.net_pay));
        prop_assert_eq!(
            breakdown.total_deductions,
            breakdown.epf.employee + breakdown.socso.employee + breakdown.eis.employee
        );
        prop_assert_eq!(breakdown.net_pay, breakdown.gross_pay - breakdown.total_deductions);
        prop_assert!(breakdown.net_pay <= breakdown.gross_pay);
    }

    #[test]
    fn payroll_is_deterministic(
        basic in gross_strategy(),
        overtime in hours_strategy(),
        citizenship in citizenship_strategy(),
        category in category_strategy(),
    ) {
        let run = || {
            calculate_payroll(basic, Decimal::new(160, 0), overtime, None, citizenship, category)
        };
        let first = serde_json::to_string(&run()).unwrap();
        let second = serde_json::to_string(&run()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn statutory_totals_match_per_record_sums(
        salaries in proptest::collection::vec(gross_strategy(), 0..20),
        citizenship in citizenship_strategy(),
    ) {
        let breakdowns: Vec<_> = salaries
            .iter()
            .map(|basic| {
                calculate_payroll(
                    *basic,
                    Decimal::new(160, 0),
                    Decimal::ZERO,
                    None,
                    citizenship,
                    EmploymentCategory::Permanent,
                )
            })
            .collect();

        let totals = summarize_contributions(&breakdowns);

        prop_assert_eq!(totals.record_count as usize, breakdowns.len());
        prop_assert_eq!(
            totals.gross_pay,
            breakdowns.iter().map(|b| b.gross_pay).sum::<Decimal>()
        );
        prop_assert_eq!(
            totals.total_remittance(),
            breakdowns
                .iter()
                .map(|b| b.epf.total() + b.socso.total() + b.eis.total())
                .sum::<Decimal>()
        );
    }
}
