//! Calculation logic for the payroll engine.
//!
//! This module contains the statutory rate tables, the EPF, SOCSO and EIS
//! contribution calculators, the payroll aggregator that combines them, the
//! independent daily-rate payslip calculator, attendance aggregation, the
//! payroll run workflow and statutory report totals.

mod attendance_summary;
mod daily_rate;
mod eis;
mod epf;
mod payroll;
mod payroll_run;
mod rate_tables;
mod socso;
mod statutory_report;

pub use attendance_summary::{
    AttendanceSummary, DEFAULT_DAILY_OVERTIME_THRESHOLD, split_daily_hours, summarize_attendance,
};
pub use daily_rate::{
    DailyRateInput, DailyRatePayslip, MAX_DAYS_WORKED, MAX_MONTHLY_HOURS,
    calculate_daily_rate_payslip,
};
pub use eis::calculate_eis;
pub use epf::{calculate_epf, epf_employer_rate};
pub use payroll::calculate_payroll;
pub use payroll_run::run_payroll;
pub use rate_tables::{
    EIS_RATE, EIS_WAGE_CEILING, EPF_EMPLOYEE_RATE, EPF_EMPLOYER_RATE_LOWER,
    EPF_EMPLOYER_RATE_THRESHOLD, EPF_EMPLOYER_RATE_UPPER, MONEY_DP, OVERTIME_MULTIPLIER,
    SOCSO_BANDS, SOCSO_WAGE_CEILING, STANDARD_MONTHLY_HOURS, SocsoBand, round_money,
};
pub use socso::{calculate_socso, find_socso_band};
pub use statutory_report::{SchemeTotals, StatutoryTotals, summarize_contributions};
