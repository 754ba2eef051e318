//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod employee;
mod pay_period;
mod payroll_breakdown;

pub(crate) use payroll_breakdown::check_amount;

pub use attendance::AttendanceRecord;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PayrollRunResult};
pub use employee::{CitizenshipStatus, Employee, EmploymentCategory};
pub use pay_period::PayPeriod;
pub use payroll_breakdown::{
    ContributionResult, MAX_MONETARY_AMOUNT, MonetaryAmount, PayrollBreakdown,
};
