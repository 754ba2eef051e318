//! Payroll run for one employee and one pay period.
//!
//! This is the entry point used by the payroll-generation workflow: it
//! validates the employee and period, aggregates attendance, calls
//! [`calculate_payroll`] and records an audit trace of every decision.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, CitizenshipStatus, ContributionResult, Employee,
    PayPeriod, PayrollBreakdown, PayrollRunResult,
};

use super::attendance_summary::{AttendanceSummary, summarize_attendance};
use super::epf::epf_employer_rate;
use super::payroll::calculate_payroll;
use super::rate_tables::{EIS_WAGE_CEILING, SOCSO_WAGE_CEILING, STANDARD_MONTHLY_HOURS};
use super::socso::find_socso_band;

const EMPLOYMENT_ACT_REF: &str = "Employment Act 1955, s.60A";
const EPF_REF: &str = "Employees Provident Fund Act 1991, Third Schedule";
const SOCSO_REF: &str = "Employees' Social Security Act 1969, Second Schedule";
const EIS_REF: &str = "Employment Insurance System Act 2017, Second Schedule";

/// Runs payroll for one employee and one pay period.
///
/// # Errors
///
/// Returns an error if the employee record or pay period is invalid, or if
/// an attendance record has its clock-out before its clock-in.
pub fn run_payroll(
    employee: &Employee,
    pay_period: &PayPeriod,
    attendance: &[AttendanceRecord],
    daily_threshold: Decimal,
) -> EngineResult<PayrollRunResult> {
    let start_time = Instant::now();

    employee.validate()?;
    pay_period.validate()?;

    let summary = summarize_attendance(attendance, pay_period, daily_threshold)?;
    debug!(
        employee_id = %employee.id,
        days_worked = summary.days_worked,
        regular_hours = %summary.regular_hours,
        overtime_hours = %summary.overtime_hours,
        "Attendance summarised"
    );

    let breakdown = calculate_payroll(
        employee.basic_salary,
        summary.regular_hours,
        summary.overtime_hours,
        employee.hourly_rate,
        employee.citizenship_status,
        employee.employment_type,
    );

    let steps = build_audit_steps(employee, &summary, daily_threshold, &breakdown);

    Ok(PayrollRunResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        pay_period: *pay_period,
        days_worked: summary.days_worked,
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings: summary.warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

fn contribution_json(contribution: &ContributionResult) -> serde_json::Value {
    serde_json::json!({
        "employee": contribution.employee.to_string(),
        "employer": contribution.employer.to_string()
    })
}

fn build_audit_steps(
    employee: &Employee,
    summary: &AttendanceSummary,
    daily_threshold: Decimal,
    breakdown: &PayrollBreakdown,
) -> Vec<AuditStep> {
    let eligible = employee.employment_type.is_statutory_eligible();
    let foreigner = employee.citizenship_status == CitizenshipStatus::Foreigner;
    let category = employee.employment_type.as_str();
    let citizenship = employee.citizenship_status.as_str();
    let gross = breakdown.gross_pay;

    let pay_basis_reasoning = match employee.hourly_rate {
        Some(rate) => format!(
            "Hourly: {} h x RM{} + {} h x RM{} x 1.5 = RM{}",
            breakdown.regular_hours.normalize(),
            rate.normalize(),
            breakdown.overtime_hours.normalize(),
            rate.normalize(),
            gross
        ),
        None => format!(
            "Salaried: RM{} + (RM{} / {} x {} h x 1.5) = RM{}",
            employee.basic_salary.normalize(),
            employee.basic_salary.normalize(),
            STANDARD_MONTHLY_HOURS,
            breakdown.overtime_hours.normalize(),
            gross
        ),
    };

    let epf_reasoning = if !eligible {
        format!("No EPF - employee is {}", category)
    } else if foreigner {
        "No EPF - foreign workers are exempt".to_string()
    } else {
        format!(
            "RM{} x 11% = RM{} employee, RM{} x {}% = RM{} employer",
            gross,
            breakdown.epf.employee,
            gross,
            (epf_employer_rate(gross) * Decimal::ONE_HUNDRED).normalize(),
            breakdown.epf.employer
        )
    };

    let socso_reasoning = if !eligible {
        format!("No SOCSO - employee is {}", category)
    } else if gross > SOCSO_WAGE_CEILING {
        format!("No SOCSO - RM{} is above the RM{} ceiling", gross, SOCSO_WAGE_CEILING)
    } else {
        format!(
            "RM{} falls in band up to RM{}: RM{} employee, RM{} employer",
            gross,
            find_socso_band(gross)
                .map(|b| b.upper_bound)
                .unwrap_or(SOCSO_WAGE_CEILING),
            breakdown.socso.employee,
            breakdown.socso.employer
        )
    };

    let eis_reasoning = if !eligible {
        format!("No EIS - employee is {}", category)
    } else {
        format!(
            "RM{} capped at RM{} x 0.2% = RM{} each side",
            gross,
            gross.min(EIS_WAGE_CEILING),
            breakdown.eis.employee
        )
    };

    vec![
        AuditStep {
            step_number: 1,
            rule_id: "attendance_summary".to_string(),
            rule_name: "Attendance Summary".to_string(),
            legal_ref: EMPLOYMENT_ACT_REF.to_string(),
            input: serde_json::json!({
                "daily_threshold_hours": daily_threshold.normalize().to_string(),
                "skipped_records": summary.warnings.len()
            }),
            output: serde_json::json!({
                "days_worked": summary.days_worked,
                "regular_hours": summary.regular_hours.normalize().to_string(),
                "overtime_hours": summary.overtime_hours.normalize().to_string()
            }),
            reasoning: format!(
                "{} days worked: {} regular hours, {} overtime hours beyond {} h/day",
                summary.days_worked,
                summary.regular_hours.normalize(),
                summary.overtime_hours.normalize(),
                daily_threshold.normalize()
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "pay_basis".to_string(),
            rule_name: "Gross Pay".to_string(),
            legal_ref: EMPLOYMENT_ACT_REF.to_string(),
            input: serde_json::json!({
                "basic_salary": employee.basic_salary.to_string(),
                "hourly_rate": employee.hourly_rate.map(|r| r.to_string()),
                "regular_hours": breakdown.regular_hours.normalize().to_string(),
                "overtime_hours": breakdown.overtime_hours.normalize().to_string()
            }),
            output: serde_json::json!({
                "regular_pay": breakdown.regular_pay.to_string(),
                "overtime_pay": breakdown.overtime_pay.to_string(),
                "gross_pay": gross.to_string()
            }),
            reasoning: pay_basis_reasoning,
        },
        AuditStep {
            step_number: 3,
            rule_id: "statutory_eligibility".to_string(),
            rule_name: "Statutory Eligibility".to_string(),
            legal_ref: EPF_REF.to_string(),
            input: serde_json::json!({
                "employment_type": category,
                "citizenship_status": citizenship
            }),
            output: serde_json::json!({
                "statutory_eligible": eligible,
                "epf_eligible": eligible && !foreigner
            }),
            reasoning: if eligible {
                format!("{} {} employee is covered by statutory schemes", citizenship, category)
            } else {
                "Interns are exempt from EPF, SOCSO and EIS".to_string()
            },
        },
        AuditStep {
            step_number: 4,
            rule_id: "epf_contribution".to_string(),
            rule_name: "EPF Contribution".to_string(),
            legal_ref: EPF_REF.to_string(),
            input: serde_json::json!({ "gross_pay": gross.to_string(), "citizenship_status": citizenship }),
            output: contribution_json(&breakdown.epf),
            reasoning: epf_reasoning,
        },
        AuditStep {
            step_number: 5,
            rule_id: "socso_contribution".to_string(),
            rule_name: "SOCSO Contribution".to_string(),
            legal_ref: SOCSO_REF.to_string(),
            input: serde_json::json!({ "gross_pay": gross.to_string() }),
            output: contribution_json(&breakdown.socso),
            reasoning: socso_reasoning,
        },
        AuditStep {
            step_number: 6,
            rule_id: "eis_contribution".to_string(),
            rule_name: "EIS Contribution".to_string(),
            legal_ref: EIS_REF.to_string(),
            input: serde_json::json!({ "gross_pay": gross.to_string() }),
            output: contribution_json(&breakdown.eis),
            reasoning: eis_reasoning,
        },
        AuditStep {
            step_number: 7,
            rule_id: "net_pay".to_string(),
            rule_name: "Net Pay".to_string(),
            legal_ref: EMPLOYMENT_ACT_REF.to_string(),
            input: serde_json::json!({
                "gross_pay": gross.to_string(),
                "total_deductions": breakdown.total_deductions.to_string()
            }),
            output: serde_json::json!({ "net_pay": breakdown.net_pay.to_string() }),
            reasoning: format!(
                "RM{} - (RM{} + RM{} + RM{}) = RM{}",
                gross,
                breakdown.epf.employee,
                breakdown.socso.employee,
                breakdown.eis.employee,
                breakdown.net_pay
            ),
        },
    ]
}
