//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/payroll`,
//! `/payslip/daily-rate` and `/reports/statutory` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DailyRateInput;
use crate::models::{
    AttendanceRecord, CitizenshipStatus, Employee, EmploymentCategory, PayPeriod,
    PayrollBreakdown,
};

/// Request body for the `/payroll` endpoint.
///
/// Contains everything needed to run payroll for one employee and one
/// pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The month being paid.
    pub pay_period: PayPeriod,
    /// Attendance records for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Monthly basic salary in RM.
    pub basic_salary: Decimal,
    /// Hourly rate in RM for hourly-paid staff.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Citizenship status.
    pub citizenship_status: CitizenshipStatus,
    /// Employment category.
    pub employment_type: EmploymentCategory,
}

/// One attendance record in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The working date.
    pub date: NaiveDate,
    /// Clock-in time.
    pub clock_in: NaiveDateTime,
    /// Clock-out time, absent while the record is still open.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

/// Request body for the `/payslip/daily-rate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRatePayslipRequest {
    /// The employee the payslip is for.
    pub employee_id: String,
    /// Employment category, which selects the daily rate.
    pub employment_type: EmploymentCategory,
    /// Days worked in the period.
    pub days_worked: Decimal,
    /// Overtime hours worked in the period.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Whether the project bonus is paid.
    #[serde(default)]
    pub project_bonus: bool,
    /// Deductions computed elsewhere.
    #[serde(default)]
    pub deductions: Decimal,
}

/// Request body for the `/reports/statutory` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatutoryReportRequest {
    /// Payroll breakdowns to total.
    pub breakdowns: Vec<PayrollBreakdown>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            basic_salary: req.basic_salary,
            hourly_rate: req.hourly_rate,
            citizenship_status: req.citizenship_status,
            employment_type: req.employment_type,
        }
    }
}

impl From<AttendanceRequest> for AttendanceRecord {
    fn from(req: AttendanceRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
        }
    }
}

impl From<&DailyRatePayslipRequest> for DailyRateInput {
    fn from(req: &DailyRatePayslipRequest) -> Self {
        DailyRateInput {
            employment_type: req.employment_type,
            days_worked: req.days_worked,
            overtime_hours: req.overtime_hours,
            project_bonus: req.project_bonus,
            deductions: req.deductions,
        }
    }
}
