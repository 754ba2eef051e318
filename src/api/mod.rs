//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for running payroll, producing
//! daily-rate payslips and totalling statutory contributions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, DailyRatePayslipRequest, EmployeeRequest, PayrollRequest,
    StatutoryReportRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
