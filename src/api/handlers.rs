//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DailyRateInput, calculate_daily_rate_payslip, run_payroll, summarize_contributions,
};
use crate::models::{AttendanceRecord, Employee};

use super::request::{DailyRatePayslipRequest, PayrollRequest, StatutoryReportRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/payslip/daily-rate", post(daily_rate_payslip_handler))
        .route("/reports/statutory", post(statutory_report_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /payroll.
///
/// Runs payroll for one employee and one month of attendance.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employee: Employee = request.employee.into();
    let pay_period = request.pay_period;
    let attendance: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match run_payroll(
        &employee,
        &pay_period,
        &attendance,
        state.config().daily_threshold_hours(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                records = attendance.len(),
                gross_pay = %result.breakdown.gross_pay,
                net_pay = %result.breakdown.net_pay,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll run completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                error = %err,
                "Payroll run failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /payslip/daily-rate.
async fn daily_rate_payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyRatePayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily-rate payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input = DailyRateInput::from(&request);
    if let Err(err) = input.validate() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %request.employee_id,
            error = %err,
            "Daily-rate input rejected"
        );
        return error_response(err.into());
    }

    let payslip = calculate_daily_rate_payslip(state.config().daily_rate_schedule(), &input);

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        employment_type = payslip.employment_type.as_str(),
        gross_pay = %payslip.gross_pay,
        "Daily-rate payslip calculated"
    );
    json_response(StatusCode::OK, payslip)
}

/// Handler for POST /reports/statutory.
async fn statutory_report_handler(
    payload: Result<Json<StatutoryReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statutory report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Some(err) = request.breakdowns.iter().find_map(|b| b.validate().err()) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Statutory report input rejected"
        );
        return error_response(err.into());
    }

    let totals = summarize_contributions(&request.breakdowns);
    info!(
        correlation_id = %correlation_id,
        records = totals.record_count,
        remittance = %totals.total_remittance(),
        "Statutory totals calculated"
    );
    json_response(StatusCode::OK, totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{AttendanceRequest, EmployeeRequest};
    use crate::calculation::{DailyRatePayslip, StatutoryTotals, calculate_payroll};
    use crate::config::ConfigLoader;
    use crate::models::{
        CitizenshipStatus, EmploymentCategory, PayPeriod, PayrollBreakdown, PayrollRunResult,
    };
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn attendance(date_str: &str, start: &str, end: &str) -> AttendanceRequest {
        let clock_in = make_datetime(date_str, start);
        AttendanceRequest {
            date: clock_in.date(),
            clock_in,
            clock_out: Some(make_datetime(date_str, end)),
        }
    }

    fn create_valid_request() -> PayrollRequest {
        PayrollRequest {
            employee: EmployeeRequest {
                id: "emp_001".to_string(),
                name: "Aisyah".to_string(),
                basic_salary: dec("3000"),
                hourly_rate: None,
                citizenship_status: CitizenshipStatus::Citizen,
                employment_type: EmploymentCategory::Permanent,
            },
            pay_period: PayPeriod { month: 3, year: 2025 },
            attendance: vec![
                attendance("2025-03-03", "09:00:00", "19:00:00"),
                attendance("2025-03-04", "09:00:00", "17:00:00"),
            ],
        }
    }

    async fn post(router: Router, uri: &str, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payroll_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post(router, "/payroll", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: PayrollRunResult = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.employee_id, "emp_001");
        assert_eq!(result.days_worked, 2);
        assert_eq!(result.breakdown.overtime_hours, dec("2"));
        // 3000 / 160 x 2 x 1.5
        assert_eq!(result.breakdown.overtime_pay, dec("56.25"));
        assert_eq!(result.breakdown.gross_pay, dec("3056.25"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post(router, "/payroll", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_basic_salary_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee": {
                "id": "emp_001",
                "citizenship_status": "citizen",
                "employment_type": "permanent"
            },
            "pay_period": { "month": 3, "year": 2025 }
        }"#;

        let response = post(router, "/payroll", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("basic_salary"));
    }

    #[tokio::test]
    async fn test_invalid_month_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.pay_period = PayPeriod { month: 13, year: 2025 };
        request.attendance.clear();

        let response = post(router, "/payroll", serde_json::to_string(&request).unwrap()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_PAY_PERIOD");
    }

    #[tokio::test]
    async fn test_inverted_attendance_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.attendance = vec![attendance("2025-03-05", "17:00:00", "09:00:00")];

        let response = post(router, "/payroll", serde_json::to_string(&request).unwrap()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_ATTENDANCE");
    }

    #[tokio::test]
    async fn test_daily_rate_payslip_uses_configured_rates() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee_id": "emp_004",
            "employment_type": "contract",
            "days_worked": "20",
            "overtime_hours": "4",
            "project_bonus": true,
            "deductions": "150"
        }"#;

        let response = post(router, "/payslip/daily-rate", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let payslip: DailyRatePayslip =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        // 20 x 100 + 4 x 15 + 200
        assert_eq!(payslip.gross_pay, dec("2260"));
        assert_eq!(payslip.net_pay, dec("2110"));
    }

    #[tokio::test]
    async fn test_negative_days_rejected() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee_id": "emp_004",
            "employment_type": "permanent",
            "days_worked": "-1"
        }"#;

        let response = post(router, "/payslip/daily-rate", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_negative_deductions_rejected() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee_id": "emp_004",
            "employment_type": "permanent",
            "days_worked": "20",
            "deductions": "-500"
        }"#;

        let response = post(router, "/payslip/daily-rate", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("deductions"));
    }

    #[tokio::test]
    async fn test_statutory_report_totals_breakdowns() {
        let router = create_router(create_test_state());
        let breakdown: PayrollBreakdown = calculate_payroll(
            dec("3000"),
            dec("160"),
            Decimal::ZERO,
            None,
            CitizenshipStatus::Citizen,
            EmploymentCategory::Permanent,
        );
        let body = serde_json::json!({ "breakdowns": [breakdown.clone(), breakdown] });

        let response = post(router, "/reports/statutory", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let totals: StatutoryTotals = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(totals.record_count, 2);
        assert_eq!(totals.epf.employee, dec("660.00"));
        assert_eq!(totals.socso.employer, dec("105.00"));
        assert_eq!(totals.eis.total, dec("24.00"));
    }
}
