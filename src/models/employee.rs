//! Employee model and related types.
//!
//! This module defines the Employee struct together with the two
//! classifications that drive statutory eligibility: employment category
//! and citizenship status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::payroll_breakdown::MAX_MONETARY_AMOUNT;

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    /// Permanent employment.
    Permanent,
    /// Fixed-term contract employment.
    Contract,
    /// Part-time employment.
    #[serde(alias = "part-time")]
    PartTime,
    /// Internship. Exempt from every statutory scheme.
    Intern,
}

impl EmploymentCategory {
    /// Returns the snake_case name used in serialized output and audit steps.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentCategory::Permanent => "permanent",
            EmploymentCategory::Contract => "contract",
            EmploymentCategory::PartTime => "part_time",
            EmploymentCategory::Intern => "intern",
        }
    }

    /// Returns true if this category contributes to EPF, SOCSO and EIS.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmploymentCategory;
    ///
    /// assert!(EmploymentCategory::Permanent.is_statutory_eligible());
    /// assert!(!EmploymentCategory::Intern.is_statutory_eligible());
    /// ```
    pub fn is_statutory_eligible(&self) -> bool {
        !matches!(self, EmploymentCategory::Intern)
    }
}

/// Represents the employee's residency status for EPF purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitizenshipStatus {
    /// Malaysian citizen.
    Citizen,
    /// Permanent resident.
    PermanentResident,
    /// Foreign worker. Exempt from EPF.
    Foreigner,
}

impl CitizenshipStatus {
    /// Returns the snake_case name used in serialized output and audit steps.
    pub fn as_str(&self) -> &'static str {
        match self {
            CitizenshipStatus::Citizen => "citizen",
            CitizenshipStatus::PermanentResident => "permanent_resident",
            CitizenshipStatus::Foreigner => "foreigner",
        }
    }
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Monthly basic salary in RM. Used when no hourly rate is set.
    pub basic_salary: Decimal,
    /// Hourly rate in RM. When present, the employee is paid by the hour.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Citizenship status.
    pub citizenship_status: CitizenshipStatus,
    /// Employment category.
    pub employment_type: EmploymentCategory,
}

impl Employee {
    /// Returns true if the employee is paid by the hour.
    pub fn is_hourly(&self) -> bool {
        self.hourly_rate.is_some()
    }

    /// Checks the record before it is handed to the payroll calculators.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the id is blank, the basic
    /// salary is negative, the hourly rate is present but not positive, or
    /// either amount exceeds [`MAX_MONETARY_AMOUNT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{CitizenshipStatus, Employee, EmploymentCategory};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Aisyah".to_string(),
    ///     basic_salary: Decimal::new(-1, 0),
    ///     hourly_rate: None,
    ///     citizenship_status: CitizenshipStatus::Citizen,
    ///     employment_type: EmploymentCategory::Permanent,
    /// };
    /// assert!(employee.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.basic_salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "basic_salary".to_string(),
                message: format!("must not be negative, got {}", self.basic_salary),
            });
        }

        if self.basic_salary > MAX_MONETARY_AMOUNT {
            return Err(EngineError::InvalidEmployee {
                field: "basic_salary".to_string(),
                message: format!(
                    "must not exceed {}, got {}",
                    MAX_MONETARY_AMOUNT, self.basic_salary
                ),
            });
        }

        if let Some(rate) = self.hourly_rate.filter(|r| *r <= Decimal::ZERO) {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!("must be positive when set, got {}", rate),
            });
        }

        if let Some(rate) = self.hourly_rate.filter(|r| *r > MAX_MONETARY_AMOUNT) {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!("must not exceed {}, got {}", MAX_MONETARY_AMOUNT, rate),
            });
        }

        Ok(())
    }
}
