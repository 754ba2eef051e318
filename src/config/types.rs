//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Statutory rates are not
//! configuration; they live in [`crate::calculation`] as constants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmploymentCategory;

/// Metadata about the payroll schedule in force.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// Short code identifying the schedule (e.g., "MY-STATUTORY").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the official reference.
    pub source_url: String,
}

/// Attendance policy.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendancePolicy {
    /// Hours per day before overtime starts.
    pub daily_threshold_hours: Decimal,
}

/// Flat daily rates per employment category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRates {
    /// Daily rate for permanent employees.
    pub permanent: Decimal,
    /// Daily rate for contract employees.
    pub contract: Decimal,
    /// Daily rate for part-time employees.
    pub part_time: Decimal,
    /// Daily rate for interns.
    pub intern: Decimal,
}

/// Rate schedule for the daily-rate payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRateSchedule {
    /// Flat daily rate per category.
    pub rates: DailyRates,
    /// Flat rate paid per overtime hour, for every category.
    pub overtime_hourly_rate: Decimal,
    /// Fixed amount paid when a project bonus is awarded.
    pub project_bonus: Decimal,
}

impl DailyRateSchedule {
    /// Returns the daily rate for an employment category.
    pub fn rate_for(&self, category: EmploymentCategory) -> Decimal {
        match category {
            EmploymentCategory::Permanent => self.rates.permanent,
            EmploymentCategory::Contract => self.rates.contract,
            EmploymentCategory::PartTime => self.rates.part_time,
            EmploymentCategory::Intern => self.rates.intern,
        }
    }
}

/// Policy configuration from policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Attendance policy.
    pub attendance: AttendancePolicy,
    /// Daily-rate payslip schedule.
    pub daily_rate: DailyRateSchedule,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: ScheduleMetadata,
    policy: PolicyConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: ScheduleMetadata, policy: PolicyConfig) -> Self {
        Self { metadata, policy }
    }

    /// Returns the schedule metadata.
    pub fn schedule(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the attendance policy.
    pub fn attendance(&self) -> &AttendancePolicy {
        &self.policy.attendance
    }

    /// Returns the daily-rate payslip schedule.
    pub fn daily_rate(&self) -> &DailyRateSchedule {
        &self.policy.daily_rate
    }
}
