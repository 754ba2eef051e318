//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! engine's configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentCategory;

use super::types::{DailyRateSchedule, EngineConfig, PolicyConfig, ScheduleMetadata};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── schedule.yaml   # Schedule metadata
/// └── policy.yaml     # Attendance threshold and daily-rate schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::EmploymentCategory;
///
/// let loader = ConfigLoader::load("./config/payroll")?;
/// println!("Loaded schedule: {}", loader.schedule().name);
/// println!("Contract daily rate: RM{}", loader.get_daily_rate(EmploymentCategory::Contract));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if a file is missing and `ConfigParseError`
    /// if a file is not valid YAML for its expected shape or holds a
    /// non-positive overtime threshold.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let metadata = Self::load_yaml::<ScheduleMetadata>(&schedule_path)?;

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;

        if policy.attendance.daily_threshold_hours <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: "attendance.daily_threshold_hours must be positive".to_string(),
            });
        }

        Ok(Self {
            config: EngineConfig::new(metadata, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn schedule(&self) -> &ScheduleMetadata {
        self.config.schedule()
    }

    /// Returns the hours per day after which attendance counts as overtime.
    pub fn daily_threshold_hours(&self) -> Decimal {
        self.config.attendance().daily_threshold_hours
    }

    /// Returns the daily-rate payslip schedule.
    pub fn daily_rate_schedule(&self) -> &DailyRateSchedule {
        self.config.daily_rate()
    }

    /// Gets the flat daily rate for an employment category.
    pub fn get_daily_rate(&self, category: EmploymentCategory) -> Decimal {
        self.config.daily_rate().rate_for(category)
    }
}
