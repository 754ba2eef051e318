//! Configuration loading and management for the payroll engine.
//!
//! This module loads schedule metadata, the attendance policy and the
//! daily-rate payslip schedule from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded schedule: {}", config.schedule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendancePolicy, DailyRateSchedule, DailyRates, EngineConfig, PolicyConfig,
    ScheduleMetadata,
};
