//! Payroll engine for Malaysian statutory contributions
//!
//! This crate computes gross pay, EPF, SOCSO and EIS contributions and net
//! pay for employees, aggregates attendance into regular and overtime hours,
//! and serves the calculations over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
