//! Statutory Payroll Computation Engine
//!
//! This crate derives a monthly salary breakdown (Basic, HRA, Special
//! Allowance earnings; Provident Fund, Employee State Insurance and
//! Professional Tax deductions) from an employee's annual compensation and an
//! organization's statutory configuration.
//!
//! The engine is a pure library: no I/O on the computation path, no state
//! between calls, and it may be invoked concurrently for any number of
//! employees. Callers pass the configuration snapshot explicitly; the engine
//! never reaches for ambient session or organization context.
//!
//! # Example
//!
//! ```
//! use payroll_engine::compute_breakdown;
//! use payroll_engine::config::{RawStatutoryConfig, resolve_config};
//! use payroll_engine::models::CompensationInput;
//! use payroll_engine::tables::SlabRegistry;
//! use rust_decimal::Decimal;
//!
//! let config = resolve_config(&RawStatutoryConfig::default()).unwrap();
//! let compensation = CompensationInput::new(Decimal::from(600_000));
//! let tables = SlabRegistry::builtin();
//!
//! let breakdown = compute_breakdown(&compensation, &config, &tables).unwrap();
//! assert_eq!(breakdown.monthly_gross, Decimal::from(50_000));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod tables;

pub use calculation::compute_breakdown;
pub use config::resolve_config;
