//! Core data models for the payroll engine.

mod breakdown;
mod compensation;

pub use breakdown::SalaryBreakdown;
pub use compensation::{CompensationInput, DEFAULT_BASIC_PERCENTAGE};
