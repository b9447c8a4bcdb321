//! Calculation logic for the Statutory Payroll Computation Engine.
//!
//! One module per pay component: monthly gross, Basic Salary, House Rent
//! Allowance, the Special Allowance residual, Provident Fund and Employee
//! State Insurance, plus the [`compute_breakdown`] orchestrator that runs
//! them in dependency order.
//!
//! All contribution rates and percentages are plain numbers meaning
//! "percent" (12 means 12%); every formula divides by 100 at the point of
//! use. This convention is uniform across PF, ESI and HRA.

mod basic_salary;
mod breakdown;
mod esi;
mod gross;
mod hra;
mod provident_fund;
mod special_allowance;

pub use basic_salary::basic_salary;
pub use breakdown::compute_breakdown;
pub use esi::{EsiResult, employee_state_insurance};
pub use gross::monthly_gross;
pub use hra::house_rent_allowance;
pub use provident_fund::{ProvidentFundResult, provident_fund};
pub use special_allowance::special_allowance;
