//! Special Allowance calculation.

use rust_decimal::Decimal;

/// Computes Special Allowance as the non-negative residual of monthly gross
/// after Basic Salary and HRA.
///
/// This is a balancing figure, not an independently configured quantity.
/// When Basic + HRA exceeds gross (pathological configuration, e.g. an HRA
/// percentage far above 100), the residual clamps to 0 rather than going
/// negative.
pub fn special_allowance(monthly_gross: Decimal, basic_salary: Decimal, hra: Decimal) -> Decimal {
    (monthly_gross - basic_salary - hra).max(Decimal::ZERO)
}
