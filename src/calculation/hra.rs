//! House Rent Allowance calculation.

use rust_decimal::Decimal;

use crate::config::HraConfig;

/// Computes House Rent Allowance.
///
/// HRA is always a percentage of **Basic Salary**, never of gross. A
/// disabled configuration contributes exactly 0 regardless of its
/// percentage.
pub fn house_rent_allowance(basic_salary: Decimal, config: &HraConfig) -> Decimal {
    if !config.enabled {
        return Decimal::ZERO;
    }

    basic_salary * config.percentage_of_basic / Decimal::ONE_HUNDRED
}
