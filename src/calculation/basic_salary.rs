//! Basic Salary calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Computes Basic Salary as a percentage of monthly gross.
///
/// The percentage must lie in the half-open interval (0, 100]. Values
/// outside the range are a validation error rather than being silently
/// clamped, so bad data entry surfaces upstream instead of producing a
/// plausible-looking breakdown.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::basic_salary;
/// use rust_decimal::Decimal;
///
/// let basic = basic_salary(Decimal::from(50_000), Decimal::from(50)).unwrap();
/// assert_eq!(basic, Decimal::from(25_000));
/// ```
pub fn basic_salary(monthly_gross: Decimal, basic_percentage: Decimal) -> EngineResult<Decimal> {
    if basic_percentage <= Decimal::ZERO || basic_percentage > Decimal::ONE_HUNDRED {
        return Err(EngineError::InvalidInput {
            field: "basicPercentage".to_string(),
            message: format!("must be in (0, 100], got {basic_percentage}"),
        });
    }

    Ok(monthly_gross * basic_percentage / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fifty_percent_of_gross() {
        assert_eq!(basic_salary(dec("50000"), dec("50")).unwrap(), dec("25000"));
    }

    #[test]
    fn test_hundred_percent_is_allowed() {
        assert_eq!(
            basic_salary(dec("50000"), dec("100")).unwrap(),
            dec("50000")
        );
    }

    #[test]
    fn test_zero_percentage_is_rejected() {
        match basic_salary(dec("50000"), Decimal::ZERO).unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "basicPercentage"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_over_hundred_percentage_is_rejected() {
        assert!(basic_salary(dec("50000"), dec("100.01")).is_err());
    }

    #[test]
    fn test_negative_percentage_is_rejected() {
        assert!(basic_salary(dec("50000"), dec("-50")).is_err());
    }

    #[test]
    fn test_fractional_percentage() {
        assert_eq!(
            basic_salary(dec("40000"), dec("42.5")).unwrap(),
            dec("17000")
        );
    }
}
