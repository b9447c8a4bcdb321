//! Employee State Insurance calculation.

use rust_decimal::Decimal;

use crate::config::EsiConfig;

/// Employee and employer ESI contributions for one month.
///
/// The employer side is informational display only; it is never deducted
/// from net pay.
#[derive(Debug, Clone, PartialEq)]
pub struct EsiResult {
    /// Employee-side contribution, deducted from pay.
    pub employee: Decimal,
    /// Employer-side contribution, informational.
    pub employer: Decimal,
}

/// Computes Employee State Insurance contributions.
///
/// ESI is proportional to **monthly gross** and applies only when the
/// component is enabled AND the gross does not exceed the wage ceiling.
/// The ceiling comparison is inclusive: an employee earning exactly the
/// limit still owes ESI, one paisa above owes none even when ESI is
/// enabled org-wide.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::employee_state_insurance;
/// use payroll_engine::config::EsiConfig;
/// use rust_decimal::Decimal;
///
/// let config = EsiConfig { enabled: true, ..Default::default() };
/// let esi = employee_state_insurance(Decimal::from(15_000), &config);
/// assert_eq!(esi.employee, "112.5".parse::<Decimal>().unwrap());
/// ```
pub fn employee_state_insurance(monthly_gross: Decimal, config: &EsiConfig) -> EsiResult {
    if !config.enabled || monthly_gross > config.wage_limit {
        return EsiResult {
            employee: Decimal::ZERO,
            employer: Decimal::ZERO,
        };
    }

    EsiResult {
        employee: monthly_gross * config.employee_contribution / Decimal::ONE_HUNDRED,
        employer: monthly_gross * config.employer_contribution / Decimal::ONE_HUNDRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn enabled_config() -> EsiConfig {
        EsiConfig {
            enabled: true,
            employee_contribution: dec("0.75"),
            employer_contribution: dec("3.25"),
            wage_limit: dec("21000"),
        }
    }

    #[test]
    fn test_contribution_on_gross_below_ceiling() {
        let result = employee_state_insurance(dec("15000"), &enabled_config());
        assert_eq!(result.employee, dec("112.5"));
        assert_eq!(result.employer, dec("487.5"));
    }

    #[test]
    fn test_disabled_contributes_zero() {
        let config = EsiConfig {
            enabled: false,
            ..enabled_config()
        };
        let result = employee_state_insurance(dec("15000"), &config);
        assert_eq!(result.employee, Decimal::ZERO);
        assert_eq!(result.employer, Decimal::ZERO);
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let result = employee_state_insurance(dec("21000"), &enabled_config());
        assert_eq!(result.employee, dec("157.5"));
    }

    #[test]
    fn test_one_paisa_above_ceiling_owes_nothing() {
        let result = employee_state_insurance(dec("21000.01"), &enabled_config());
        assert_eq!(result.employee, Decimal::ZERO);
        assert_eq!(result.employer, Decimal::ZERO);
    }
}
