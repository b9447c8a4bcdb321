//! Provident Fund calculation.

use rust_decimal::Decimal;

use crate::config::PfConfig;

/// Employee and employer Provident Fund contributions for one month.
///
/// The employer side is informational display only; it is never deducted
/// from net pay.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvidentFundResult {
    /// Employee-side contribution, deducted from pay.
    pub employee: Decimal,
    /// Employer-side contribution, informational.
    pub employer: Decimal,
}

/// Computes Provident Fund contributions.
///
/// PF is proportional to **Basic Salary** and gated solely by the
/// enablement flag; unlike ESI, no wage ceiling applies.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::provident_fund;
/// use payroll_engine::config::PfConfig;
/// use rust_decimal::Decimal;
///
/// let config = PfConfig { enabled: true, ..Default::default() };
/// let pf = provident_fund(Decimal::from(25_000), &config);
/// assert_eq!(pf.employee, Decimal::from(3_000));
/// assert_eq!(pf.employer, Decimal::from(3_000));
/// ```
pub fn provident_fund(basic_salary: Decimal, config: &PfConfig) -> ProvidentFundResult {
    if !config.enabled {
        return ProvidentFundResult {
            employee: Decimal::ZERO,
            employer: Decimal::ZERO,
        };
    }

    ProvidentFundResult {
        employee: basic_salary * config.employee_contribution / Decimal::ONE_HUNDRED,
        employer: basic_salary * config.employer_contribution / Decimal::ONE_HUNDRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_twelve_percent_of_basic() {
        let config = PfConfig {
            enabled: true,
            employee_contribution: dec("12"),
            employer_contribution: dec("12"),
        };
        let result = provident_fund(dec("25000"), &config);
        assert_eq!(result.employee, dec("3000"));
        assert_eq!(result.employer, dec("3000"));
    }

    #[test]
    fn test_disabled_contributes_zero() {
        let config = PfConfig {
            enabled: false,
            employee_contribution: dec("12"),
            employer_contribution: dec("12"),
        };
        let result = provident_fund(dec("25000"), &config);
        assert_eq!(result.employee, Decimal::ZERO);
        assert_eq!(result.employer, Decimal::ZERO);
    }

    #[test]
    fn test_asymmetric_rates() {
        let config = PfConfig {
            enabled: true,
            employee_contribution: dec("12"),
            employer_contribution: dec("13"),
        };
        let result = provident_fund(dec("10000"), &config);
        assert_eq!(result.employee, dec("1200"));
        assert_eq!(result.employer, dec("1300"));
    }

    #[test]
    fn test_no_wage_ceiling_applies() {
        let config = PfConfig {
            enabled: true,
            employee_contribution: dec("12"),
            employer_contribution: dec("12"),
        };
        // Arbitrarily high basic still attracts PF.
        let result = provident_fund(dec("1000000"), &config);
        assert_eq!(result.employee, dec("120000"));
    }
}
