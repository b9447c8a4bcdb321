//! Salary breakdown orchestration.
//!
//! [`compute_breakdown`] runs the component calculations in their dependency
//! order: gross, then Basic, then HRA (a percentage of Basic), then the
//! Special Allowance residual, then the deductions.

use crate::config::StatutoryConfig;
use crate::error::EngineResult;
use crate::models::{CompensationInput, SalaryBreakdown};
use crate::tables::SlabRegistry;

use rust_decimal::Decimal;

use super::basic_salary::basic_salary;
use super::esi::employee_state_insurance;
use super::gross::monthly_gross;
use super::hra::house_rent_allowance;
use super::provident_fund::provident_fund;
use super::special_allowance::special_allowance;

/// Computes a monthly salary breakdown for one employee.
///
/// Deterministic and referentially transparent: the same compensation,
/// configuration and slab tables always produce the same breakdown, with no
/// side effects. Safe to invoke concurrently across any number of employees.
///
/// Business-as-usual inputs never fail: a zero CTC with every statutory
/// component disabled yields the all-zero breakdown. Net pay is *not*
/// floored at zero; a negative value indicates a statutory misconfiguration
/// and is left visible for the caller to surface.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError) when the
/// annual CTC is negative or the basic percentage lies outside (0, 100].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_breakdown;
/// use payroll_engine::config::{StatutoryConfig, PfConfig};
/// use payroll_engine::models::CompensationInput;
/// use payroll_engine::tables::SlabRegistry;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig {
///     pf: PfConfig { enabled: true, ..Default::default() },
///     ..Default::default()
/// };
/// let compensation = CompensationInput::new(Decimal::from(600_000));
/// let tables = SlabRegistry::builtin();
///
/// let breakdown = compute_breakdown(&compensation, &config, &tables).unwrap();
/// assert_eq!(breakdown.basic_salary, Decimal::from(25_000));
/// assert_eq!(breakdown.pf, Decimal::from(3_000));
/// ```
pub fn compute_breakdown(
    compensation: &CompensationInput,
    config: &StatutoryConfig,
    tables: &SlabRegistry,
) -> EngineResult<SalaryBreakdown> {
    let monthly_gross = monthly_gross(compensation.annual_ctc)?;
    let basic_salary = basic_salary(monthly_gross, compensation.basic_percentage_or_default())?;

    let hra = house_rent_allowance(basic_salary, &config.hra);
    let special_allowance = special_allowance(monthly_gross, basic_salary, hra);

    let pf = provident_fund(basic_salary, &config.pf);
    let esi = employee_state_insurance(monthly_gross, &config.esi);

    let professional_tax = if config.professional_tax.enabled {
        tables.lookup(&config.professional_tax.state, monthly_gross)
    } else {
        Decimal::ZERO
    };

    let total_deductions = pf.employee + esi.employee + professional_tax;
    let net_pay = monthly_gross - total_deductions;

    Ok(SalaryBreakdown {
        monthly_gross,
        basic_salary,
        hra,
        special_allowance,
        pf: pf.employee,
        esi: esi.employee,
        professional_tax,
        employer_pf: pf.employer,
        employer_esi: esi.employer,
        total_deductions,
        net_pay,
    })
}
