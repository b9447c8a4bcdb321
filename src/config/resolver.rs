//! Statutory configuration resolution.
//!
//! The settings workflow persists configuration documents that may omit any
//! field or sub-object. [`resolve_config`] normalizes such a document into a
//! complete [`StatutoryConfig`] with every default applied.
//!
//! Absence and invalidity are distinct: an absent value takes its statutory
//! default, while a present-but-negative rate or wage limit is rejected with
//! [`EngineError::InvalidConfig`] rather than silently corrected.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EsiConfig, HraConfig, PfConfig, ProfessionalTaxConfig, RawEsiConfig, RawHraConfig, RawPfConfig,
    RawProfessionalTaxConfig, RawStatutoryConfig, StatutoryConfig,
};

/// Resolves a possibly-partial statutory configuration into a complete one.
///
/// Missing fields and sub-objects take their statutory defaults; `enabled`
/// flags default to `false`, so a component contributes only when the
/// organization has explicitly switched it on. The input is never mutated
/// and resolution is idempotent.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`] naming the offending field when a
/// contribution rate, percentage, or wage limit is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{RawStatutoryConfig, resolve_config};
/// use rust_decimal::Decimal;
///
/// // An organization that never touched its settings gets the defaults.
/// let config = resolve_config(&RawStatutoryConfig::default()).unwrap();
/// assert!(!config.pf.enabled);
/// assert_eq!(config.pf.employee_contribution, Decimal::from(12));
/// ```
pub fn resolve_config(raw: &RawStatutoryConfig) -> EngineResult<StatutoryConfig> {
    Ok(StatutoryConfig {
        pf: resolve_pf(raw.pf.as_ref())?,
        esi: resolve_esi(raw.esi.as_ref())?,
        hra: resolve_hra(raw.hra.as_ref())?,
        professional_tax: resolve_professional_tax(raw.professional_tax.as_ref()),
    })
}

fn resolve_pf(raw: Option<&RawPfConfig>) -> EngineResult<PfConfig> {
    let defaults = PfConfig::default();
    let Some(raw) = raw else {
        return Ok(defaults);
    };

    let employee_contribution = raw
        .employee_contribution
        .unwrap_or(defaults.employee_contribution);
    ensure_non_negative("pf.employeeContribution", employee_contribution)?;

    let employer_contribution = raw
        .employer_contribution
        .unwrap_or(defaults.employer_contribution);
    ensure_non_negative("pf.employerContribution", employer_contribution)?;

    Ok(PfConfig {
        enabled: raw.enabled.unwrap_or(defaults.enabled),
        employee_contribution,
        employer_contribution,
    })
}

fn resolve_esi(raw: Option<&RawEsiConfig>) -> EngineResult<EsiConfig> {
    let defaults = EsiConfig::default();
    let Some(raw) = raw else {
        return Ok(defaults);
    };

    let employee_contribution = raw
        .employee_contribution
        .unwrap_or(defaults.employee_contribution);
    ensure_non_negative("esi.employeeContribution", employee_contribution)?;

    let employer_contribution = raw
        .employer_contribution
        .unwrap_or(defaults.employer_contribution);
    ensure_non_negative("esi.employerContribution", employer_contribution)?;

    let wage_limit = raw.wage_limit.unwrap_or(defaults.wage_limit);
    ensure_non_negative("esi.wageLimit", wage_limit)?;

    Ok(EsiConfig {
        enabled: raw.enabled.unwrap_or(defaults.enabled),
        employee_contribution,
        employer_contribution,
        wage_limit,
    })
}

fn resolve_hra(raw: Option<&RawHraConfig>) -> EngineResult<HraConfig> {
    let defaults = HraConfig::default();
    let Some(raw) = raw else {
        return Ok(defaults);
    };

    let percentage_of_basic = raw
        .percentage_of_basic
        .unwrap_or(defaults.percentage_of_basic);
    ensure_non_negative("hra.percentageOfBasic", percentage_of_basic)?;

    Ok(HraConfig {
        enabled: raw.enabled.unwrap_or(defaults.enabled),
        percentage_of_basic,
    })
}

fn resolve_professional_tax(raw: Option<&RawProfessionalTaxConfig>) -> ProfessionalTaxConfig {
    let Some(raw) = raw else {
        return ProfessionalTaxConfig::default();
    };

    ProfessionalTaxConfig {
        enabled: raw.enabled.unwrap_or(false),
        state: raw.state.clone().unwrap_or_default(),
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must be non-negative, got {value}"),
        });
    }
    Ok(())
}
