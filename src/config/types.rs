//! Statutory configuration types.
//!
//! This module contains both shapes of an organization's statutory
//! configuration: the *raw* shape as persisted by the onboarding/settings
//! workflow (where any field or sub-object may be absent), and the *resolved*
//! shape the calculator consumes, with every default applied.
//!
//! Raw types use the camelCase field naming of the persisted documents so
//! they deserialize from the settings store without translation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw Provident Fund settings, as persisted. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPfConfig {
    /// Whether PF deduction is enabled for the organization.
    pub enabled: Option<bool>,
    /// Employee contribution rate, in percent of Basic Salary.
    pub employee_contribution: Option<Decimal>,
    /// Employer contribution rate, in percent of Basic Salary.
    pub employer_contribution: Option<Decimal>,
}

/// Raw Employee State Insurance settings, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEsiConfig {
    /// Whether ESI deduction is enabled for the organization.
    pub enabled: Option<bool>,
    /// Employee contribution rate, in percent of monthly gross.
    pub employee_contribution: Option<Decimal>,
    /// Employer contribution rate, in percent of monthly gross.
    pub employer_contribution: Option<Decimal>,
    /// Monthly gross ceiling for ESI eligibility (inclusive).
    pub wage_limit: Option<Decimal>,
}

/// Raw House Rent Allowance settings, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHraConfig {
    /// Whether HRA is paid by the organization.
    pub enabled: Option<bool>,
    /// HRA as a percent of Basic Salary (never of gross).
    pub percentage_of_basic: Option<Decimal>,
}

/// Raw Professional Tax settings, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProfessionalTaxConfig {
    /// Whether Professional Tax deduction is enabled.
    pub enabled: Option<bool>,
    /// Jurisdiction (state) whose slab table applies. Empty means the
    /// default table.
    pub state: Option<String>,
}

/// An organization's statutory configuration as persisted by the
/// onboarding/settings workflow.
///
/// Every sub-object may be absent, `null`, or an empty object; absence is
/// the expected default case, not an error. Pass this through
/// [`resolve_config`](crate::config::resolve_config) to obtain the
/// fully-populated [`StatutoryConfig`] the calculator consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawStatutoryConfig {
    /// Provident Fund settings.
    pub pf: Option<RawPfConfig>,
    /// Employee State Insurance settings.
    pub esi: Option<RawEsiConfig>,
    /// House Rent Allowance settings.
    pub hra: Option<RawHraConfig>,
    /// Professional Tax settings.
    pub professional_tax: Option<RawProfessionalTaxConfig>,
}

/// Resolved Provident Fund configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PfConfig {
    /// Whether PF deduction applies. A disabled component contributes
    /// exactly 0 regardless of its rates.
    pub enabled: bool,
    /// Employee contribution rate, in percent of Basic Salary.
    pub employee_contribution: Decimal,
    /// Employer contribution rate, in percent of Basic Salary.
    pub employer_contribution: Decimal,
}

impl Default for PfConfig {
    /// Statutory default: disabled, 12% employee / 12% employer.
    fn default() -> Self {
        Self {
            enabled: false,
            employee_contribution: Decimal::new(12, 0),
            employer_contribution: Decimal::new(12, 0),
        }
    }
}

/// Resolved Employee State Insurance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsiConfig {
    /// Whether ESI deduction applies.
    pub enabled: bool,
    /// Employee contribution rate, in percent of monthly gross.
    pub employee_contribution: Decimal,
    /// Employer contribution rate, in percent of monthly gross.
    pub employer_contribution: Decimal,
    /// Monthly gross ceiling for eligibility. The comparison is inclusive:
    /// an employee earning exactly the limit still owes ESI.
    pub wage_limit: Decimal,
}

impl Default for EsiConfig {
    /// Statutory default: disabled, 0.75% employee / 3.25% employer,
    /// wage limit 21000.
    fn default() -> Self {
        Self {
            enabled: false,
            employee_contribution: Decimal::new(75, 2),
            employer_contribution: Decimal::new(325, 2),
            wage_limit: Decimal::new(21_000, 0),
        }
    }
}

/// Resolved House Rent Allowance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HraConfig {
    /// Whether HRA is paid.
    pub enabled: bool,
    /// HRA as a percent of Basic Salary.
    pub percentage_of_basic: Decimal,
}

impl Default for HraConfig {
    /// Statutory default: disabled, 40% of Basic.
    fn default() -> Self {
        Self {
            enabled: false,
            percentage_of_basic: Decimal::new(40, 0),
        }
    }
}

/// Resolved Professional Tax configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalTaxConfig {
    /// Whether Professional Tax deduction applies.
    pub enabled: bool,
    /// Jurisdiction (state) whose slab table applies. An empty or unknown
    /// state maps to the default table.
    pub state: String,
}

/// A fully-populated statutory configuration, every default applied.
///
/// This is the shape the calculator consumes. It is read-only from the
/// engine's perspective: one configuration belongs to one organization and
/// is shared by all of its employees for the duration of a computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatutoryConfig {
    /// Provident Fund configuration.
    pub pf: PfConfig,
    /// Employee State Insurance configuration.
    pub esi: EsiConfig,
    /// House Rent Allowance configuration.
    pub hra: HraConfig,
    /// Professional Tax configuration.
    pub professional_tax: ProfessionalTaxConfig,
}
