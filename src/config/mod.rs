//! Statutory configuration for the payroll engine.
//!
//! An organization's statutory settings arrive from the settings store as a
//! possibly-partial document ([`RawStatutoryConfig`]); [`resolve_config`]
//! fills in every statutory default to produce the [`StatutoryConfig`] the
//! calculator consumes.
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::{RawStatutoryConfig, resolve_config};
//!
//! let config = resolve_config(&RawStatutoryConfig::default()).unwrap();
//! assert_eq!(config.esi.wage_limit, rust_decimal::Decimal::from(21_000));
//! ```

mod resolver;
mod types;

pub use resolver::resolve_config;
pub use types::{
    EsiConfig, HraConfig, PfConfig, ProfessionalTaxConfig, RawEsiConfig, RawHraConfig, RawPfConfig,
    RawProfessionalTaxConfig, RawStatutoryConfig, StatutoryConfig,
};
