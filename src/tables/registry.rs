//! Jurisdiction-keyed registry of Professional Tax slab tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::slab::{SlabEntry, SlabTable};

/// The registry key used when a jurisdiction is empty or unknown.
pub const DEFAULT_JURISDICTION: &str = "Default";

/// Maps jurisdiction (state) names to their Professional Tax slab tables.
///
/// Slab tables are data, not logic: new jurisdictions are additive changes
/// to the registry, either through [`SlabRegistry::insert`] or a YAML file
/// via [`SlabRegistry::load_file`], and never touch the calculator.
///
/// The registry always contains a `"Default"` table; lookups for an empty
/// or unregistered jurisdiction fall back to it, so a lookup never fails.
///
/// # Example
///
/// ```
/// use payroll_engine::tables::SlabRegistry;
/// use rust_decimal::Decimal;
///
/// let tables = SlabRegistry::builtin();
/// assert_eq!(
///     tables.lookup("Tamil Nadu", Decimal::from(50_000)),
///     Decimal::from(208)
/// );
/// // Unknown jurisdictions use the default single-slab table.
/// assert_eq!(
///     tables.lookup("Narnia", Decimal::from(15_000)),
///     Decimal::from(200)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SlabRegistry {
    tables: HashMap<String, SlabTable>,
}

impl SlabRegistry {
    /// Creates a registry with the built-in jurisdiction tables.
    ///
    /// Ships monthly slab tables for the known states plus the `"Default"`
    /// single-slab table of a flat 200 per month.
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();

        tables.insert(DEFAULT_JURISDICTION.to_string(), table(&[(0, 200)]));
        tables.insert(
            "Tamil Nadu".to_string(),
            table(&[
                (12_500, 208),
                (10_000, 171),
                (7_500, 115),
                (5_000, 52),
                (3_500, 22),
                (0, 0),
            ]),
        );
        tables.insert(
            "Karnataka".to_string(),
            table(&[(15_000, 200), (10_000, 150), (0, 0)]),
        );
        tables.insert(
            "Maharashtra".to_string(),
            table(&[(10_000, 200), (7_500, 175), (0, 0)]),
        );
        tables.insert(
            "West Bengal".to_string(),
            table(&[
                (40_000, 200),
                (25_000, 150),
                (15_000, 130),
                (10_000, 110),
                (0, 0),
            ]),
        );
        tables.insert(
            "Andhra Pradesh".to_string(),
            table(&[(20_000, 200), (15_000, 150), (0, 0)]),
        );
        tables.insert(
            "Telangana".to_string(),
            table(&[(20_000, 200), (15_000, 150), (0, 0)]),
        );
        tables.insert("Gujarat".to_string(), table(&[(12_000, 200), (0, 0)]));
        tables.insert(
            "Madhya Pradesh".to_string(),
            table(&[(18_750, 212), (12_500, 125), (0, 0)]),
        );

        Self { tables }
    }

    /// Registers (or replaces) the slab table for a jurisdiction.
    pub fn insert(&mut self, jurisdiction: impl Into<String>, slab_table: SlabTable) {
        self.tables.insert(jurisdiction.into(), slab_table);
    }

    /// Returns the slab table for a jurisdiction, falling back to the
    /// `"Default"` table when the jurisdiction is empty or unregistered.
    pub fn get(&self, jurisdiction: &str) -> &SlabTable {
        let key = if jurisdiction.is_empty() {
            DEFAULT_JURISDICTION
        } else {
            jurisdiction
        };

        match self.tables.get(key) {
            Some(slab_table) => slab_table,
            None => {
                debug!(jurisdiction, "no slab table registered, using default");
                &self.tables[DEFAULT_JURISDICTION]
            }
        }
    }

    /// Looks up the Professional Tax amount for a jurisdiction and monthly
    /// gross. Total: always returns an amount, never fails.
    pub fn lookup(&self, jurisdiction: &str, monthly_gross: Decimal) -> Decimal {
        self.get(jurisdiction).lookup(monthly_gross)
    }

    /// Returns the registered jurisdiction names, in no particular order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Merges slab tables from a YAML file over the registry.
    ///
    /// The file is a mapping of jurisdiction name to a list of
    /// `{ above, amount }` slabs:
    ///
    /// ```yaml
    /// Kerala:
    ///   - { above: 20833, amount: 208 }
    ///   - { above: 11999, amount: 120 }
    ///   - { above: 0, amount: 0 }
    /// ```
    ///
    /// Jurisdictions already present (built-in or previously loaded) are
    /// replaced by the file's version.
    ///
    /// # Errors
    ///
    /// - [`EngineError::TableFileNotFound`] when the file cannot be read.
    /// - [`EngineError::TableParseError`] when the YAML is malformed.
    /// - [`EngineError::InvalidConfig`] when a bound or amount is negative.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::TableFileNotFound {
            path: path_str.clone(),
        })?;

        let parsed: HashMap<String, Vec<SlabEntry>> =
            serde_yaml::from_str(&content).map_err(|e| EngineError::TableParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        for (jurisdiction, entries) in parsed {
            for entry in &entries {
                if entry.above < Decimal::ZERO || entry.amount < Decimal::ZERO {
                    return Err(EngineError::InvalidConfig {
                        field: format!("{jurisdiction} slab table"),
                        message: format!(
                            "bounds and amounts must be non-negative, got ({}, {})",
                            entry.above, entry.amount
                        ),
                    });
                }
            }
            debug!(path = %path_str, jurisdiction = %jurisdiction, slabs = entries.len(), "registered slab table");
            self.tables.insert(jurisdiction, SlabTable::new(entries));
        }

        Ok(())
    }
}

fn table(slabs: &[(i64, i64)]) -> SlabTable {
    SlabTable::new(
        slabs
            .iter()
            .map(|&(above, amount)| SlabEntry::new(Decimal::from(above), Decimal::from(amount)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_builtin_contains_default_table() {
        let registry = SlabRegistry::builtin();
        assert!(
            registry
                .jurisdictions()
                .any(|j| j == DEFAULT_JURISDICTION)
        );
    }

    #[test]
    fn test_tamil_nadu_upper_slab() {
        let registry = SlabRegistry::builtin();
        assert_eq!(registry.lookup("Tamil Nadu", dec("50000")), dec("208"));
    }

    #[test]
    fn test_empty_jurisdiction_uses_default_table() {
        let registry = SlabRegistry::builtin();
        assert_eq!(registry.lookup("", dec("15000")), dec("200"));
    }

    #[test]
    fn test_unknown_jurisdiction_uses_default_table() {
        let registry = SlabRegistry::builtin();
        assert_eq!(registry.lookup("Narnia", dec("15000")), dec("200"));
    }

    #[test]
    fn test_insert_replaces_existing_table() {
        let mut registry = SlabRegistry::builtin();
        registry.insert(
            "Tamil Nadu",
            SlabTable::new(vec![SlabEntry::new(dec("0"), dec("999"))]),
        );
        assert_eq!(registry.lookup("Tamil Nadu", dec("50000")), dec("999"));
    }

    #[test]
    fn test_load_file_merges_over_builtin() {
        let mut file = tempfile_path("slabs_merge.yaml");
        writeln!(
            file.1,
            "Kerala:\n  - {{ above: 20833, amount: 208 }}\n  - {{ above: 0, amount: 0 }}"
        )
        .unwrap();
        drop(file.1);

        let mut registry = SlabRegistry::builtin();
        registry.load_file(&file.0).unwrap();

        assert_eq!(registry.lookup("Kerala", dec("25000")), dec("208"));
        // Built-ins untouched.
        assert_eq!(registry.lookup("Tamil Nadu", dec("50000")), dec("208"));

        std::fs::remove_file(&file.0).unwrap();
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let mut registry = SlabRegistry::builtin();
        match registry.load_file("/nonexistent/slabs.yaml").unwrap_err() {
            EngineError::TableFileNotFound { path } => {
                assert!(path.contains("slabs.yaml"));
            }
            other => panic!("Expected TableFileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let mut file = tempfile_path("slabs_bad.yaml");
        writeln!(file.1, "Kerala: [ not a slab").unwrap();
        drop(file.1);

        let mut registry = SlabRegistry::builtin();
        let result = registry.load_file(&file.0);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::TableParseError { .. }
        ));

        std::fs::remove_file(&file.0).unwrap();
    }

    #[test]
    fn test_load_negative_amount_returns_invalid_config() {
        let mut file = tempfile_path("slabs_negative.yaml");
        writeln!(file.1, "Kerala:\n  - {{ above: 0, amount: -5 }}").unwrap();
        drop(file.1);

        let mut registry = SlabRegistry::builtin();
        match registry.load_file(&file.0).unwrap_err() {
            EngineError::InvalidConfig { field, .. } => {
                assert!(field.contains("Kerala"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }

        std::fs::remove_file(&file.0).unwrap();
    }

    fn tempfile_path(name: &str) -> (std::path::PathBuf, std::fs::File) {
        let path = std::env::temp_dir().join(format!("payroll_engine_{name}"));
        let file = std::fs::File::create(&path).unwrap();
        (path, file)
    }
}
