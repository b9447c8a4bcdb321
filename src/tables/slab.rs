//! Professional Tax slab table types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slab of a Professional Tax table: a lower bound (exclusive) on
/// monthly gross and the flat monthly tax owed above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabEntry {
    /// Lower bound on monthly gross, exclusive.
    pub above: Decimal,
    /// Monthly tax amount for salaries above the bound.
    pub amount: Decimal,
}

impl SlabEntry {
    /// Creates a slab entry.
    pub fn new(above: Decimal, amount: Decimal) -> Self {
        Self { above, amount }
    }
}

/// An ordered Professional Tax slab table for one jurisdiction.
///
/// Entries are held in descending order of bound and a table always carries
/// a `(0, …)` floor entry, so a lookup matches at most one slab and every
/// positive gross matches the floor at worst.
///
/// # Example
///
/// ```
/// use payroll_engine::tables::{SlabEntry, SlabTable};
/// use rust_decimal::Decimal;
///
/// let table = SlabTable::new(vec![
///     SlabEntry::new(Decimal::from(12_500), Decimal::from(208)),
///     SlabEntry::new(Decimal::ZERO, Decimal::ZERO),
/// ]);
/// assert_eq!(table.lookup(Decimal::from(50_000)), Decimal::from(208));
/// assert_eq!(table.lookup(Decimal::from(10_000)), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SlabTable {
    entries: Vec<SlabEntry>,
}

impl SlabTable {
    /// Creates a slab table, ordering the entries descending by bound.
    pub fn new(entries: Vec<SlabEntry>) -> Self {
        let mut entries = entries;
        entries.sort_by(|a, b| b.above.cmp(&a.above));
        Self { entries }
    }

    /// Returns the slabs in descending order of bound.
    pub fn entries(&self) -> &[SlabEntry] {
        &self.entries
    }

    /// Returns the tax amount for the first slab whose bound is strictly
    /// below the given monthly gross.
    ///
    /// The lookup is total: a gross of exactly 0 matches no slab (bounds are
    /// exclusive) and yields 0; any positive gross matches the `(0, …)`
    /// floor entry at worst.
    pub fn lookup(&self, monthly_gross: Decimal) -> Decimal {
        self.entries
            .iter()
            .find(|entry| entry.above < monthly_gross)
            .map(|entry| entry.amount)
            .unwrap_or(Decimal::ZERO)
    }
}
