//! Professional Tax slab tables.
//!
//! Each jurisdiction (state) has an ordered table of `(lower bound, amount)`
//! slabs; the tax owed is the amount of the highest slab whose bound the
//! monthly gross exceeds. The tables are pure data, keyed by jurisdiction in
//! a [`SlabRegistry`] that can be extended per state without touching the
//! calculator.

mod registry;
mod slab;

pub use registry::{DEFAULT_JURISDICTION, SlabRegistry};
pub use slab::{SlabEntry, SlabTable};
