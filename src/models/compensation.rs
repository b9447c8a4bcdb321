//! Compensation input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The default share of monthly gross allocated to Basic Salary, in percent.
pub const DEFAULT_BASIC_PERCENTAGE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// A per-employee compensation record.
///
/// The only mandatory figure is the annual cost-to-company; the Basic Salary
/// split is optional and defaults to 50% of monthly gross.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let compensation = CompensationInput::new(Decimal::from(600_000));
/// assert_eq!(compensation.basic_percentage_or_default(), Decimal::from(50));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationInput {
    /// Annual cost-to-company, before statutory deductions.
    #[serde(rename = "annualCTC")]
    pub annual_ctc: Decimal,
    /// Share of monthly gross allocated to Basic Salary, in percent.
    /// Absent means the default of 50 applies.
    #[serde(default)]
    pub basic_percentage: Option<Decimal>,
}

impl CompensationInput {
    /// Creates a compensation record with the default Basic Salary split.
    pub fn new(annual_ctc: Decimal) -> Self {
        Self {
            annual_ctc,
            basic_percentage: None,
        }
    }

    /// Creates a compensation record with an explicit Basic Salary split.
    pub fn with_basic_percentage(annual_ctc: Decimal, basic_percentage: Decimal) -> Self {
        Self {
            annual_ctc,
            basic_percentage: Some(basic_percentage),
        }
    }

    /// Returns the Basic Salary split, falling back to the default of 50.
    pub fn basic_percentage_or_default(&self) -> Decimal {
        self.basic_percentage.unwrap_or(DEFAULT_BASIC_PERCENTAGE)
    }
}
