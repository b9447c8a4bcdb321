//! Salary breakdown model.
//!
//! A [`SalaryBreakdown`] is a derived value, never an entity: it is
//! recomputed on every request, carries no identity, and is never persisted.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monthly earnings/deductions breakdown for one employee.
///
/// All figures are monthly amounts at full internal precision; rounding to
/// the display currency happens only at the presentation boundary via
/// [`SalaryBreakdown::rounded`], never mid-calculation.
///
/// `net_pay` may be negative when the statutory configuration deducts more
/// than the gross. That is deliberately preserved rather than clamped, so a
/// misconfiguration stays visible to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBreakdown {
    /// Annual CTC divided by 12.
    pub monthly_gross: Decimal,
    /// Basic Salary, as the configured percentage of monthly gross.
    pub basic_salary: Decimal,
    /// House Rent Allowance, as a percentage of Basic Salary. 0 when disabled.
    pub hra: Decimal,
    /// Balancing figure: monthly gross less Basic and HRA, floored at 0.
    pub special_allowance: Decimal,
    /// Employee Provident Fund deduction, computed on Basic Salary.
    pub pf: Decimal,
    /// Employee State Insurance deduction, computed on monthly gross below
    /// the wage ceiling.
    pub esi: Decimal,
    /// Professional Tax per the jurisdiction's slab table.
    pub professional_tax: Decimal,
    /// Employer-side PF contribution. Informational only; never deducted
    /// from net pay.
    pub employer_pf: Decimal,
    /// Employer-side ESI contribution. Informational only.
    pub employer_esi: Decimal,
    /// Sum of the employee-side deductions: PF + ESI + Professional Tax.
    pub total_deductions: Decimal,
    /// Monthly gross minus total deductions. Not floored at zero.
    pub net_pay: Decimal,
}

impl SalaryBreakdown {
    /// Rounds every figure to the nearest whole currency unit for display.
    ///
    /// This is the presentation boundary: internal computation always runs
    /// at full precision so rounding error never compounds across the
    /// Basic, HRA, allowance and deduction chain.
    pub fn rounded(&self) -> SalaryBreakdown {
        let round = |value: Decimal| {
            value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        };

        SalaryBreakdown {
            monthly_gross: round(self.monthly_gross),
            basic_salary: round(self.basic_salary),
            hra: round(self.hra),
            special_allowance: round(self.special_allowance),
            pf: round(self.pf),
            esi: round(self.esi),
            professional_tax: round(self.professional_tax),
            employer_pf: round(self.employer_pf),
            employer_esi: round(self.employer_esi),
            total_deductions: round(self.total_deductions),
            net_pay: round(self.net_pay),
        }
    }
}
