//! Monthly gross calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Derives the monthly gross from an annual cost-to-company figure.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the annual CTC is negative.
/// Zero is valid business-as-usual input and yields a zero gross.
pub fn monthly_gross(annual_ctc: Decimal) -> EngineResult<Decimal> {
    if annual_ctc < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "annualCTC".to_string(),
            message: format!("must be non-negative, got {annual_ctc}"),
        });
    }

    Ok(annual_ctc / Decimal::from(12))
}
