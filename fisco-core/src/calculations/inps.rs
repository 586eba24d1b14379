//! INPS and INAIL contributions by management.
//!
//! Rates are the 2025 headline rates for each management, with the reduced
//! variants that apply under the flat-rate regime. Every computation leaves
//! a human-readable trace line so the caller can show how the figure was
//! reached.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FiscalRegime, InpsManagement};

use super::common::pct_of;

/// INPS and INAIL amounts for one taxable base, with the calculation trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InpsContribution {
    pub inps: Decimal,
    pub inail: Decimal,
    pub detail: Vec<String>,
}

/// Computes mandatory INPS and INAIL contributions for a taxpayer enrolled
/// with an INPS management (no professional fund).
pub fn compute(
    taxable_base: Decimal,
    management: InpsManagement,
    regime: FiscalRegime,
) -> InpsContribution {
    let flat_rate = regime.is_flat_rate();

    let (inps_rate, inail_rate) = match management {
        InpsManagement::SeparateManagement => {
            (if flat_rate { dec!(24) } else { dec!(25.98) }, dec!(0.7))
        }
        InpsManagement::ArtisansMerchants => {
            (if flat_rate { dec!(21.79) } else { dec!(23.79) }, dec!(1.75))
        }
        InpsManagement::Employees => (if flat_rate { dec!(10) } else { dec!(12) }, Decimal::ZERO),
        InpsManagement::Agricultural => {
            (if flat_rate { dec!(20) } else { dec!(22) }, dec!(1.5))
        }
    };

    let inps = pct_of(taxable_base, inps_rate);
    let inail = pct_of(taxable_base, inail_rate);

    let label = management.label();
    let suffix = if flat_rate { " (forfettario)" } else { "" };
    let mut detail = vec![format!(
        "INPS {label}{suffix}: €{taxable_base} × {inps_rate}% = €{inps}"
    )];
    if management == InpsManagement::Employees {
        detail.push("INAIL: €0 (coperto dal datore di lavoro)".to_string());
    } else {
        detail.push(format!("INAIL {label}: €{taxable_base} × {inail_rate}% = €{inail}"));
    }

    InpsContribution { inps, inail, detail }
}
