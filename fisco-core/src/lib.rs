//! Calculation engine for Italian tax and social-security obligations.
//!
//! Given a taxpayer profile, an ATECO activity classification and the
//! economic figures for a reference period, the engine computes VAT,
//! income tax (progressive IRPEF or flat-rate substitute tax), territorial
//! surtaxes, IRAP, INPS/INAIL or professional-fund contributions, and a
//! payment-deadline schedule.
//!
//! The engine is synchronous, stateless and deterministic: every entry
//! point takes an explicit `as_of` date instead of reading the system
//! clock, and the only data it consults beyond its inputs are the static
//! reference tables in [`data`].

pub mod calculations;
pub mod data;
pub mod models;

pub use calculations::calculator::{CalculationError, TaxCalculator};
pub use calculations::validation::validate;
pub use models::*;
