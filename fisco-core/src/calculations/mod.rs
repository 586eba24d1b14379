//! Tax and contribution calculation engine.
//!
//! [`calculator::TaxCalculator`] is the entry point; the sibling modules
//! each compute one slice of the result (VAT, income tax, territorial
//! surtaxes, INPS/INAIL, professional fund contributions). All modules are
//! pure functions of their inputs and a fixed reference date; none of them
//! read the system clock.

pub mod calculator;
pub mod common;
pub mod funds;
pub mod inps;
pub mod management;
pub mod territorial;
pub mod validation;
