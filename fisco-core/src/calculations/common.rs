//! Shared arithmetic helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to euro cents, half away from zero.
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage rate to an amount.
pub fn pct_of(amount: Decimal, rate: Decimal) -> Decimal {
    amount * rate / Decimal::ONE_HUNDRED
}

/// Clamps a possibly negative amount to zero.
pub fn floor_zero(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}
