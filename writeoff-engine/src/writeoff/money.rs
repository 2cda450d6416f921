//! Balance arithmetic helpers using rust_decimal for precision

use rust_decimal::prelude::*;

/// Rounding granularity for the settlement test (minor currency units)
pub const DECIMAL_PLACES: u32 = 2;

/// Round to minor-currency granularity, half away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// A balance counts as settled when it rounds to zero at 2 decimal places.
/// Instruction amounts themselves are never rounded; only this test is.
pub fn is_settled(balance: Decimal) -> bool {
    round_money(balance).is_zero()
}
