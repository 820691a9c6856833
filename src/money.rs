//! Rendering of monetary amounts.
//!
//! Every price, total and change shown to the customer or folded into the
//! order signature goes through [`Cents`], so they all round the same way.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Decimal places shown for any amount.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Display wrapper that renders an amount with exactly two decimals,
/// rounding half away from zero (`5.035` → `5.04`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cents(pub Decimal);

impl Cents {
    /// The amount rounded to what is displayed.
    pub fn rounded(self) -> Decimal {
        self.0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}
