use rust_decimal::{Decimal, RoundingStrategy};

mod formation;

pub use formation::{Formation, PositionCounts};

/// Monetary value (player price, budget, caps) in millions
pub type Price = Decimal;

/// Desirability score produced by a scorer
pub type Score = Decimal;

/// Upstream player identifier
pub type PlayerId = u32;

/// Upstream team identifier
pub type TeamId = u32;

/// Round a price to one decimal place for display, halves away from zero
///
/// `{:.1}` on a `Decimal` truncates, so 9.96 would print as 9.9.
pub fn round_price(price: Price) -> Price {
    price.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(dec!(9.96)), dec!(10.0));
        assert_eq!(round_price(dec!(100.06)), dec!(100.1));
        assert_eq!(round_price(dec!(100.04)), dec!(100.0));
        assert_eq!(round_price(dec!(4.25)), dec!(4.3));
        assert_eq!(round_price(dec!(-0.05)), dec!(-0.1));
    }
}
