//! Risk-capped position sizing.
//!
//! The Kelly fraction is capped from above by `max_risk_percentage` and then
//! applied to the balance. There is no floor: a negative Kelly fraction stays
//! negative and produces a negative position size.

use serde::{Deserialize, Serialize};

/// Default per-trade risk cap (5% of balance).
pub const DEFAULT_MAX_RISK_PERCENTAGE: f64 = 0.05;

/// Fraction actually applied: `min(kelly_fraction, max_risk_percentage)`.
pub fn risk_fraction(kelly_fraction: f64, max_risk_percentage: f64) -> f64 {
    kelly_fraction.min(max_risk_percentage)
}

/// Monetary amount to stake on the next trade.
pub fn position_size(kelly_fraction: f64, account_balance: f64, max_risk_percentage: f64) -> f64 {
    account_balance * risk_fraction(kelly_fraction, max_risk_percentage)
}

/// Position sizer holding the risk cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSizer {
    pub max_risk_percentage: f64,
}

impl PositionSizer {
    pub fn new(max_risk_percentage: f64) -> Self {
        Self {
            max_risk_percentage,
        }
    }

    pub fn risk_fraction(&self, kelly_fraction: f64) -> f64 {
        risk_fraction(kelly_fraction, self.max_risk_percentage)
    }

    pub fn size(&self, kelly_fraction: f64, account_balance: f64) -> f64 {
        position_size(kelly_fraction, account_balance, self.max_risk_percentage)
    }
}

impl Default for PositionSizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RISK_PERCENTAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_binds_above_max_risk() {
        let size = position_size(0.19, 10_000.0, DEFAULT_MAX_RISK_PERCENTAGE);
        assert!((size - 500.0).abs() < 1e-9);
    }

    #[test]
    fn cap_does_not_bind_below_max_risk() {
        let size = position_size(0.02, 10_000.0, DEFAULT_MAX_RISK_PERCENTAGE);
        assert!((size - 200.0).abs() < 1e-9);
    }

    #[test]
    fn negative_kelly_is_not_clamped() {
        let size = position_size(-0.1, 10_000.0, DEFAULT_MAX_RISK_PERCENTAGE);
        assert!((size + 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn negative_balance_flips_sign() {
        // Balance below zero keeps flowing through the same arithmetic
        let size = position_size(0.19, -2_000.0, DEFAULT_MAX_RISK_PERCENTAGE);
        assert!((size + 100.0).abs() < 1e-9);
    }

    #[test]
    fn sizer_matches_free_functions() {
        let sizer = PositionSizer::new(0.1);
        assert_eq!(sizer.risk_fraction(0.3), 0.1);
        assert_eq!(sizer.size(0.3, 5_000.0), position_size(0.3, 5_000.0, 0.1));
    }

    #[test]
    fn default_sizer_uses_five_percent() {
        assert_eq!(PositionSizer::default().max_risk_percentage, 0.05);
    }
}
