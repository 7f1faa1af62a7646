//! Console report for the sizing recommendation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::SimulationConfig;
use crate::error::KellyError;

/// Kelly fraction and the recommended stake on the starting balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingReport {
    pub kelly_fraction: f64,
    pub position_size: f64,
}

impl SizingReport {
    /// Compute the recommendation for `config`'s starting balance.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, KellyError> {
        config.validate()?;
        let kelly_fraction = config.kelly_fraction()?;
        Ok(Self::new(kelly_fraction, config))
    }

    /// Recommendation for an already computed Kelly fraction.
    pub fn new(kelly_fraction: f64, config: &SimulationConfig) -> Self {
        let position_size = config.sizer().size(kelly_fraction, config.account_balance);
        if position_size < 0.0 {
            warn!(position_size, "recommended position size is negative");
        }
        Self {
            kelly_fraction,
            position_size,
        }
    }
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kelly Criterion fraction: {:.4}", self.kelly_fraction)?;
        write!(f, "Recommended position size: ${:.2}", self.position_size)
    }
}
