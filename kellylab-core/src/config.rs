//! Simulation configuration.
//!
//! Every parameter of a run lives here and is passed explicitly into the
//! calculator, sizer, and simulator. The struct deserializes from TOML with
//! `#[serde(default)]`, so a file only needs the fields it overrides:
//!
//! ```toml
//! win_rate = 0.6
//! num_trades = 250
//! seed = 7
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, KellyError};
use crate::kelly;
use crate::sizing::{PositionSizer, DEFAULT_MAX_RISK_PERCENTAGE};

/// Parameters of a single Kelly sizing and simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Probability of a winning trade, within [0, 1].
    pub win_rate: f64,
    /// Average amount won on a winning trade.
    pub average_win: f64,
    /// Average amount lost on a losing trade.
    pub average_loss: f64,
    /// Starting balance.
    pub account_balance: f64,
    /// Number of simulated trades.
    pub num_trades: usize,
    /// Upper cap on the fraction of balance risked per trade, within (0, 1].
    pub max_risk_percentage: f64,
    /// PRNG seed.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            win_rate: 0.55,
            average_win: 100.0,
            average_loss: 80.0,
            account_balance: 10_000.0,
            num_trades: 1_000,
            max_risk_percentage: DEFAULT_MAX_RISK_PERCENTAGE,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("win_rate", self.win_rate),
            ("average_win", self.average_win),
            ("average_loss", self.average_loss),
            ("account_balance", self.account_balance),
            ("max_risk_percentage", self.max_risk_percentage),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.win_rate) {
            return Err(ConfigError::WinRateOutOfRange(self.win_rate));
        }
        for (field, value) in [
            ("average_win", self.average_win),
            ("average_loss", self.average_loss),
            ("account_balance", self.account_balance),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.max_risk_percentage <= 0.0 || self.max_risk_percentage > 1.0 {
            return Err(ConfigError::MaxRiskOutOfRange(self.max_risk_percentage));
        }
        Ok(())
    }

    /// `average_win / average_loss`.
    pub fn win_loss_ratio(&self) -> Result<f64, KellyError> {
        kelly::win_loss_ratio(self.average_win, self.average_loss)
    }

    /// Kelly fraction for this configuration.
    pub fn kelly_fraction(&self) -> Result<f64, KellyError> {
        kelly::kelly_fraction(self.win_rate, self.win_loss_ratio()?)
    }

    pub fn sizer(&self) -> PositionSizer {
        PositionSizer::new(self.max_risk_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = SimulationConfig::default();
        assert_eq!(c.win_rate, 0.55);
        assert_eq!(c.average_win, 100.0);
        assert_eq!(c.average_loss, 80.0);
        assert_eq!(c.account_balance, 10_000.0);
        assert_eq!(c.num_trades, 1_000);
        assert_eq!(c.max_risk_percentage, 0.05);
        assert_eq!(c.seed, 42);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = SimulationConfig::from_toml("win_rate = 0.6\nseed = 7\n").unwrap();
        assert_eq!(c.win_rate, 0.6);
        assert_eq!(c.seed, 7);
        assert_eq!(c.num_trades, 1_000);
        assert_eq!(c.average_loss, 80.0);
    }

    #[test]
    fn toml_roundtrip() {
        let c = SimulationConfig {
            num_trades: 17,
            max_risk_percentage: 0.1,
            ..SimulationConfig::default()
        };
        let text = c.to_toml().unwrap();
        assert_eq!(SimulationConfig::from_toml(&text).unwrap(), c);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = SimulationConfig::from_toml("win_rate = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimulationConfig::from_file(Path::new("/nonexistent/kellylab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn validate_rejects_bad_win_rate() {
        let c = SimulationConfig {
            win_rate: 1.01,
            ..SimulationConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::WinRateOutOfRange(1.01)));
    }

    #[test]
    fn validate_rejects_zero_average_loss() {
        let c = SimulationConfig {
            average_loss: 0.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NotPositive {
                field: "average_loss",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_cap_outside_unit_interval() {
        for cap in [0.0, -0.05, 1.5] {
            let c = SimulationConfig {
                max_risk_percentage: cap,
                ..SimulationConfig::default()
            };
            assert_eq!(c.validate(), Err(ConfigError::MaxRiskOutOfRange(cap)));
        }
        let full = SimulationConfig {
            max_risk_percentage: 1.0,
            ..SimulationConfig::default()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan() {
        let c = SimulationConfig {
            average_win: f64::NAN,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonFinite {
                field: "average_win",
                ..
            })
        ));
    }

    #[test]
    fn derived_kelly_fraction() {
        let c = SimulationConfig::default();
        assert!((c.win_loss_ratio().unwrap() - 1.25).abs() < 1e-12);
        assert!((c.kelly_fraction().unwrap() - 0.19).abs() < 1e-10);
    }
}
