//! Error types for the numeric core.

use thiserror::Error;

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("win_rate must be within [0, 1], got {0}")]
    WinRateOutOfRange(f64),
    #[error("{field} must be > 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("max_risk_percentage must be within (0, 1], got {0}")]
    MaxRiskOutOfRange(f64),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("parse config TOML: {0}")]
    Parse(String),
    #[error("read config file: {0}")]
    Io(String),
}

/// Arithmetic and parameter errors raised by the Kelly computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KellyError {
    /// `win_loss_ratio == 0` would divide by zero in the Kelly formula.
    #[error("win/loss ratio is zero; Kelly fraction is undefined")]
    ZeroWinLossRatio,
    #[error("average loss is zero; win/loss ratio is undefined")]
    ZeroAverageLoss,
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// A deserialized run whose balance path does not line up with its trades.
    #[error("malformed simulation run: {balances} balances for {trades} trades")]
    MalformedRun { balances: usize, trades: usize },
}
