//! KellyLab Core: Kelly sizing and balance-path simulation.
//!
//! This crate contains the numeric core:
//! - Kelly fraction from win rate and win/loss ratio
//! - Risk-capped position sizing (upper cap only, no floor)
//! - Seeded sequential trade simulator with a fixed Kelly fraction
//! - Explicit run configuration loaded from TOML
//! - Run summary and console report
//! - Sink trait for rendering the balance path elsewhere

pub mod config;
pub mod error;
pub mod kelly;
pub mod report;
pub mod simulator;
pub mod sink;
pub mod sizing;
pub mod summary;

pub use config::SimulationConfig;
pub use error::{ConfigError, KellyError};
pub use kelly::{kelly_fraction, win_loss_ratio};
pub use report::SizingReport;
pub use simulator::{simulate, Outcome, SimulationRun, TradeRecord, TradeSimulator};
pub use sink::{BalanceSink, NullSink};
pub use sizing::{position_size, risk_fraction, PositionSizer, DEFAULT_MAX_RISK_PERCENTAGE};
pub use summary::SimulationSummary;
