//! Seeded trade simulator.
//!
//! Runs `num_trades` independent win/loss trials from a starting balance. The
//! Kelly fraction is fixed for the whole run; each trial sizes its position
//! against the balance left by the previous one.
//!
//! Per trial:
//! 1. `position = balance * min(kelly_fraction, max_risk_percentage)`
//! 2. Draw win with probability `win_rate` from the run's single generator
//! 3. Win: `balance += position * (average_win / average_loss)`;
//!    loss: `balance -= position`
//!
//! The balance is never clamped and the loop never stops early, so an
//! over-leveraged or negative-edge configuration can drive it below zero.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::SimulationConfig;
use crate::error::KellyError;
use crate::sizing::PositionSizer;

/// Result of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
}

/// One simulated trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// 1-based trade number; matches the index of `balance_after` in the run.
    pub index: usize,
    pub outcome: Outcome,
    pub position_size: f64,
    pub balance_before: f64,
    pub balance_after: f64,
}

impl TradeRecord {
    pub fn pnl(&self) -> f64 {
        self.balance_after - self.balance_before
    }
}

/// Completed simulation: the balance path and the trades that produced it.
///
/// Deserialization checks that the path holds one more balance than there
/// are trades, so `initial_balance` and `final_balance` always exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSimulationRun")]
pub struct SimulationRun {
    pub kelly_fraction: f64,
    /// `num_trades + 1` entries; index 0 is the starting balance.
    balances: Vec<f64>,
    trades: Vec<TradeRecord>,
}

impl SimulationRun {
    pub fn balances(&self) -> &[f64] {
        &self.balances
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    pub fn initial_balance(&self) -> f64 {
        self.balances[0]
    }

    pub fn final_balance(&self) -> f64 {
        self.balances[self.balances.len() - 1]
    }

    pub fn into_balances(self) -> Vec<f64> {
        self.balances
    }
}

#[derive(Deserialize)]
struct RawSimulationRun {
    kelly_fraction: f64,
    balances: Vec<f64>,
    trades: Vec<TradeRecord>,
}

impl TryFrom<RawSimulationRun> for SimulationRun {
    type Error = KellyError;

    fn try_from(raw: RawSimulationRun) -> Result<Self, Self::Error> {
        if raw.balances.len() != raw.trades.len() + 1 {
            return Err(KellyError::MalformedRun {
                balances: raw.balances.len(),
                trades: raw.trades.len(),
            });
        }
        Ok(Self {
            kelly_fraction: raw.kelly_fraction,
            balances: raw.balances,
            trades: raw.trades,
        })
    }
}

/// Stateful trial loop with a fixed Kelly fraction and one seeded generator.
#[derive(Debug, Clone)]
pub struct TradeSimulator {
    kelly_fraction: f64,
    win_rate: f64,
    payoff_ratio: f64,
    sizer: PositionSizer,
    rng: StdRng,
}

impl TradeSimulator {
    /// Build a simulator from a validated config and a precomputed Kelly fraction.
    ///
    /// The fraction is taken as given and never recomputed during the run.
    pub fn new(config: &SimulationConfig, kelly_fraction: f64) -> Result<Self, KellyError> {
        config.validate()?;
        let payoff_ratio = config.win_loss_ratio()?;

        if kelly_fraction < 0.0 {
            warn!(
                kelly_fraction,
                "negative Kelly fraction: no edge, every position will be negative"
            );
        }

        Ok(Self {
            kelly_fraction,
            win_rate: config.win_rate,
            payoff_ratio,
            sizer: config.sizer(),
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Build a simulator, computing the Kelly fraction from the config.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, KellyError> {
        let kelly_fraction = config.kelly_fraction()?;
        Self::new(config, kelly_fraction)
    }

    pub fn kelly_fraction(&self) -> f64 {
        self.kelly_fraction
    }

    /// Simulate one trade from `balance`.
    pub fn step(&mut self, index: usize, balance: f64) -> TradeRecord {
        let position_size = self.sizer.size(self.kelly_fraction, balance);
        let outcome = if self.rng.gen_bool(self.win_rate) {
            Outcome::Win
        } else {
            Outcome::Loss
        };

        let balance_after = match outcome {
            Outcome::Win => balance + position_size * self.payoff_ratio,
            Outcome::Loss => balance - position_size,
        };

        trace!(index, ?outcome, position_size, balance_after, "trade");

        TradeRecord {
            index,
            outcome,
            position_size,
            balance_before: balance,
            balance_after,
        }
    }

    /// Run `num_trades` trials starting from `account_balance`.
    pub fn run(&mut self, account_balance: f64, num_trades: usize) -> SimulationRun {
        let mut balances = Vec::with_capacity(num_trades + 1);
        let mut trades = Vec::with_capacity(num_trades);
        let mut balance = account_balance;
        let mut ruined = account_balance <= 0.0;
        balances.push(balance);

        for index in 1..=num_trades {
            let record = self.step(index, balance);
            balance = record.balance_after;
            if !ruined && balance <= 0.0 {
                ruined = true;
                warn!(trade = index, balance, "balance fell to or below zero; continuing");
            }
            balances.push(balance);
            trades.push(record);
        }

        debug!(
            num_trades,
            initial = account_balance,
            final_balance = balance,
            "simulation finished"
        );

        SimulationRun {
            kelly_fraction: self.kelly_fraction,
            balances,
            trades,
        }
    }
}

/// Compute the Kelly fraction once and run the full simulation for `config`.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationRun, KellyError> {
    let mut simulator = TradeSimulator::from_config(config)?;
    Ok(simulator.run(config.account_balance, config.num_trades))
}
