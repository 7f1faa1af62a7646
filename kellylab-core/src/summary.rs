//! Run summary: pure functions over the balance path.

use serde::{Deserialize, Serialize};

use crate::simulator::{Outcome, SimulationRun};

/// Aggregate statistics for one simulated balance path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub kelly_fraction: f64,
    pub initial_balance: f64,
    pub final_balance: f64,
    pub total_return: f64,
    pub max_drawdown: f64,
    pub min_balance: f64,
    pub wins: usize,
    pub losses: usize,
    pub realized_win_rate: f64,
    /// True when any balance on the path is at or below zero.
    pub ruined: bool,
}

impl SimulationSummary {
    pub fn from_run(run: &SimulationRun) -> Self {
        let balances = run.balances();
        let wins = run
            .trades()
            .iter()
            .filter(|t| t.outcome == Outcome::Win)
            .count();
        let losses = run.trades().len() - wins;
        let min_balance = balances.iter().copied().fold(f64::INFINITY, f64::min);

        Self {
            kelly_fraction: run.kelly_fraction,
            initial_balance: run.initial_balance(),
            final_balance: run.final_balance(),
            total_return: total_return(balances),
            max_drawdown: max_drawdown(balances),
            min_balance,
            wins,
            losses,
            realized_win_rate: if run.trades().is_empty() {
                0.0
            } else {
                wins as f64 / run.trades().len() as f64
            },
            ruined: min_balance <= 0.0,
        }
    }
}

/// Total return as a fraction: (final - initial) / initial.
pub fn total_return(balances: &[f64]) -> f64 {
    if balances.len() < 2 {
        return 0.0;
    }
    let initial = balances[0];
    let last = balances[balances.len() - 1];
    if initial <= 0.0 {
        return 0.0;
    }
    (last - initial) / initial
}

/// Maximum peak-to-trough drawdown as a negative fraction (0.0 if none).
///
/// Drawdowns are only measured from positive peaks.
pub fn max_drawdown(balances: &[f64]) -> f64 {
    if balances.len() < 2 {
        return 0.0;
    }
    let mut peak = balances[0];
    let mut max_dd = 0.0_f64;

    for &b in balances {
        if b > peak {
            peak = b;
        }
        if peak > 0.0 {
            let dd = (b - peak) / peak;
            if dd < max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}
