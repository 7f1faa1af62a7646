//! Property tests for the sizing and simulation invariants.
//!
//! 1. Sequence length: N trades always produce N + 1 balances
//! 2. Risk cap: any Kelly fraction above the cap applies exactly the cap
//! 3. Determinism: a fixed seed reproduces the path
//! 4. Purity: the Kelly formula has no hidden state

use kellylab_core::{
    kelly_fraction, position_size, risk_fraction, simulate, SimulationConfig,
};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_config() -> impl Strategy<Value = SimulationConfig> {
    (
        0.0..=1.0_f64,
        1.0..500.0_f64,
        1.0..500.0_f64,
        100.0..1_000_000.0_f64,
        0usize..300,
        0.001..=1.0_f64,
        any::<u64>(),
    )
        .prop_map(
            |(win_rate, average_win, average_loss, account_balance, num_trades, cap, seed)| {
                SimulationConfig {
                    win_rate,
                    average_win,
                    average_loss,
                    account_balance,
                    num_trades,
                    max_risk_percentage: cap,
                    seed,
                }
            },
        )
}

// ── 1. Sequence length ───────────────────────────────────────────────

proptest! {
    #[test]
    fn balance_sequence_has_n_plus_one_entries(config in arb_config()) {
        let run = simulate(&config).unwrap();
        prop_assert_eq!(run.balances().len(), config.num_trades + 1);
        prop_assert_eq!(run.balances()[0], config.account_balance);
        prop_assert_eq!(run.trades().len(), config.num_trades);
    }
}

// ── 2. Risk cap ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cap_binds_regardless_of_balance(
        cap in 0.001..=1.0_f64,
        excess in 0.0001..10.0_f64,
        balance in -1e9..1e9_f64,
    ) {
        let kelly = cap + excess;
        prop_assert_eq!(risk_fraction(kelly, cap), cap);
        prop_assert_eq!(position_size(kelly, balance, cap), balance * cap);
    }

    #[test]
    fn below_cap_passes_through_unclamped(
        cap in 0.001..=1.0_f64,
        kelly in -5.0..0.001_f64,
    ) {
        prop_assert_eq!(risk_fraction(kelly, cap), kelly);
    }
}

// ── 3. Determinism ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn same_seed_same_path(config in arb_config()) {
        let a = simulate(&config).unwrap();
        let b = simulate(&config).unwrap();
        prop_assert_eq!(a.balances(), b.balances());
    }
}

// ── 4. Purity ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn kelly_is_idempotent(p in 0.0..=1.0_f64, ratio in 0.01..100.0_f64) {
        let a = kelly_fraction(p, ratio).unwrap();
        let b = kelly_fraction(p, ratio).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert!(a <= p);
    }
}
