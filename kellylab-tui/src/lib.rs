//! KellyLab TUI: terminal rendering for simulated balance paths.
//!
//! - `chart`: ratatui widget plotting balance against trade number
//! - `viewer`: full-screen viewer implementing `BalanceSink`
//! - `theme`: color tokens

pub mod chart;
pub mod theme;
pub mod viewer;

#[cfg(test)]
mod test_helpers;

pub use chart::{chart_bounds, BalanceChart};
pub use theme::Theme;
pub use viewer::{install_panic_hook, TerminalChartSink};
