//! Kelly criterion for a repeated binary bet.
//!
//! ```text
//! f* = p - (1 - p) / r
//! ```
//!
//! where `p` is the win probability and `r` is the ratio of the average win to
//! the average loss. The result is signed: a negative value means the bet has
//! no edge, and values above 1 call for leverage before any cap is applied.

use crate::error::KellyError;

/// Raw (uncapped) Kelly fraction.
///
/// A zero `win_loss_ratio` is rejected rather than producing an infinity.
/// Negative ratios are accepted and yield whatever finite value the formula
/// gives.
///
/// # Examples
/// ```
/// use kellylab_core::kelly::kelly_fraction;
/// let f = kelly_fraction(0.55, 1.25).unwrap();
/// assert!((f - 0.19).abs() < 1e-12);
/// ```
pub fn kelly_fraction(win_rate: f64, win_loss_ratio: f64) -> Result<f64, KellyError> {
    ensure_finite("win_rate", win_rate)?;
    ensure_finite("win_loss_ratio", win_loss_ratio)?;
    if win_loss_ratio == 0.0 {
        return Err(KellyError::ZeroWinLossRatio);
    }
    Ok(win_rate - (1.0 - win_rate) / win_loss_ratio)
}

/// Payout ratio `average_win / average_loss`.
pub fn win_loss_ratio(average_win: f64, average_loss: f64) -> Result<f64, KellyError> {
    ensure_finite("average_win", average_win)?;
    ensure_finite("average_loss", average_loss)?;
    if average_loss == 0.0 {
        return Err(KellyError::ZeroAverageLoss);
    }
    Ok(average_win / average_loss)
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), KellyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KellyError::NonFinite { name, value })
    }
}
