//! Output sinks for the simulated balance path.
//!
//! The core hands the finished sequence to a sink and never renders anything
//! itself. Sinks are free to draw, print, or discard it.

/// Chart title used by rendering sinks.
pub const CHART_TITLE: &str = "Account Balance Over Time";
/// X-axis label used by rendering sinks.
pub const X_AXIS_LABEL: &str = "Number of Trades";
/// Y-axis label used by rendering sinks.
pub const Y_AXIS_LABEL: &str = "Account Balance ($)";

/// Consumer of a completed balance sequence.
pub trait BalanceSink {
    /// Receive the full sequence (`num_trades + 1` entries).
    fn consume(&mut self, balances: &[f64]) -> std::io::Result<()>;
}

/// Sink that discards the sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl BalanceSink for NullSink {
    fn consume(&mut self, _balances: &[f64]) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recording(Vec<Vec<f64>>);

    impl BalanceSink for Recording {
        fn consume(&mut self, balances: &[f64]) -> std::io::Result<()> {
            self.0.push(balances.to_vec());
            Ok(())
        }
    }

    #[test]
    fn sink_receives_full_sequence() {
        let mut sink = Recording(Vec::new());
        sink.consume(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(sink.0, vec![vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn null_sink_accepts_anything() {
        assert!(NullSink.consume(&[]).is_ok());
    }

    #[test]
    fn sink_is_object_safe() {
        let mut sinks: Vec<Box<dyn BalanceSink>> = vec![Box::new(NullSink)];
        for s in &mut sinks {
            s.consume(&[10_000.0]).unwrap();
        }
    }
}
