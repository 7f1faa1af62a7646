//! Balance chart widget.
//!
//! Displays:
//! - Simulated balance path, one point per trade
//! - Starting-balance baseline (muted)
//! - Zero line when the path crosses into ruin

use kellylab_core::sink::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::theme::Theme;

/// Line chart of the account balance against trade number.
pub struct BalanceChart<'a> {
    balances: &'a [f64],
    theme: &'a Theme,
}

impl<'a> BalanceChart<'a> {
    pub fn new(balances: &'a [f64], theme: &'a Theme) -> Self {
        Self { balances, theme }
    }
}

/// Axis bounds `([x_min, x_max], [y_min, y_max])` with 5% Y padding.
///
/// Non-finite balances are skipped. An empty or flat series gets a fixed pad
/// so the chart never collapses to a zero-height range.
pub fn chart_bounds(balances: &[f64]) -> ([f64; 2], [f64; 2]) {
    let x_max = balances.len().saturating_sub(1).max(1) as f64;

    let finite = balances.iter().copied().filter(|b| b.is_finite());
    let (y_min, y_max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), b| {
        (lo.min(b), hi.max(b))
    });
    if !y_min.is_finite() {
        return ([0.0, x_max], [0.0, 1.0]);
    }

    let y_range = y_max - y_min;
    let y_pad = if y_range > 0.0 { y_range * 0.05 } else { 100.0 };
    ([0.0, x_max], [y_min - y_pad, y_max + y_pad])
}

impl<'a> Widget for BalanceChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ([x_min, x_max], [y_lower, y_upper]) = chart_bounds(self.balances);

        let path: Vec<(f64, f64)> = self
            .balances
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_finite())
            .map(|(i, &b)| (i as f64, b))
            .collect();

        let initial = self.balances.first().copied().unwrap_or(0.0);
        let last = self.balances.last().copied().unwrap_or(initial);
        let baseline = vec![(x_min, initial), (x_max, initial)];
        let zero_line = vec![(x_min, 0.0), (x_max, 0.0)];

        let mut datasets = vec![
            Dataset::default()
                .name("Start")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.muted))
                .data(&baseline),
            Dataset::default()
                .name("Balance")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.path_color(initial, last)))
                .data(&path),
        ];
        if y_lower < 0.0 {
            datasets.push(
                Dataset::default()
                    .name("Ruin")
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.negative))
                    .data(&zero_line),
            );
        }

        let y_mid = (y_lower + y_upper) / 2.0;
        let x_labels = vec![
            Span::raw("0"),
            Span::raw(format!("{}", (x_max / 2.0) as usize)),
            Span::raw(format!("{}", x_max as usize)),
        ];
        let y_labels = vec![
            Span::raw(format!("${:.0}", y_lower)),
            Span::raw(format!("${:.0}", y_mid)),
            Span::raw(format!("${:.0}", y_upper)),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" {CHART_TITLE} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .style(Style::default().bg(self.theme.background)),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled(
                        X_AXIS_LABEL,
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        Y_AXIS_LABEL,
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}
