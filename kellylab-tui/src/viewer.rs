//! Interactive terminal viewer for the balance chart.
//!
//! Takes over the terminal (raw mode + alternate screen), draws the chart with
//! a one-line footer, and returns on `q`, `Esc`, or `Enter`. The terminal is
//! restored on every exit path. Call [`install_panic_hook`] once at startup
//! so a panic while the chart is up also leaves the alternate screen.

use std::io::{self, Stdout};
use std::sync::Once;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use kellylab_core::sink::BalanceSink;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::chart::BalanceChart;
use crate::theme::Theme;

/// Sink that shows the balance path as a full-screen chart.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalChartSink {
    theme: Theme,
}

impl TerminalChartSink {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

static PANIC_HOOK: Once = Once::new();

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Only the first call installs anything; returns whether this call did.
pub fn install_panic_hook() -> bool {
    let mut installed = false;
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stderr(), LeaveAlternateScreen);
            default_hook(info);
        }));
        installed = true;
    });
    installed
}

impl BalanceSink for TerminalChartSink {
    fn consume(&mut self, balances: &[f64]) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e);
            }
        };

        let result = run_viewer(&mut terminal, balances, &self.theme);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

fn run_viewer(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    balances: &[f64],
    theme: &Theme,
) -> io::Result<()> {
    terminal.clear()?;
    loop {
        terminal.draw(|f| draw(f, balances, theme))?;

        if let Event::Key(key) = event::read()? {
            if is_quit_key(&key) {
                return Ok(());
            }
        }
    }
}

/// Draw the chart and footer into a frame.
pub fn draw(frame: &mut Frame, balances: &[f64], theme: &Theme) {
    let [chart_area, footer_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    frame.render_widget(BalanceChart::new(balances, theme), chart_area);
    frame.render_widget(Paragraph::new(footer_line(balances, theme)), footer_area);
}

fn footer_line<'a>(balances: &[f64], theme: &Theme) -> Line<'a> {
    let trades = balances.len().saturating_sub(1);
    let initial = balances.first().copied().unwrap_or(0.0);
    let last = balances.last().copied().unwrap_or(initial);

    Line::from(vec![
        Span::styled(
            format!(" {trades} trades "),
            Style::default().fg(theme.text_primary),
        ),
        Span::styled(
            format!("| final ${last:.2} "),
            Style::default().fg(theme.path_color(initial, last)),
        ),
        Span::styled(
            "| q / Esc to close",
            Style::default().fg(theme.text_secondary),
        ),
    ])
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
}
