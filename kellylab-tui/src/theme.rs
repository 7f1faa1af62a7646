//! Parrot/neon color tokens for the balance chart.
//!
//! - **Background**: deep charcoal
//! - **Accent**: electric cyan (balance line above the start)
//! - **Negative**: hot pink (balance line below the start, ruin)
//! - **Muted**: steel blue (axes, baseline)

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Line color for a path ending at `final_balance` from `initial_balance`.
    pub fn path_color(&self, initial_balance: f64, final_balance: f64) -> Color {
        if final_balance >= initial_balance {
            self.positive
        } else {
            self.negative
        }
    }
}
