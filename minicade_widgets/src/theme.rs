use minicade_core::{Difficulty, Outcome};
use ratatui::style::Color;

/// Arcade color theme for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(13, 17, 23);
    pub const BACKDROP: Color = Color::Rgb(24, 20, 44);
    pub const PANEL_BG: Color = Color::Rgb(30, 30, 60);

    // Text and outcome colors
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const BLACK: Color = Color::Rgb(10, 10, 10);
    pub const GREEN: Color = Color::Rgb(6, 214, 160);
    pub const RED: Color = Color::Rgb(230, 57, 70);
    pub const ORANGE: Color = Color::Rgb(255, 140, 40);
    pub const BLUE: Color = Color::Rgb(76, 201, 240);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const HIGHLIGHT: Color = Color::Rgb(255, 214, 10);
    pub const BORDER: Color = Color::Rgb(108, 117, 125);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);

    pub fn difficulty(difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Easy => Self::GREEN,
            Difficulty::Medium => Self::ORANGE,
            Difficulty::Hard => Self::RED,
        }
    }

    pub fn outcome(outcome: Outcome) -> Color {
        match outcome {
            Outcome::Win => Self::GREEN,
            Outcome::Lose => Self::RED,
            Outcome::Tie => Self::WHITE,
        }
    }
}
