use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, IntoEffect, Motion};

use minicade_widgets::Theme;

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

/// Visual events a screen asks the shell to play on top of the next frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxCue {
    /// The player won a session
    Celebrate,
    /// The player lost a session
    Defeat,
    /// Rock-Paper-Scissors hands are revealed
    Reveal,
}

impl FxCue {
    pub fn key(&self) -> &'static str {
        match self {
            FxCue::Celebrate => "celebration",
            FxCue::Defeat => "defeat",
            FxCue::Reveal => "reveal",
        }
    }

    pub fn effect(&self) -> Effect {
        match self {
            FxCue::Celebrate => celebration_shimmer(),
            FxCue::Defeat => defeat_glitch(),
            FxCue::Reveal => reveal_sweep(),
        }
    }
}

// ─── Effect Factories ────────────────────────────────────────────────

const DARK: Color = Theme::BG;

/// Screen transition: content sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (400, Interpolation::CubicOut),
    )
}

/// Subtle gold shimmer for the title on main menu
pub fn title_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}

/// Hue swing when a session is won
pub fn celebration_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([30.0, 0.0, 0.15], (800, Interpolation::SineInOut));
    fx::ping_pong(shift)
}

/// Short burst of glitching cells when a session is lost
pub fn defeat_glitch() -> Effect {
    let glitch = fx::Glitch::builder()
        .cell_glitch_ratio(0.02)
        .action_start_delay_ms(0..300)
        .action_ms(50..150)
        .build()
        .into_effect();
    fx::with_duration(tachyonfx::Duration::from_millis(900), glitch)
}

/// Result text sweeps in from the top when hands are shown
pub fn reveal_sweep() -> Effect {
    fx::sweep_in(
        Motion::UpToDown,
        4,
        1,
        DARK,
        (300, Interpolation::QuadOut),
    )
}
