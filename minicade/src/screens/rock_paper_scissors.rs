use rand::Rng;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::Frame;

use minicade_core::rps::{bob_offset, RpsMatch, RpsPhase};
use minicade_core::{Difficulty, Hand, InputSnapshot, MiniGame, Outcome};
use minicade_widgets::rps_hand::{HandArtWidget, ART_HEIGHT, ART_WIDTH};
use minicade_widgets::tally::TallyWidget;
use minicade_widgets::text::{Anchor, Font, Label, TextStyle};
use minicade_widgets::theme::Theme;

use crate::effects::FxCue;
use crate::screens::{
    content_area, render_footer, render_result_banner, session_choice, Screen, SessionChoice,
    Transition,
};
use crate::shell::ShellContext;

/// Rows the big hands rise at the top of a bob
const BOB_HEIGHT: u16 = 3;

pub struct RpsScreen {
    game: RpsMatch,
    recorded: bool,
    finished: bool,
}

impl RpsScreen {
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            game: RpsMatch::new(difficulty, rng),
            recorded: false,
            finished: false,
        }
    }

    pub fn game(&self) -> &RpsMatch {
        &self.game
    }

    fn record(&mut self, ctx: &mut ShellContext) {
        let Some(result) = self.game.result() else {
            return;
        };
        ctx.scoreboard
            .record(MiniGame::RockPaperScissors, result, &self.game.round);
        ctx.cue(match result {
            Outcome::Win => FxCue::Celebrate,
            _ => FxCue::Defeat,
        });
        self.recorded = true;
    }

    fn render_big_hands(&self, frame: &mut Frame, area: Rect, ctx: &ShellContext) {
        let (player, opponent, lift) = match (self.game.phase, self.game.last_throw) {
            (RpsPhase::Animating { since }, _) => {
                let elapsed = ctx.now.saturating_duration_since(since);
                (Hand::Rock, Hand::Rock, bob_offset(elapsed, BOB_HEIGHT))
            }
            (_, Some(throw)) => (throw.player, throw.opponent, 0),
            (_, None) => return,
        };

        let [left, _, right] = Layout::horizontal([
            Constraint::Length(ART_WIDTH + 2),
            Constraint::Length(6),
            Constraint::Length(ART_WIDTH + 2),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(HandArtWidget::new(player).lift(lift), left);
        frame.render_widget(
            HandArtWidget::new(opponent)
                .mirrored(true)
                .color(Theme::MUTED_TEXT)
                .lift(lift),
            right,
        );

        let label_row = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        if area.height > ART_HEIGHT + BOB_HEIGHT + 2 {
            frame.render_widget(
                Label::new("you", left.x - area.x + left.width / 2, 0)
                    .style(TextStyle::new().anchor(Anchor::Center).color(Theme::BLUE)),
                label_row,
            );
            frame.render_widget(
                Label::new("cpu", right.x - area.x + right.width / 2, 0)
                    .style(TextStyle::new().anchor(Anchor::Center).color(Theme::RED)),
                label_row,
            );
        }

        let verdict = match (self.game.phase, self.game.last_throw) {
            (RpsPhase::Revealing { .. }, Some(throw)) => Some(throw.outcome),
            _ => None,
        };
        if let Some(outcome) = verdict {
            frame.render_widget(
                Label::centered(outcome.text(), area, area.height / 2)
                    .style(TextStyle::new().anchor(Anchor::Center).color(Theme::outcome(outcome))),
                area,
            );
        }
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect) {
        let boxes = Layout::horizontal([Constraint::Length(ART_WIDTH + 2); 3])
            .flex(Flex::SpaceAround)
            .split(Rect {
                height: area.height.saturating_sub(1),
                ..area
            });
        for (hand, slot) in Hand::ALL.iter().zip(boxes.iter()) {
            let highlighted = *hand == self.game.cursor;
            frame.render_widget(
                HandArtWidget::new(*hand).highlighted(highlighted),
                *slot,
            );
            let color = if highlighted {
                Theme::HIGHLIGHT
            } else {
                Theme::MUTED_TEXT
            };
            frame.render_widget(
                Label::new(hand.name(), slot.x - area.x + slot.width / 2, area.height.saturating_sub(1))
                    .style(TextStyle::new().anchor(Anchor::Center).color(color)),
                area,
            );
        }
    }
}

impl Screen for RpsScreen {
    fn update(&mut self, input: &InputSnapshot, ctx: &mut ShellContext) -> Option<Transition> {
        if self.game.is_finished() {
            return match session_choice(input)? {
                SessionChoice::Replay => {
                    self.game.replay(&mut ctx.rng);
                    self.recorded = false;
                    None
                }
                SessionChoice::Leave => {
                    self.finished = true;
                    Some(Transition::MiniGameMenu)
                }
            };
        }

        if input.cancel {
            log::debug!("rock paper scissors abandoned");
            self.finished = true;
            return Some(Transition::MiniGameMenu);
        }

        let was_revealing = matches!(self.game.phase, RpsPhase::Revealing { .. });
        self.game.update(input, ctx.now, &mut ctx.rng);
        if !was_revealing && matches!(self.game.phase, RpsPhase::Revealing { .. }) {
            ctx.cue(FxCue::Reveal);
        }

        if self.game.is_finished() && !self.recorded {
            self.record(ctx);
        }
        None
    }

    fn render(&self, frame: &mut Frame, ctx: &ShellContext) {
        let area = content_area(frame.area());
        let [tally, status, stage, picker, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(ART_HEIGHT + BOB_HEIGHT + 3),
            Constraint::Length(ART_HEIGHT + 3),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(TallyWidget::new(&self.game.round), tally);

        let attempts = format!(
            "Rock Paper Scissors  -  attempts left: {}",
            self.game.round.attempts_left()
        );
        frame.render_widget(
            Label::centered(attempts, status, 0).style(
                TextStyle::new()
                    .anchor(Anchor::Center)
                    .color(Theme::MUTED_TEXT)
                    .font(Font::Secondary),
            ),
            status,
        );

        self.render_big_hands(frame, stage, ctx);

        match self.game.phase {
            RpsPhase::Choosing => {
                self.render_picker(frame, picker);
                render_footer(
                    frame,
                    footer,
                    &[("\u{2190}\u{2192}", "Choose"), ("Enter", "Throw"), ("Esc", "Quit game")],
                );
            }
            RpsPhase::Finished => {
                if let Some(result) = self.game.result() {
                    let detail = format!(
                        "{} won, {} lost, {} tied",
                        self.game.round.correct, self.game.round.incorrect, self.game.round.ties
                    );
                    render_result_banner(frame, area, result, &detail);
                }
            }
            RpsPhase::Animating { .. } | RpsPhase::Revealing { .. } => {}
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
