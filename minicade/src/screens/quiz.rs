use rand::Rng;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use minicade_core::{Difficulty, InputSnapshot, MiniGame, Outcome, QuizKind, QuizSession};
use minicade_widgets::quiz_panel::{HintPanelWidget, QuizPanelWidget};
use minicade_widgets::text::{Anchor, Label, TextStyle};
use minicade_widgets::theme::Theme;

use crate::effects::FxCue;
use crate::screens::{
    content_area, render_footer, render_result_banner, session_choice, Screen, SessionChoice,
    Transition,
};
use crate::shell::ShellContext;

/// Binarize, Math Champ and Encrypter: one question, four options
pub struct QuizScreen {
    game: MiniGame,
    session: QuizSession,
    recorded: bool,
    finished: bool,
}

impl QuizScreen {
    pub fn new<R: Rng>(game: MiniGame, kind: QuizKind, difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            game,
            session: QuizSession::new(kind, difficulty, rng),
            recorded: false,
            finished: false,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }
}

impl Screen for QuizScreen {
    fn update(&mut self, input: &InputSnapshot, ctx: &mut ShellContext) -> Option<Transition> {
        if self.session.is_finished() {
            return match session_choice(input)? {
                SessionChoice::Replay => {
                    self.session.replay(&mut ctx.rng);
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
            log::debug!("{} abandoned", self.game);
            self.finished = true;
            return Some(Transition::MiniGameMenu);
        }

        if let Some(outcome) = self.session.update(input) {
            if !self.recorded {
                ctx.scoreboard.record(self.game, outcome, &self.session.round);
                ctx.cue(if outcome == Outcome::Win {
                    FxCue::Celebrate
                } else {
                    FxCue::Defeat
                });
                self.recorded = true;
            }
        }
        None
    }

    fn render(&self, frame: &mut Frame, ctx: &ShellContext) {
        let area = content_area(frame.area());
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Label::centered(self.game.title(), header, 0)
                .style(TextStyle::new().anchor(Anchor::Center).color(Theme::RED)),
            header,
        );

        let (quiz_area, hint_area) = if ctx.config.hints {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(body);
            (left, Some(right))
        } else {
            (body, None)
        };

        let panel_area = Rect {
            height: quiz_area.height.min(8),
            y: quiz_area.y + quiz_area.height.saturating_sub(8) / 3,
            ..quiz_area
        };
        frame.render_widget(
            QuizPanelWidget::new(&self.session.challenge).answered(self.session.answer),
            panel_area,
        );

        if let Some(hint_area) = hint_area {
            frame.render_widget(HintPanelWidget::new(self.session.kind.hints()), hint_area);
        }

        match self.session.round.last_outcome {
            Some(outcome) if self.session.is_finished() => {
                let detail = format!("answer: {}", self.session.challenge.answer);
                render_result_banner(frame, area, outcome, &detail);
            }
            _ => render_footer(frame, footer, &[("a-d", "Answer"), ("Esc", "Quit game")]),
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
