use rand::Rng;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use minicade_core::{
    Difficulty, HangmanBoard, HangmanStatus, InputSnapshot, MiniGame, Outcome, MAX_INCORRECT,
};
use minicade_widgets::alphabet::AlphabetWidget;
use minicade_widgets::gallows::GallowsWidget;
use minicade_widgets::text::{Anchor, Label, TextStyle};
use minicade_widgets::theme::Theme;
use minicade_widgets::word_lines::WordLinesWidget;

use crate::effects::FxCue;
use crate::screens::{
    content_area, render_footer, render_result_banner, session_choice, Screen, SessionChoice,
    Transition,
};
use crate::shell::ShellContext;

pub struct HangmanScreen {
    board: HangmanBoard,
    difficulty: Difficulty,
    recorded: bool,
    finished: bool,
}

impl HangmanScreen {
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            board: HangmanBoard::random(difficulty, rng),
            difficulty,
            recorded: false,
            finished: false,
        }
    }

    pub fn board(&self) -> &HangmanBoard {
        &self.board
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.board.status() {
            HangmanStatus::Playing => None,
            HangmanStatus::Won => Some(Outcome::Win),
            HangmanStatus::Lost => Some(Outcome::Lose),
        }
    }
}

impl Screen for HangmanScreen {
    fn update(&mut self, input: &InputSnapshot, ctx: &mut ShellContext) -> Option<Transition> {
        if self.outcome().is_some() {
            return match session_choice(input)? {
                SessionChoice::Replay => {
                    self.board = HangmanBoard::random(self.difficulty, &mut ctx.rng);
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
            log::debug!("hangman abandoned");
            self.finished = true;
            return Some(Transition::MiniGameMenu);
        }

        self.board.update(input);

        if let (Some(outcome), false) = (self.outcome(), self.recorded) {
            ctx.scoreboard
                .record(MiniGame::Hangman, outcome, &self.board.round);
            ctx.cue(if outcome == Outcome::Win {
                FxCue::Celebrate
            } else {
                FxCue::Defeat
            });
            self.recorded = true;
        }
        None
    }

    fn render(&self, frame: &mut Frame, _ctx: &ShellContext) {
        let area = content_area(frame.area());
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(area);

        let misses = format!("Misses: {}/{}", self.board.incorrect(), MAX_INCORRECT);
        frame.render_widget(
            Label::new(misses, 1, 0).style(TextStyle::new().color(Theme::RED)),
            header,
        );
        frame.render_widget(
            Label::new("Hangman", header.width.saturating_sub(1), 0).style(
                TextStyle::new()
                    .anchor(Anchor::TopRight)
                    .color(Theme::difficulty(self.difficulty)),
            ),
            header,
        );

        let [gallows, board] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body);
        frame.render_widget(GallowsWidget::new(self.board.incorrect()), gallows);

        let [_, word, _, letters, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(board);

        let mut lines = WordLinesWidget::new(self.board.revealed());
        if self.board.status() == HangmanStatus::Lost {
            lines = lines.answer(self.board.word());
        }
        frame.render_widget(lines, word);
        frame.render_widget(AlphabetWidget::new(&self.board), letters);

        match self.outcome() {
            Some(outcome) => {
                let detail = format!("the word was {}", self.board.word().to_uppercase());
                render_result_banner(frame, area, outcome, &detail);
            }
            None => render_footer(frame, footer, &[("a-z", "Guess"), ("Esc", "Quit game")]),
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx() -> ShellContext {
        ShellContext::new(Config {
            seed: Some(11),
            ..Config::default()
        })
    }

    fn solve(screen: &mut HangmanScreen, ctx: &mut ShellContext) {
        let word = screen.board().word().to_string();
        let mut input = InputSnapshot::new();
        for c in word.chars() {
            input.press(c);
        }
        screen.update(&input, ctx);
    }

    #[test]
    fn test_winning_records_and_waits_for_choice() {
        let mut ctx = ctx();
        let mut screen = HangmanScreen::new(Difficulty::Easy, &mut ctx.rng);
        solve(&mut screen, &mut ctx);

        assert_eq!(screen.board().status(), HangmanStatus::Won);
        let tally = ctx.scoreboard.tally(MiniGame::Hangman);
        assert_eq!((tally.played, tally.won), (1, 1));
        assert_eq!(ctx.cues, vec![FxCue::Celebrate]);
        assert!(!screen.is_finished());

        // Letters after the end are not guesses
        screen.update(&InputSnapshot::key('q'), &mut ctx);
        assert_eq!(ctx.scoreboard.tally(MiniGame::Hangman).played, 1);
    }

    #[test]
    fn test_losing_then_replay_draws_a_fresh_word() {
        let mut ctx = ctx();
        let mut screen = HangmanScreen::new(Difficulty::Medium, &mut ctx.rng);
        let misses: Vec<char> = ('a'..='z')
            .filter(|c| !screen.board().word().contains(*c))
            .take(MAX_INCORRECT as usize)
            .collect();
        for c in misses {
            screen.update(&InputSnapshot::key(c), &mut ctx);
        }
        assert_eq!(screen.board().status(), HangmanStatus::Lost);
        assert_eq!(ctx.scoreboard.tally(MiniGame::Hangman).won, 0);

        assert_eq!(screen.update(&InputSnapshot::confirm(), &mut ctx), None);
        assert_eq!(screen.board().status(), HangmanStatus::Playing);
        assert_eq!(screen.board().incorrect(), 0);
    }

    #[test]
    fn test_escape_abandons_mid_word() {
        let mut ctx = ctx();
        let mut screen = HangmanScreen::new(Difficulty::Hard, &mut ctx.rng);
        screen.update(&InputSnapshot::key('e'), &mut ctx);
        assert_eq!(
            screen.update(&InputSnapshot::cancel(), &mut ctx),
            Some(Transition::MiniGameMenu)
        );
        assert!(ctx.scoreboard.is_empty());
    }

    #[test]
    fn test_backspace_is_not_a_guess_or_exit_mid_word() {
        let mut ctx = ctx();
        let mut screen = HangmanScreen::new(Difficulty::Easy, &mut ctx.rng);
        assert_eq!(screen.update(&InputSnapshot::back(), &mut ctx), None);
        assert!(!screen.is_finished());
        assert_eq!(screen.board().incorrect(), 0);
    }
}
