pub mod difficulty_menu;
pub mod hangman;
pub mod main_menu;
pub mod mini_game_menu;
pub mod quiz;
pub mod rock_paper_scissors;
pub mod rules;
pub mod scoreboard;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use minicade_core::{InputSnapshot, MiniGame, Outcome, QuizKind};
use minicade_widgets::theme::Theme;

use crate::shell::ShellContext;

use difficulty_menu::DifficultyMenuScreen;
use hangman::HangmanScreen;
use main_menu::MainMenuScreen;
use mini_game_menu::MiniGameMenuScreen;
use quiz::QuizScreen;
use rock_paper_scissors::RpsScreen;
use rules::RulesScreen;
use scoreboard::ScoreboardScreen;

/// Which screen should replace the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    MainMenu,
    DifficultyMenu,
    MiniGameMenu,
    Scoreboard,
    Rules(MiniGame),
    Play(MiniGame),
    Quit,
}

/// Trait for game screens
pub trait Screen {
    /// Advance one frame. A returned transition is only taken once the
    /// screen also reports itself finished.
    fn update(&mut self, input: &InputSnapshot, ctx: &mut ShellContext) -> Option<Transition>;
    fn render(&self, frame: &mut Frame, ctx: &ShellContext);
    fn is_finished(&self) -> bool;
}

/// The screen currently owning the frame
pub enum ActiveScreen {
    MainMenu(MainMenuScreen),
    DifficultyMenu(DifficultyMenuScreen),
    MiniGameMenu(MiniGameMenuScreen),
    Scoreboard(ScoreboardScreen),
    Rules(RulesScreen),
    RockPaperScissors(RpsScreen),
    Hangman(HangmanScreen),
    Quiz(QuizScreen),
}

impl ActiveScreen {
    /// Build the screen a transition leads to. `None` means quit.
    pub fn enter(transition: Transition, ctx: &mut ShellContext) -> Option<ActiveScreen> {
        let screen = match transition {
            Transition::MainMenu => ActiveScreen::MainMenu(MainMenuScreen::new()),
            Transition::DifficultyMenu => ActiveScreen::DifficultyMenu(DifficultyMenuScreen::new()),
            Transition::MiniGameMenu => ActiveScreen::MiniGameMenu(MiniGameMenuScreen::new()),
            Transition::Scoreboard => ActiveScreen::Scoreboard(ScoreboardScreen::new()),
            Transition::Rules(game) => ActiveScreen::Rules(RulesScreen::new(game)),
            Transition::Play(game) => {
                let difficulty = ctx.difficulty();
                match game {
                    MiniGame::RockPaperScissors => {
                        ActiveScreen::RockPaperScissors(RpsScreen::new(difficulty, &mut ctx.rng))
                    }
                    MiniGame::Hangman => {
                        ActiveScreen::Hangman(HangmanScreen::new(difficulty, &mut ctx.rng))
                    }
                    MiniGame::Binarize => ActiveScreen::Quiz(QuizScreen::new(
                        game,
                        QuizKind::Binary,
                        difficulty,
                        &mut ctx.rng,
                    )),
                    MiniGame::MathChamp => ActiveScreen::Quiz(QuizScreen::new(
                        game,
                        QuizKind::Math,
                        difficulty,
                        &mut ctx.rng,
                    )),
                    MiniGame::Encrypter => ActiveScreen::Quiz(QuizScreen::new(
                        game,
                        QuizKind::Decryption,
                        difficulty,
                        &mut ctx.rng,
                    )),
                }
            }
            Transition::Quit => return None,
        };
        Some(screen)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActiveScreen::MainMenu(_) => "main menu",
            ActiveScreen::DifficultyMenu(_) => "difficulty menu",
            ActiveScreen::MiniGameMenu(_) => "mini-game menu",
            ActiveScreen::Scoreboard(_) => "scoreboard",
            ActiveScreen::Rules(_) => "rules",
            ActiveScreen::RockPaperScissors(_) => "rock paper scissors",
            ActiveScreen::Hangman(_) => "hangman",
            ActiveScreen::Quiz(_) => "quiz",
        }
    }
}

impl Screen for ActiveScreen {
    fn update(&mut self, input: &InputSnapshot, ctx: &mut ShellContext) -> Option<Transition> {
        match self {
            ActiveScreen::MainMenu(s) => s.update(input, ctx),
            ActiveScreen::DifficultyMenu(s) => s.update(input, ctx),
            ActiveScreen::MiniGameMenu(s) => s.update(input, ctx),
            ActiveScreen::Scoreboard(s) => s.update(input, ctx),
            ActiveScreen::Rules(s) => s.update(input, ctx),
            ActiveScreen::RockPaperScissors(s) => s.update(input, ctx),
            ActiveScreen::Hangman(s) => s.update(input, ctx),
            ActiveScreen::Quiz(s) => s.update(input, ctx),
        }
    }

    fn render(&self, frame: &mut Frame, ctx: &ShellContext) {
        match self {
            ActiveScreen::MainMenu(s) => s.render(frame, ctx),
            ActiveScreen::DifficultyMenu(s) => s.render(frame, ctx),
            ActiveScreen::MiniGameMenu(s) => s.render(frame, ctx),
            ActiveScreen::Scoreboard(s) => s.render(frame, ctx),
            ActiveScreen::Rules(s) => s.render(frame, ctx),
            ActiveScreen::RockPaperScissors(s) => s.render(frame, ctx),
            ActiveScreen::Hangman(s) => s.render(frame, ctx),
            ActiveScreen::Quiz(s) => s.render(frame, ctx),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            ActiveScreen::MainMenu(s) => s.is_finished(),
            ActiveScreen::DifficultyMenu(s) => s.is_finished(),
            ActiveScreen::MiniGameMenu(s) => s.is_finished(),
            ActiveScreen::Scoreboard(s) => s.is_finished(),
            ActiveScreen::Rules(s) => s.is_finished(),
            ActiveScreen::RockPaperScissors(s) => s.is_finished(),
            ActiveScreen::Hangman(s) => s.is_finished(),
            ActiveScreen::Quiz(s) => s.is_finished(),
        }
    }
}

/// What the player wants once a mini-game session is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChoice {
    Replay,
    Leave,
}

pub fn session_choice(input: &InputSnapshot) -> Option<SessionChoice> {
    if input.leaving() {
        Some(SessionChoice::Leave)
    } else if input.confirm {
        Some(SessionChoice::Replay)
    } else {
        None
    }
}

/// Area inside the decorative frame border
pub fn content_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Key legend as `[key] Action` pairs on the last content row
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("[", Style::default().fg(Theme::DIM_TEXT)));
        spans.push(Span::styled(*key, Style::default().fg(Theme::GOLD)));
        spans.push(Span::styled(
            format!("] {}", action),
            Style::default().fg(Theme::DIM_TEXT),
        ));
    }
    let row = Rect {
        y: area.bottom().saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );
}

/// Boxed result line shown over the bottom of a finished mini-game
pub fn render_result_banner(frame: &mut Frame, area: Rect, outcome: Outcome, detail: &str) {
    let height = 4;
    if area.height < height + 2 || area.width < 30 {
        return;
    }
    let width = area.width.min(50);
    let banner = Rect::new(
        area.x + (area.width - width) / 2,
        area.bottom() - height - 1,
        width,
        height,
    );

    let color = Theme::outcome(outcome);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Theme::PANEL_BG));

    let mut heading = vec![Span::styled(
        outcome.text(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if !detail.is_empty() {
        heading.push(Span::styled(
            format!("  {}", detail),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    }
    let lines = vec![
        Line::from(heading),
        Line::from(Span::styled(
            "[Enter] Play again  [Backspace] Games",
            Style::default().fg(Theme::GOLD),
        )),
    ];

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        banner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_choice() {
        assert_eq!(session_choice(&InputSnapshot::confirm()), Some(SessionChoice::Replay));
        assert_eq!(session_choice(&InputSnapshot::back()), Some(SessionChoice::Leave));
        assert_eq!(session_choice(&InputSnapshot::cancel()), Some(SessionChoice::Leave));
        assert_eq!(session_choice(&InputSnapshot::key('a')), None);
    }

    #[test]
    fn test_each_quiz_game_opens_its_own_kind() {
        let mut ctx = ShellContext::new(crate::config::Config {
            seed: Some(9),
            ..crate::config::Config::default()
        });
        ctx.difficulty = Some(minicade_core::Difficulty::Medium);
        for (game, kind) in [
            (MiniGame::Binarize, QuizKind::Binary),
            (MiniGame::MathChamp, QuizKind::Math),
            (MiniGame::Encrypter, QuizKind::Decryption),
        ] {
            let Some(ActiveScreen::Quiz(screen)) =
                ActiveScreen::enter(Transition::Play(game), &mut ctx)
            else {
                panic!("{} did not open a quiz", game);
            };
            assert_eq!(screen.session().kind, kind);
        }
    }

    #[test]
    fn test_content_area_skips_border() {
        assert_eq!(content_area(Rect::new(0, 0, 80, 24)), Rect::new(1, 1, 78, 22));
        assert_eq!(content_area(Rect::new(0, 0, 1, 1)).width, 0);
    }
}
