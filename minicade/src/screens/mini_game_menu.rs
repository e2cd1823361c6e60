use ratatui::layout::{Constraint, Layout};
use ratatui::style::Color;
use ratatui::Frame;

use minicade_core::{InputSnapshot, Menu, MiniGame};
use minicade_widgets::menu_list::MenuListWidget;
use minicade_widgets::text::{Anchor, Label, TextStyle};
use minicade_widgets::theme::Theme;

use crate::screens::{content_area, render_footer, Screen, Transition};
use crate::shell::ShellContext;

fn label_color(game: MiniGame) -> Color {
    match game {
        MiniGame::RockPaperScissors => Theme::WHITE,
        _ => Theme::RED,
    }
}

pub struct MiniGameMenuScreen {
    menu: Menu<MiniGame>,
    finished: bool,
}

impl MiniGameMenuScreen {
    pub fn new() -> Self {
        Self {
            menu: MiniGame::menu(),
            finished: false,
        }
    }
}

impl Screen for MiniGameMenuScreen {
    fn update(&mut self, input: &InputSnapshot, ctx: &mut ShellContext) -> Option<Transition> {
        if input.leaving() {
            self.finished = true;
            return Some(Transition::DifficultyMenu);
        }

        let game = self.menu.apply(input)?;
        log::info!("mini-game selected: {}", game);
        ctx.selected_game = Some(game);
        self.finished = true;
        if ctx.config.show_rules {
            Some(Transition::Rules(game))
        } else {
            Some(Transition::Play(game))
        }
    }

    fn render(&self, frame: &mut Frame, ctx: &ShellContext) {
        let area = content_area(frame.area());
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(difficulty) = ctx.difficulty {
            let label = Label::centered(format!("difficulty: {}", difficulty), header, 0)
                .style(TextStyle::new().color(Theme::difficulty(difficulty)).anchor(Anchor::Center));
            frame.render_widget(label, header);
        }

        let list = self.menu.options().iter().fold(
            MenuListWidget::new("SELECT A GAME")
                .cursor(self.menu.cursor())
                .cursor_color(Theme::HIGHLIGHT),
            |list, option| list.option(option.label, label_color(option.value)),
        );
        frame.render_widget(list, body);

        render_footer(
            frame,
            footer,
            &[
                ("\u{2191}\u{2193}", "Navigate"),
                ("Enter", "Play"),
                ("Esc", "Back"),
            ],
        );
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_confirm_goes_to_rules_by_default() {
        let mut ctx = ShellContext::new(Config::default());
        let mut screen = MiniGameMenuScreen::new();
        screen.update(&InputSnapshot::down(), &mut ctx);
        screen.update(&InputSnapshot::down(), &mut ctx);
        assert_eq!(
            screen.update(&InputSnapshot::confirm(), &mut ctx),
            Some(Transition::Rules(MiniGame::Binarize))
        );
        assert_eq!(ctx.selected_game, Some(MiniGame::Binarize));
    }

    #[test]
    fn test_rules_disabled_goes_straight_to_play() {
        let mut ctx = ShellContext::new(Config {
            show_rules: false,
            ..Config::default()
        });
        let mut screen = MiniGameMenuScreen::new();
        screen.update(&InputSnapshot::up(), &mut ctx);
        assert_eq!(
            screen.update(&InputSnapshot::confirm(), &mut ctx),
            Some(Transition::Play(MiniGame::Encrypter))
        );
    }

    #[test]
    fn test_back_returns_to_difficulty() {
        let mut ctx = ShellContext::new(Config::default());
        let mut screen = MiniGameMenuScreen::new();
        assert_eq!(
            screen.update(&InputSnapshot::back(), &mut ctx),
            Some(Transition::DifficultyMenu)
        );
    }

    #[test]
    fn test_only_rock_paper_scissors_is_white() {
        let white: Vec<_> = MiniGame::ALL
            .into_iter()
            .filter(|g| label_color(*g) == Theme::WHITE)
            .collect();
        assert_eq!(white, vec![MiniGame::RockPaperScissors]);
    }
}
