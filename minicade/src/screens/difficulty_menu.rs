use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use minicade_core::{Difficulty, InputSnapshot, Menu};
use minicade_widgets::menu_list::MenuListWidget;
use minicade_widgets::theme::Theme;

use crate::screens::{content_area, render_footer, Screen, Transition};
use crate::shell::ShellContext;

pub struct DifficultyMenuScreen {
    menu: Menu<Difficulty>,
    finished: bool,
}

impl DifficultyMenuScreen {
    pub fn new() -> Self {
        Self {
            menu: Difficulty::menu(),
            finished: false,
        }
    }
}

impl Screen for DifficultyMenuScreen {
    fn update(&mut self, input: &InputSnapshot, ctx: &mut ShellContext) -> Option<Transition> {
        if input.leaving() {
            self.finished = true;
            return Some(Transition::MainMenu);
        }

        let difficulty = self.menu.apply(input)?;
        log::info!("difficulty selected: {}", difficulty);
        ctx.difficulty = Some(difficulty);
        self.finished = true;
        Some(Transition::MiniGameMenu)
    }

    fn render(&self, frame: &mut Frame, _ctx: &ShellContext) {
        let area = content_area(frame.area());
        let [body, footer] =
            Layout::vertical([Constraint::Min(8), Constraint::Length(1)]).areas(area);

        let list = self.menu.options().iter().fold(
            MenuListWidget::new("SELECT DIFFICULTY")
                .title_color(Theme::GOLD)
                .cursor(self.menu.cursor())
                .cursor_color(Theme::HIGHLIGHT),
            |list, option| list.option(option.label, Theme::difficulty(option.value)),
        );
        frame.render_widget(list, body);

        render_footer(
            frame,
            footer,
            &[
                ("\u{2191}\u{2193}", "Navigate"),
                ("Enter", "Select"),
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
    fn test_confirm_stores_difficulty() {
        let mut ctx = ShellContext::new(Config::default());
        let mut screen = DifficultyMenuScreen::new();
        screen.update(&InputSnapshot::up(), &mut ctx);
        assert_eq!(
            screen.update(&InputSnapshot::confirm(), &mut ctx),
            Some(Transition::MiniGameMenu)
        );
        assert_eq!(ctx.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_leaving_keeps_previous_difficulty() {
        let mut ctx = ShellContext::new(Config::default());
        ctx.difficulty = Some(Difficulty::Medium);
        let mut screen = DifficultyMenuScreen::new();
        assert_eq!(
            screen.update(&InputSnapshot::cancel(), &mut ctx),
            Some(Transition::MainMenu)
        );
        assert!(screen.is_finished());
        assert_eq!(ctx.difficulty, Some(Difficulty::Medium));
    }
}
