use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use minicade_core::{InputSnapshot, MainMenuItem, Menu};
use minicade_widgets::menu_list::MenuListWidget;
use minicade_widgets::theme::Theme;

use crate::screens::{content_area, render_footer, Screen, Transition};
use crate::shell::ShellContext;

const TITLE_ART: [&str; 5] = [
    " __  __ _       _               _      ",
    "|  \\/  (_)_ __ (_) ___ __ _  __| | ___ ",
    "| |\\/| | | '_ \\| |/ __/ _` |/ _` |/ _ \\",
    "| |  | | | | | | | (_| (_| | (_| |  __/",
    "|_|  |_|_|_| |_|_|\\___\\__,_|\\__,_|\\___|",
];

pub struct MainMenuScreen {
    menu: Menu<MainMenuItem>,
    finished: bool,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self {
            menu: MainMenuItem::menu(),
            finished: false,
        }
    }
}

impl Screen for MainMenuScreen {
    fn update(&mut self, input: &InputSnapshot, _ctx: &mut ShellContext) -> Option<Transition> {
        let item = self.menu.apply(input)?;
        self.finished = true;
        Some(match item {
            MainMenuItem::Start => Transition::DifficultyMenu,
            MainMenuItem::Scoreboard => Transition::Scoreboard,
            MainMenuItem::Quit => Transition::Quit,
        })
    }

    fn render(&self, frame: &mut Frame, _ctx: &ShellContext) {
        let area = content_area(frame.area());

        let chunks = Layout::vertical([
            Constraint::Percentage(15),
            Constraint::Length(8),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

        // Title - ASCII art
        let mut title_lines: Vec<Line> = TITLE_ART
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default()
                        .fg(Theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        title_lines.push(Line::from(""));
        title_lines.push(Line::from(Span::styled(
            "A terminal arcade of tiny games",
            Style::default().fg(Theme::MUTED_TEXT),
        )));
        frame.render_widget(
            Paragraph::new(title_lines).alignment(Alignment::Center),
            chunks[1],
        );

        let list = self.menu.options().iter().fold(
            MenuListWidget::new("")
                .cursor(self.menu.cursor())
                .cursor_color(Theme::HIGHLIGHT),
            |list, option| list.option(option.label, Theme::WHITE),
        );
        frame.render_widget(list, chunks[2]);

        render_footer(
            frame,
            chunks[3],
            &[("\u{2191}\u{2193}", "Navigate"), ("Enter", "Select"), ("Ctrl+C", "Quit")],
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

    fn ctx() -> ShellContext {
        ShellContext::new(Config::default())
    }

    #[test]
    fn test_items_lead_to_their_screens() {
        let mut ctx = ctx();
        for (downs, expected) in [
            (0, Transition::DifficultyMenu),
            (1, Transition::Scoreboard),
            (2, Transition::Quit),
        ] {
            let mut screen = MainMenuScreen::new();
            for _ in 0..downs {
                assert_eq!(screen.update(&InputSnapshot::down(), &mut ctx), None);
            }
            assert!(!screen.is_finished());
            assert_eq!(screen.update(&InputSnapshot::confirm(), &mut ctx), Some(expected));
            assert!(screen.is_finished());
        }
    }

    #[test]
    fn test_back_and_cancel_are_ignored() {
        let mut ctx = ctx();
        let mut screen = MainMenuScreen::new();
        assert_eq!(screen.update(&InputSnapshot::back(), &mut ctx), None);
        assert_eq!(screen.update(&InputSnapshot::cancel(), &mut ctx), None);
        assert!(!screen.is_finished());
    }
}
