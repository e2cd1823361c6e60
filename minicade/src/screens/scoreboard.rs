use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use minicade_core::{InputSnapshot, Scoreboard};
use minicade_widgets::popup::centered_rect;
use minicade_widgets::theme::Theme;

use crate::screens::{content_area, render_footer, Screen, Transition};
use crate::shell::ShellContext;

/// Session tallies of this run, per mini-game
pub struct ScoreboardScreen {
    finished: bool,
}

impl ScoreboardScreen {
    pub fn new() -> Self {
        Self { finished: false }
    }
}

fn results_table(scoreboard: &Scoreboard) -> Table<'static> {
    let header = Row::new(vec!["game", "played", "won", "rounds W/L/T"]).style(
        Style::default()
            .fg(Theme::GOLD)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = scoreboard
        .rows()
        .map(|(game, tally)| {
            let style = if tally.played == 0 {
                Style::default().fg(Theme::DIM_TEXT)
            } else {
                Style::default().fg(Theme::WHITE)
            };
            Row::new(vec![
                Cell::from(game.title()),
                Cell::from(tally.played.to_string()),
                Cell::from(Span::styled(
                    tally.won.to_string(),
                    Style::default().fg(Theme::GREEN),
                )),
                Cell::from(format!(
                    "{}/{}/{}",
                    tally.rounds_won, tally.rounds_lost, tally.rounds_tied
                )),
            ])
            .style(style)
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Theme::HIGHLIGHT))
            .style(Style::default().bg(Theme::PANEL_BG))
            .title(Span::styled(
                " SCOREBOARD ",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
    )
}

impl Screen for ScoreboardScreen {
    fn update(&mut self, input: &InputSnapshot, _ctx: &mut ShellContext) -> Option<Transition> {
        if input.confirm || input.leaving() {
            self.finished = true;
            Some(Transition::MainMenu)
        } else {
            None
        }
    }

    fn render(&self, frame: &mut Frame, ctx: &ShellContext) {
        let area = content_area(frame.area());
        let table_area = centered_rect(80, 60, area);
        let table_area = Rect {
            height: table_area.height.max(10).min(area.height),
            ..table_area
        };

        frame.render_widget(Clear, table_area);
        frame.render_widget(results_table(&ctx.scoreboard), table_area);

        if ctx.scoreboard.is_empty() && table_area.bottom() < area.bottom() {
            let note = Rect {
                y: table_area.bottom(),
                height: 1,
                ..table_area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No games played yet",
                    Style::default().fg(Theme::MUTED_TEXT),
                ))
                .centered(),
                note,
            );
        }

        render_footer(frame, area, &[("Enter", "Back")]);
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use minicade_core::{MiniGame, Outcome, RoundState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_any_key_of_intent_returns_to_menu() {
        let mut ctx = ShellContext::new(Config::default());
        for input in [
            InputSnapshot::confirm(),
            InputSnapshot::back(),
            InputSnapshot::cancel(),
        ] {
            let mut screen = ScoreboardScreen::new();
            assert_eq!(screen.update(&input, &mut ctx), Some(Transition::MainMenu));
        }
        let mut screen = ScoreboardScreen::new();
        assert_eq!(screen.update(&InputSnapshot::down(), &mut ctx), None);
    }

    #[test]
    fn test_table_lists_recorded_games() {
        let mut ctx = ShellContext::new(Config::default());
        let mut round = RoundState::new(1);
        round.record(Outcome::Win);
        ctx.scoreboard.record(MiniGame::MathChamp, Outcome::Win, &round);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| ScoreboardScreen::new().render(frame, &ctx))
            .unwrap();
        let buf = terminal.backend().buffer();
        let text: String = (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("SCOREBOARD"));
        assert!(text.contains("Math Champ"));
        assert!(text.contains("1/0/0"));
        assert!(!text.contains("No games played yet"));
    }
}
