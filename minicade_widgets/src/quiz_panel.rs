use minicade_core::{OptionKey, QuizChallenge};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Height of one answer box
const BOX_HEIGHT: u16 = 3;

/// Question line above a 2x2 grid of A-D answer boxes.
///
/// Once `answered` is set the chosen box turns red when wrong and the
/// correct one green.
pub struct QuizPanelWidget {
    pub question: String,
    pub options: Vec<(OptionKey, String)>,
    pub correct: OptionKey,
    pub answered: Option<OptionKey>,
}

impl QuizPanelWidget {
    pub fn new(challenge: &QuizChallenge) -> Self {
        Self {
            question: challenge.question.clone(),
            options: challenge
                .options()
                .map(|(key, text)| (key, text.to_string()))
                .collect(),
            correct: challenge.correct,
            answered: None,
        }
    }

    pub fn answered(mut self, answered: Option<OptionKey>) -> Self {
        self.answered = answered;
        self
    }

    fn box_color(&self, key: OptionKey) -> Color {
        match self.answered {
            Some(_) if key == self.correct => Theme::GREEN,
            Some(chosen) if chosen == key => Theme::RED,
            Some(_) => Theme::DIM_TEXT,
            None => Theme::BLUE,
        }
    }
}

impl Widget for QuizPanelWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 + BOX_HEIGHT * 2 || area.width < 12 {
            return;
        }

        let [question_area, _, grid] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BOX_HEIGHT * 2),
        ])
        .areas(area);

        Paragraph::new(Line::from(Span::styled(
            self.question.clone(),
            Style::default()
                .fg(Theme::WHITE)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(question_area, buf);

        let rows = Layout::vertical([Constraint::Length(BOX_HEIGHT); 2]).split(grid);
        for (i, (key, text)) in self.options.iter().enumerate() {
            let cols = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(rows[i / 2]);
            let cell = cols[i % 2];
            let color = self.box_color(*key);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));
            let inner = block.inner(cell);
            block.render(cell, buf);

            let line = Line::from(vec![
                Span::styled(
                    format!("{}) ", key),
                    Style::default().fg(Theme::GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(text.clone(), Style::default().fg(color)),
            ]);
            buf.set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(1));
        }
    }
}

/// Boxed helper text shown beside a quiz
pub struct HintPanelWidget {
    pub lines: Vec<String>,
}

impl HintPanelWidget {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl Widget for HintPanelWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 6 || area.height < 3 {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::BORDER))
            .title(Span::styled(" Hints ", Style::default().fg(Theme::GOLD)))
            .padding(Padding::horizontal(1));

        let text: Vec<Line> = self
            .lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Theme::MUTED_TEXT))))
            .collect();
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn contains(buf: &Buffer, needle: &str) -> bool {
        (0..buf.area.height).any(|y| {
            let row: String = (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect();
            row.contains(needle)
        })
    }

    fn challenge() -> QuizChallenge {
        let mut rng = StdRng::seed_from_u64(1);
        QuizChallenge::new(
            "A + B",
            "5",
            vec!["4".into(), "6".into(), "7".into()],
            &mut rng,
        )
    }

    #[test]
    fn test_question_and_all_options_drawn() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        QuizPanelWidget::new(&challenge()).render(area, &mut buf);
        assert!(contains(&buf, "A + B"));
        for label in ["A) ", "B) ", "C) ", "D) "] {
            assert!(contains(&buf, label), "missing {}", label);
        }
    }

    #[test]
    fn test_answer_colors() {
        let challenge = challenge();
        let wrong = OptionKey::ALL
            .into_iter()
            .find(|k| *k != challenge.correct)
            .unwrap();
        let panel = QuizPanelWidget::new(&challenge).answered(Some(wrong));
        assert_eq!(panel.box_color(challenge.correct), Theme::GREEN);
        assert_eq!(panel.box_color(wrong), Theme::RED);
    }

    #[test]
    fn test_hint_panel_shows_lines() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        HintPanelWidget::new(vec!["A + A = 4".into()]).render(area, &mut buf);
        assert!(contains(&buf, "Hints"));
        assert!(contains(&buf, "A + A = 4"));
    }
}
