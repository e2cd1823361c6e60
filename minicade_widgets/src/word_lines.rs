use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// One underscore per letter of the hidden word, guessed letters above it.
///
/// When `answer` is set, letters still hidden are filled in from it in red.
pub struct WordLinesWidget {
    pub revealed: Vec<Option<char>>,
    pub answer: Option<String>,
}

impl WordLinesWidget {
    pub fn new(revealed: Vec<Option<char>>) -> Self {
        Self {
            revealed,
            answer: None,
        }
    }

    pub fn answer(mut self, word: impl Into<String>) -> Self {
        self.answer = Some(word.into());
        self
    }
}

impl Widget for WordLinesWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || self.revealed.is_empty() {
            return;
        }

        let len = self.revealed.len() as u16;
        let step = if len * 2 <= area.width { 2 } else { 1 };
        let width = len * step - (step - 1);
        let left = area.x + area.width.saturating_sub(width) / 2;
        let answer: Vec<char> = self
            .answer
            .as_deref()
            .map(|w| w.chars().collect())
            .unwrap_or_default();

        for (i, slot) in self.revealed.iter().enumerate() {
            let x = left + i as u16 * step;
            if x >= area.right() {
                break;
            }
            buf.set_string(x, area.y + 1, "_", Style::default().fg(Theme::MUTED_TEXT));

            let (letter, color) = match (slot, answer.get(i)) {
                (Some(c), _) => (Some(*c), Theme::WHITE),
                (None, Some(c)) => (Some(*c), Theme::RED),
                (None, None) => (None, Theme::WHITE),
            };
            if let Some(c) = letter {
                buf.set_string(
                    x,
                    area.y,
                    c.to_ascii_uppercase().to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}
