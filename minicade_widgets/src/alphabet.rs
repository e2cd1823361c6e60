use minicade_core::HangmanBoard;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// The a-z strip, used letters in red
pub struct AlphabetWidget {
    pub used: [bool; 26],
}

impl AlphabetWidget {
    pub fn new(board: &HangmanBoard) -> Self {
        let mut used = [false; 26];
        for (i, c) in ('a'..='z').enumerate() {
            used[i] = board.is_used(c);
        }
        Self { used }
    }
}

impl Widget for AlphabetWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Two rows of 13 when a single row of 26 does not fit
        let per_row: u16 = if area.width >= 52 { 26 } else { 13 };
        let rows = 26 / per_row;
        let width = per_row * 2 - 1;
        let left = area.x + area.width.saturating_sub(width) / 2;

        for (i, c) in ('a'..='z').enumerate() {
            let row = i as u16 / per_row;
            if row >= rows || row >= area.height {
                break;
            }
            let x = left + (i as u16 % per_row) * 2;
            if x >= area.right() {
                continue;
            }
            let style = if self.used[i] {
                Style::default().fg(Theme::RED)
            } else {
                Style::default()
                    .fg(Theme::WHITE)
                    .add_modifier(Modifier::BOLD)
            };
            buf.set_string(x, area.y + row, c.to_string(), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_letters_are_red() {
        let mut board = HangmanBoard::new("cat").unwrap();
        board.guess('c');
        board.guess('z');

        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        AlphabetWidget::new(&board).render(area, &mut buf);

        let cell = |c: char| {
            let x = (0..60).find(|&x| buf[(x, 0)].symbol() == c.to_string()).unwrap();
            buf[(x, 0)].fg
        };
        assert_eq!(cell('c'), Theme::RED);
        assert_eq!(cell('z'), Theme::RED);
        assert_eq!(cell('a'), Theme::WHITE);
    }

    #[test]
    fn test_narrow_area_wraps_to_two_rows() {
        let board = HangmanBoard::new("cat").unwrap();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        AlphabetWidget::new(&board).render(area, &mut buf);
        let second: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(second.trim().starts_with('n'));
        assert!(second.trim().ends_with('z'));
    }
}
