use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

pub const CURSOR_GLYPH: &str = "*";

/// Rows between two menu entries
const ROW_GAP: u16 = 2;

/// A titled vertical menu with a cursor glyph left of the highlighted entry.
///
/// The glyph is black unless `cursor_color` says otherwise, which suits light menus.
pub struct MenuListWidget {
    pub title: String,
    pub title_color: Color,
    pub options: Vec<(String, Color)>,
    pub cursor: usize,
    pub cursor_color: Color,
}

impl MenuListWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_color: Theme::GOLD,
            options: Vec::new(),
            cursor: 0,
            cursor_color: Theme::BLACK,
        }
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn option(mut self, label: impl Into<String>, color: Color) -> Self {
        self.options.push((label.into(), color));
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor_color(mut self, color: Color) -> Self {
        self.cursor_color = color;
        self
    }
}

impl Widget for MenuListWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 4 {
            return;
        }

        let block_height = 2 + self.options.len() as u16 * ROW_GAP;
        let top = area.y + area.height.saturating_sub(block_height) / 2;

        let title_x = area.x + area.width.saturating_sub(self.title.chars().count() as u16) / 2;
        buf.set_string(
            title_x,
            top,
            &self.title,
            Style::default()
                .fg(self.title_color)
                .add_modifier(Modifier::BOLD),
        );

        // Entries share one left edge so the cursor lines up
        let widest = self
            .options
            .iter()
            .map(|(label, _)| label.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let left = area.x + area.width.saturating_sub(widest) / 2;

        for (i, (label, color)) in self.options.iter().enumerate() {
            let y = top + 2 + i as u16 * ROW_GAP;
            if y >= area.bottom() {
                break;
            }
            let highlighted = i == self.cursor;
            let mut style = Style::default().fg(*color);
            if highlighted {
                style = style.add_modifier(Modifier::BOLD);
            }
            buf.set_string(left, y, label, style);

            if highlighted && left >= area.x + 2 {
                buf.set_string(
                    left - 2,
                    y,
                    CURSOR_GLYPH,
                    Style::default()
                        .fg(self.cursor_color)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}
