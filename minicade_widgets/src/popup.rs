use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// A centered popup overlay: a title, centred lines, and an optional footer prompt
pub struct PopupWidget {
    pub title: String,
    pub title_color: Color,
    pub lines: Vec<(String, Style)>,
    pub footer: Option<String>,
    pub width_percent: u16,
    pub height_percent: u16,
}

impl PopupWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_color: Theme::GOLD,
            lines: Vec::new(),
            footer: None,
            width_percent: 60,
            height_percent: 40,
        }
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn line(mut self, text: impl Into<String>, style: Style) -> Self {
        self.lines.push((text.into(), style));
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent;
        self.height_percent = height_percent;
        self
    }
}

impl Widget for PopupWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(self.width_percent, self.height_percent, area);
        if popup_area.width < 4 || popup_area.height < 3 {
            return;
        }

        Clear.render(popup_area, buf);

        let title_line = Line::from(Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.title_color)
                .add_modifier(Modifier::BOLD),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Theme::HIGHLIGHT))
            .style(Style::default().bg(Theme::PANEL_BG))
            .title(title_line)
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let footer_rows = u16::from(self.footer.is_some());
        let body = Rect {
            height: inner.height.saturating_sub(footer_rows),
            ..inner
        };

        let text: Vec<Line> = self
            .lines
            .into_iter()
            .map(|(text, style)| Line::from(Span::styled(text, style)))
            .collect();
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        if let Some(footer) = self.footer {
            let y = inner.bottom().saturating_sub(1);
            let x = inner.x + inner.width.saturating_sub(footer.chars().count() as u16) / 2;
            buf.set_string(
                x,
                y,
                footer,
                Style::default()
                    .fg(Theme::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x.min(100) / 100;
    let height = area.height * percent_y.min(100) / 100;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
