use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Which point of the text the label position refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Bold text
    #[default]
    Primary,
    /// Plain text for secondary copy
    Secondary,
}

/// Drawing parameters for a piece of text.
///
/// Defaults: white, anchored top-left, primary font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    pub anchor: Anchor,
    pub font: Font,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Theme::WHITE,
            anchor: Anchor::TopLeft,
            font: Font::Primary,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn style(&self) -> Style {
        let style = Style::default().fg(self.color);
        match self.font {
            Font::Primary => style.add_modifier(Modifier::BOLD),
            Font::Secondary => style,
        }
    }

    /// Top-left cell for `width` cells of text anchored at `(x, y)`
    pub fn origin(&self, x: u16, y: u16, width: u16) -> (u16, u16) {
        match self.anchor {
            Anchor::TopLeft => (x, y),
            Anchor::TopRight => (x.saturating_sub(width), y),
            Anchor::Center => (x.saturating_sub(width / 2), y),
        }
    }
}

/// A single line of text placed relative to an anchor point inside the area.
///
/// The point is given as an offset from the area's top-left corner.
pub struct Label {
    pub text: String,
    pub x: u16,
    pub y: u16,
    pub style: TextStyle,
}

impl Label {
    pub fn new(text: impl Into<String>, x: u16, y: u16) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Horizontally centred on the area
    pub fn centered(text: impl Into<String>, area: Rect, y: u16) -> Self {
        Self::new(text, area.width / 2, y).style(TextStyle::new().anchor(Anchor::Center))
    }
}

impl Widget for Label {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.text.chars().count() as u16;
        let (x, y) = self.style.origin(self.x, self.y, width);
        if y >= area.height || x >= area.width {
            return;
        }
        buf.set_stringn(
            area.x + x,
            area.y + y,
            &self.text,
            (area.width - x) as usize,
            self.style.style(),
        );
    }
}
