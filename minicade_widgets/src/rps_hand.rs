use minicade_core::Hand;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::theme::Theme;

/// Size of the hand drawings in terminal cells
pub const ART_WIDTH: u16 = 17;
pub const ART_HEIGHT: u16 = 6;

const ROCK: [&str; 6] = [
    "    _______",
    "---'   ____)",
    "      (_____)",
    "      (_____)",
    "      (____)",
    "---.__(___)",
];

const PAPER: [&str; 6] = [
    "    _______",
    "---'   ____)____",
    "          ______)",
    "          _______)",
    "         _______)",
    "---.__________)",
];

const SCISSORS: [&str; 6] = [
    "    _______",
    "---'   ____)____",
    "          ______)",
    "       __________)",
    "      (____)",
    "---.__(___)",
];

fn mirror_char(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '/' => '\\',
        '\\' => '/',
        other => other,
    }
}

/// Drawing of a hand pointing right, or left when `mirrored`
pub fn art_lines(hand: Hand, mirrored: bool) -> Vec<String> {
    let art = match hand {
        Hand::Rock => ROCK,
        Hand::Paper => PAPER,
        Hand::Scissors => SCISSORS,
    };
    art.iter()
        .map(|line| {
            if mirrored {
                format!("{:<width$}", line, width = ART_WIDTH as usize)
                    .chars()
                    .rev()
                    .map(mirror_char)
                    .collect()
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// A hand drawing, optionally framed and lifted by a bob offset
pub struct HandArtWidget {
    pub hand: Hand,
    pub mirrored: bool,
    pub highlighted: bool,
    pub color: Color,
    /// Rows the art is lifted from the bottom of its area
    pub lift: u16,
}

impl HandArtWidget {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            mirrored: false,
            highlighted: false,
            color: Theme::WHITE,
            lift: 0,
        }
    }

    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn lift(mut self, lift: u16) -> Self {
        self.lift = lift;
        self
    }
}

impl Widget for HandArtWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < ART_WIDTH + 2 || area.height < ART_HEIGHT + 2 {
            return;
        }

        let border_color = if self.highlighted {
            Theme::HIGHLIGHT
        } else {
            Theme::BORDER
        };
        let border_type = if self.highlighted {
            BorderType::Double
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut style = Style::default().fg(self.color);
        if self.highlighted {
            style = style.add_modifier(Modifier::BOLD);
        }

        let x = inner.x + inner.width.saturating_sub(ART_WIDTH) / 2;
        let rest = inner.height.saturating_sub(ART_HEIGHT);
        let y = inner.y + rest - self.lift.min(rest);
        for (i, line) in art_lines(self.hand, self.mirrored).iter().enumerate() {
            buf.set_stringn(x, y + i as u16, line, inner.width as usize, style);
        }
    }
}
