use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Animated arcade backdrop: dark scanlines with slowly twinkling stars
pub struct BackdropWidget {
    pub tick: u64,
}

impl BackdropWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

/// Cheap per-cell hash so stars stay put between frames
fn cell_hash(x: u16, y: u16) -> u32 {
    let mut h = (x as u32).wrapping_mul(73_856_093) ^ (y as u32).wrapping_mul(19_349_663);
    h ^= h >> 13;
    h.wrapping_mul(0x5bd1_e995)
}

impl Widget for BackdropWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Color::Rgb(base_r, base_g, base_b) = Theme::BACKDROP else {
            return;
        };

        for y in area.top()..area.bottom() {
            // Scanline effect: slightly dim every other row
            let dim = if y % 2 == 0 { 0 } else { 4 };
            let bg = Color::Rgb(
                base_r.saturating_sub(dim),
                base_g.saturating_sub(dim),
                base_b.saturating_sub(dim),
            );

            for x in area.left()..area.right() {
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                cell.set_symbol(" ");
                cell.set_bg(bg);

                let h = cell_hash(x, y);
                if h % 97 == 0 {
                    let phase = (self.tick / 8 + h as u64 / 97) % 6;
                    let (symbol, fg) = match phase {
                        0 => ("+", Theme::HIGHLIGHT),
                        1 | 5 => ("·", Theme::MUTED_TEXT),
                        _ => ("·", Theme::DIM_TEXT),
                    };
                    cell.set_symbol(symbol);
                    cell.set_fg(fg);
                }
            }
        }
    }
}

/// Border around the play field with a title notch and a colour sweep
pub struct FrameWidget {
    pub tick: u64,
    pub title: String,
    pub accent: Color,
}

impl FrameWidget {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            title: String::new(),
            accent: Theme::GOLD,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let cycle = (self.tick % 600) as f64;
        let sweep = |pos: f64| {
            let t = (pos + cycle * 0.01).sin().abs();
            interpolate_color(Theme::DIM_TEXT, self.accent, (t * 0.6) as f32)
        };

        for x in area.left()..area.right() {
            let color = sweep(x as f64 / area.width as f64 * 3.0);
            set_cell(buf, x, area.top(), "\u{2500}", color);
            set_cell(buf, x, area.bottom() - 1, "\u{2500}", color);
        }
        for y in area.top()..area.bottom() {
            let color = sweep(y as f64 / area.height as f64 * 3.0);
            set_cell(buf, area.left(), y, "\u{2502}", color);
            set_cell(buf, area.right() - 1, y, "\u{2502}", color);
        }

        set_cell(buf, area.left(), area.top(), "\u{256d}", self.accent);
        set_cell(buf, area.right() - 1, area.top(), "\u{256e}", self.accent);
        set_cell(buf, area.left(), area.bottom() - 1, "\u{2570}", self.accent);
        set_cell(buf, area.right() - 1, area.bottom() - 1, "\u{256f}", self.accent);

        if !self.title.is_empty() {
            let notch = format!(" {} ", self.title);
            let width = notch.chars().count() as u16;
            if width + 4 <= area.width {
                let x = area.x + (area.width - width) / 2;
                buf.set_string(
                    x,
                    area.y,
                    notch,
                    Style::default()
                        .fg(self.accent)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, color: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        cell.set_fg(color);
    }
}

fn interpolate_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let r = (r1 as f32 + (r2 as f32 - r1 as f32) * t) as u8;
            let g = (g1 as f32 + (g2 as f32 - g1 as f32) * t) as u8;
            let b = (b1 as f32 + (b2 as f32 - b1 as f32) * t) as u8;
            Color::Rgb(r, g, b)
        }
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_fills_background() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        BackdropWidget::new(0).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].bg, Theme::BACKDROP);
        assert_ne!(buf[(0, 1)].bg, Theme::BACKDROP);
    }

    #[test]
    fn test_frame_title_notch() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        FrameWidget::new(3).title("ARCADE").render(area, &mut buf);
        let top: String = (0..20).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(top.contains(" ARCADE "));
        assert_eq!(buf[(0, 0)].symbol(), "\u{256d}");
        assert_eq!(buf[(19, 4)].symbol(), "\u{256f}");
    }

    #[test]
    fn test_interpolate_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(interpolate_color(a, b, 0.0), a);
        assert_eq!(interpolate_color(a, b, 1.0), b);
    }
}
