use minicade_core::RoundState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::text::{Anchor, Label, TextStyle};
use crate::theme::Theme;

/// Round counters along the top row: losses left, ties centre, wins right
pub struct TallyWidget {
    pub correct: u32,
    pub incorrect: u32,
    pub ties: u32,
}

impl TallyWidget {
    pub fn new(round: &RoundState) -> Self {
        Self {
            correct: round.correct,
            incorrect: round.incorrect,
            ties: round.ties,
        }
    }
}

impl Widget for TallyWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Label::new(format!("Lost: {}", self.incorrect), 1, 0)
            .style(TextStyle::new().color(Theme::RED))
            .render(area, buf);
        Label::new(format!("Ties: {}", self.ties), area.width / 2, 0)
            .style(TextStyle::new().color(Theme::ORANGE).anchor(Anchor::Center))
            .render(area, buf);
        Label::new(format!("Won: {}", self.correct), area.width.saturating_sub(1), 0)
            .style(TextStyle::new().color(Theme::GREEN).anchor(Anchor::TopRight))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicade_core::Outcome;

    #[test]
    fn test_counters_in_their_corners() {
        let mut round = RoundState::new(3);
        round.record(Outcome::Lose);
        round.record(Outcome::Tie);

        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TallyWidget::new(&round).render(area, &mut buf);

        let row: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.starts_with(" Lost: 1"));
        assert!(row.trim_end().ends_with("Won: 0"));
        assert!(row.contains("Ties: 1"));
        assert_eq!(buf[(1, 0)].fg, Theme::RED);
        assert_eq!(buf[(38, 0)].fg, Theme::GREEN);
    }
}
