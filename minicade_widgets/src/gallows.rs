use minicade_core::MAX_INCORRECT;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line, Rectangle};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Figure parts in the order wrong guesses add them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

pub const BODY_PARTS: [BodyPart; MAX_INCORRECT as usize] = [
    BodyPart::Head,
    BodyPart::Body,
    BodyPart::LeftArm,
    BodyPart::RightArm,
    BodyPart::LeftLeg,
    BodyPart::RightLeg,
];

pub fn visible_parts(incorrect: u32) -> &'static [BodyPart] {
    let n = (incorrect as usize).min(BODY_PARTS.len());
    &BODY_PARTS[..n]
}

/// The gallows with one body part per wrong guess, on a 100x100 canvas
pub struct GallowsWidget {
    pub incorrect: u32,
}

impl GallowsWidget {
    pub fn new(incorrect: u32) -> Self {
        Self { incorrect }
    }
}

impl Widget for GallowsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let parts = visible_parts(self.incorrect);
        let figure = if parts.len() == BODY_PARTS.len() {
            Theme::RED
        } else {
            Theme::WHITE
        };

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(Theme::BG)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(|ctx| {
                // Base, post, beam and rope
                ctx.draw(&Rectangle {
                    x: 10.0,
                    y: 2.0,
                    width: 50.0,
                    height: 4.0,
                    color: Theme::MUTED_TEXT,
                });
                ctx.draw(&Line::new(20.0, 6.0, 20.0, 95.0, Theme::MUTED_TEXT));
                ctx.draw(&Line::new(20.0, 95.0, 65.0, 95.0, Theme::MUTED_TEXT));
                ctx.draw(&Line::new(20.0, 80.0, 35.0, 95.0, Theme::MUTED_TEXT));
                ctx.draw(&Line::new(65.0, 95.0, 65.0, 82.0, Theme::GOLD));

                for part in parts {
                    match part {
                        BodyPart::Head => ctx.draw(&Circle {
                            x: 65.0,
                            y: 74.0,
                            radius: 8.0,
                            color: figure,
                        }),
                        BodyPart::Body => ctx.draw(&Line::new(65.0, 66.0, 65.0, 36.0, figure)),
                        BodyPart::LeftArm => {
                            ctx.draw(&Line::new(65.0, 60.0, 52.0, 46.0, figure))
                        }
                        BodyPart::RightArm => {
                            ctx.draw(&Line::new(65.0, 60.0, 78.0, 46.0, figure))
                        }
                        BodyPart::LeftLeg => ctx.draw(&Line::new(65.0, 36.0, 54.0, 16.0, figure)),
                        BodyPart::RightLeg => {
                            ctx.draw(&Line::new(65.0, 36.0, 76.0, 16.0, figure))
                        }
                    }
                }
            })
            .render(area, buf);
    }
}
