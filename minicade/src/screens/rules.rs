use ratatui::style::Style;
use ratatui::Frame;

use minicade_core::{InputSnapshot, MiniGame};
use minicade_widgets::popup::PopupWidget;
use minicade_widgets::theme::Theme;

use crate::screens::{content_area, render_footer, Screen, Transition};
use crate::shell::ShellContext;

/// Title and rules of a mini-game, shown before it starts
pub struct RulesScreen {
    game: MiniGame,
    finished: bool,
}

impl RulesScreen {
    pub fn new(game: MiniGame) -> Self {
        Self {
            game,
            finished: false,
        }
    }
}

impl Screen for RulesScreen {
    fn update(&mut self, input: &InputSnapshot, _ctx: &mut ShellContext) -> Option<Transition> {
        if input.leaving() {
            self.finished = true;
            Some(Transition::MiniGameMenu)
        } else if input.confirm {
            self.finished = true;
            Some(Transition::Play(self.game))
        } else {
            None
        }
    }

    fn render(&self, frame: &mut Frame, _ctx: &ShellContext) {
        let area = content_area(frame.area());

        let popup = PopupWidget::new(self.game.title())
            .title_color(Theme::RED)
            .line(self.game.rules(), Style::default().fg(Theme::WHITE))
            .footer("PLAY [Enter]")
            .size(70, 60);
        frame.render_widget(popup, area);

        render_footer(frame, area, &[("Enter", "Play"), ("Esc", "Back")]);
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_confirm_plays_and_back_returns() {
        let mut ctx = ShellContext::new(Config::default());

        let mut screen = RulesScreen::new(MiniGame::MathChamp);
        assert_eq!(screen.update(&InputSnapshot::key('x'), &mut ctx), None);
        assert_eq!(
            screen.update(&InputSnapshot::confirm(), &mut ctx),
            Some(Transition::Play(MiniGame::MathChamp))
        );

        let mut screen = RulesScreen::new(MiniGame::Hangman);
        assert_eq!(
            screen.update(&InputSnapshot::back(), &mut ctx),
            Some(Transition::MiniGameMenu)
        );
        assert!(screen.is_finished());
    }
}
