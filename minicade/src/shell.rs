use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::Frame;

use minicade_core::{Difficulty, InputSnapshot, MiniGame, Scoreboard};
use minicade_widgets::background::{BackdropWidget, FrameWidget};
use minicade_widgets::Theme;

use crate::config::Config;
use crate::effects::{self, FxCue, FxManager};
use crate::screens::main_menu::MainMenuScreen;
use crate::screens::{ActiveScreen, Screen, Transition};

/// Shell-owned state lent to the active screen every frame
pub struct ShellContext {
    pub difficulty: Option<Difficulty>,
    pub selected_game: Option<MiniGame>,
    pub scoreboard: Scoreboard,
    pub config: Config,
    pub rng: StdRng,
    /// Clock of the frame being processed
    pub now: Instant,
    /// Effects requested by the screen during this frame
    pub cues: Vec<FxCue>,
}

impl ShellContext {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            difficulty: None,
            selected_game: None,
            scoreboard: Scoreboard::new(),
            config,
            rng,
            now: Instant::now(),
            cues: Vec::new(),
        }
    }

    /// The chosen difficulty. Easy if none was picked yet.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_else(|| {
            log::warn!("no difficulty selected, defaulting to easy");
            Difficulty::Easy
        })
    }

    pub fn cue(&mut self, cue: FxCue) {
        self.cues.push(cue);
    }
}

/// Owns the active screen and runs update -> swap -> render each frame
pub struct GameShell {
    screen: ActiveScreen,
    pub ctx: ShellContext,
    pub fx: FxManager,
    pub tick: u64,
    running: bool,
}

impl GameShell {
    pub fn new(config: Config) -> Self {
        let mut fx = FxManager::default();
        // Title shimmer runs forever on main menu
        fx.add_unique_effect("title_shimmer", effects::title_shimmer());

        Self {
            screen: ActiveScreen::MainMenu(MainMenuScreen::new()),
            ctx: ShellContext::new(config),
            fx,
            tick: 0,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    pub fn update(&mut self, input: &InputSnapshot) {
        self.update_at(input, Instant::now());
    }

    /// One frame of game logic against an explicit clock
    pub fn update_at(&mut self, input: &InputSnapshot, now: Instant) {
        if !self.running {
            return;
        }
        self.tick += 1;
        self.ctx.now = now;

        if input.quit {
            log::info!("quit requested from the terminal");
            self.running = false;
            return;
        }

        let transition = self.screen.update(input, &mut self.ctx);

        for cue in self.ctx.cues.drain(..) {
            self.fx.add_unique_effect(cue.key(), cue.effect());
        }

        if let Some(transition) = transition {
            if self.screen.is_finished() {
                self.switch(transition);
            }
        }
    }

    fn switch(&mut self, transition: Transition) {
        let Some(next) = ActiveScreen::enter(transition, &mut self.ctx) else {
            log::info!("leaving from the {}", self.screen.name());
            self.running = false;
            return;
        };

        log::info!("{} -> {}", self.screen.name(), next.name());
        self.screen = next;

        self.fx
            .add_unique_effect("screen_transition", effects::screen_transition());
        if matches!(self.screen, ActiveScreen::MainMenu(_)) {
            self.fx
                .add_unique_effect("title_shimmer", effects::title_shimmer());
        } else {
            self.fx.cancel_unique_effect("title_shimmer");
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(BackdropWidget::new(self.tick), area);

        let accent = self
            .ctx
            .difficulty
            .map(Theme::difficulty)
            .unwrap_or(Theme::GOLD);
        frame.render_widget(
            FrameWidget::new(self.tick).title("MINICADE").accent(accent),
            area,
        );

        self.screen.render(frame, &self.ctx);

        // Apply all tachyonfx effects on top of rendered content
        let tick_duration = tachyonfx::Duration::from_millis(self.ctx.config.frame_millis().into());
        self.fx
            .process_effects(tick_duration, frame.buffer_mut(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn shell() -> GameShell {
        GameShell::new(Config {
            seed: Some(7),
            ..Config::default()
        })
    }

    fn press(shell: &mut GameShell, input: InputSnapshot) {
        shell.update_at(&input, Instant::now());
    }

    /// Draws the active screen alone; transition effects would hide it for a few frames
    fn screen_text(shell: &mut GameShell) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| shell.screen().render(frame, &shell.ctx))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_start_easy_hangman_walk() {
        let mut shell = shell();
        assert!(matches!(shell.screen(), ActiveScreen::MainMenu(_)));

        press(&mut shell, InputSnapshot::confirm());
        assert!(matches!(shell.screen(), ActiveScreen::DifficultyMenu(_)));

        press(&mut shell, InputSnapshot::confirm());
        assert_eq!(shell.ctx.difficulty, Some(Difficulty::Easy));
        assert!(matches!(shell.screen(), ActiveScreen::MiniGameMenu(_)));

        press(&mut shell, InputSnapshot::down());
        press(&mut shell, InputSnapshot::confirm());
        assert_eq!(shell.ctx.selected_game, Some(MiniGame::Hangman));
        assert!(matches!(shell.screen(), ActiveScreen::Rules(_)));

        press(&mut shell, InputSnapshot::confirm());
        let ActiveScreen::Hangman(screen) = shell.screen() else {
            panic!("expected hangman, got {}", shell.screen().name());
        };
        assert!(minicade_core::hangman::words(Difficulty::Easy).contains(&screen.board().word()));
    }

    #[test]
    fn test_rules_can_be_skipped() {
        let mut shell = GameShell::new(Config {
            seed: Some(1),
            show_rules: false,
            ..Config::default()
        });
        press(&mut shell, InputSnapshot::confirm());
        press(&mut shell, InputSnapshot::confirm());
        press(&mut shell, InputSnapshot::confirm());
        assert!(matches!(shell.screen(), ActiveScreen::RockPaperScissors(_)));
    }

    #[test]
    fn test_quit_from_main_menu_stops_shell() {
        let mut shell = shell();
        press(&mut shell, InputSnapshot::up());
        assert!(shell.is_running());
        press(&mut shell, InputSnapshot::confirm());
        assert!(!shell.is_running());
    }

    #[test]
    fn test_terminal_quit_request_stops_anywhere() {
        let mut shell = shell();
        press(&mut shell, InputSnapshot::confirm());
        let mut input = InputSnapshot::new();
        input.quit = true;
        press(&mut shell, input);
        assert!(!shell.is_running());
        assert!(matches!(shell.screen(), ActiveScreen::DifficultyMenu(_)));
    }

    #[test]
    fn test_back_walks_up_the_menus() {
        let mut shell = shell();
        press(&mut shell, InputSnapshot::confirm());
        press(&mut shell, InputSnapshot::confirm());
        press(&mut shell, InputSnapshot::back());
        assert!(matches!(shell.screen(), ActiveScreen::DifficultyMenu(_)));
        press(&mut shell, InputSnapshot::cancel());
        assert!(matches!(shell.screen(), ActiveScreen::MainMenu(_)));
        press(&mut shell, InputSnapshot::back());
        assert!(matches!(shell.screen(), ActiveScreen::MainMenu(_)));
        assert!(shell.is_running());
    }

    #[test]
    fn test_scoreboard_round_trip() {
        let mut shell = shell();
        press(&mut shell, InputSnapshot::down());
        press(&mut shell, InputSnapshot::confirm());
        assert!(matches!(shell.screen(), ActiveScreen::Scoreboard(_)));
        press(&mut shell, InputSnapshot::back());
        assert!(matches!(shell.screen(), ActiveScreen::MainMenu(_)));
    }

    #[test]
    fn test_full_frame_draws_backdrop_and_border() {
        let mut shell = shell();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| shell.render(frame)).unwrap();
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 0)].symbol(), "\u{256d}");
        assert_eq!(buf[(59, 19)].symbol(), "\u{256f}");
    }

    #[test]
    fn test_every_screen_renders() {
        let mut shell = GameShell::new(Config {
            seed: Some(3),
            show_rules: true,
            ..Config::default()
        });
        assert!(screen_text(&mut shell).contains("Start"));

        press(&mut shell, InputSnapshot::confirm());
        assert!(screen_text(&mut shell).contains("medium"));

        press(&mut shell, InputSnapshot::confirm());
        assert!(screen_text(&mut shell).contains("Encrypter"));

        for (steps, needle) in [
            (0, "Rock Paper Scissors"),
            (1, "Hangman"),
            (2, "Binarize"),
            (3, "Math Champ"),
            (4, "Encrypter"),
        ] {
            for _ in 0..steps {
                press(&mut shell, InputSnapshot::down());
            }
            press(&mut shell, InputSnapshot::confirm());
            assert!(matches!(shell.screen(), ActiveScreen::Rules(_)));
            assert!(screen_text(&mut shell).contains(needle));

            press(&mut shell, InputSnapshot::confirm());
            let text = screen_text(&mut shell);
            assert!(!text.trim().is_empty(), "{} drew nothing", needle);

            press(&mut shell, InputSnapshot::cancel());
            assert!(matches!(shell.screen(), ActiveScreen::MiniGameMenu(_)));
        }
    }
}
