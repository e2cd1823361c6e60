mod config;
mod effects;
mod input;
mod logging;
mod screens;
mod shell;

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use config::Config;
use shell::GameShell;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::from_env()?;
    logging::init(&config)?;
    log::debug!("starting with {:?}", config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("shell stopped with an error: {}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
) -> color_eyre::Result<()> {
    let budget = config.frame_budget();
    let mut shell = GameShell::new(config);

    while shell.is_running() {
        let frame_input = input::poll_frame(budget)?;
        shell.update(&frame_input);

        terminal.draw(|frame| {
            shell.render(frame);
        })?;
    }

    log::info!("shell stopped after {} frames", shell.tick);
    Ok(())
}
