use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::Config;

/// Send log records to the configured file. The terminal belongs to the TUI,
/// so without a log file nothing is logged at all.
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    log::info!("logging to {}", path.display());
    Ok(())
}
