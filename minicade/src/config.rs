use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FPS: u32 = 30;
const FPS_RANGE: std::ops::RangeInclusive<u32> = 1..=240;

/// A bad value in one of the `MINICADE_*` variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotANumber { var: &'static str, value: String },
    OutOfRange { var: &'static str, value: u32 },
    NotABool { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotANumber { var, value } => {
                write!(f, "{} must be a number, got {:?}", var, value)
            }
            ConfigError::OutOfRange { var, value } => write!(
                f,
                "{} must be between {} and {}, got {}",
                var,
                FPS_RANGE.start(),
                FPS_RANGE.end(),
                value
            ),
            ConfigError::NotABool { var, value } => {
                write!(f, "{} must be true or false, got {:?}", var, value)
            }
        }
    }
}

impl Error for ConfigError {}

/// Runtime settings read from the environment (and an optional `.env` file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fps: u32,
    /// Show the helper panel next to quiz questions
    pub hints: bool,
    /// Show a game's rules before it starts
    pub show_rules: bool,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            hints: true,
            show_rules: true,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from any variable source. Unset or blank variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(value) = get("MINICADE_FPS") {
            let fps = parse_number::<u32>("MINICADE_FPS", &value)?;
            if !FPS_RANGE.contains(&fps) {
                return Err(ConfigError::OutOfRange {
                    var: "MINICADE_FPS",
                    value: fps,
                });
            }
            config.fps = fps;
        }
        if let Some(value) = get("MINICADE_HINTS") {
            config.hints = parse_bool("MINICADE_HINTS", &value)?;
        }
        if let Some(value) = get("MINICADE_RULES") {
            config.show_rules = parse_bool("MINICADE_RULES", &value)?;
        }
        if let Some(value) = get("MINICADE_SEED") {
            config.seed = Some(parse_number::<u64>("MINICADE_SEED", &value)?);
        }
        config.log_file = get("MINICADE_LOG_FILE").map(PathBuf::from);

        Ok(config)
    }

    /// Wall-clock length of one frame
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_millis()))
    }

    pub fn frame_millis(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::NotABool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frame_budget(), Duration::from_millis(33));
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config(&[
            ("MINICADE_FPS", "60"),
            ("MINICADE_HINTS", "off"),
            ("MINICADE_RULES", "No"),
            ("MINICADE_SEED", "42"),
            ("MINICADE_LOG_FILE", "/tmp/minicade.log"),
        ])
        .unwrap();
        assert_eq!(config.fps, 60);
        assert!(!config.hints);
        assert!(!config.show_rules);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/minicade.log")));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = config(&[("MINICADE_FPS", "  "), ("MINICADE_LOG_FILE", "")]).unwrap();
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert_eq!(
            config(&[("MINICADE_FPS", "fast")]),
            Err(ConfigError::NotANumber {
                var: "MINICADE_FPS",
                value: "fast".into()
            })
        );
        assert_eq!(
            config(&[("MINICADE_FPS", "0")]),
            Err(ConfigError::OutOfRange {
                var: "MINICADE_FPS",
                value: 0
            })
        );
        assert!(config(&[("MINICADE_HINTS", "maybe")]).is_err());
        assert!(config(&[("MINICADE_SEED", "-1")]).is_err());
    }
}
