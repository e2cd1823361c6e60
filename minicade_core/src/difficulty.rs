use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::menu::{Menu, MenuOption};

/// Session difficulty, chosen once before a mini-game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn menu() -> Menu<Difficulty> {
        Menu::new(
            Difficulty::ALL
                .iter()
                .map(|&d| MenuOption::new(d.name(), d))
                .collect(),
        )
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(CoreError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
    }

    #[test]
    fn test_unknown_difficulty_fails() {
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(CoreError::UnknownDifficulty("nightmare".to_string()))
        );
    }

    #[test]
    fn test_menu_lists_tiers_in_order() {
        let mut menu = Difficulty::menu();
        let labels: Vec<_> = menu.options().iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["easy", "medium", "hard"]);
        menu.move_down();
        assert_eq!(menu.selected(), Difficulty::Medium);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }
}
