pub mod binary;
pub mod cipher;
pub mod difficulty;
pub mod error;
pub mod hangman;
pub mod input;
pub mod math;
pub mod menu;
pub mod minigame;
pub mod quiz;
pub mod round;
pub mod rps;
pub mod scoreboard;

pub use difficulty::Difficulty;
pub use error::CoreError;
pub use hangman::{Guess, HangmanBoard, HangmanStatus, MAX_INCORRECT};
pub use input::InputSnapshot;
pub use menu::{MainMenuItem, Menu, MenuOption};
pub use minigame::MiniGame;
pub use quiz::{OptionKey, QuizChallenge, QuizKind, QuizSession};
pub use round::{Outcome, RoundState};
pub use rps::{Hand, RpsMatch, RpsPhase, Throw};
pub use scoreboard::{Scoreboard, Tally};
