use std::error::Error;
use std::fmt;

/// Construction-time failures for core game values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Not one of rock, paper or scissors
    UnknownHand(String),
    /// Not one of easy, medium or hard
    UnknownDifficulty(String),
    /// Hangman and cipher words must be non-empty ASCII letters
    InvalidWord(String),
    /// Binary strings must be non-empty and contain only 0 and 1
    InvalidBits(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnknownHand(s) => write!(f, "unknown hand type: {:?}", s),
            CoreError::UnknownDifficulty(s) => write!(f, "unknown difficulty: {:?}", s),
            CoreError::InvalidWord(s) => write!(f, "invalid word: {:?}", s),
            CoreError::InvalidBits(s) => write!(f, "invalid bit string: {:?}", s),
        }
    }
}

impl Error for CoreError {}
