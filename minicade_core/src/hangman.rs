use rand::seq::SliceRandom;
use rand::Rng;

use crate::difficulty::Difficulty;
use crate::error::CoreError;
use crate::input::InputSnapshot;
use crate::round::{Outcome, RoundState};

/// Wrong guesses that complete the drawing
pub const MAX_INCORRECT: u32 = 6;

const EASY_WORDS: [&str; 10] = [
    "cat", "dog", "hat", "sun", "ball", "apple", "tree", "star", "fish", "moon",
];

const MEDIUM_WORDS: [&str; 10] = [
    "jungle", "monkey", "puzzle", "bridge", "shadow", "river", "ocean", "laptop", "forest",
    "mountain",
];

const HARD_WORDS: [&str; 10] = [
    "pneumonia",
    "subterranean",
    "juxtaposition",
    "xylophone",
    "quizzical",
    "antidisestablishmentarianism",
    "cryptography",
    "neuroplasticity",
    "photosynthesis",
    "hippopotomonstrosesquipedaliophobia",
];

pub fn words(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => &EASY_WORDS,
        Difficulty::Medium => &MEDIUM_WORDS,
        Difficulty::Hard => &HARD_WORDS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanStatus {
    Playing,
    Won,
    Lost,
}

/// What a single letter keystroke did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Hit,
    Miss,
    /// Letter was already used, nothing changed
    Repeated,
    /// Not a letter
    Ignored,
}

fn letter_index(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Target word plus the used/guessed state of every letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanBoard {
    word: String,
    used: [bool; 26],
    pub round: RoundState,
}

impl HangmanBoard {
    /// The word must be non-empty ASCII letters; it is stored lowercase.
    pub fn new(word: &str) -> Result<Self, CoreError> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidWord(word.to_string()));
        }
        Ok(Self {
            word: word.to_ascii_lowercase(),
            used: [false; 26],
            // A hangman board is one attempt that ends in a win or a loss
            round: RoundState::new(1),
        })
    }

    pub fn random<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let list = words(difficulty);
        let word = list.choose(rng).copied().unwrap_or(EASY_WORDS[0]);
        Self {
            word: word.to_string(),
            used: [false; 26],
            round: RoundState::new(1),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn incorrect(&self) -> u32 {
        self.round.incorrect
    }

    pub fn is_used(&self, c: char) -> bool {
        letter_index(c).is_some_and(|i| self.used[i])
    }

    /// A letter counts as guessed once it is used and part of the word
    pub fn is_guessed(&self, c: char) -> bool {
        self.is_used(c) && self.word.contains(c.to_ascii_lowercase())
    }

    /// One entry per letter of the word, `None` while still hidden
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.word
            .chars()
            .map(|c| if self.is_guessed(c) { Some(c) } else { None })
            .collect()
    }

    /// Single guess; ignored once the round is settled
    pub fn guess(&mut self, c: char) -> Guess {
        if self.status() != HangmanStatus::Playing {
            return Guess::Ignored;
        }
        self.mark(c)
    }

    fn mark(&mut self, c: char) -> Guess {
        let Some(idx) = letter_index(c) else {
            return Guess::Ignored;
        };
        if self.used[idx] {
            return Guess::Repeated;
        }
        self.used[idx] = true;

        if self.word.contains(c.to_ascii_lowercase()) {
            self.round.record_hit();
            Guess::Hit
        } else {
            self.round.record_miss();
            Guess::Miss
        }
    }

    /// Loss is checked before the win.
    pub fn status(&self) -> HangmanStatus {
        if self.round.incorrect >= MAX_INCORRECT {
            HangmanStatus::Lost
        } else if self.word.chars().all(|c| self.is_guessed(c)) {
            HangmanStatus::Won
        } else {
            HangmanStatus::Playing
        }
    }

    /// Apply every letter pressed this frame, then settle the round.
    /// A frame that starts on a settled board changes nothing.
    pub fn update(&mut self, input: &InputSnapshot) -> HangmanStatus {
        let status = self.status();
        if status != HangmanStatus::Playing {
            return status;
        }
        for c in input.letters() {
            self.mark(c);
        }

        let status = self.status();
        if status != HangmanStatus::Playing && self.round.last_outcome.is_none() {
            let outcome = if status == HangmanStatus::Won {
                Outcome::Win
            } else {
                Outcome::Lose
            };
            // Hit/miss counters are already up to date; only close the attempt
            self.round.attempts_taken += 1;
            self.round.last_outcome = Some(outcome);
            log::debug!(
                "hangman {:?} on {:?} with {} wrong guesses",
                outcome,
                self.word,
                self.round.incorrect
            );
        }
        status
    }
}
