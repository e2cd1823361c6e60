use std::fmt;

/// Result of one committed round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    /// Only reachable in Rock-Paper-Scissors
    Tie,
}

impl Outcome {
    pub fn text(&self) -> &'static str {
        match self {
            Outcome::Win => "You Win",
            Outcome::Lose => "You Lose",
            Outcome::Tie => "Tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Per-session counters of a mini-game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub attempts_taken: u32,
    pub attempts_allowed: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub ties: u32,
    /// Outcome of the latest committed round, `None` before the first one
    pub last_outcome: Option<Outcome>,
}

impl RoundState {
    pub fn new(attempts_allowed: u32) -> Self {
        Self {
            attempts_taken: 0,
            attempts_allowed,
            correct: 0,
            incorrect: 0,
            ties: 0,
            last_outcome: None,
        }
    }

    /// Count one committed round
    pub fn record(&mut self, outcome: Outcome) {
        debug_assert!(
            self.attempts_taken < self.attempts_allowed,
            "round recorded after the attempt budget was spent"
        );
        self.attempts_taken += 1;
        match outcome {
            Outcome::Win => self.correct += 1,
            Outcome::Lose => self.incorrect += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.last_outcome = Some(outcome);
    }

    /// Count a wrong guess without spending an attempt (Hangman)
    pub fn record_miss(&mut self) {
        self.incorrect += 1;
    }

    /// Count a right guess without spending an attempt (Hangman)
    pub fn record_hit(&mut self) {
        self.correct += 1;
    }

    pub fn attempts_exhausted(&self) -> bool {
        self.attempts_taken >= self.attempts_allowed
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_allowed.saturating_sub(self.attempts_taken)
    }

    /// Start over with the same budget
    pub fn reset(&mut self) {
        *self = Self::new(self.attempts_allowed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut round = RoundState::new(3);
        round.record(Outcome::Tie);
        round.record(Outcome::Lose);
        round.record(Outcome::Win);
        assert_eq!(round.attempts_taken, 3);
        assert_eq!((round.correct, round.incorrect, round.ties), (1, 1, 1));
        assert_eq!(round.last_outcome, Some(Outcome::Win));
        assert!(round.attempts_exhausted());
    }

    #[test]
    fn test_tie_spends_an_attempt() {
        let mut round = RoundState::new(1);
        round.record(Outcome::Tie);
        assert!(round.attempts_exhausted());
        assert_eq!(round.correct + round.incorrect, 0);
    }

    #[test]
    fn test_reset_keeps_budget() {
        let mut round = RoundState::new(2);
        round.record(Outcome::Lose);
        round.record_miss();
        round.reset();
        assert_eq!(round, RoundState::new(2));
        assert_eq!(round.attempts_left(), 2);
    }
}
