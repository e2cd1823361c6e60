use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::difficulty::Difficulty;
use crate::error::CoreError;
use crate::input::InputSnapshot;
use crate::round::{Outcome, RoundState};

/// Length of one up-and-down bob of the big hands
pub const BOB_CYCLE: Duration = Duration::from_millis(250);
/// Number of bobs before the result is revealed
pub const BOB_CYCLES: u32 = 2;
/// How long the chosen hands and the result text stay on screen
pub const REVEAL_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    /// Cursor order, left to right
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    pub fn name(&self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Paper => "paper",
            Hand::Scissors => "scissors",
        }
    }

    /// The hand this one defeats
    pub fn beats(&self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Scissors => Hand::Paper,
            Hand::Paper => Hand::Rock,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Hand::Rock => 0,
            Hand::Paper => 1,
            Hand::Scissors => 2,
        }
    }

    pub fn next(&self) -> Hand {
        Hand::ALL[(self.index() + 1) % Hand::ALL.len()]
    }

    pub fn prev(&self) -> Hand {
        Hand::ALL[(self.index() + Hand::ALL.len() - 1) % Hand::ALL.len()]
    }

    pub fn random<R: Rng>(rng: &mut R) -> Hand {
        Hand::ALL[rng.gen_range(0..Hand::ALL.len())]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Hand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Hand::Rock),
            "paper" => Ok(Hand::Paper),
            "scissors" => Ok(Hand::Scissors),
            _ => Err(CoreError::UnknownHand(s.to_string())),
        }
    }
}

/// Outcome from the player's point of view
pub fn resolve(player: Hand, opponent: Hand) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats() == opponent {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Rounds the player gets per match
pub fn attempts_for(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 3,
        Difficulty::Medium => 2,
        Difficulty::Hard => 1,
    }
}

/// Vertical bob height in `[0, max]` for the given time into the animation.
/// Rises during the first half of each cycle and falls during the second.
pub fn bob_offset(elapsed: Duration, max: u16) -> u16 {
    let cycle = BOB_CYCLE.as_secs_f64();
    let phase = (elapsed.as_secs_f64() % cycle) / (cycle / 2.0);
    let factor = if phase <= 1.0 { phase } else { 2.0 - phase };
    (max as f64 * factor) as u16
}

/// One committed throw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    pub player: Hand,
    pub opponent: Hand,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpsPhase {
    /// Player moves the cursor and commits
    Choosing,
    /// Both big hands bob before the reveal
    Animating { since: Instant },
    /// Chosen hands and the result text are shown
    Revealing { since: Instant },
    /// Attempt budget spent or the player won
    Finished,
}

/// A Rock-Paper-Scissors match: a few rounds against a random opponent
#[derive(Debug, Clone)]
pub struct RpsMatch {
    pub round: RoundState,
    pub cursor: Hand,
    pub phase: RpsPhase,
    pub last_throw: Option<Throw>,
    opponent: Hand,
}

impl RpsMatch {
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            round: RoundState::new(attempts_for(difficulty)),
            cursor: Hand::Paper,
            phase: RpsPhase::Choosing,
            last_throw: None,
            opponent: Hand::random(rng),
        }
    }

    /// Start the match over with the same attempt budget
    pub fn replay<R: Rng>(&mut self, rng: &mut R) {
        self.round.reset();
        self.cursor = Hand::Paper;
        self.phase = RpsPhase::Choosing;
        self.last_throw = None;
        self.opponent = Hand::random(rng);
    }

    /// A single win ends the match early, otherwise it runs until the
    /// attempt budget is spent.
    pub fn is_over(&self) -> bool {
        self.round.attempts_exhausted() || self.round.last_outcome == Some(Outcome::Win)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RpsPhase::Finished
    }

    /// Final match outcome once finished
    pub fn result(&self) -> Option<Outcome> {
        if !self.is_finished() {
            return None;
        }
        if self.round.correct > 0 {
            Some(Outcome::Win)
        } else if self.round.incorrect > 0 {
            Some(Outcome::Lose)
        } else {
            Some(Outcome::Tie)
        }
    }

    /// Commit the player's hand against `opponent`
    pub fn commit(&mut self, opponent: Hand, now: Instant) -> Throw {
        let throw = Throw {
            player: self.cursor,
            opponent,
            outcome: resolve(self.cursor, opponent),
        };
        self.round.record(throw.outcome);
        log::debug!(
            "rps round {}/{}: {} vs {} -> {}",
            self.round.attempts_taken,
            self.round.attempts_allowed,
            throw.player,
            throw.opponent,
            throw.outcome
        );
        self.last_throw = Some(throw);
        self.phase = RpsPhase::Animating { since: now };
        throw
    }

    /// Advance one frame
    pub fn update<R: Rng>(&mut self, input: &InputSnapshot, now: Instant, rng: &mut R) {
        match self.phase {
            RpsPhase::Choosing => {
                if input.left {
                    self.cursor = self.cursor.prev();
                } else if input.right {
                    self.cursor = self.cursor.next();
                }
                if input.confirm {
                    self.commit(self.opponent, now);
                }
            }
            RpsPhase::Animating { since } => {
                if now.saturating_duration_since(since) >= BOB_CYCLE * BOB_CYCLES {
                    self.phase = RpsPhase::Revealing { since: now };
                }
            }
            RpsPhase::Revealing { since } => {
                if now.saturating_duration_since(since) >= REVEAL_DURATION {
                    if self.is_over() {
                        log::debug!("rps match finished: {:?}", self.round);
                        self.phase = RpsPhase::Finished;
                    } else {
                        self.opponent = Hand::random(rng);
                        self.phase = RpsPhase::Choosing;
                    }
                }
            }
            RpsPhase::Finished => {}
        }
    }
}
