use std::collections::HashMap;

use crate::minigame::MiniGame;
use crate::round::{Outcome, RoundState};

/// Running totals of one mini-game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub played: u32,
    pub won: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub rounds_tied: u32,
}

/// In-memory results of this run. Starts empty on every launch.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    tallies: HashMap<MiniGame, Tally>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished session into the game's tally
    pub fn record(&mut self, game: MiniGame, result: Outcome, round: &RoundState) {
        let tally = self.tallies.entry(game).or_default();
        tally.played += 1;
        if result == Outcome::Win {
            tally.won += 1;
        }
        tally.rounds_won += round.correct;
        tally.rounds_lost += round.incorrect;
        tally.rounds_tied += round.ties;
        log::debug!("{} session recorded as {}: {:?}", game, result, tally);
    }

    pub fn tally(&self, game: MiniGame) -> Tally {
        self.tallies.get(&game).copied().unwrap_or_default()
    }

    /// Every mini-game in menu order, including unplayed ones
    pub fn rows(&self) -> impl Iterator<Item = (MiniGame, Tally)> + '_ {
        MiniGame::ALL.iter().map(move |&game| (game, self.tally(game)))
    }

    pub fn sessions(&self) -> u32 {
        self.tallies.values().map(|t| t.played).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let board = Scoreboard::new();
        assert!(board.is_empty());
        assert_eq!(board.tally(MiniGame::Hangman), Tally::default());
        assert_eq!(board.rows().count(), MiniGame::ALL.len());
    }

    #[test]
    fn test_record_accumulates_rounds() {
        let mut board = Scoreboard::new();
        let mut round = RoundState::new(3);
        round.record(Outcome::Tie);
        round.record(Outcome::Lose);
        round.record(Outcome::Win);
        board.record(MiniGame::RockPaperScissors, Outcome::Win, &round);

        let mut round = RoundState::new(1);
        round.record(Outcome::Lose);
        board.record(MiniGame::RockPaperScissors, Outcome::Lose, &round);

        let tally = board.tally(MiniGame::RockPaperScissors);
        assert_eq!(tally.played, 2);
        assert_eq!(tally.won, 1);
        assert_eq!(
            (tally.rounds_won, tally.rounds_lost, tally.rounds_tied),
            (1, 2, 1)
        );
        assert_eq!(board.sessions(), 2);
        assert_eq!(board.tally(MiniGame::MathChamp), Tally::default());
    }
}
