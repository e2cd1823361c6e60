use std::fmt;

use crate::menu::{Menu, MenuOption};

/// The mini-games the shell can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MiniGame {
    RockPaperScissors,
    Hangman,
    Binarize,
    MathChamp,
    Encrypter,
}

impl MiniGame {
    pub const ALL: [MiniGame; 5] = [
        MiniGame::RockPaperScissors,
        MiniGame::Hangman,
        MiniGame::Binarize,
        MiniGame::MathChamp,
        MiniGame::Encrypter,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MiniGame::RockPaperScissors => "Rock Paper Scissors",
            MiniGame::Hangman => "Hangman",
            MiniGame::Binarize => "Binarize",
            MiniGame::MathChamp => "Math Champ",
            MiniGame::Encrypter => "Encrypter",
        }
    }

    pub fn rules(&self) -> &'static str {
        match self {
            MiniGame::RockPaperScissors => {
                "In Rock, Paper, Scissors, two players each choose one of three options: \
                 Rock, Paper, or Scissors. Rock beats Scissors, Scissors beats Paper, and \
                 Paper beats Rock. If both players choose the same option, the round is a \
                 tie. Win a single round and the match is yours, but you only get a few \
                 tries."
            }
            MiniGame::Hangman => {
                "In Hangman, one player chooses a word, and the others guess letters to \
                 reveal it. Correct guesses fill in blanks, while wrong guesses bring the \
                 hangman closer to completion. The goal: guess the word before the drawing \
                 is finished!"
            }
            MiniGame::Binarize => {
                "In Binarize, players convert binary numbers into decimal. The goal: \
                 accurately transform random binary values into their decimal equivalents \
                 and test your binary conversion skills!"
            }
            MiniGame::MathChamp => {
                "In Math Champ, players solve equations like A + A = 4 or B + A = 5 by \
                 deducing the values of the variables. The goal: use logic and \
                 problem-solving skills to figure out the correct values!"
            }
            MiniGame::Encrypter => {
                "In Encrypter, players decode a message using a given encryption method, \
                 with clues like \"only HEXES will save you, B=2.\" The goal: master \
                 cryptography through decoding challenges!"
            }
        }
    }

    pub fn menu() -> Menu<MiniGame> {
        Menu::new(
            MiniGame::ALL
                .iter()
                .map(|&game| MenuOption::new(game.title(), game))
                .collect(),
        )
    }
}

impl fmt::Display for MiniGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_game_in_order() {
        let menu = MiniGame::menu();
        let labels: Vec<_> = menu.options().iter().map(|o| o.label).collect();
        assert_eq!(&labels[..3], &["Rock Paper Scissors", "Hangman", "Binarize"]);
        assert_eq!(labels.len(), 5);
    }
}
