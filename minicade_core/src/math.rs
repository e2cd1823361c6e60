use rand::seq::SliceRandom;
use rand::Rng;

use crate::difficulty::Difficulty;
use crate::quiz::{numeric_distractors, QuizChallenge};

/// Hidden variable values the player has to deduce
pub const VALUES: [(char, i64); 5] = [('A', 2), ('B', 3), ('C', 5), ('D', 7), ('E', 11)];

/// How far wrong answers may sit from the real sum
const SPREAD: i64 = 4;

pub fn value_of(var: char) -> Option<i64> {
    VALUES.iter().find(|(v, _)| *v == var).map(|(_, n)| *n)
}

pub fn variable_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 2,
        Difficulty::Medium => 3,
        Difficulty::Hard => 4,
    }
}

/// A sum of distinct variables, e.g. `B + E + A`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub terms: Vec<char>,
}

impl Equation {
    pub fn random<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let terms = VALUES
            .choose_multiple(rng, variable_count(difficulty))
            .map(|(v, _)| *v)
            .collect();
        Self { terms }
    }

    pub fn sum(&self) -> i64 {
        self.terms.iter().filter_map(|&v| value_of(v)).sum()
    }

    pub fn text(&self) -> String {
        self.terms
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    pub fn to_challenge<R: Rng>(&self, rng: &mut R) -> QuizChallenge {
        let sum = self.sum();
        QuizChallenge::new(
            self.text(),
            sum.to_string(),
            numeric_distractors(sum, SPREAD, rng),
            rng,
        )
    }
}

pub fn generate<R: Rng>(difficulty: Difficulty, rng: &mut R) -> QuizChallenge {
    Equation::random(difficulty, rng).to_challenge(rng)
}

pub fn hints() -> Vec<String> {
    let v = |c| value_of(c).unwrap_or_default();
    vec![
        format!("A + A = {}", v('A') + v('A')),
        format!("B + A = {}", v('B') + v('A')),
        format!("B + C = {}", v('B') + v('C')),
        format!("C + D = {}", v('C') + v('D')),
        format!("D + E = {}", v('D') + v('E')),
    ]
}
