use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::difficulty::Difficulty;
use crate::input::InputSnapshot;
use crate::round::{Outcome, RoundState};
use crate::{binary, cipher, math};

/// Answer label of a quiz option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    pub fn index(&self) -> usize {
        match self {
            OptionKey::A => 0,
            OptionKey::B => 1,
            OptionKey::C => 2,
            OptionKey::D => 3,
        }
    }

    /// Keyboard key that picks this option
    pub fn key(&self) -> char {
        match self {
            OptionKey::A => 'a',
            OptionKey::B => 'b',
            OptionKey::C => 'c',
            OptionKey::D => 'd',
        }
    }

    pub fn from_char(c: char) -> Option<OptionKey> {
        match c.to_ascii_lowercase() {
            'a' => Some(OptionKey::A),
            'b' => Some(OptionKey::B),
            'c' => Some(OptionKey::C),
            'd' => Some(OptionKey::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key().to_ascii_uppercase())
    }
}

/// One generated question with four labelled options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizChallenge {
    pub question: String,
    pub answer: String,
    pub correct: OptionKey,
    options: [String; 4],
}

impl QuizChallenge {
    /// Shuffle the answer in among three distractors.
    ///
    /// Panics unless there are exactly three distractors, all distinct and
    /// none equal to the answer.
    pub fn new<R: Rng>(
        question: impl Into<String>,
        answer: impl Into<String>,
        distractors: Vec<String>,
        rng: &mut R,
    ) -> Self {
        let answer = answer.into();
        assert_eq!(distractors.len(), 3, "a quiz needs three distractors");
        for (i, d) in distractors.iter().enumerate() {
            assert_ne!(d, &answer, "distractor equals the answer");
            assert!(!distractors[..i].contains(d), "duplicate distractor {:?}", d);
        }

        let mut options: [String; 4] = Default::default();
        options[3] = answer.clone();
        for (slot, d) in options.iter_mut().zip(distractors) {
            *slot = d;
        }
        options.shuffle(rng);

        let correct = options
            .iter()
            .position(|o| *o == answer)
            .map(|i| OptionKey::ALL[i])
            .unwrap_or(OptionKey::D);

        Self {
            question: question.into(),
            answer,
            correct,
            options,
        }
    }

    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }

    /// Options in A-D order
    pub fn options(&self) -> impl Iterator<Item = (OptionKey, &str)> + '_ {
        OptionKey::ALL.iter().map(move |&k| (k, self.option(k)))
    }

    pub fn is_correct(&self, key: OptionKey) -> bool {
        key == self.correct
    }
}

/// Three distinct integers within `spread` of `correct`, never `correct` itself
pub fn numeric_distractors<R: Rng>(correct: i64, spread: i64, rng: &mut R) -> Vec<String> {
    let candidates: Vec<i64> = (correct - spread..=correct + spread)
        .filter(|&n| n != correct)
        .collect();
    candidates
        .choose_multiple(rng, 3)
        .map(|n| n.to_string())
        .collect()
}

/// The three quiz flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Math,
    Binary,
    Decryption,
}

impl QuizKind {
    pub fn generate<R: Rng>(&self, difficulty: Difficulty, rng: &mut R) -> QuizChallenge {
        match self {
            QuizKind::Math => math::generate(difficulty, rng),
            QuizKind::Binary => binary::generate(rng),
            QuizKind::Decryption => cipher::generate(difficulty, rng),
        }
    }

    /// Static worked-example lines shown next to the question
    pub fn hints(&self) -> Vec<String> {
        match self {
            QuizKind::Math => math::hints(),
            QuizKind::Binary => binary::hints(),
            QuizKind::Decryption => cipher::hints(),
        }
    }
}

/// A quiz session: one challenge, answered once
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub kind: QuizKind,
    pub difficulty: Difficulty,
    pub challenge: QuizChallenge,
    pub round: RoundState,
    pub answer: Option<OptionKey>,
}

impl QuizSession {
    pub fn new<R: Rng>(kind: QuizKind, difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            kind,
            difficulty,
            challenge: kind.generate(difficulty, rng),
            round: RoundState::new(1),
            answer: None,
        }
    }

    pub fn replay<R: Rng>(&mut self, rng: &mut R) {
        self.challenge = self.kind.generate(self.difficulty, rng);
        self.round.reset();
        self.answer = None;
    }

    pub fn is_finished(&self) -> bool {
        self.round.attempts_exhausted()
    }

    /// Commit an answer. Ignored once the budget is spent.
    pub fn answer(&mut self, key: OptionKey) -> Option<Outcome> {
        if self.is_finished() {
            return None;
        }
        let outcome = if self.challenge.is_correct(key) {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        self.round.record(outcome);
        self.answer = Some(key);
        log::debug!(
            "{:?} quiz answered {} (correct {}) -> {}",
            self.kind,
            key,
            self.challenge.correct,
            outcome
        );
        Some(outcome)
    }

    /// The first of a-d pressed this frame is the answer
    pub fn update(&mut self, input: &InputSnapshot) -> Option<Outcome> {
        let key = OptionKey::ALL.into_iter().find(|k| input.pressed(k.key()))?;
        self.answer(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_well_formed(challenge: &QuizChallenge) {
        let correct: Vec<_> = challenge
            .options()
            .filter(|(_, text)| *text == challenge.answer)
            .collect();
        assert_eq!(correct.len(), 1, "{:?}", challenge);
        assert_eq!(correct[0].0, challenge.correct);

        let texts: Vec<&str> = challenge.options().map(|(_, t)| t).collect();
        for i in 0..texts.len() {
            for j in i + 1..texts.len() {
                assert_ne!(texts[i], texts[j], "{:?}", challenge);
            }
        }
    }

    #[test]
    fn test_every_generated_challenge_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(11);
        for kind in [QuizKind::Math, QuizKind::Binary, QuizKind::Decryption] {
            for difficulty in Difficulty::ALL {
                for _ in 0..200 {
                    assert_well_formed(&kind.generate(difficulty, &mut rng));
                }
            }
        }
    }

    #[test]
    fn test_numeric_distractors_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let d = numeric_distractors(10, 4, &mut rng);
            assert_eq!(d.len(), 3);
            for n in d {
                let n: i64 = n.parse().unwrap();
                assert!((6..=14).contains(&n) && n != 10);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_duplicate_distractors_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        QuizChallenge::new(
            "q",
            "1",
            vec!["2".into(), "2".into(), "3".into()],
            &mut rng,
        );
    }

    #[test]
    fn test_option_key_from_char() {
        assert_eq!(OptionKey::from_char('C'), Some(OptionKey::C));
        assert_eq!(OptionKey::from_char('e'), None);
        assert_eq!(OptionKey::B.to_string(), "B");
    }

    #[test]
    fn test_session_first_key_wins_and_locks() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = QuizSession::new(QuizKind::Math, Difficulty::Easy, &mut rng);
        let correct = session.challenge.correct;

        let mut input = InputSnapshot::key(correct.key());
        input.press('z');
        assert_eq!(session.update(&input), Some(Outcome::Win));
        assert!(session.is_finished());
        assert_eq!(session.round.correct, 1);

        let wrong = OptionKey::ALL.into_iter().find(|k| *k != correct).unwrap();
        assert_eq!(session.answer(wrong), None);
        assert_eq!(session.answer, Some(correct));
    }

    #[test]
    fn test_session_wrong_answer_loses() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = QuizSession::new(QuizKind::Binary, Difficulty::Hard, &mut rng);
        let wrong = OptionKey::ALL
            .into_iter()
            .find(|k| !session.challenge.is_correct(*k))
            .unwrap();
        assert_eq!(session.answer(wrong), Some(Outcome::Lose));
        assert_eq!(session.round.incorrect, 1);

        session.replay(&mut rng);
        assert!(!session.is_finished());
        assert_eq!(session.answer, None);
    }

    #[test]
    fn test_unrelated_keys_do_nothing() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = QuizSession::new(QuizKind::Decryption, Difficulty::Medium, &mut rng);
        assert_eq!(session.update(&InputSnapshot::key('x')), None);
        assert_eq!(session.update(&InputSnapshot::confirm()), None);
        assert!(!session.is_finished());
    }
}
