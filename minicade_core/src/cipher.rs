use rand::seq::SliceRandom;
use rand::Rng;

use crate::difficulty::Difficulty;
use crate::error::CoreError;
use crate::quiz::QuizChallenge;

const EASY_PHRASES: [&[&str]; 3] = [&["YOU"], &["MINE"], &["DATA"]];

const MEDIUM_PHRASES: [&[&str]; 3] = [
    &["I", "SEE", "YOU"],
    &["NOT", "ENOUGH", "TIME"],
    &["NOT", "SAFE", "HERE"],
];

const HARD_PHRASES: [&[&str]; 3] = [
    &["YOUR", "DATA", "IS", "MINE"],
    &["TIME", "IS", "RUNNING", "OUT"],
    &["QUIT", "WHILE", "YOU", "CAN"],
];

/// Padding used when a phrase has too few other words
pub const FILLERS: [&str; 4] = ["ALPHA", "BETA", "DELTA", "OMEGA"];

pub fn phrases(difficulty: Difficulty) -> &'static [&'static [&'static str]] {
    match difficulty {
        Difficulty::Easy => &EASY_PHRASES,
        Difficulty::Medium => &MEDIUM_PHRASES,
        Difficulty::Hard => &HARD_PHRASES,
    }
}

/// Hex of each letter's position in the alphabet (A = 1), dash separated.
/// `YOU` becomes `19-F-15`.
pub fn encode(word: &str) -> Result<String, CoreError> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidWord(word.to_string()));
    }
    Ok(word
        .chars()
        .map(|c| format!("{:X}", c.to_ascii_uppercase() as u8 - b'A' + 1))
        .collect::<Vec<_>>()
        .join("-"))
}

pub fn decode(cipher: &str) -> Result<String, CoreError> {
    cipher
        .split('-')
        .map(|part| {
            u8::from_str_radix(part, 16)
                .ok()
                .filter(|n| (1..=26).contains(n))
                .map(|n| (b'A' + n - 1) as char)
                .ok_or_else(|| CoreError::InvalidWord(cipher.to_string()))
        })
        .collect()
}

pub fn generate<R: Rng>(difficulty: Difficulty, rng: &mut R) -> QuizChallenge {
    let phrase: &[&str] = phrases(difficulty).choose(rng).copied().unwrap_or(&["YOU"]);
    let answer = phrase.choose(rng).copied().unwrap_or("YOU");

    let mut distractors: Vec<String> = Vec::with_capacity(3);
    for word in phrase.iter().filter(|w| **w != answer) {
        if distractors.len() < 3 && !distractors.iter().any(|d| d == word) {
            distractors.push(word.to_string());
        }
    }
    let mut fillers = FILLERS.to_vec();
    fillers.shuffle(rng);
    for filler in fillers {
        if distractors.len() == 3 {
            break;
        }
        if filler != answer && !distractors.iter().any(|d| d == filler) {
            distractors.push(filler.to_string());
        }
    }

    // Phrase words are all plain letters
    let cipher = encode(answer).unwrap_or_default();
    QuizChallenge::new(
        format!("Decrypt this hex: {}", cipher),
        answer,
        distractors,
        rng,
    )
}

pub fn hints() -> Vec<String> {
    [
        "Hint: Hexadecimal uses 0-9 and A-F for values.",
        "Each hex value stands for a letter,",
        " where 'A' = 1, 'B' = 2, and so on.",
        "Convert each hex value to decimal, then map",
        " it to that letter of the alphabet.",
        "Tip: 'A' in hex is 10, which is 'J';",
        " '1' is 'A' and 'F' = 15 is 'O'.",
        "Tip: for 'D-9-E-5', convert each value",
        " separately, then join the letters.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
