use rand::Rng;

use crate::error::CoreError;
use crate::quiz::{numeric_distractors, QuizChallenge};

pub const MIN_BITS: usize = 4;
pub const MAX_BITS: usize = 8;

const SPREAD: i64 = 10;

/// A random string of 4 to 8 bits, leading zeros included
pub fn random_bits<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(MIN_BITS..=MAX_BITS);
    let value = rng.gen_range(0..1u32 << len);
    format!("{:0width$b}", value, width = len)
}

pub fn to_decimal(bits: &str) -> Result<u32, CoreError> {
    if bits.is_empty() || bits.len() > 32 || !bits.chars().all(|c| c == '0' || c == '1') {
        return Err(CoreError::InvalidBits(bits.to_string()));
    }
    u32::from_str_radix(bits, 2).map_err(|_| CoreError::InvalidBits(bits.to_string()))
}

pub fn challenge_for<R: Rng>(bits: &str, rng: &mut R) -> Result<QuizChallenge, CoreError> {
    let value = to_decimal(bits)?;
    Ok(build(bits, value, rng))
}

pub fn generate<R: Rng>(rng: &mut R) -> QuizChallenge {
    let bits = random_bits(rng);
    // Random bits are always 4 to 8 binary digits
    let value = to_decimal(&bits).unwrap_or_default();
    build(&bits, value, rng)
}

fn build<R: Rng>(bits: &str, value: u32, rng: &mut R) -> QuizChallenge {
    QuizChallenge::new(
        format!("What is the decimal equivalent of {}?", bits),
        value.to_string(),
        numeric_distractors(value as i64, SPREAD, rng),
        rng,
    )
}

pub fn hints() -> Vec<String> {
    vec![
        "Hint: Binary 1011 = Decimal 11.".to_string(),
        "Each bit is a power of 2, starting from the right.".to_string(),
        "From right to left, for 1011:".to_string(),
        "  1 (2^3) + 0 (2^2) + 1 (2^1) + 1 (2^0) = 11".to_string(),
        "Multiply the rightmost bit by 2^0, the next by 2^1,".to_string(),
        "and so on, then add up the results.".to_string(),
        "1*8 + 0*4 + 1*2 + 1*1 = 11 in decimal.".to_string(),
        "1 means 'on' (true), 0 means 'off' (false).".to_string(),
    ]
}
