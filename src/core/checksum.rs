use crate::domain::model::{DigitSequence, VerificationDigits};

/// First verification digit: weighted sum of the base digits with weights
/// 10 down to 2, reduced modulo 11.
pub fn first_digit(base: &DigitSequence) -> u8 {
    let sum: u32 = base
        .digits()
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit as u32 * (10 - i as u32))
        .sum();
    check_digit(sum)
}

/// Second verification digit: same rule over the base digits followed by the
/// first verification digit, weights 11 down to 2.
pub fn second_digit(base: &DigitSequence, first: u8) -> u8 {
    let sum: u32 = base
        .digits()
        .iter()
        .chain(std::iter::once(&first))
        .enumerate()
        .map(|(i, &digit)| digit as u32 * (11 - i as u32))
        .sum();
    check_digit(sum)
}

/// Derives both digits for a base sequence.
pub fn verification_digits(base: &DigitSequence) -> VerificationDigits {
    let first = first_digit(base);
    let second = second_digit(base, first);
    VerificationDigits { first, second }
}

// Remainders 0 and 1 map to 0; everything else to 11 - remainder.
fn check_digit(sum: u32) -> u8 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}
