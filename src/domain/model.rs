use crate::domain::ports::DigitSource;
use serde::{Serialize, Serializer};
use std::fmt;

/// The nine base digits of a CPF, before the verification digits are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSequence([u8; 9]);

impl DigitSequence {
    pub fn new(digits: [u8; 9]) -> Self {
        Self(digits)
    }

    /// Pulls exactly nine digits from the source.
    pub fn draw<S: DigitSource>(source: &mut S) -> Self {
        let mut digits = [0u8; 9];
        for digit in digits.iter_mut() {
            *digit = source.next_digit();
        }
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; 9] {
        &self.0
    }
}

/// The two check digits, each derived by a weighted modulo-11 pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationDigits {
    pub first: u8,
    pub second: u8,
}

/// A complete CPF: nine base digits plus two verification digits.
///
/// `Display` renders the canonical punctuated form, e.g. `123.456.789-09`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpf {
    base: DigitSequence,
    check: VerificationDigits,
}

impl Cpf {
    pub fn new(base: DigitSequence, check: VerificationDigits) -> Self {
        Self { base, check }
    }

    /// All eleven digits in order, base digits first.
    pub fn digits(&self) -> [u8; 11] {
        let mut out = [0u8; 11];
        out[..9].copy_from_slice(self.base.digits());
        out[9] = self.check.first;
        out[10] = self.check.second;
        out
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.base.digits().iter().enumerate() {
            if i == 3 || i == 6 {
                write!(f, ".")?;
            }
            write!(f, "{}", digit)?;
        }
        write!(f, "-{}{}", self.check.first, self.check.second)
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
