use crate::core::checksum;
use crate::domain::model::{Cpf, DigitSequence};
use crate::domain::ports::DigitSource;
use rand::Rng;

/// Production digit source backed by the thread-local RNG.
pub struct ThreadRngSource {
    rng: rand::rngs::ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitSource for ThreadRngSource {
    fn next_digit(&mut self) -> u8 {
        self.rng.random_range(0..=9)
    }
}

/// Sequences the full pipeline: draw base digits, derive the verification
/// digits, assemble the CPF. Owns its digit source; each call is independent
/// apart from advancing the source.
pub struct CpfGenerator<S: DigitSource> {
    source: S,
}

impl<S: DigitSource> CpfGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn generate(&mut self) -> Cpf {
        let base = DigitSequence::draw(&mut self.source);
        let check = checksum::verification_digits(&base);
        let cpf = Cpf::new(base, check);
        tracing::debug!("generated CPF {}", cpf);
        cpf
    }

    pub fn generate_batch(&mut self, count: usize) -> Vec<Cpf> {
        (0..count).map(|_| self.generate()).collect()
    }
}

impl CpfGenerator<ThreadRngSource> {
    pub fn with_thread_rng() -> Self {
        Self::new(ThreadRngSource::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a scripted digit stream, cycling when exhausted.
    struct FixedSource {
        digits: Vec<u8>,
        next: usize,
    }

    impl FixedSource {
        fn new(digits: &[u8]) -> Self {
            Self {
                digits: digits.to_vec(),
                next: 0,
            }
        }
    }

    impl DigitSource for FixedSource {
        fn next_digit(&mut self) -> u8 {
            let digit = self.digits[self.next % self.digits.len()];
            self.next += 1;
            digit
        }
    }

    #[test]
    fn all_ones_base_generates_known_cpf() {
        let mut generator = CpfGenerator::new(FixedSource::new(&[1]));
        assert_eq!(generator.generate().to_string(), "111.111.111-11");
    }

    #[test]
    fn all_zeros_base_generates_known_cpf() {
        let mut generator = CpfGenerator::new(FixedSource::new(&[0]));
        assert_eq!(generator.generate().to_string(), "000.000.000-00");
    }

    #[test]
    fn scripted_base_generates_exact_string() {
        let mut generator = CpfGenerator::new(FixedSource::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert_eq!(generator.generate().to_string(), "123.456.789-09");
    }

    #[test]
    fn thread_rng_source_stays_in_range() {
        let mut source = ThreadRngSource::new();
        for _ in 0..1000 {
            assert!(source.next_digit() <= 9);
        }
    }

    #[test]
    fn generate_batch_returns_requested_count() {
        let mut generator = CpfGenerator::with_thread_rng();
        assert_eq!(generator.generate_batch(25).len(), 25);
        assert!(generator.generate_batch(0).is_empty());
    }
}
