/// Source of uniformly distributed decimal digits.
///
/// The generator takes this as an explicit dependency so tests can substitute
/// a scripted stream and assert exact output strings.
pub trait DigitSource {
    /// Returns the next digit in [0, 9].
    fn next_digit(&mut self) -> u8;
}
