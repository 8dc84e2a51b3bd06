pub mod checksum;
pub mod generator;

pub use crate::domain::model::{Cpf, DigitSequence, VerificationDigits};
pub use crate::domain::ports::DigitSource;
pub use crate::utils::error::Result;
