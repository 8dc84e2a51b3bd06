pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::menu::{Menu, MenuChoice};
pub use config::CliConfig;
pub use crate::core::generator::{CpfGenerator, ThreadRngSource};
pub use domain::model::{Cpf, DigitSequence, VerificationDigits};
pub use domain::ports::DigitSource;
pub use utils::error::{CpfError, Result};
