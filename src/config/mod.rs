use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cpf-gen")]
#[command(about = "Generates valid CPF numbers from a console menu")]
pub struct CliConfig {
    /// Generate this many CPFs and exit instead of showing the menu
    #[arg(long)]
    pub count: Option<usize>,

    /// With --count, print the CPFs as a JSON array
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(count) = self.count {
            validate_positive_number("count", count, 1)?;
        }

        if self.json && self.count.is_none() {
            return Err(CpfError::InvalidConfigValue {
                field: "json".to_string(),
                value: "true".to_string(),
                reason: "--json requires --count".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: Option<usize>, json: bool) -> CliConfig {
        CliConfig {
            count,
            json,
            verbose: false,
        }
    }

    #[test]
    fn menu_mode_config_is_valid() {
        assert!(config(None, false).validate().is_ok());
    }

    #[test]
    fn batch_mode_requires_count_of_at_least_one() {
        assert!(config(Some(1), false).validate().is_ok());
        assert!(config(Some(0), false).validate().is_err());
    }

    #[test]
    fn json_without_count_is_rejected() {
        assert!(config(None, true).validate().is_err());
        assert!(config(Some(3), true).validate().is_ok());
    }
}
