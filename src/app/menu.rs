use crate::core::generator::CpfGenerator;
use crate::domain::ports::DigitSource;
use crate::utils::error::{CpfError, Result};
use std::io::{BufRead, Write};

/// One parsed menu selection. Unknown integers are kept so the loop can
/// report them separately from non-integer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    Exit,
    Unknown(i64),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self> {
        let choice: i64 = input.trim().parse().map_err(|_| CpfError::InvalidInput {
            input: input.trim().to_string(),
        })?;

        Ok(match choice {
            1 => MenuChoice::Generate,
            2 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        })
    }
}

/// Interactive console loop. Reads and writes through injected handles so
/// tests can drive it with scripted input.
pub struct Menu<S: DigitSource> {
    generator: CpfGenerator<S>,
}

impl<S: DigitSource> Menu<S> {
    pub fn new(generator: CpfGenerator<S>) -> Self {
        Self { generator }
    }

    /// Runs until the user picks exit or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            print_banner(output)?;
            write!(output, "\nChoose an option: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF behaves like exit
                tracing::debug!("input stream closed, leaving menu");
                return Ok(());
            }

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Generate) => {
                    let cpf = self.generator.generate();
                    writeln!(output, "\nCPF: {}", cpf)?;
                }
                Ok(MenuChoice::Exit) => {
                    writeln!(output, "Exiting...")?;
                    return Ok(());
                }
                Ok(MenuChoice::Unknown(choice)) => {
                    tracing::warn!("unknown menu option {}", choice);
                    writeln!(output, "Invalid option. Try again!!")?;
                }
                Err(_) => {
                    tracing::warn!("rejected non-integer menu input");
                    writeln!(output, "Invalid input. Only integer numbers are allowed.")?;
                }
            }
        }
    }
}

fn print_banner<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "-------------------------------")?;
    writeln!(output, "|         CPF GENERATOR       |")?;
    writeln!(output, "-------------------------------")?;
    writeln!(output, "| [ 1 ] - Generate new CPF    |")?;
    writeln!(output, "| [ 2 ] - Exit                |")?;
    writeln!(output, "-------------------------------")?;
    Ok(())
}
