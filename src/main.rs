use clap::Parser;
use cpf_gen::utils::{logger, validation::Validate};
use cpf_gen::{CliConfig, CpfGenerator, Menu};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cpf-gen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut generator = CpfGenerator::with_thread_rng();

    if let Some(count) = config.count {
        let cpfs = generator.generate_batch(count);
        if config.json {
            serde_json::to_writer_pretty(io::stdout().lock(), &cpfs)?;
            println!();
        } else {
            for cpf in &cpfs {
                println!("{}", cpf);
            }
        }
        tracing::info!("Generated {} CPF number(s)", count);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(generator);
    if let Err(e) = menu.run(&mut stdin.lock(), &mut stdout.lock()) {
        tracing::error!("Menu loop failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
