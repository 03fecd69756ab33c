use clap::Parser;
use joinfmt::utils::{logger, validation::Validate};
use joinfmt::{join, CliConfig};
use std::io::BufRead;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let options = match config.format_options() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("Could not resolve format options: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let values = if config.values.is_empty() {
        match read_stdin_values() {
            Ok(values) => values,
            Err(e) => {
                tracing::error!("Could not read values from stdin: {}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        config.values
    };

    tracing::debug!("Joining {} value(s)", values.len());

    match join(&values, &options) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            tracing::error!("Join failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn read_stdin_values() -> joinfmt::Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut values = Vec::new();
    for line in stdin.lock().lines() {
        values.push(line?);
    }
    Ok(values)
}
