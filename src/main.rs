use clap::Parser;
use rassist::cli::dispatcher::Dispatcher;
use rassist::cli::main_types::Cli;
use rassist::error::{AppError, CliError};
use rassist::storage::config::Config;
use rassist::utils::logging::init_logging;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Verbose mode is enabled");

        if let Some(config_dir) = &cli.config_dir {
            eprintln!("Using config directory: {}", config_dir);
        }
    }

    let mut dispatcher = Dispatcher::new(config, config_path, cli.verbose);

    // Execute the command
    match dispatcher.dispatch(cli.command) {
        Ok(()) => {}
        // The report has already been printed
        Err(AppError::Cli(CliError::FilesDiffer { .. })) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", e.severity().label(), e);
            if let Some(hint) = e.troubleshooting_hint() {
                eprintln!("hint: {}", hint);
            }
            std::process::exit(1);
        }
    }
}
