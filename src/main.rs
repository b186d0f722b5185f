use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zonestat::{Cli, ZoneStatConfig, runner};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match ZoneStatConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    init_tracing(config.verbose);
    debug!("Running with {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = runner::run(&config, &mut out).and_then(|outcome| {
        out.flush()?;
        Ok(outcome)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Keep whatever was already produced ahead of the error
            let _ = out.flush();
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG takes precedence over --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
