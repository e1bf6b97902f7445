use clap::Parser;
use proxytag::application::DetectService;
use proxytag::cli::{format_outcomes, read_messages, Cli};
use proxytag::error::{ProxyTagError, Result};
use proxytag::infrastructure::Config;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(ProxyTagError::NoMatch.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("proxytag={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Returns whether every message carried a proxy tag
fn run(cli: Cli) -> Result<bool> {
    // Explicit --method flags replace the file and environment entirely
    let config = if !cli.methods.is_empty() {
        Config::default().with_methods_override(&cli.methods.join(","))?
    } else {
        match &cli.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load_from_dir(&std::env::current_dir()?)?,
        }
        .with_env_override()?
    };
    debug!(methods = ?config.methods, "matcher order");

    let messages = if cli.messages.is_empty() {
        read_messages(io::stdin().lock())?
    } else {
        cli.messages
    };

    let service = DetectService::new(config);
    let outcomes = service.detect_all(messages.iter().map(String::as_str));

    let mut stdout = io::stdout().lock();
    stdout.write_all(format_outcomes(&outcomes).as_bytes())?;
    stdout.flush()?;

    Ok(outcomes.iter().all(|outcome| outcome.is_match()))
}
