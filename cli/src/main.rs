//! dock2sh entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dock2sh_cli::{execute, Cli};

fn main() {
    // Logs go to stderr; stdout is reserved for the generated script.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
