//! Thin I/O layer around the conversion engine: argument handling,
//! input reading (file or stdin), and output writing (file or stdout).

pub mod error;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{CliError, Result};

/// Convert a Dockerfile to an approximate shell script.
///
/// Reads DOCKERFILE, or standard input when no path is given, and
/// writes the generated script to the output file or standard output.
#[derive(Parser)]
#[command(name = "dock2sh", version, about)]
pub struct Cli {
    /// Path to the Dockerfile (defaults to standard input)
    pub dockerfile: Option<PathBuf>,

    /// Output shell script file path (defaults to standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the conversion described by a parsed command line.
///
/// The script is written only after the whole conversion finishes, so
/// a failing write never leaves a partial file behind the caller's
/// back on the happy path.
pub fn execute(cli: Cli) -> Result<()> {
    let content = read_input(cli.dockerfile.as_deref())?;

    let script = dock2sh_core::convert(&content);

    match &cli.output {
        Some(path) => {
            fs::write(path, &script).map_err(|source| CliError::WriteFile {
                path: path.clone(),
                source,
            })?;
            eprintln!("Shell script saved to: {}", path.display());
        }
        None => println!("{script}"),
    }

    Ok(())
}

/// Read the full Dockerfile text from a path, or from standard input
/// when no path is given.
fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::InvalidInput {
                    path: path.to_path_buf(),
                });
            }
            fs::read_to_string(path).map_err(|source| CliError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
