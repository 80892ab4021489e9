//! CLI tooling
//!
//! Command-line surface for treegen: reads the ASCII tree from a file or
//! stdin, picks the base path and mode, and renders the operation plan.

use crate::error::{GenerateError, ParseError};
use crate::generate::{materialize, Operation};
use crate::tree::parser::parse;
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Treegen - Generate directory structures from ASCII art trees
#[derive(Parser, Debug)]
#[command(name = "treegen")]
#[command(about = "Generate directory structures from ASCII art trees")]
pub struct Cli {
    /// Input file containing the ASCII tree ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Target directory for the generated structure
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Plan operations without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for the operation plan (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose logging (shorthand for --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level to pass to the subscriber, if any flag asked for one.
    pub fn effective_log_level(&self) -> Option<&str> {
        match &self.log_level {
            Some(level) => Some(level.as_str()),
            None if self.verbose => Some("debug"),
            None => None,
        }
    }
}

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    ReadStdin(std::io::Error),

    #[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
    UnknownFormat(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to encode operation plan: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Run the full pipeline and return the rendered operation plan.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    let ascii = read_input(cli.input.as_deref())?;
    let hierarchy = parse(&ascii)?;
    let operations = materialize(&hierarchy, &cli.output, cli.dry_run)?;
    render(&operations, &cli.format)
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::ReadStdin)?;
            Ok(buf)
        }
    }
}

fn render(operations: &[Operation], format: &str) -> Result<String, CliError> {
    match format {
        "text" => Ok(operations
            .iter()
            .map(Operation::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        "json" => Ok(serde_json::to_string_pretty(operations)?),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}
