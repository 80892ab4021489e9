//! Treegen CLI binary
//!
//! Reads an ASCII tree, materializes it (or previews the plan with
//! `--dry-run`), and prints the operation list.

use clap::Parser;
use std::process;
use treegen::cli::{execute, Cli};
use treegen::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::default(), cli.effective_log_level());

    match execute(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
