//! Error types for parsing and materialization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing an ASCII tree.
///
/// Parsing is deliberately permissive: malformed indentation and stray
/// separator lines are absorbed, never rejected. The only failure is input
/// that yields no structure at all, which callers typically report and exit
/// on rather than treat as a hard fault.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no structure produced from input; check the tree format")]
    EmptyStructure,
}

/// Errors produced while materializing a hierarchy on the filesystem.
///
/// Filesystem failures are fatal for the run: entries already created are
/// left in place and the error propagates to the caller.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to resolve base path {path}: {source}")]
    ResolveBase {
        path: PathBuf,
        source: std::io::Error,
    },
}
