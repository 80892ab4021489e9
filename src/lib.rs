//! Treegen: Directory structures from ASCII art trees
//!
//! Parses an indented, box-drawing-character directory tree (as commonly
//! written in documentation) into an in-memory hierarchy, then materializes
//! that hierarchy on a filesystem as directories and seeded files.

pub mod cli;
pub mod error;
pub mod generate;
pub mod logging;
pub mod tree;

pub use error::{GenerateError, ParseError};
pub use generate::{materialize, seed_content, Operation};
pub use tree::parser::parse;
pub use tree::{DirectoryEntry, Hierarchy};
