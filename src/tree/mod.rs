//! Parsed hierarchy model
//!
//! The in-memory representation of an ASCII tree: a mapping from relative
//! directory path to that directory's immediate contents. Built once per
//! parse call, then read-only during materialization.

pub mod parser;

use indexmap::IndexMap;
use std::collections::HashMap;

/// Canonical key for the root of the hierarchy (the base path itself).
pub const ROOT: &str = "";

/// One directory's immediate contents and trailing comments.
///
/// `files` and `subdirectories` keep first-seen input order; a name is never
/// present in both. `comments` is keyed by the stripped entry name, not the
/// full path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub files: Vec<String>,
    pub subdirectories: Vec<String>,
    pub comments: HashMap<String, String>,
}

impl DirectoryEntry {
    /// Whether `name` is already registered as a file or subdirectory.
    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name) || self.subdirectories.iter().any(|d| d == name)
    }

    /// Register a file, unless the name is already taken. Returns whether
    /// the name was inserted.
    pub fn add_file(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.files.push(name.to_string());
        true
    }

    /// Register a subdirectory, unless the name is already taken. Returns
    /// whether the name was inserted.
    pub fn add_subdirectory(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.subdirectories.push(name.to_string());
        true
    }

    pub fn set_comment(&mut self, name: &str, comment: &str) {
        self.comments
            .insert(name.to_string(), comment.to_string());
    }

    pub fn comment(&self, name: &str) -> Option<&str> {
        self.comments.get(name).map(String::as_str)
    }
}

/// Mapping from relative directory path to its [`DirectoryEntry`].
///
/// Keys use `/` as separator regardless of platform; the root is [`ROOT`].
/// Iteration order is insertion order, which for directories is the order
/// they first appeared in the input.
#[derive(Debug, Default)]
pub struct Hierarchy {
    entries: IndexMap<String, DirectoryEntry>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or create the entry for `path`. Directories discovered only as
    /// parents still get an (empty) entry, so children can attach later.
    pub fn entry_mut(&mut self, path: &str) -> &mut DirectoryEntry {
        self.entries.entry(path.to_string()).or_default()
    }

    pub fn get(&self, path: &str) -> Option<&DirectoryEntry> {
        self.entries.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectoryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Join a relative directory path and a child name into a child path.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent == ROOT {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
