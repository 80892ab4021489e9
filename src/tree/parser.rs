//! ASCII tree parser
//!
//! Converts an indented, box-drawing directory tree into a [`Hierarchy`].
//! One canonical algorithm: the first indented line fixes the indent unit,
//! and a parent stack tracks the currently open directory path. Malformed
//! indentation is absorbed permissively rather than rejected; anomalies are
//! reported on the trace channel only.

use crate::error::ParseError;
use crate::tree::{join_path, Hierarchy};
use tracing::{debug, trace, warn};

/// Box-drawing connector found at the start of a line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinePrefix {
    /// `├──`
    Branch,
    /// `└──`
    LastBranch,
    /// Bare `│` continuation
    Continuation,
    None,
}

/// One scanned input line, before it is attached to the hierarchy.
#[derive(Debug)]
struct TreeLine {
    /// Count of leading indentation characters (spaces and connectors).
    indent_cols: usize,
    prefix: LinePrefix,
    /// Entry name with any trailing `/` stripped.
    name: String,
    /// Trailing comment, if the line carried one.
    comment: Option<String>,
    is_dir: bool,
}

/// Characters that count toward indentation: spaces plus the box-drawing
/// connectors that precede an entry name.
fn is_indent_char(c: char) -> bool {
    matches!(c, ' ' | '│' | '├' | '└' | '─')
}

/// Split `content` into (name, comment) at the first unescaped `#`.
/// `\#` sequences in the name are unescaped.
fn split_comment(content: &str) -> (String, Option<String>) {
    let mut prev: Option<char> = None;
    let mut split_at: Option<usize> = None;
    for (i, c) in content.char_indices() {
        if c == '#' && prev != Some('\\') {
            split_at = Some(i);
            break;
        }
        prev = Some(c);
    }
    match split_at {
        Some(i) => {
            let name = content[..i].trim().replace("\\#", "#");
            let comment = content[i + '#'.len_utf8()..].trim();
            let comment = if comment.is_empty() {
                None
            } else {
                Some(comment.to_string())
            };
            (name, comment)
        }
        None => (content.trim().replace("\\#", "#"), None),
    }
}

/// Scan one raw line. Returns `None` for lines that contribute nothing:
/// blank lines, pure continuation bars, and lines whose name is empty after
/// stripping connectors and comments.
fn scan_line(raw: &str) -> Option<TreeLine> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '│' || c == ' ') {
        trace!(line = raw, "skipping blank or continuation-only line");
        return None;
    }

    let prefix = if trimmed.starts_with("├──") {
        LinePrefix::Branch
    } else if trimmed.starts_with("└──") {
        LinePrefix::LastBranch
    } else if trimmed.starts_with('│') {
        LinePrefix::Continuation
    } else {
        LinePrefix::None
    };

    let indent_cols = raw.chars().take_while(|&c| is_indent_char(c)).count();
    let content: String = raw.chars().skip_while(|&c| is_indent_char(c)).collect();

    let (name, comment) = split_comment(&content);
    if name.is_empty() {
        trace!(line = raw, "skipping line with empty name");
        return None;
    }

    let is_dir = name.ends_with('/');
    let name = name.trim_end_matches('/').to_string();
    if name.is_empty() {
        return None;
    }

    Some(TreeLine {
        indent_cols,
        prefix,
        name,
        comment,
        is_dir,
    })
}

/// Parse an ASCII tree into a [`Hierarchy`].
///
/// Fails only when the input yields no structure at all; everything else is
/// handled permissively (see module docs).
pub fn parse(input: &str) -> Result<Hierarchy, ParseError> {
    let mut hierarchy = Hierarchy::new();
    // Indentation columns per nesting level, fixed by the first indented line.
    let mut unit: Option<usize> = None;
    // Directory names forming the currently open path, indexed by depth.
    let mut stack: Vec<String> = Vec::new();

    for raw in input.lines() {
        let Some(line) = scan_line(raw) else {
            continue;
        };

        if unit.is_none() && line.indent_cols > 0 {
            unit = Some(line.indent_cols);
            debug!(unit = line.indent_cols, "detected indent unit");
        }
        let depth = match unit {
            Some(u) => line.indent_cols / u,
            None => 0,
        };

        // Close branches deeper than this line. A depth jumping deeper by
        // more than one level leaves the stack short, attaching the entry
        // to the nearest open ancestor.
        while stack.len() > depth {
            stack.pop();
        }
        let parent = stack.join("/");
        trace!(
            name = %line.name,
            depth,
            parent = %parent,
            prefix = ?line.prefix,
            is_dir = line.is_dir,
            "attaching entry"
        );

        let entry = hierarchy.entry_mut(&parent);
        let conflicting = if line.is_dir {
            entry.files.iter().any(|f| *f == line.name)
        } else {
            entry.subdirectories.iter().any(|d| *d == line.name)
        };
        if conflicting {
            // First classification wins; the line contributes nothing, so a
            // conflicting directory must not open a subtree either. Any
            // children that follow attach to the still-open ancestor, same
            // as a deep indentation jump.
            warn!(
                name = %line.name,
                parent = %parent,
                "entry already registered with the other kind; ignoring line"
            );
            continue;
        }
        if line.is_dir {
            entry.add_subdirectory(&line.name);
        } else {
            entry.add_file(&line.name);
        }
        if let Some(comment) = &line.comment {
            entry.set_comment(&line.name, comment);
        }

        if line.is_dir {
            // Give the directory its own (possibly empty) entry so later
            // children have somewhere to attach.
            let full = join_path(&parent, &line.name);
            hierarchy.entry_mut(&full);
            stack.push(line.name);
        }
    }

    if hierarchy.is_empty() {
        return Err(ParseError::EmptyStructure);
    }
    debug!(entries = hierarchy.len(), "parsed hierarchy");
    Ok(hierarchy)
}
