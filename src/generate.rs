//! Structure materializer
//!
//! Walks a parsed [`Hierarchy`] and turns it into an ordered operation plan,
//! optionally performing the plan against the real filesystem. Dry-run and
//! real mode produce the identical plan; only real mode mutates anything.

use crate::error::GenerateError;
use crate::tree::{join_path, Hierarchy, ROOT};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One planned filesystem operation, in plan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum Operation {
    CreateDir(PathBuf),
    CreateFile(PathBuf),
}

impl Operation {
    pub fn path(&self) -> &Path {
        match self {
            Operation::CreateDir(path) | Operation::CreateFile(path) => path,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::CreateDir(path) => write!(f, "CREATE DIR: {}", path.display()),
            Operation::CreateFile(path) => write!(f, "CREATE FILE: {}", path.display()),
        }
    }
}

/// Materialize `hierarchy` under `base_path`.
///
/// Walks depth-first from the root entry: each subdirectory is planned and
/// entered before the parent's files are planned, in first-seen input order.
/// Creation is idempotent ("already exists" is success); files are
/// overwritten with freshly seeded content. A filesystem failure aborts the
/// run with everything already created left in place.
pub fn materialize(
    hierarchy: &Hierarchy,
    base_path: &Path,
    dry_run: bool,
) -> Result<Vec<Operation>, GenerateError> {
    let base = std::path::absolute(base_path).map_err(|source| GenerateError::ResolveBase {
        path: base_path.to_path_buf(),
        source,
    })?;
    debug!(base = %base.display(), dry_run, "materializing hierarchy");

    let mut operations = Vec::new();
    if hierarchy.is_empty() {
        return Ok(operations);
    }

    if !dry_run {
        fs::create_dir_all(&base).map_err(|source| GenerateError::CreateDir {
            path: base.clone(),
            source,
        })?;
    }

    walk(hierarchy, ROOT, &base, dry_run, &mut operations)?;
    info!(operations = operations.len(), "materialization planned");
    Ok(operations)
}

fn walk(
    hierarchy: &Hierarchy,
    rel: &str,
    abs: &Path,
    dry_run: bool,
    operations: &mut Vec<Operation>,
) -> Result<(), GenerateError> {
    let Some(entry) = hierarchy.get(rel) else {
        return Ok(());
    };

    for dir_name in &entry.subdirectories {
        let dir_path = abs.join(dir_name);
        info!(path = %dir_path.display(), "create directory");
        operations.push(Operation::CreateDir(dir_path.clone()));
        if !dry_run {
            fs::create_dir_all(&dir_path).map_err(|source| GenerateError::CreateDir {
                path: dir_path.clone(),
                source,
            })?;
        }
        walk(
            hierarchy,
            &join_path(rel, dir_name),
            &dir_path,
            dry_run,
            operations,
        )?;
    }

    for file_name in &entry.files {
        let file_path = abs.join(file_name);
        info!(path = %file_path.display(), "create file");
        operations.push(Operation::CreateFile(file_path.clone()));
        if !dry_run {
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            let content = seed_content(file_name, entry.comment(file_name));
            fs::write(&file_path, content).map_err(|source| GenerateError::WriteFile {
                path: file_path.clone(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Initial content for a generated file.
///
/// Pure function of the file name and its optional comment. The comment, if
/// any, is emitted first as a `#`-prefixed line; the remaining rules are
/// evaluated top to bottom, first match wins.
pub fn seed_content(file_name: &str, comment: Option<&str>) -> String {
    let mut content = String::new();
    if let Some(comment) = comment {
        content.push_str(&format!("# {}\n", comment));
    }

    if file_name == "__init__.py" {
        // Package marker stays empty.
    } else if file_name == "requirements.txt" {
        content.push_str("# Project dependencies\n");
    } else if file_name == ".gitignore" {
        content.push_str("__pycache__/\n*.pyc\n.env\n");
    } else if file_name == "README.md" {
        content.push_str("# Project Documentation\n\n## Overview\n\n");
    } else if file_name.ends_with(".py") {
        content.push_str(&format!("\"\"\"\n{}\n\"\"\"\n\n", file_name));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parser::parse;

    #[test]
    fn operation_display_matches_preview_contract() {
        let op = Operation::CreateDir(PathBuf::from("/tmp/project"));
        assert_eq!(op.to_string(), "CREATE DIR: /tmp/project");
        let op = Operation::CreateFile(PathBuf::from("/tmp/project/a.txt"));
        assert_eq!(op.to_string(), "CREATE FILE: /tmp/project/a.txt");
    }

    #[test]
    fn operation_serializes_with_kind_and_path() {
        let op = Operation::CreateFile(PathBuf::from("/tmp/a.txt"));
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["kind"], "create_file");
        assert_eq!(json["path"], "/tmp/a.txt");
    }

    #[test]
    fn dry_run_plans_depth_first() {
        let hierarchy = parse(
            "\
project/
    src/
        main.py   # entry point
    README.md
",
        )
        .unwrap();
        let base = PathBuf::from("/nonexistent/base");
        let ops = materialize(&hierarchy, &base, true).unwrap();
        let rendered: Vec<String> = ops.iter().map(Operation::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "CREATE DIR: /nonexistent/base/project",
                "CREATE DIR: /nonexistent/base/project/src",
                "CREATE FILE: /nonexistent/base/project/src/main.py",
                "CREATE FILE: /nonexistent/base/project/README.md",
            ]
        );
    }

    #[test]
    fn children_after_a_conflicting_line_stay_in_the_plan() {
        let hierarchy = parse("src\nsrc/\n    inner.txt\n").unwrap();
        let ops = materialize(&hierarchy, Path::new("/base"), true).unwrap();
        assert!(
            ops.iter()
                .any(|op| op.path().ends_with("inner.txt")),
            "inner.txt missing from plan: {:?}",
            ops
        );
        assert_eq!(ops.len(), 2);
    }

    #[test]
    fn seed_content_comment_line_comes_first() {
        let content = seed_content("main.py", Some("entry point"));
        assert_eq!(content, "# entry point\n\"\"\"\nmain.py\n\"\"\"\n\n");
    }

    #[test]
    fn seed_content_python_module_header() {
        assert_eq!(seed_content("util.py", None), "\"\"\"\nutil.py\n\"\"\"\n\n");
    }

    #[test]
    fn seed_content_package_marker_stays_empty() {
        assert_eq!(seed_content("__init__.py", None), "");
        assert_eq!(seed_content("__init__.py", Some("pkg")), "# pkg\n");
    }

    #[test]
    fn seed_content_known_conventions() {
        assert_eq!(seed_content("requirements.txt", None), "# Project dependencies\n");
        assert_eq!(seed_content(".gitignore", None), "__pycache__/\n*.pyc\n.env\n");
        assert_eq!(
            seed_content("README.md", None),
            "# Project Documentation\n\n## Overview\n\n"
        );
    }

    #[test]
    fn seed_content_unknown_files_are_empty() {
        assert_eq!(seed_content("data.csv", None), "");
        assert_eq!(seed_content("data.csv", Some("raw rows")), "# raw rows\n");
    }
}
