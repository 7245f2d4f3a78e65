// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Term matching over the documentation tree
//!
//! Walks a fixed set of subdirectories under the docs root and flags every
//! AsciiDoc file whose content contains any search term, case-insensitively.
//! A linear substring scan per file; the first matching term settles the file
//! and the scan moves on.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::DocsError;

/// Options for the documentation search
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Subdirectories of the docs root to search; absent ones are skipped
    /// with a warning.
    pub subdirs: Vec<String>,
    /// Recognized documentation file extension, matched case-insensitively
    pub extension: String,
    /// Maximum number of matched files reported, truncating first-found
    pub max_matches: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            subdirs: ["modules", "edge_computing", "updating", "nodes"]
                .map(String::from)
                .to_vec(),
            extension: ".adoc".to_string(),
            max_matches: 15,
        }
    }
}

/// Find documentation files under `root` whose content contains any term.
///
/// Returned paths are relative to `root` and always end in the recognized
/// extension. Traversal within each subdirectory is sorted by file name so
/// the result is reproducible across platforms. Files that cannot be read
/// are skipped, not errors.
///
/// # Errors
///
/// Returns `DocsError::Walk` if traversal of an existing subdirectory fails.
/// An absent subdirectory is a warning and a skip.
pub fn find_related(
    root: &Path,
    terms: &[String],
    options: &MatchOptions,
) -> Result<Vec<String>, DocsError> {
    let mut matches = Vec::new();

    'subdirs: for subdir in &options.subdirs {
        let dir = root.join(subdir);
        if !dir.is_dir() {
            warn!("docs subdirectory {subdir} not found, skipping");
            continue;
        }

        for entry in WalkDir::new(&dir).sort_by_file_name() {
            if matches.len() >= options.max_matches {
                break 'subdirs;
            }

            let entry = entry.map_err(|source| DocsError::Walk {
                dir: subdir.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !has_extension(entry.file_name().to_string_lossy().as_ref(), &options.extension) {
                continue;
            }

            let Ok(content) = fs::read_to_string(entry.path()) else {
                debug!("skipping unreadable file {}", entry.path().display());
                continue;
            };
            let content = content.to_lowercase();

            if terms.iter().any(|term| content.contains(term.as_str())) {
                let rel = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap_or(entry.path())
                    .display()
                    .to_string();
                matches.push(rel);
            }
        }
    }

    Ok(matches)
}

fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name.to_lowercase().ends_with(&extension.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn options(subdirs: &[&str]) -> MatchOptions {
        MatchOptions {
            subdirs: subdirs.iter().map(ToString::to_string).collect(),
            ..MatchOptions::default()
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(path, content).expect("write fixture");
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_matches_term_case_insensitively() {
        let root = TempDir::new().expect("temp dir");
        write(root.path(), "modules/rollback.adoc", "Initiating a ROLLBACK\n");

        let found = find_related(root.path(), &terms(&["rollback"]), &options(&["modules"]))
            .expect("search");
        assert_eq!(found, vec!["modules/rollback.adoc".to_string()]);
    }

    #[test]
    fn test_only_recognized_extension_reported() {
        let root = TempDir::new().expect("temp dir");
        write(root.path(), "modules/notes.txt", "rollback everywhere\n");
        write(root.path(), "modules/notes.md", "rollback everywhere\n");
        write(root.path(), "modules/guide.ADOC", "rollback everywhere\n");

        let found = find_related(root.path(), &terms(&["rollback"]), &options(&["modules"]))
            .expect("search");
        assert_eq!(found, vec!["modules/guide.ADOC".to_string()]);
    }

    #[test]
    fn test_absent_subdirectory_is_skipped() {
        let root = TempDir::new().expect("temp dir");
        write(root.path(), "modules/a.adoc", "rollback\n");

        let found = find_related(
            root.path(),
            &terms(&["rollback"]),
            &options(&["no_such_dir", "modules"]),
        )
        .expect("search");
        assert_eq!(found, vec!["modules/a.adoc".to_string()]);
    }

    #[test]
    fn test_result_is_capped() {
        let root = TempDir::new().expect("temp dir");
        for i in 0..30 {
            write(
                root.path(),
                &format!("modules/file_{i:02}.adoc"),
                "rollback\n",
            );
        }

        let opts = options(&["modules"]);
        let found = find_related(root.path(), &terms(&["rollback"]), &opts).expect("search");
        assert_eq!(found.len(), opts.max_matches);
    }

    #[test]
    fn test_traversal_order_is_sorted() {
        let root = TempDir::new().expect("temp dir");
        write(root.path(), "modules/zz.adoc", "rollback\n");
        write(root.path(), "modules/aa.adoc", "rollback\n");
        write(root.path(), "modules/mm.adoc", "rollback\n");

        let found = find_related(root.path(), &terms(&["rollback"]), &options(&["modules"]))
            .expect("search");
        assert_eq!(
            found,
            vec![
                "modules/aa.adoc".to_string(),
                "modules/mm.adoc".to_string(),
                "modules/zz.adoc".to_string(),
            ]
        );
    }

    #[test]
    fn test_first_matching_term_settles_a_file() {
        let root = TempDir::new().expect("temp dir");
        write(root.path(), "modules/both.adoc", "rollback and upgrade\n");

        let found = find_related(
            root.path(),
            &terms(&["rollback", "upgrade"]),
            &options(&["modules"]),
        )
        .expect("search");
        // One entry, not one per matching term.
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_no_terms_match_nothing() {
        let root = TempDir::new().expect("temp dir");
        write(root.path(), "modules/a.adoc", "rollback\n");

        let found =
            find_related(root.path(), &terms(&["quorum"]), &options(&["modules"])).expect("search");
        assert!(found.is_empty());
    }

    #[test]
    fn test_nested_directories_are_walked() {
        let root = TempDir::new().expect("temp dir");
        write(
            root.path(),
            "modules/edge/deep/nested.adoc",
            "seed generator details\n",
        );

        let found = find_related(
            root.path(),
            &terms(&["seed generator"]),
            &options(&["modules"]),
        )
        .expect("search");
        assert_eq!(found, vec!["modules/edge/deep/nested.adoc".to_string()]);
    }
}
