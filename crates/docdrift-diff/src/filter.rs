// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Unified-diff filtering
//!
//! Restricts raw diff text to the files under a target subdirectory (the CRD
//! schema location) and collects the list of those file paths. The parse is a
//! single pass over the diff lines: a `diff --git` header decides whether the
//! lines that follow belong to a relevant file, and that verdict holds until
//! the next header.

use serde::Serialize;

/// Diff text restricted to one subdirectory, plus the paths it touches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilteredDiff {
    /// Retained diff lines (headers and hunks), in original order
    pub text: String,
    /// Relative paths of relevant files, in header order; duplicates kept
    pub files: Vec<String>,
}

impl FilteredDiff {
    /// True when the diff touched nothing under the target subdirectory
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Restrict `diff` to files whose path starts with `prefix`.
///
/// Header lines are parsed as `diff --git a/<path> b/<path>`; the `a/` marker
/// is stripped before the prefix test. A malformed header (fewer than four
/// whitespace-separated tokens) marks the current file not-relevant, silently.
/// Every path in the returned `files` list starts with `prefix`.
#[must_use]
pub fn filter_diff(diff: &str, prefix: &str) -> FilteredDiff {
    let mut filtered = FilteredDiff::default();
    let mut in_relevant_file = false;

    for line in diff.lines() {
        if line.starts_with("diff --git") {
            in_relevant_file = false;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 4 {
                let path = parts[2].strip_prefix("a/").unwrap_or(parts[2]);
                if path.starts_with(prefix) {
                    in_relevant_file = true;
                    filtered.files.push(path.to_string());
                }
            }
        }

        if in_relevant_file {
            filtered.text.push_str(line);
            filtered.text.push('\n');
        }
    }

    filtered
}
