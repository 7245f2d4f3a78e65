// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Search-term extraction
//!
//! Derives a small, capped set of lowercase keywords from a filtered diff and
//! the list of changed file paths. This is deliberately a heuristic, not a
//! ranking algorithm: a fixed vocabulary, fixed synonym bundles keyed on path
//! substrings, and a fixed list of in-diff keywords. No scoring, no frequency
//! weighting.

/// Maximum number of terms kept after priority truncation
pub const MAX_TERMS: usize = 10;

/// Generic documentation vocabulary, always present and never truncated
/// before lower-priority terms.
const STATIC_VOCABULARY: &[&str] = &["schema", "custom resource", "api reference"];

/// Synonym bundles added when a changed path contains the component name.
/// Hyphenated, spaced and abbreviated forms, since docs use all three.
const COMPONENT_BUNDLES: &[(&str, &[&str])] = &[
    (
        "imagebasedupgrade",
        &[
            "imagebasedupgrade",
            "image-based-upgrade",
            "image based upgrade",
            "ibu",
        ],
    ),
    ("lifecycle", &["lifecycle-agent", "lifecycle agent"]),
    (
        "seedgenerator",
        &["seedgenerator", "seed-generator", "seed generator"],
    ),
];

/// Field/stage keywords looked for in added or removed diff lines.
const DIFF_KEYWORDS: &[&str] = &["idle", "prep", "stage", "rollback", "upgrade", "seed"];

/// Extract search terms from a filtered diff and its changed-file paths.
///
/// Output is deduplicated, every term lowercase and non-empty, ordered with
/// the static vocabulary first and everything else in first-seen order, and
/// truncated to [`MAX_TERMS`] dropping the lowest-priority tail.
#[must_use]
pub fn extract_terms(filtered_diff: &str, changed_files: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let mut push = |term: &str| {
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    };

    for term in STATIC_VOCABULARY {
        push(term);
    }

    for file in changed_files {
        let file = file.to_lowercase();
        for (component, bundle) in COMPONENT_BUNDLES {
            if file.contains(component) {
                for term in *bundle {
                    push(term);
                }
            }
        }
    }

    for line in filtered_diff.lines() {
        if !is_change_line(line) {
            continue;
        }
        let line = line.to_lowercase();
        for keyword in DIFF_KEYWORDS {
            if line.contains(keyword) {
                push(keyword);
            }
        }
    }

    terms.truncate(MAX_TERMS);
    terms
}

/// An added or removed content line, excluding the `+++`/`---` file markers.
fn is_change_line(line: &str) -> bool {
    (line.starts_with('+') && !line.starts_with("+++"))
        || (line.starts_with('-') && !line.starts_with("---"))
}
