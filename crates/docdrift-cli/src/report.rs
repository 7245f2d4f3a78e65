// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Stdout reporting
//!
//! The report is unstructured human-readable text: matched files, the model
//! response, then a ruled summary with the verified URLs and static next-steps
//! guidance. A CI step can capture stdout and republish it as a PR comment.

/// Render the full report for a completed analysis.
#[must_use]
pub fn render_report(matched_files: &[String], urls: &[String], model_response: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Found {} relevant documentation files:\n",
        matched_files.len()
    ));
    for file in matched_files {
        out.push_str(&format!("  - {file}\n"));
    }
    out.push('\n');

    out.push_str(model_response);
    out.push('\n');

    out.push_str(&format!("\n{}\n", "=".repeat(80)));
    out.push_str("SUMMARY - Verified Documentation Files to Update:\n");
    out.push_str(&format!("{}\n", "=".repeat(80)));

    if urls.is_empty() {
        out.push_str("No relevant documentation files found.\n");
        out.push_str("This could mean:\n");
        out.push_str("- The changes don't impact user-facing documentation\n");
        out.push_str("- The search terms need refinement\n");
        out.push_str("- The documentation uses different terminology\n");
    } else {
        out.push_str(&format!(
            "Found {} relevant documentation files that need updates:\n\n",
            urls.len()
        ));
        for (i, url) in urls.iter().enumerate() {
            out.push_str(&format!("{}. {url}\n", i + 1));
        }

        out.push_str(&format!("\n{}\n", "-".repeat(80)));
        out.push_str("NEXT STEPS:\n");
        out.push_str("1. Review each URL above and make the recommended changes\n");
        out.push_str("2. Clone the docs repository to make edits\n");
        out.push_str("3. Test documentation builds after making changes\n");
        out.push_str("4. Submit PR with your documentation updates\n");
    }

    out
}

/// Message for the benign "no diff at all" outcome
#[must_use]
pub fn no_diff_message() -> &'static str {
    "No changes detected in git diff. Make sure you have uncommitted changes \
or commits ahead of main."
}

/// Message for the benign "diff has no CRD changes" outcome
#[must_use]
pub fn no_crd_changes_message(crd_dir: &str) -> String {
    format!("No CRD changes detected under {crd_dir}; nothing to analyze.")
}
