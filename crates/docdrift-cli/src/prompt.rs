// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Prompt construction and size guarding
//!
//! The diff is reduced to a summary (file headers, hunk headers, and the
//! first few changed lines) and hard-truncated before being embedded in the
//! prompt template. A rough token estimate guards the request size: the run
//! aborts before any network call when the estimate exceeds the ceiling.

use thiserror::Error;

/// Changed content lines kept in the diff summary
const SUMMARY_CHANGE_LINES: usize = 20;

/// Hard character ceiling on the diff summary
const SUMMARY_MAX_CHARS: usize = 5000;

/// Rough chars-per-token ratio used for the budget estimate
const CHARS_PER_TOKEN: usize = 4;

/// Prompt budget errors
#[derive(Debug, Error)]
pub enum PromptError {
    /// Estimated prompt size exceeds the configured ceiling
    #[error("Prompt too large: ~{estimated} tokens exceeds the {ceiling} token ceiling")]
    BudgetExceeded {
        /// Estimated token count (chars / 4)
        estimated: usize,
        /// Configured ceiling
        ceiling: usize,
    },
}

/// Reduce a unified diff to headers plus the first changed lines.
///
/// File headers (`diff --git`, `+++`, `---`), hunk headers (`@@`) and the
/// first [`SUMMARY_CHANGE_LINES`] added/removed lines are kept; the result is
/// then truncated to [`SUMMARY_MAX_CHARS`] characters.
#[must_use]
pub fn summarize_diff(diff: &str) -> String {
    let mut summary = String::new();
    let mut change_lines = 0;

    for line in diff.lines() {
        let is_header = line.starts_with("diff --git")
            || line.starts_with("+++")
            || line.starts_with("---")
            || line.starts_with("@@");
        let is_change = !is_header && (line.starts_with('+') || line.starts_with('-'));

        if is_header {
            summary.push_str(line);
            summary.push('\n');
        } else if is_change && change_lines < SUMMARY_CHANGE_LINES {
            summary.push_str(line);
            summary.push('\n');
            change_lines += 1;
        }
    }

    if summary.len() > SUMMARY_MAX_CHARS {
        let mut cut = SUMMARY_MAX_CHARS;
        while !summary.is_char_boundary(cut) {
            cut -= 1;
        }
        summary.truncate(cut);
        summary.push_str("\n[diff truncated]\n");
    }

    summary
}

/// Render the analysis prompt from the pipeline's findings.
#[must_use]
pub fn build_prompt(
    changed_files: &[String],
    matched_files: &[String],
    urls: &[String],
    diff_summary: &str,
) -> String {
    format!(
        "Given the following git diff showing changes to CRD schema files, analyze what \
specific documentation files would be impacted.

**Changed CRD files:** {changed:?}

**Found relevant documentation files (VERIFIED TO EXIST):**
{matched}

**Verified URLs to update:**
{urls}

Please provide:
1. **Specific File Analysis**: For each relevant documentation file above, explain what changes would be needed
2. **Content Updates**: What specific content changes are required based on the git diff
3. **Priority**: Which files are most critical to update first
4. **Change Details**: Exact text/examples that need to be updated

**Git diff summary showing the actual changes:**
{diff}

Focus on specific, actionable recommendations for updating each of the verified \
documentation files listed above.",
        changed = changed_files,
        matched = matched_files.join("\n"),
        urls = urls.join("\n"),
        diff = diff_summary,
    )
}

/// Estimated token count for a prompt (characters / 4)
#[must_use]
pub fn estimate_tokens(prompt: &str) -> usize {
    prompt.len() / CHARS_PER_TOKEN
}

/// Abort the run if the prompt estimate exceeds the ceiling.
///
/// # Errors
///
/// Returns `PromptError::BudgetExceeded` when the estimate is over `ceiling`.
pub fn check_budget(prompt: &str, ceiling: usize) -> Result<(), PromptError> {
    let estimated = estimate_tokens(prompt);
    if estimated > ceiling {
        return Err(PromptError::BudgetExceeded { estimated, ceiling });
    }
    Ok(())
}
