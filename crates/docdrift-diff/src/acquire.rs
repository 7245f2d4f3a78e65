// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Diff acquisition from the `git` executable
//!
//! docdrift never links a git library; its contract with version control is
//! "run the git binary and capture text". Two acquisition policies exist:
//! a CI mode that compares HEAD against the pull request's base branch, and
//! a local mode that walks a fallback chain of likely-interesting diffs.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::DiffError;

/// How the diff should be obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireMode {
    /// Local/interactive use: worktree changes, then staged changes, then
    /// commits ahead of `origin/main`, then commits ahead of a local `main`.
    Local,
    /// CI use: fetch the declared base branch and diff `origin/<base>...HEAD`.
    Ci {
        /// Base branch name declared by the CI environment
        base_branch: String,
    },
}

/// Obtain unified-diff text for the repository at `repo_root`.
///
/// Returns `Ok(None)` when every applicable source yields empty output —
/// the benign "nothing to analyze" outcome, not an error.
///
/// # Errors
///
/// Returns `DiffError` if git cannot be spawned, or if a required git
/// invocation exits non-zero. In local mode an unreachable `origin/main`
/// falls back to a local `main` ref; only when both trunk refs fail is the
/// failure surfaced.
pub fn acquire_diff(
    repo_root: impl AsRef<Path>,
    mode: &AcquireMode,
) -> Result<Option<String>, DiffError> {
    let repo_root = repo_root.as_ref();
    match mode {
        AcquireMode::Ci { base_branch } => ci_diff(repo_root, base_branch),
        AcquireMode::Local => local_diff(repo_root),
    }
}

fn ci_diff(repo_root: &Path, base_branch: &str) -> Result<Option<String>, DiffError> {
    run_git(repo_root, &["fetch", "origin", base_branch])?;
    let range = format!("origin/{base_branch}...HEAD");
    let diff = run_git(repo_root, &["diff", &range])?;
    Ok(non_empty(diff))
}

fn local_diff(repo_root: &Path) -> Result<Option<String>, DiffError> {
    // Worktree changes first.
    if let Some(diff) = non_empty(run_git(repo_root, &["diff"])?) {
        return Ok(Some(diff));
    }

    // Then staged changes.
    if let Some(diff) = non_empty(run_git(repo_root, &["diff", "--cached"])?) {
        return Ok(Some(diff));
    }

    // Then commits ahead of trunk. origin/main may not exist (no remote,
    // offline checkout); fall back to a local main before giving up.
    let diff = match run_git(repo_root, &["diff", "origin/main", "HEAD"]) {
        Ok(diff) => diff,
        Err(err) => {
            debug!("origin/main unavailable ({err}), trying local main");
            run_git(repo_root, &["diff", "main", "HEAD"])?
        }
    };
    Ok(non_empty(diff))
}

/// Run a git command in `repo_root` and capture its stdout.
///
/// # Errors
///
/// Returns `DiffError::CommandFailed` on non-zero exit, with the command's
/// combined output folded into the error message.
fn run_git(repo_root: &Path, args: &[&str]) -> Result<String, DiffError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()?;

    let command = args.join(" ");
    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(DiffError::CommandFailed {
            command,
            output: combined.trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| DiffError::InvalidOutput { command })
}

fn non_empty(diff: String) -> Option<String> {
    if diff.trim().is_empty() { None } else { Some(diff) }
}
