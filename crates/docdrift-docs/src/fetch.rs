// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Documentation repository fetching
//!
//! Shallow-clones the documentation repository into a temporary directory.
//! The checkout owns its [`tempfile::TempDir`], so the clone is deleted when
//! the checkout is dropped, on every exit path.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use tracing::info;

use crate::error::DocsError;

/// A temporary, shallow, single-branch checkout of the docs repository
#[derive(Debug)]
pub struct DocsCheckout {
    dir: TempDir,
}

impl DocsCheckout {
    /// Clone `url` at `branch` into a fresh temporary directory.
    ///
    /// The clone is shallow (`--depth 1 --single-branch`) to keep transfer
    /// size down; the docs repositories this tool targets carry years of
    /// history that the matcher never looks at.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::CloneFailed` with the command's combined output if
    /// git exits non-zero. The temporary directory is removed on failure.
    pub fn clone(url: &str, branch: &str) -> Result<Self, DocsError> {
        let dir = TempDir::with_prefix("docdrift-docs-").map_err(DocsError::TempDir)?;
        info!("cloning {url} ({branch}) to {}", dir.path().display());

        let args = clone_args(url, branch, dir.path());
        let output = Command::new("git")
            .args(&args)
            .output()
            .map_err(DocsError::Spawn)?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            // TempDir drop removes the partial clone.
            return Err(DocsError::CloneFailed {
                url: url.to_string(),
                output: combined.trim().to_string(),
            });
        }

        Ok(Self { dir })
    }

    /// Path to the root of the cloned documentation tree
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Wrap an already-populated directory, for tests that stage fixture
    /// trees instead of cloning over the network.
    #[must_use]
    pub fn from_temp_dir(dir: TempDir) -> Self {
        Self { dir }
    }
}

fn clone_args(url: &str, branch: &str, dest: &Path) -> Vec<String> {
    vec![
        "clone".to_string(),
        "--depth".to_string(),
        "1".to_string(),
        "--branch".to_string(),
        branch.to_string(),
        "--single-branch".to_string(),
        url.to_string(),
        dest.display().to_string(),
    ]
}
