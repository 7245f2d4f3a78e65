// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Error types for docdrift-docs

use thiserror::Error;

/// Errors that can occur while fetching or searching documentation
#[derive(Debug, Error)]
pub enum DocsError {
    /// The temporary clone directory could not be created
    #[error("Failed to create temp directory: {0}")]
    TempDir(#[source] std::io::Error),

    /// The git executable could not be spawned
    #[error("Failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    /// The shallow clone exited non-zero
    #[error("Failed to clone {url}: {output}")]
    CloneFailed {
        /// The documentation repository URL
        url: String,
        /// Combined stdout/stderr captured from the failed clone
        output: String,
    },

    /// Traversal of an existing docs subdirectory failed
    #[error("Failed to search docs under {dir}: {source}")]
    Walk {
        /// The subdirectory being traversed
        dir: String,
        /// The underlying walk error
        #[source]
        source: walkdir::Error,
    },
}
