// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Error types for docdrift-diff

use thiserror::Error;

/// Errors that can occur while obtaining diff text from git
#[derive(Debug, Error)]
pub enum DiffError {
    /// The git executable could not be spawned
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// A git command exited non-zero
    #[error("git {command} failed: {output}")]
    CommandFailed {
        /// The git subcommand and arguments that failed
        command: String,
        /// Combined stdout/stderr captured from the failed command
        output: String,
    },

    /// Git produced output that was not valid UTF-8
    #[error("git {command} produced non-UTF-8 output")]
    InvalidOutput {
        /// The git subcommand whose output could not be decoded
        command: String,
    },
}
