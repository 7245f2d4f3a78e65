//! docdrift-cli library
//!
//! This module exports the CLI's internals for use in integration tests.

pub mod config;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod report;
