// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! docdrift-diff: Git diff acquisition and CRD change analysis for docdrift
//!
//! This library crate obtains unified-diff text from the `git` executable,
//! restricts it to the CRD schema subdirectory of a repository, and derives
//! a capped set of lowercase search terms from the changes.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use docdrift_diff::{acquire_diff, AcquireMode, filter_diff, extract_terms};
//!
//! let diff = acquire_diff(".", &AcquireMode::Local)
//!     .expect("run git")
//!     .expect("some changes");
//! let filtered = filter_diff(&diff, "config/crd/bases/");
//! let terms = extract_terms(&filtered.text, &filtered.files);
//!
//! for term in terms {
//!     println!("searching docs for: {term}");
//! }
//! ```

pub mod acquire;
pub mod error;
pub mod filter;
pub mod terms;

pub use acquire::{AcquireMode, acquire_diff};
pub use error::DiffError;
pub use filter::{FilteredDiff, filter_diff};
pub use terms::{MAX_TERMS, extract_terms};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::acquire::{AcquireMode, acquire_diff};
    pub use crate::error::DiffError;
    pub use crate::filter::{FilteredDiff, filter_diff};
    pub use crate::terms::extract_terms;
}
