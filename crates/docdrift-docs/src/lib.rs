// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! docdrift-docs: Documentation checkout and term matching for docdrift
//!
//! This library crate shallow-clones a documentation repository into a
//! temporary directory and searches a fixed set of its subdirectories for
//! AsciiDoc files containing any of the extracted search terms.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use docdrift_docs::{DocsCheckout, MatchOptions, find_related};
//!
//! let checkout = DocsCheckout::clone(
//!     "https://github.com/openshift/openshift-docs.git",
//!     "enterprise-4.19",
//! )
//! .expect("clone docs");
//!
//! let terms = vec!["rollback".to_string()];
//! let matches = find_related(checkout.path(), &terms, &MatchOptions::default())
//!     .expect("search docs");
//! // checkout dropped here; the temporary clone is deleted.
//! ```

pub mod error;
pub mod fetch;
pub mod matcher;

pub use error::DocsError;
pub use fetch::DocsCheckout;
pub use matcher::{MatchOptions, find_related};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::DocsError;
    pub use crate::fetch::DocsCheckout;
    pub use crate::matcher::{MatchOptions, find_related};
}
