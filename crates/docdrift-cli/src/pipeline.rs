// Copyright (c) 2026 - present docdrift contributors
// SPDX-License-Identifier: MIT

//! Pipeline orchestration
//!
//! A strictly linear run: acquire → filter → extract terms → clone → match →
//! build prompt → budget guard → call model → report. A planning step decides
//! the two benign-empty outcomes before anything is cloned, so a run with
//! nothing to analyze never touches the network.

use anyhow::Context;
use tracing::info;

use docdrift_diff::{AcquireMode, FilteredDiff, acquire_diff, extract_terms, filter_diff};
use docdrift_docs::{DocsCheckout, MatchOptions, find_related};

use crate::config::Config;
use crate::llm::LlmClient;
use crate::prompt::{build_prompt, check_budget, summarize_diff};
use crate::report::{no_crd_changes_message, no_diff_message, render_report};

/// Outcome of the pre-clone planning step
#[derive(Debug)]
pub enum Plan {
    /// No diff at all: print an explanation, exit successfully
    NoDiff,
    /// Diff exists but touches nothing under the CRD prefix
    NoCrdChanges,
    /// CRD changes found; proceed to clone and match
    Analyze {
        /// Diff restricted to the CRD subdirectory
        filtered: FilteredDiff,
        /// Extracted search terms
        terms: Vec<String>,
    },
}

/// Decide what the run should do given the acquired diff.
#[must_use]
pub fn plan(diff: Option<&str>, crd_dir: &str) -> Plan {
    let Some(diff) = diff else {
        return Plan::NoDiff;
    };

    let filtered = filter_diff(diff, crd_dir);
    if filtered.is_empty() {
        return Plan::NoCrdChanges;
    }

    let terms = extract_terms(&filtered.text, &filtered.files);
    Plan::Analyze { filtered, terms }
}

/// Construct one documentation URL per matched relative path.
#[must_use]
pub fn doc_urls(base_url: &str, matched: &[String]) -> Vec<String> {
    matched
        .iter()
        .map(|rel| format!("{base_url}/{rel}"))
        .collect()
}

/// Run the full pipeline and print the report to stdout.
///
/// # Errors
///
/// Fatal on git failure, clone failure, docs traversal failure, the prompt
/// budget guard, or any model-call failure. The benign-empty outcomes are
/// `Ok`.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let mode = if config.ci {
        AcquireMode::Ci {
            base_branch: config.base_branch().to_string(),
        }
    } else {
        AcquireMode::Local
    };

    info!("acquiring diff from {}", config.repo_root.display());
    let diff = acquire_diff(&config.repo_root, &mode).context("getting git diff")?;

    let (filtered, terms) = match plan(diff.as_deref(), &config.crd_dir) {
        Plan::NoDiff => {
            println!("{}", no_diff_message());
            return Ok(());
        }
        Plan::NoCrdChanges => {
            println!("{}", no_crd_changes_message(&config.crd_dir));
            return Ok(());
        }
        Plan::Analyze { filtered, terms } => (filtered, terms),
    };

    info!(
        "changed CRD files: {:?}, search terms: {:?}",
        filtered.files, terms
    );

    let checkout = DocsCheckout::clone(&config.docs_repo, &config.docs_branch)
        .context("cloning documentation repository")?;

    let matched = find_related(checkout.path(), &terms, &MatchOptions::default())
        .context("searching documentation files")?;
    info!("found {} relevant documentation files", matched.len());

    let urls = doc_urls(&config.docs_base_url, &matched);

    let summary = summarize_diff(&filtered.text);
    let prompt = build_prompt(&filtered.files, &matched, &urls, &summary);
    check_budget(&prompt, config.prompt_token_ceiling)?;

    let client = LlmClient::new(config.api_key()?, &config.model, config.max_output_tokens)?;
    let response = client
        .complete(&prompt)
        .await
        .context("requesting documentation recommendations")?;

    print!("{}", render_report(&matched, &urls, &response));

    // checkout drops here; the temporary clone is deleted on every path.
    Ok(())
}
