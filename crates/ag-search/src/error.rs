//! Error types for the sentence search.

use ag_core::OracleError;
use thiserror::Error;

/// Errors surfaced by a search or by the orchestrator.
///
/// Hitting a cycle is not an error: the search restarts on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A count left the range the number-name table spells.
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// A configured giving-up bound was reached without a fixed point.
    #[error("search gave up after {steps} steps and {restarts} restarts")]
    Exhausted {
        /// Steps taken, including the initial evaluation
        steps: u64,
        /// Restarts taken
        restarts: u64,
    },

    /// The (prefix, connector) pair cannot form a sentence.
    #[error("invalid sentence pair {input:?}: {reason}")]
    InvalidPair {
        /// Offending input
        input: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A search task panicked or never reported back.
    #[error("search task failed: {0}")]
    Join(String),
}

impl SearchError {
    /// True if the search simply ran out of budget.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SearchError::Exhausted { .. })
    }
}
