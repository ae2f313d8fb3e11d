//! What a finished search reports.

use ag_core::{
    LetterVector, OracleError, PropertyChecker, PropertySummary, SentenceProperties,
    SentencePropertyChecker,
};
use serde::Serialize;

use crate::orchestrate::SentencePair;
use crate::search::SearchStats;

/// A self-descriptive sentence and how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceReport {
    /// Prefix and connector the sentence was built from
    pub pair: SentencePair,
    /// The rendered sentence
    pub sentence: String,
    /// The fixed-point count vector
    pub vector: LetterVector,
    /// Search counters
    pub stats: SearchStats,
    /// Seed of the generator that drove this search
    pub seed: u64,
}

impl SentenceReport {
    /// Check the sentence against every sentence property.
    #[must_use]
    pub fn verify(&self) -> PropertySummary {
        SentencePropertyChecker::new(self).summary()
    }

    /// Encode as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Multi-line, human-readable summary.
    #[must_use]
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&"!".repeat(66));
        out.push_str("\n!!\n!! Success!\n!!\n");
        out.push_str(&"!".repeat(66));
        out.push('\n');
        out.push_str(&self.sentence);
        out.push('\n');
        out.push_str(&self.vector.to_string());
        out.push('\n');
        out.push_str(&format!(
            "steps = {} restarts = {} final attempt = {} seed = {}\n",
            self.stats.steps, self.stats.restarts, self.stats.attempt_steps, self.seed
        ));
        out
    }
}

impl SentenceProperties for SentenceReport {
    fn prefix(&self) -> &str {
        &self.pair.prefix
    }

    fn sentence(&self) -> &str {
        &self.sentence
    }

    fn stated(&self) -> LetterVector {
        self.vector
    }

    fn evaluated(&self) -> Result<LetterVector, OracleError> {
        self.pair.transform().apply(&self.vector)
    }
}
