//! Running several searches side by side.
//!
//! One blocking task per (prefix, connector) pair, all gathered in a
//! `JoinSet`. `run_all` returns only after every task has finished, so no
//! search outlives the call. Each task gets its own generator, forked from
//! a master generator in pair order, which makes a whole run reproducible
//! from one seed.

use std::str::FromStr;
use std::sync::Arc;

use ag_rng::DeterministicRng;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::SearchError;
use crate::report::SentenceReport;
use crate::search::{FixedPointSearch, SearchConfig};
use crate::transform::SentenceTransform;

/// Separator between prefix and connector in `"prefix|connector"`.
pub const PAIR_SEPARATOR: char = '|';

/// The fixed text around the counted clauses of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentencePair {
    /// Opening words, e.g. "this sentence has"
    pub prefix: String,
    /// Word before the final clause, e.g. "and"
    pub connector: String,
}

impl SentencePair {
    /// Create a pair from whitespace-trimmed parts, rejecting empty ones.
    pub fn new(prefix: impl Into<String>, connector: impl Into<String>) -> Result<Self, SearchError> {
        let Self { prefix, connector } = Self::trimmed(&prefix.into(), &connector.into());

        if prefix.is_empty() {
            return Err(SearchError::InvalidPair {
                input: format!("{}{}{}", prefix, PAIR_SEPARATOR, connector),
                reason: "prefix is empty",
            });
        }
        if connector.is_empty() {
            return Err(SearchError::InvalidPair {
                input: format!("{}{}{}", prefix, PAIR_SEPARATOR, connector),
                reason: "connector is empty",
            });
        }
        Ok(Self { prefix, connector })
    }

    fn trimmed(prefix: &str, connector: &str) -> Self {
        Self {
            prefix: prefix.trim().to_string(),
            connector: connector.trim().to_string(),
        }
    }

    /// The pairs searched when none are given.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        [
            "kurt's self-referential sentence has",
            "ray's sentence has",
            "bonnie's sentence has",
        ]
        .into_iter()
        .map(|prefix| Self::trimmed(prefix, "and"))
        .collect()
    }

    /// Build the count function and renderer for this pair.
    #[must_use]
    pub fn transform(&self) -> SentenceTransform {
        SentenceTransform::new(self.prefix.clone(), self.connector.clone())
    }
}

impl FromStr for SentencePair {
    type Err = SearchError;

    /// Parse `"prefix|connector"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(PAIR_SEPARATOR) {
            Some((prefix, connector)) => Self::new(prefix, connector),
            None => Err(SearchError::InvalidPair {
                input: s.to_string(),
                reason: "expected PREFIX|CONNECTOR",
            }),
        }
    }
}

/// Configuration for a run over several pairs.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Master seed; every search forks its generator from it
    pub seed: u64,
    /// Per-search settings
    pub search: SearchConfig,
    /// Maximum searches running at once (None = number of CPUs)
    pub jobs: Option<usize>,
}

impl RunConfig {
    /// Unbounded searches from the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            search: SearchConfig::default(),
            jobs: None,
        }
    }

    /// Replace the per-search settings.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Limit concurrent searches.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    fn permits(&self) -> usize {
        self.jobs.unwrap_or_else(num_cpus::get).max(1)
    }
}

/// Search one pair to completion on the current thread.
pub fn search_pair(
    pair: &SentencePair,
    config: SearchConfig,
    rng: &mut DeterministicRng,
) -> Result<SentenceReport, SearchError> {
    let seed = rng.seed();
    let transform = pair.transform();

    tracing::info!(
        prefix = %pair.prefix,
        connector = %pair.connector,
        seed,
        "search launched"
    );

    let mut search = FixedPointSearch::seeded(&transform, config, rng);
    let found = match search.run(rng) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(prefix = %pair.prefix, error = %e, "search stopped");
            return Err(e);
        }
    };

    let sentence = transform.render(&found.vector)?;
    tracing::info!(
        prefix = %pair.prefix,
        steps = found.stats.steps,
        restarts = found.stats.restarts,
        "fixed point found"
    );

    Ok(SentenceReport {
        pair: pair.clone(),
        sentence,
        vector: found.vector,
        stats: found.stats,
        seed,
    })
}

/// Result of one pair, tagged with its position in the input.
pub type PairOutcome = (usize, Result<SentenceReport, SearchError>);

/// Search every pair concurrently and wait for all of them.
///
/// `on_complete` is called as each search finishes, in completion order.
/// The returned outcomes are in input order.
pub async fn run_all<F>(
    pairs: Vec<SentencePair>,
    config: RunConfig,
    mut on_complete: F,
) -> Vec<Result<SentenceReport, SearchError>>
where
    F: FnMut(usize, &Result<SentenceReport, SearchError>),
{
    let permits = Arc::new(Semaphore::new(config.permits()));
    let mut master = DeterministicRng::new(config.seed);
    let mut tasks: JoinSet<PairOutcome> = JoinSet::new();
    let pairs_count = pairs.len();

    tracing::info!(
        pairs = pairs_count,
        seed = config.seed,
        jobs = config.permits(),
        "running searches"
    );

    for (index, pair) in pairs.into_iter().enumerate() {
        let mut rng = master.fork();
        let permits = Arc::clone(&permits);
        let search_config = config.search;

        tasks.spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => return (index, Err(SearchError::Join(e.to_string()))),
            };
            let handle =
                tokio::task::spawn_blocking(move || search_pair(&pair, search_config, &mut rng));
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(SearchError::Join(e.to_string())),
            };
            (index, outcome)
        });
    }

    let mut outcomes: Vec<Option<Result<SentenceReport, SearchError>>> =
        (0..pairs_count).map(|_| None).collect();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => {
                on_complete(index, &outcome);
                outcomes[index] = Some(outcome);
            }
            Err(e) => tracing::error!(error = %e, "search task lost"),
        }
    }

    outcomes
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|| Err(SearchError::Join("task did not report".to_string()))))
        .collect()
}
