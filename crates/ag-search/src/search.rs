//! Fixed-point search with cycle detection and random restarts.
//!
//! The count function `F` maps a finite set of vectors into itself, so
//! iterating it from any seed either reaches a fixed point or enters a
//! cycle. The search remembers every vector it has produced during the
//! current attempt; seeing one again means the orbit cycles without a
//! fixed point, and the search reseeds from a fresh random vector.
//!
//! ```text
//!   Seeded --evaluate--> Searching --F(v) == v--> Found
//!                         |    ^
//!                         +----+  step / restart on cycle
//! ```

use std::collections::HashSet;

use ag_core::LetterVector;
use rand::Rng;
use serde::Serialize;

use crate::error::SearchError;
use crate::transform::SentenceTransform;

pub use ag_core::RANDOM_COUNT_BOUND;

/// Configuration for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Exclusive upper bound for randomized seed counts
    pub random_bound: u32,
    /// Give up when a cycle would need restart number `max_restarts + 1`
    /// (None = never). Zero still runs the first attempt to its first cycle.
    pub max_restarts: Option<u64>,
    /// Give up after this many steps (None = never)
    pub max_steps: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            random_bound: RANDOM_COUNT_BOUND,
            max_restarts: None,
            max_steps: None,
        }
    }
}

impl SearchConfig {
    /// Run until a fixed point is found, however long that takes.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Give up after `steps` steps.
    pub fn bounded(steps: u64) -> Self {
        Self {
            max_steps: Some(steps),
            ..Default::default()
        }
    }

    /// Also give up after `restarts` restarts.
    #[must_use]
    pub fn with_max_restarts(mut self, restarts: u64) -> Self {
        self.max_restarts = Some(restarts);
        self
    }

    /// True if neither bound is set.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max_restarts.is_none() && self.max_steps.is_none()
    }
}

/// Where a search is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchState {
    /// Candidate chosen, not yet evaluated
    Seeded,
    /// Iterating the count function
    Searching,
    /// The candidate is a fixed point (terminal)
    Found,
}

/// Counters for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Evaluations of the count function, across all attempts
    pub steps: u64,
    /// Times the search reseeded after detecting a cycle
    pub restarts: u64,
    /// Steps taken since the last (re)seed
    pub attempt_steps: u64,
    /// Largest seen-set size in any attempt
    pub seen_max: u64,
}

/// A vector that the count function maps to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
    /// The fixed point
    pub vector: LetterVector,
    /// Counters at the moment it was found
    pub stats: SearchStats,
}

/// Iterated-function search for a fixed point of one transform.
///
/// Owns its two working vectors and its seen-set; nothing is shared with
/// other searches except the read-only transform.
pub struct FixedPointSearch<'t> {
    transform: &'t SentenceTransform,
    config: SearchConfig,
    state: SearchState,
    /// Double buffer: `buffers[candidate]` is `v`, the other slot is `F(v)`.
    buffers: [LetterVector; 2],
    candidate: usize,
    seen: HashSet<LetterVector>,
    stats: SearchStats,
}

impl<'t> FixedPointSearch<'t> {
    /// Start a search from a random candidate.
    pub fn seeded<R: Rng + ?Sized>(
        transform: &'t SentenceTransform,
        config: SearchConfig,
        rng: &mut R,
    ) -> Self {
        let candidate = LetterVector::random(rng, config.random_bound);
        Self::from_candidate(transform, config, candidate)
    }

    /// Start a search from a chosen candidate.
    ///
    /// Restarts still draw from the generator passed to `step`/`run`.
    pub fn from_candidate(
        transform: &'t SentenceTransform,
        config: SearchConfig,
        candidate: LetterVector,
    ) -> Self {
        debug_assert!(config.random_bound > 0, "Random bound must be positive");

        Self {
            transform,
            config,
            state: SearchState::Seeded,
            buffers: [candidate, LetterVector::ZERO],
            candidate: 0,
            seen: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Counters so far.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The vector currently under test.
    #[must_use]
    pub fn candidate(&self) -> &LetterVector {
        &self.buffers[self.candidate]
    }

    /// `F` of the candidate. Only meaningful once evaluated.
    #[must_use]
    pub fn actual(&self) -> &LetterVector {
        &self.buffers[1 - self.candidate]
    }

    /// Split the double buffer into (candidate, actual).
    fn split(&mut self) -> (&LetterVector, &mut LetterVector) {
        let [first, second] = &mut self.buffers;
        if self.candidate == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    /// Compute `actual = F(candidate)` and settle the state.
    fn evaluate(&mut self) -> Result<(), SearchError> {
        let transform = self.transform;
        let (candidate, actual) = self.split();
        transform.apply_into(candidate, actual)?;

        self.stats.steps += 1;
        self.stats.attempt_steps += 1;
        self.state = if self.candidate() == self.actual() {
            SearchState::Found
        } else {
            SearchState::Searching
        };
        Ok(())
    }

    /// Draw a new candidate and forget the current attempt.
    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SearchError> {
        self.stats.restarts += 1;
        self.stats.attempt_steps = 0;
        self.seen.clear();

        tracing::debug!(
            prefix = self.transform.prefix(),
            restarts = self.stats.restarts,
            steps = self.stats.steps,
            "cycle detected, reseeding"
        );

        self.buffers[self.candidate].randomize(rng, self.config.random_bound);
        self.evaluate()
    }

    /// Advance the search by one transition.
    ///
    /// Returns `Exhausted` instead of restarting once the restart budget is
    /// spent.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SearchState, SearchError> {
        match self.state {
            SearchState::Seeded => self.evaluate()?,
            SearchState::Searching => {
                let actual = *self.actual();
                if self.seen.contains(&actual) {
                    self.check_restart_budget()?;
                    self.restart(rng)?;
                } else {
                    self.seen.insert(actual);
                    self.stats.seen_max = self.stats.seen_max.max(self.seen.len() as u64);
                    self.candidate = 1 - self.candidate;
                    self.evaluate()?;
                }
            }
            SearchState::Found => {}
        }
        Ok(self.state)
    }

    fn exhausted(&self) -> SearchError {
        SearchError::Exhausted {
            steps: self.stats.steps,
            restarts: self.stats.restarts,
        }
    }

    /// Checked only when a cycle asks for another attempt.
    fn check_restart_budget(&self) -> Result<(), SearchError> {
        match self.config.max_restarts {
            Some(max) if self.stats.restarts >= max => Err(self.exhausted()),
            _ => Ok(()),
        }
    }

    fn check_step_budget(&self) -> Result<(), SearchError> {
        match self.config.max_steps {
            Some(max) if self.stats.steps >= max => Err(self.exhausted()),
            _ => Ok(()),
        }
    }

    /// Step until a fixed point is found or a configured bound is hit.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<FixedPoint, SearchError> {
        while self.step(rng)? != SearchState::Found {
            self.check_step_budget()?;
        }

        debug_assert_eq!(self.candidate(), self.actual());
        Ok(FixedPoint {
            vector: *self.candidate(),
            stats: self.stats,
        })
    }
}
