//! # ag-search
//!
//! Fixed-point search for self-descriptive sentences.
//!
//! | Module | Role |
//! |--------|------|
//! | `transform` | Count function `F` and renderer for a (prefix, connector) pair |
//! | `search` | Cycle-detecting iteration of `F` with random restarts |
//! | `orchestrate` | One search per pair, run concurrently, joined |
//! | `report` | Result of a finished search, with property checks |
//!
//! ## Usage
//!
//! ```rust
//! use ag_rng::DeterministicRng;
//! use ag_search::{FixedPointSearch, SearchConfig, SentenceTransform};
//!
//! let transform = SentenceTransform::new("this sentence has", "and");
//! let mut rng = DeterministicRng::new(12345);
//! let mut search = FixedPointSearch::seeded(&transform, SearchConfig::bounded(1_000), &mut rng);
//!
//! match search.run(&mut rng) {
//!     Ok(found) => assert_eq!(transform.apply(&found.vector).unwrap(), found.vector),
//!     Err(e) => assert!(e.is_exhausted()),
//! }
//! ```

pub mod error;
pub mod orchestrate;
pub mod report;
pub mod search;
pub mod transform;

pub use error::SearchError;
pub use orchestrate::{run_all, search_pair, RunConfig, SentencePair};
pub use report::SentenceReport;
pub use search::{FixedPoint, FixedPointSearch, SearchConfig, SearchState, SearchStats};
pub use transform::{plural_count, SentenceTransform};
