//! # ag-core
//!
//! Core types for the self-descriptive sentence (autogram) search.
//!
//! An autogram is a sentence such as
//!
//! ```text
//! this sentence has three a's, one b, ... and two z's.
//! ```
//!
//! whose letter tallies equal the counts it states. The search works on
//! [`LetterVector`]s, one count per lowercase letter, and never renders
//! text in its inner loop. This crate provides:
//!
//! | Module | Contents |
//! |--------|----------|
//! | `vector` | `LetterVector`, the 26-letter count vector |
//! | `oracle` | English number names 0-99 and letter counting |
//! | `property` | Property results and the `PropertyChecker` trait |
//! | `invariants` | Properties every reported sentence must satisfy |
//!
//! ## Usage
//!
//! ```rust
//! use ag_core::{oracle, LetterVector};
//!
//! let seven = oracle::number_vector(7).unwrap();
//! assert_eq!(*seven, oracle::string_vector("seven"));
//! assert_eq!(seven.total(), 5);
//!
//! let sum = LetterVector::ONES + *seven;
//! assert_eq!(sum.get(4), 3); // 'e'
//! ```

pub mod discrepancy;
pub mod error;
pub mod invariants;
pub mod oracle;
pub mod property;
pub mod vector;

pub use discrepancy::{Discrepancy, LetterMismatch};
pub use error::OracleError;
pub use invariants::{SentenceProperties, SentencePropertyChecker};
pub use property::{PropertyChecker, PropertyResult, PropertySummary};
pub use vector::{LetterVector, ALPHABET, LETTERS_COUNT, RANDOM_COUNT_BOUND, S_INDEX};
