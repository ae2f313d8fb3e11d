//! Invariant traits for reported sentences.
//!
//! Each module defines the properties a search result must satisfy
//! before it is reported as a self-descriptive sentence.

pub mod sentence;

pub use sentence::{SentenceProperties, SentencePropertyChecker};
