//! Error types for the letter count oracle.

use thiserror::Error;

/// Failure to spell or count a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The count has no entry in the number-name table.
    #[error("count {value} is outside the spelled range 0..={max}")]
    OutOfRange {
        /// Requested count
        value: u32,
        /// Largest count the table spells
        max: u32,
    },
}
