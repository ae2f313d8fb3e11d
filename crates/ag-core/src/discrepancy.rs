//! Letter-by-letter differences between two count vectors.
//!
//! Attached to a failing property so the report shows which letters were
//! miscounted instead of two opaque vectors.

use crate::vector::LetterVector;

/// One letter whose stated count differs from its actual count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMismatch {
    /// The letter
    pub letter: char,
    /// Count the sentence claims
    pub stated: u32,
    /// Count actually present
    pub actual: u32,
}

/// Every mismatching letter between a stated and an actual vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discrepancy {
    /// Mismatches in alphabet order
    pub mismatches: Vec<LetterMismatch>,
}

impl Discrepancy {
    /// Compare two vectors. Returns `None` when they are equal.
    #[must_use]
    pub fn between(stated: &LetterVector, actual: &LetterVector) -> Option<Self> {
        let mismatches: Vec<LetterMismatch> = stated
            .iter()
            .zip(actual.iter())
            .filter(|((_, s), (_, a))| s != a)
            .map(|((letter, stated), (_, actual))| LetterMismatch {
                letter,
                stated,
                actual,
            })
            .collect();

        if mismatches.is_empty() {
            None
        } else {
            Some(Self { mismatches })
        }
    }

    /// Number of mismatching letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    /// True if no letters mismatch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Render as a small table, one mismatching letter per row.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = String::from("letter  stated  actual\n");
        for m in &self.mismatches {
            out.push_str(&format!("{:>6}  {:>6}  {:>6}\n", m.letter, m.stated, m.actual));
        }
        out
    }
}
