//! The count function and the sentence renderer.
//!
//! For a fixed prefix and connector, a count vector `v` determines one
//! sentence:
//!
//! ```text
//! <prefix> <name(v[a])> a(s), ..., <name(v[y])> y(s), <connector> <name(v[z])> z(s).
//! ```
//!
//! [`SentenceTransform::apply`] computes the letter tally of that sentence
//! without building it. [`SentenceTransform::render`] builds the text. The
//! two must always agree; the search relies on it.

use ag_core::oracle;
use ag_core::{LetterVector, OracleError, ALPHABET, LETTERS_COUNT, S_INDEX};

/// Count function and renderer for one (prefix, connector) pair.
///
/// Immutable after construction and `Send + Sync`, so concurrent searches
/// can share one instance.
#[derive(Debug, Clone)]
pub struct SentenceTransform {
    prefix: String,
    connector: String,
    /// Every fixed letter in the sentence: one per named letter, plus the
    /// prefix and the connector.
    base: LetterVector,
}

impl SentenceTransform {
    /// Build the transform for a prefix and connector.
    pub fn new(prefix: impl Into<String>, connector: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let connector = connector.into();
        let base =
            LetterVector::ONES + oracle::string_vector(&prefix) + oracle::string_vector(&connector);

        Self {
            prefix,
            connector,
            base,
        }
    }

    /// Text the sentence opens with.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Word placed before the final 'z' clause.
    #[must_use]
    pub fn connector(&self) -> &str {
        &self.connector
    }

    /// Letters contributed by everything except the number words and
    /// plural suffixes.
    #[must_use]
    pub fn base(&self) -> &LetterVector {
        &self.base
    }

    /// Letter tally of the sentence that `v` renders to.
    pub fn apply(&self, v: &LetterVector) -> Result<LetterVector, OracleError> {
        let mut actual = LetterVector::ZERO;
        self.apply_into(v, &mut actual)?;
        Ok(actual)
    }

    /// Same as [`apply`](Self::apply), writing into an existing vector.
    ///
    /// `out` is unspecified if an error is returned.
    pub fn apply_into(&self, v: &LetterVector, out: &mut LetterVector) -> Result<(), OracleError> {
        out.assign(&self.base);
        for &count in v.counts() {
            *out += oracle::number_vector(count)?;
        }
        out.bump(S_INDEX, plural_count(v));
        Ok(())
    }

    /// Render the sentence that `v` describes.
    pub fn render(&self, v: &LetterVector) -> Result<String, OracleError> {
        let mut text = String::with_capacity(self.prefix.len() + 16 * LETTERS_COUNT);
        text.push_str(&self.prefix);
        text.push(' ');

        for (index, &letter) in ALPHABET.iter().enumerate().take(LETTERS_COUNT - 1) {
            let count = v.get(index);
            text.push_str(oracle::number_name(count)?);
            text.push(' ');
            text.push(char::from(letter));
            text.push_str(if count == 1 { ", " } else { "s, " });
        }

        let last = v.get(LETTERS_COUNT - 1);
        text.push_str(&self.connector);
        text.push(' ');
        text.push_str(oracle::number_name(last)?);
        text.push_str(if last == 1 { " z." } else { " zs." });

        Ok(text)
    }
}

/// Number of letters rendered in the plural, i.e. with a trailing 's'.
///
/// Every count except exactly one is plural: "zero as", "one b", "two cs".
#[must_use]
pub fn plural_count(v: &LetterVector) -> u32 {
    (LETTERS_COUNT - v.count(1)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::RANDOM_COUNT_BOUND;
    use ag_rng::DeterministicRng;

    fn transform() -> SentenceTransform {
        SentenceTransform::new("this sentence has", "and")
    }

    #[test]
    fn test_base_offset() {
        let t = transform();
        let expected = LetterVector::ONES
            + oracle::string_vector("this sentence has")
            + oracle::string_vector("and");
        assert_eq!(*t.base(), expected);
        assert_eq!(t.base().letter('s'), Some(4));
        assert_eq!(t.base().letter('n'), Some(4));
    }

    #[test]
    fn test_plural_rule_single_one() {
        let mut counts = [2; LETTERS_COUNT];
        counts[5] = 1;
        let v = LetterVector::from_counts(counts);
        assert_eq!(plural_count(&v), 25);

        assert_eq!(plural_count(&LetterVector::ONES), 0);
        assert_eq!(plural_count(&LetterVector::ZERO), 26);
    }

    #[test]
    fn test_apply_matches_recount_of_render() {
        let t = transform();
        let mut rng = DeterministicRng::new(2024);

        for _ in 0..200 {
            let v = LetterVector::random(&mut rng, RANDOM_COUNT_BOUND);
            let text = t.render(&v).unwrap();
            assert_eq!(t.apply(&v).unwrap(), oracle::string_vector(&text), "{}", text);
        }
    }

    #[test]
    fn test_apply_into_matches_apply() {
        let t = SentenceTransform::new("ray's sentence has", "and");
        let mut rng = DeterministicRng::new(5);
        let v = LetterVector::random(&mut rng, RANDOM_COUNT_BOUND);

        let mut out = LetterVector::ONES;
        t.apply_into(&v, &mut out).unwrap();
        assert_eq!(out, t.apply(&v).unwrap());
    }

    #[test]
    fn test_render_shape() {
        let mut counts = [3; LETTERS_COUNT];
        counts[1] = 1;
        counts[25] = 1;
        let v = LetterVector::from_counts(counts);

        let text = transform().render(&v).unwrap();
        assert!(text.starts_with("this sentence has three as, one b, three cs, "));
        assert!(text.ends_with("three ys, and one z."));

        counts[25] = 21;
        let text = transform().render(&LetterVector::from_counts(counts)).unwrap();
        assert!(text.ends_with("three ys, and twenty-one zs."));
    }

    #[test]
    fn test_out_of_range_count() {
        let mut counts = [2; LETTERS_COUNT];
        counts[4] = 100;
        let v = LetterVector::from_counts(counts);

        let err = transform().apply(&v).unwrap_err();
        assert_eq!(err, OracleError::OutOfRange { value: 100, max: 99 });
        assert!(transform().render(&v).is_err());
    }

    #[test]
    fn test_transform_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SentenceTransform>();
    }
}
