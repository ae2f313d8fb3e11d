//! Sentence invariants.
//!
//! | Property | Description |
//! |----------|-------------|
//! | FixedPoint | The count function maps the stated vector to itself |
//! | RecountMatches | Tallying the rendered text reproduces the stated vector |
//! | TemplateShape | Text starts with the prefix and ends with a full stop |
//!
//! `FixedPoint` and `RecountMatches` are checked separately on purpose: the
//! first trusts the count function, the second only trusts the text.

use crate::discrepancy::Discrepancy;
use crate::error::OracleError;
use crate::oracle;
use crate::property::{PropertyChecker, PropertyResult};
use crate::vector::LetterVector;

/// What a checked sentence must expose.
pub trait SentenceProperties {
    /// Fixed text the sentence opens with.
    fn prefix(&self) -> &str;

    /// The fully rendered sentence.
    fn sentence(&self) -> &str;

    /// Counts the sentence claims for itself.
    fn stated(&self) -> LetterVector;

    /// Counts the count function computes for the stated vector.
    fn evaluated(&self) -> Result<LetterVector, OracleError>;
}

/// Property checker for rendered sentences.
pub struct SentencePropertyChecker<'a, T: SentenceProperties> {
    sentence: &'a T,
}

impl<'a, T: SentenceProperties> SentencePropertyChecker<'a, T> {
    /// Create a new checker for the given sentence.
    #[must_use]
    pub fn new(sentence: &'a T) -> Self {
        Self { sentence }
    }

    fn check_fixed_point(&self) -> PropertyResult {
        const NAME: &str = "FixedPoint";

        let stated = self.sentence.stated();
        match self.sentence.evaluated() {
            Ok(evaluated) => match Discrepancy::between(&stated, &evaluated) {
                None => PropertyResult::pass(NAME),
                Some(d) => PropertyResult::fail(
                    NAME,
                    format!("count function disagrees on {} letter(s)", d.len()),
                    Some(d),
                ),
            },
            Err(e) => PropertyResult::fail(NAME, format!("count function failed: {}", e), None),
        }
    }

    fn check_recount(&self) -> PropertyResult {
        const NAME: &str = "RecountMatches";

        let stated = self.sentence.stated();
        let recounted = oracle::string_vector(self.sentence.sentence());
        match Discrepancy::between(&stated, &recounted) {
            None => PropertyResult::pass(NAME),
            Some(d) => PropertyResult::fail(
                NAME,
                format!("rendered text miscounts {} letter(s)", d.len()),
                Some(d),
            ),
        }
    }

    fn check_template(&self) -> PropertyResult {
        const NAME: &str = "TemplateShape";

        let text = self.sentence.sentence();
        let prefix = self.sentence.prefix();
        if !text.starts_with(prefix) || !text[prefix.len()..].starts_with(' ') {
            return PropertyResult::fail(
                NAME,
                format!("sentence does not open with {:?}", prefix),
                None,
            );
        }
        if !text.ends_with('.') {
            return PropertyResult::fail(NAME, "sentence does not end with '.'".to_string(), None);
        }
        PropertyResult::pass(NAME)
    }
}

impl<'a, T: SentenceProperties> PropertyChecker for SentencePropertyChecker<'a, T> {
    fn check_all(&self) -> Vec<PropertyResult> {
        vec![
            self.check_fixed_point(),
            self.check_recount(),
            self.check_template(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A hand-built sentence whose evaluation is supplied directly.
    struct Canned {
        prefix: &'static str,
        text: String,
        stated: LetterVector,
        evaluated: Result<LetterVector, OracleError>,
    }

    impl SentenceProperties for Canned {
        fn prefix(&self) -> &str {
            self.prefix
        }

        fn sentence(&self) -> &str {
            &self.text
        }

        fn stated(&self) -> LetterVector {
            self.stated
        }

        fn evaluated(&self) -> Result<LetterVector, OracleError> {
            self.evaluated
        }
    }

    fn canned(text: &str) -> Canned {
        let stated = oracle::string_vector(text);
        Canned {
            prefix: "we have",
            text: text.to_string(),
            stated,
            evaluated: Ok(stated),
        }
    }

    #[test]
    fn test_all_hold() {
        let sentence = canned("we have words.");
        let checker = SentencePropertyChecker::new(&sentence);
        assert!(checker.all_hold());
        assert_eq!(checker.summary().passed, 3);
    }

    #[test]
    fn test_recount_mismatch() {
        let mut sentence = canned("we have words.");
        sentence.stated.bump(0, 1);
        sentence.evaluated = Ok(sentence.stated);

        let checker = SentencePropertyChecker::new(&sentence);
        let failure = checker.verify_all().unwrap_err();
        assert_eq!(failure.name, "RecountMatches");
        let d = failure.discrepancy.unwrap();
        assert_eq!(d.mismatches[0].letter, 'a');
    }

    #[test]
    fn test_fixed_point_mismatch() {
        let mut sentence = canned("we have words.");
        let mut evaluated = sentence.stated;
        evaluated.bump(3, 2);
        sentence.evaluated = Ok(evaluated);

        let failure = SentencePropertyChecker::new(&sentence)
            .verify_all()
            .unwrap_err();
        assert_eq!(failure.name, "FixedPoint");
    }

    #[test]
    fn test_fixed_point_oracle_error() {
        let mut sentence = canned("we have words.");
        sentence.evaluated = Err(OracleError::OutOfRange {
            value: 120,
            max: 99,
        });

        let failure = SentencePropertyChecker::new(&sentence)
            .verify_all()
            .unwrap_err();
        assert!(failure.violation.unwrap().contains("120"));
    }

    #[test]
    fn test_template_shape() {
        let checker_input = canned("we havewords.");
        let results = SentencePropertyChecker::new(&checker_input).check_all();
        assert!(!results[2].holds);

        let no_stop = canned("we have words");
        let results = SentencePropertyChecker::new(&no_stop).check_all();
        assert!(!results[2].holds);
    }
}
