//! Letter counts for English number names and arbitrary text.
//!
//! The number-name table covers 0 through 99 and is built once, on first
//! use, then shared read-only between every search. Requests outside that
//! range fail with [`OracleError::OutOfRange`] instead of wrapping or
//! clamping.

use std::sync::OnceLock;

use crate::error::OracleError;
use crate::vector::LetterVector;

/// Largest count the number-name table spells.
pub const NUMBER_MAX: u32 = 99;

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

struct NumberTable {
    names: Vec<String>,
    vectors: Vec<LetterVector>,
}

impl NumberTable {
    fn build() -> Self {
        let names: Vec<String> = (0..=NUMBER_MAX).map(spell).collect();
        let vectors = names.iter().map(|name| string_vector(name)).collect();
        Self { names, vectors }
    }
}

fn table() -> &'static NumberTable {
    static TABLE: OnceLock<NumberTable> = OnceLock::new();
    TABLE.get_or_init(NumberTable::build)
}

fn spell(n: u32) -> String {
    let n = n as usize;
    if n < UNITS.len() {
        UNITS[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{}-{}", TENS[n / 10], UNITS[n % 10])
    }
}

fn check_range(n: u32) -> Result<usize, OracleError> {
    if n > NUMBER_MAX {
        return Err(OracleError::OutOfRange {
            value: n,
            max: NUMBER_MAX,
        });
    }
    Ok(n as usize)
}

/// English spelling of `n`, e.g. `"twenty-one"`.
pub fn number_name(n: u32) -> Result<&'static str, OracleError> {
    let index = check_range(n)?;
    Ok(&table().names[index])
}

/// Letter counts of the English spelling of `n`.
pub fn number_vector(n: u32) -> Result<&'static LetterVector, OracleError> {
    let index = check_range(n)?;
    Ok(&table().vectors[index])
}

/// Count the lowercase ASCII letters in `s`.
///
/// Everything else is ignored, including uppercase letters: no case folding
/// is performed.
#[must_use]
pub fn string_vector(s: &str) -> LetterVector {
    let mut result = LetterVector::ZERO;
    for byte in s.bytes() {
        if byte.is_ascii_lowercase() {
            result.bump((byte - b'a') as usize, 1);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven() {
        let seven = string_vector("seven");
        assert_eq!(seven.letter('s'), Some(1));
        assert_eq!(seven.letter('e'), Some(2));
        assert_eq!(seven.letter('v'), Some(1));
        assert_eq!(seven.letter('n'), Some(1));
        assert_eq!(seven.total(), 5);

        assert_eq!(*number_vector(7).unwrap(), seven);
    }

    #[test]
    fn test_ignores_non_lowercase() {
        // 'T' is uppercase and is not folded.
        let v = string_vector("Two, 3!");
        assert_eq!(v.letter('w'), Some(1));
        assert_eq!(v.letter('o'), Some(1));
        assert_eq!(v.letter('t'), Some(0));
        assert_eq!(v.total(), 2);

        assert_eq!(string_vector("é ß 42 -_"), LetterVector::ZERO);
    }

    #[test]
    fn test_number_names() {
        assert_eq!(number_name(0).unwrap(), "zero");
        assert_eq!(number_name(13).unwrap(), "thirteen");
        assert_eq!(number_name(20).unwrap(), "twenty");
        assert_eq!(number_name(21).unwrap(), "twenty-one");
        assert_eq!(number_name(40).unwrap(), "forty");
        assert_eq!(number_name(99).unwrap(), "ninety-nine");
    }

    #[test]
    fn test_hyphen_not_counted() {
        let v = number_vector(21).unwrap();
        assert_eq!(*v, string_vector("twentyone"));
        assert_eq!(v.total(), 9);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            number_vector(100),
            Err(OracleError::OutOfRange {
                value: 100,
                max: NUMBER_MAX
            })
        );
        assert!(number_name(u32::MAX).is_err());
    }

    #[test]
    fn test_table_consistent() {
        for n in 0..=NUMBER_MAX {
            let name = number_name(n).unwrap();
            assert_eq!(*number_vector(n).unwrap(), string_vector(name), "n = {}", n);
        }
    }
}
