//! Compiled field patterns.
//!
//! All patterns are anchored so they match the whole input. Letter and digit
//! classes are ASCII-only (`[a-zA-Z]`, `[0-9]`).

use std::sync::LazyLock;

use regex::Regex;

/// Exactly five digits.
pub const CONTRACT_ID_PATTERN: &str = r"^[0-9]{5}$";

/// One or two alphabetic words separated by a single space.
pub const TWO_WORDS_PATTERN: &str = r"^[a-zA-Z]+( [a-zA-Z]+)?$";

/// A single alphabetic word.
pub const SINGLE_WORD_PATTERN: &str = r"^[a-zA-Z]+$";

/// `DD-MM-YYYY` shape. Day and month ranges are not checked.
pub const DATE_PATTERN: &str = r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$";

/// Ten digits starting with `98` or `97`.
pub const CONTACT_PATTERN: &str = r"^(98|97)[0-9]{8}$";

pub static CONTRACT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONTRACT_ID_PATTERN).expect("valid regex"));

pub static TWO_WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TWO_WORDS_PATTERN).expect("valid regex"));

pub static SINGLE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SINGLE_WORD_PATTERN).expect("valid regex"));

pub static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("valid regex"));

pub static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONTACT_PATTERN).expect("valid regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for re in [
            &CONTRACT_ID_RE,
            &TWO_WORDS_RE,
            &SINGLE_WORD_RE,
            &DATE_RE,
            &CONTACT_RE,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn patterns_are_anchored() {
        assert!(!CONTRACT_ID_RE.is_match("123456"));
        assert!(!SINGLE_WORD_RE.is_match("abc def"));
        assert!(!DATE_RE.is_match("01-01-20245"));
        assert!(!CONTACT_RE.is_match("x9812345678"));
    }

    #[test]
    fn digit_classes_reject_non_ascii_digits() {
        // Arabic-Indic digits are Unicode `\d` but not ASCII.
        assert!(!CONTRACT_ID_RE.is_match("١٢٣٤٥"));
    }

    #[test]
    fn two_words_rejects_double_space() {
        assert!(TWO_WORDS_RE.is_match("John Doe"));
        assert!(!TWO_WORDS_RE.is_match("John  Doe"));
        assert!(!TWO_WORDS_RE.is_match(" John"));
        assert!(!TWO_WORDS_RE.is_match("John "));
    }
}
