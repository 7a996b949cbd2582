//! String convenience extensions for `strext`.
//!
//! [`StrExt`] adds read-only helpers to every `str`, and [`StringExt`] adds in-place
//! helpers to `String`. The free functions in the [`case`], [`index`], [`matching`] and
//! [`padding`] modules back the trait methods and can be used directly.
//!
//! ```rust
//! use strext_string_utils::StrExt as _;
//!
//! assert_eq!("the wind in the willows".title_case(), "The Wind in the Willows");
//! assert_eq!("file".pluralize(&["a.txt", "b.txt"]), "files");
//! assert_eq!("naïve".char_at(2).unwrap(), 'ï');
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::module_name_repetitions)]

use std::ops::RangeBounds;

pub mod case;
pub mod index;
pub mod matching;
pub mod padding;

pub use index::IndexError;
pub use matching::Case;

#[cfg(feature = "date")]
pub use strext_date_utils::{DateParser, ParsedDate};

/// Preferred format tried first by [`StrExt::date`].
pub const DEFAULT_PREFERRED_FORMAT: &str = "yyyy-MM-dd hh:mm:ss a";

/// Read-only convenience methods for string slices.
pub trait StrExt {
    /// Percent-encodes everything except ASCII alphanumerics and `.-_~`.
    #[must_use]
    fn percent_encode_rfc3986(&self) -> String;

    /// Parses a date, trying [`DEFAULT_PREFERRED_FORMAT`] before the built-in formats.
    #[cfg(feature = "date")]
    #[must_use]
    fn date(&self) -> Option<ParsedDate> {
        self.date_with_format(Some(DEFAULT_PREFERRED_FORMAT))
    }

    /// Parses a date, trying `format` (if not blank) before the built-in formats.
    ///
    /// See [`DateParser::parse`].
    #[cfg(feature = "date")]
    #[must_use]
    fn date_with_format(&self, format: Option<&str>) -> Option<ParsedDate>;

    /// Whether the value parses as a floating point number.
    #[must_use]
    fn is_number(&self) -> bool;

    /// Pads with spaces so `decimals` digits follow the decimal point.
    ///
    /// See [`padding::dpad`].
    #[must_use]
    fn dpad(&self, decimals: usize) -> String;

    /// Pads with `pad` so `decimals` digits follow the decimal point.
    ///
    /// See [`padding::dpad_with`].
    #[must_use]
    fn dpad_with(&self, decimals: usize, pad: &str) -> String;

    /// Number of characters.
    #[must_use]
    fn length(&self) -> usize;

    /// Case-insensitive equality.
    #[must_use]
    fn equals(&self, other: &str) -> bool;

    /// Whether the value is non-empty and made only of the digits `0`-`9`.
    #[must_use]
    fn all_digits(&self) -> bool;

    /// The value without leading and trailing whitespace and newlines.
    #[must_use]
    fn trimmed(&self) -> &str;

    /// The value without leading and trailing characters found in `chars`.
    #[must_use]
    fn trim_chars(&self, chars: &str) -> &str;

    /// See [`matching::is_not_empty`].
    #[must_use]
    fn is_not_empty(&self) -> bool;

    /// Removes every case-insensitive occurrence of `word` and trims the result.
    /// `None` returns the value unchanged.
    #[must_use]
    fn remove_word(&self, word: Option<&str>) -> String;

    /// Removes the word `date` in any case.
    #[must_use]
    fn remove_date_word(&self) -> String {
        self.remove_word(Some("DATE"))
    }

    /// Removes every `' '`.
    #[must_use]
    fn remove_spaces(&self) -> String;

    /// Case-insensitive substring test.
    #[must_use]
    fn includes(&self, needle: &str) -> bool {
        self.includes_with(needle, Case::Insensitive)
    }

    /// Substring test with explicit case handling.
    #[must_use]
    fn includes_with(&self, needle: &str, case: Case) -> bool;

    /// Appends `s` unless `list` has exactly one element.
    #[must_use]
    fn pluralize<T>(&self, list: &[T]) -> String {
        self.pluralize_with("s", list)
    }

    /// Appends `suffix` unless `list` has exactly one element.
    #[must_use]
    fn pluralize_with<T>(&self, suffix: &str, list: &[T]) -> String {
        self.pluralize_if(suffix, list.len() != 1)
    }

    /// Appends `suffix` when `plural` is true.
    #[must_use]
    fn pluralize_if(&self, suffix: &str, plural: bool) -> String;

    /// See [`case::is_all_caps`].
    #[must_use]
    fn is_all_caps(&self) -> bool;

    /// See [`case::name_case`].
    #[must_use]
    fn name_case(&self) -> String;

    /// See [`case::title_case`].
    #[must_use]
    fn title_case(&self) -> String;

    /// See [`case::sentence_case`].
    #[must_use]
    fn sentence_case(&self) -> String;

    /// Whether the whole value matches the regular expression `pattern`.
    #[must_use]
    fn passes_regex(&self, pattern: &str) -> bool;

    /// The character at character offset `index`.
    ///
    /// # Errors
    ///
    /// * `IndexError::OutOfBounds` - If `index` is past the last character.
    fn char_at(&self, index: usize) -> Result<char, IndexError>;

    /// The substring covering a range of character offsets.
    ///
    /// # Errors
    ///
    /// * `IndexError::OutOfBounds` - If the range extends past the end.
    /// * `IndexError::InvertedRange` - If the range starts after it ends.
    fn substring<R: RangeBounds<usize>>(&self, range: R) -> Result<&str, IndexError>;
}

impl StrExt for str {
    fn percent_encode_rfc3986(&self) -> String {
        urlencoding::encode(self).into_owned()
    }

    #[cfg(feature = "date")]
    fn date_with_format(&self, format: Option<&str>) -> Option<ParsedDate> {
        strext_date_utils::parse_date(self, format)
    }

    fn is_number(&self) -> bool {
        self.parse::<f64>().is_ok()
    }

    fn dpad(&self, decimals: usize) -> String {
        padding::dpad(self, decimals)
    }

    fn dpad_with(&self, decimals: usize, pad: &str) -> String {
        padding::dpad_with(self, decimals, pad)
    }

    fn length(&self) -> usize {
        self.chars().count()
    }

    fn equals(&self, other: &str) -> bool {
        self.to_lowercase() == other.to_lowercase()
    }

    fn all_digits(&self) -> bool {
        !self.is_empty() && self.bytes().all(|b| b.is_ascii_digit())
    }

    fn trimmed(&self) -> &str {
        self.trim()
    }

    fn trim_chars(&self, chars: &str) -> &str {
        self.trim_matches(|c| chars.contains(c))
    }

    fn is_not_empty(&self) -> bool {
        matching::is_not_empty(self)
    }

    fn remove_word(&self, word: Option<&str>) -> String {
        word.map_or_else(
            || self.to_string(),
            |word| matching::remove_word(self, word),
        )
    }

    fn remove_spaces(&self) -> String {
        self.replace(' ', "")
    }

    fn includes_with(&self, needle: &str, case: Case) -> bool {
        matching::includes(self, needle, case)
    }

    fn pluralize_if(&self, suffix: &str, plural: bool) -> String {
        if plural {
            format!("{self}{suffix}")
        } else {
            self.to_string()
        }
    }

    fn is_all_caps(&self) -> bool {
        case::is_all_caps(self)
    }

    fn name_case(&self) -> String {
        case::name_case(self)
    }

    fn title_case(&self) -> String {
        case::title_case(self)
    }

    fn sentence_case(&self) -> String {
        case::sentence_case(self)
    }

    fn passes_regex(&self, pattern: &str) -> bool {
        matching::passes_regex(self, pattern)
    }

    fn char_at(&self, index: usize) -> Result<char, IndexError> {
        index::char_at(self, index)
    }

    fn substring<R: RangeBounds<usize>>(&self, range: R) -> Result<&str, IndexError> {
        index::substring(self, range)
    }
}

/// In-place convenience methods for owned strings.
pub trait StringExt {
    /// Removes every `' '` in place.
    fn without_spaces(&mut self);

    /// Replaces every occurrence of `this` with `that` in place. An empty `this` is a no-op.
    fn replacing(&mut self, this: &str, that: &str);
}

impl StringExt for String {
    fn without_spaces(&mut self) {
        self.retain(|c| c != ' ');
    }

    fn replacing(&mut self, this: &str, that: &str) {
        if !this.is_empty() && self.contains(this) {
            *self = self.replace(this, that);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_log::test]
    fn test_percent_encode_rfc3986() {
        assert_eq!("abc-XYZ_0.9~".percent_encode_rfc3986(), "abc-XYZ_0.9~");
        assert_eq!("a b&c=d/e".percent_encode_rfc3986(), "a%20b%26c%3Dd%2Fe");
        assert_eq!("é".percent_encode_rfc3986(), "%C3%A9");
    }

    #[test_case("42", true ; "integer")]
    #[test_case("-3.5e2", true ; "exponent")]
    #[test_case("", false ; "empty")]
    #[test_case(" 1", false ; "leading_space")]
    #[test_case("12a", false ; "trailing_letter")]
    fn test_is_number(value: &str, expected: bool) {
        assert_eq!(value.is_number(), expected);
    }

    #[test_case("0123456789", true ; "digits")]
    #[test_case("", false ; "empty")]
    #[test_case("12.5", false ; "decimal")]
    #[test_case("١٢", false ; "non_ascii_digits")]
    fn test_all_digits(value: &str, expected: bool) {
        assert_eq!(value.all_digits(), expected);
    }

    #[test_log::test]
    fn test_length_counts_characters() {
        assert_eq!("héllo".length(), 5);
        assert_eq!("".length(), 0);
    }

    #[test_log::test]
    fn test_equals_ignores_case() {
        assert!("Hello".equals("hELLO"));
        assert!(!"Hello".equals("Hell"));
    }

    #[test_log::test]
    fn test_trimming() {
        assert_eq!(" \n value \t".trimmed(), "value");
        assert_eq!("--==value==--".trim_chars("-="), "value");
        assert_eq!("value".trim_chars(""), "value");
    }

    #[test_log::test]
    fn test_remove_word() {
        assert_eq!("Birth Date".remove_date_word(), "Birth");
        assert_eq!("  Birth Date ".remove_word(None), "  Birth Date ");
        assert_eq!("x marks the X spot".remove_word(Some("x")), "marks the  spot");
    }

    #[test_log::test]
    fn test_remove_spaces() {
        assert_eq!(" a b  c ".remove_spaces(), "abc");
    }

    #[test_log::test]
    fn test_includes_defaults_to_case_insensitive() {
        assert!("Hello World".includes("WORLD"));
        assert!(!"Hello World".includes_with("WORLD", Case::Sensitive));
    }

    #[test_log::test]
    fn test_pluralize() {
        assert_eq!("item".pluralize::<u8>(&[]), "items");
        assert_eq!("item".pluralize(&[1]), "item");
        assert_eq!("item".pluralize(&[1, 2]), "items");
        assert_eq!("box".pluralize_with("es", &["a", "b"]), "boxes");
        assert_eq!("box".pluralize_if("es", false), "box");
    }

    #[test_log::test]
    fn test_case_conversions() {
        assert!("SHOUT IT".is_all_caps());
        assert_eq!("o'neil".name_case(), "O'Neil");
        assert_eq!("THE END OF AN ERA".title_case(), "The End Of an Era");
        assert_eq!("THE END OF AN ERA".sentence_case(), "The end of an era");
    }

    #[test_log::test]
    fn test_passes_regex() {
        assert!("2023-05-16".passes_regex(r"\d{4}-\d{2}-\d{2}"));
        assert!(!"2023-05-16!".passes_regex(r"\d{4}-\d{2}-\d{2}"));
    }

    #[test_log::test]
    fn test_indexing() {
        assert_eq!("naïve".char_at(2), Ok('ï'));
        assert_eq!("naïve".substring(2..=3), Ok("ïv"));
        assert_eq!("naïve".substring(..2), Ok("na"));
        assert!("naïve".substring(3..9).is_err());
    }

    #[cfg(feature = "date")]
    #[test_log::test]
    fn test_date_default_and_explicit_format() {
        let parsed = "2023-05-16 02:30:15 PM".date().unwrap();
        assert_eq!(parsed.pattern(), DEFAULT_PREFERRED_FORMAT);

        let parsed = "2023-05-16".date().unwrap();
        assert_eq!(parsed.pattern(), "yyyy-MM-dd");

        let parsed = "16/05/2023".date_with_format(Some("dd/MM/yyyy")).unwrap();
        assert_eq!(parsed.pattern(), "dd/MM/yyyy");

        assert_eq!("not a date".date_with_format(None), None);
    }

    #[test_log::test]
    fn test_without_spaces() {
        let mut value = String::from(" a b c ");
        value.without_spaces();
        assert_eq!(value, "abc");
    }

    #[test_log::test]
    fn test_replacing() {
        let mut value = String::from("one two one");
        value.replacing("one", "1");
        assert_eq!(value, "1 two 1");

        value.replacing("", "x");
        assert_eq!(value, "1 two 1");
    }
}
