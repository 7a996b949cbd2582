//! Substring and pattern matching.

use regex::{Regex, RegexBuilder};

/// Trimmed values treated as "no value" by [`is_not_empty`].
pub const EMPTY_SENTINELS: [&str; 4] = ["", "nil", "<null>", "-1"];

/// How letter case is treated when comparing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Case {
    /// Compare letters regardless of case.
    #[default]
    Insensitive,
    /// Compare letters exactly.
    Sensitive,
}

/// Whether `value` contains `needle`. An empty `needle` is never found.
#[must_use]
pub fn includes(value: &str, needle: &str, case: Case) -> bool {
    if needle.is_empty() {
        return false;
    }

    match case {
        Case::Sensitive => value.contains(needle),
        Case::Insensitive => value.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Whether `value`, once trimmed, holds something other than an [`EMPTY_SENTINELS`] entry.
#[must_use]
pub fn is_not_empty(value: &str) -> bool {
    !EMPTY_SENTINELS.contains(&value.trim())
}

/// Removes every case-insensitive occurrence of `word`, then trims the result.
#[must_use]
pub fn remove_word(value: &str, word: &str) -> String {
    if word.is_empty() {
        return value.trim().to_string();
    }

    match RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex.replace_all(value, "").trim().to_string(),
        Err(e) => {
            log::debug!("remove_word: unable to build matcher for {word:?}: {e}");
            value.to_string()
        }
    }
}

/// Whether the whole of `value` matches `pattern`. An invalid `pattern` never matches.
#[must_use]
pub fn passes_regex(value: &str, pattern: &str) -> bool {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(regex) => regex.is_match(value),
        Err(e) => {
            log::debug!("passes_regex: invalid pattern {pattern:?}: {e}");
            false
        }
    }
}
