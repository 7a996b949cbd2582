//! Date parsing utilities for `strext`.
//!
//! The centerpiece is [`DateParser`], which accepts a free-form date/time string and
//! tries an ordered list of candidate patterns. A candidate only wins when the value it
//! parses renders back to the exact input under the same pattern, so lenient parsing
//! can never silently "fix" an input into a different date.
//!
//! ```rust
//! use strext_date_utils::parse_date;
//!
//! let parsed = parse_date("2023-05-16", None).unwrap();
//! assert_eq!(parsed.pattern(), "yyyy-MM-dd");
//! assert!(parsed.time().is_none());
//!
//! assert!(parse_date("not a date", None).is_none());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

pub mod parser;
pub mod pattern;

pub use chrono;
pub use parser::{BUILT_IN_FORMATS, DateParser, ParsedDate, parse_date};
pub use pattern::DatePattern;

/// Errors that can occur while compiling a pattern or parsing a value with it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateParseError {
    /// The pattern string could not be compiled.
    #[error("Invalid date pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// What was wrong with it.
        reason: String,
    },
    /// The input did not line up with the pattern's literals and fields.
    #[error("Input {input:?} does not match pattern {pattern:?} at byte {position}")]
    Mismatch {
        /// The input being parsed.
        input: String,
        /// The pattern it was parsed against.
        pattern: String,
        /// Byte offset in `input` where matching stopped.
        position: usize,
    },
    /// The parsed fields resolve to a date chrono cannot represent.
    #[error("Input {input:?} resolves outside the supported date range")]
    OutOfRange {
        /// The input being parsed.
        input: String,
    },
    /// The input parsed, but the resulting value renders differently.
    #[error("Input {input:?} renders as {rendered:?} under pattern {pattern:?}")]
    RoundTrip {
        /// The input being parsed.
        input: String,
        /// The pattern it was parsed and rendered with.
        pattern: String,
        /// The rendering of the parsed value.
        rendered: String,
    },
    /// No candidate pattern both parsed and round-tripped the input.
    #[error("No candidate pattern round-trips {0:?}")]
    NoMatch(String),
}
