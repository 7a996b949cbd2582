//! Multi-format date parsing with round-trip verification.

use std::{borrow::Cow, fmt, sync::LazyLock};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::{DateParseError, pattern::DatePattern};

/// Fallback patterns, tried in order after any preferred format.
pub const BUILT_IN_FORMATS: [&str; 8] = [
    "yyyy-MM-dd hh:mm a",
    "yyyy-MM-dd hh:mm",
    "yyyy-MM-dd",
    "MM/dd/yyyy hh:mm",
    "MM/dd/yyyy",
    "M/d/yyyy hh:mm:ss a",
    "M/d/yyyy hh:mm",
    "M/d/yyyy",
];

static BUILT_IN_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    BUILT_IN_FORMATS
        .iter()
        .filter_map(|format| {
            DatePattern::compile(format)
                .inspect_err(|e| log::error!("Invalid built-in date pattern: {e}"))
                .ok()
        })
        .collect()
});

/// A successfully parsed and round-tripped date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    value: NaiveDateTime,
    pattern: DatePattern,
}

impl ParsedDate {
    /// The parsed timestamp, in UTC.
    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.value
    }

    /// The parsed timestamp as a UTC [`DateTime`].
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.value.and_utc()
    }

    /// The calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.value.date()
    }

    /// The time of day, or `None` when the matching pattern has no time fields.
    #[must_use]
    pub fn time(&self) -> Option<NaiveTime> {
        self.pattern.has_time().then(|| self.value.time())
    }

    /// The pattern that parsed and reproduced the input.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Renders the date with the pattern that produced it, which reproduces the original input.
impl fmt::Display for ParsedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern.render(&self.value))
    }
}

impl From<ParsedDate> for NaiveDateTime {
    fn from(value: ParsedDate) -> Self {
        value.value
    }
}

/// Parses free-form date strings against an ordered list of candidate patterns.
///
/// A candidate wins only if it parses the input and the parsed value renders back to
/// the identical string. The first winning candidate is returned; later candidates are
/// never tried, so list order decides between ambiguous patterns.
#[derive(Debug, Clone)]
pub struct DateParser {
    fallbacks: Cow<'static, [DatePattern]>,
}

impl Default for DateParser {
    /// A parser using [`BUILT_IN_FORMATS`] as fallbacks.
    fn default() -> Self {
        Self {
            fallbacks: Cow::Borrowed(BUILT_IN_PATTERNS.as_slice()),
        }
    }
}

impl DateParser {
    /// Creates a parser that tries `formats`, in order, instead of the built-in list.
    ///
    /// # Errors
    ///
    /// * `DateParseError::InvalidPattern` - If any of the formats fails to compile.
    pub fn new<S: AsRef<str>>(
        formats: impl IntoIterator<Item = S>,
    ) -> Result<Self, DateParseError> {
        let fallbacks = formats
            .into_iter()
            .map(|format| DatePattern::compile(format.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fallbacks: Cow::Owned(fallbacks),
        })
    }

    /// The fallback patterns, in the order they are tried.
    #[must_use]
    pub fn formats(&self) -> Vec<&str> {
        self.fallbacks.iter().map(DatePattern::as_str).collect()
    }

    /// Parses `input`, trying `preferred_format` before the fallbacks.
    ///
    /// A blank `preferred_format` is ignored. Returns `None` when no candidate
    /// round-trips; an invalid `preferred_format` is skipped rather than reported.
    #[must_use]
    pub fn parse(&self, input: &str, preferred_format: Option<&str>) -> Option<ParsedDate> {
        self.try_parse(input, preferred_format)
            .inspect_err(|e| log::debug!("parse: {e}"))
            .ok()
    }

    /// Same as [`Self::parse`], but reports the miss as an error.
    ///
    /// # Errors
    ///
    /// * `DateParseError::NoMatch` - If no candidate pattern parsed and reproduced `input`.
    pub fn try_parse(
        &self,
        input: &str,
        preferred_format: Option<&str>,
    ) -> Result<ParsedDate, DateParseError> {
        let preferred = preferred_format
            .filter(|format| !format.trim().is_empty())
            .and_then(|format| {
                DatePattern::compile(format)
                    .inspect_err(|e| log::debug!("Skipping preferred format: {e}"))
                    .ok()
            });

        preferred
            .iter()
            .chain(self.fallbacks.iter())
            .find_map(|pattern| match pattern.parse_exact(input) {
                Ok(value) => {
                    log::debug!("try_parse: {input:?} matched pattern {:?}", pattern.as_str());
                    Some(ParsedDate {
                        value,
                        pattern: pattern.clone(),
                    })
                }
                Err(e) => {
                    log::trace!("try_parse: {e}");
                    None
                }
            })
            .ok_or_else(|| DateParseError::NoMatch(input.to_string()))
    }
}

/// Parses `input` with the built-in fallback list, trying `preferred_format` first.
///
/// See [`DateParser::parse`].
#[must_use]
pub fn parse_date(input: &str, preferred_format: Option<&str>) -> Option<ParsedDate> {
    DateParser::default().parse(input, preferred_format)
}
