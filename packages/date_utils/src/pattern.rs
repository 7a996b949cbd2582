//! Compiled date patterns.
//!
//! Patterns use the Unicode date-field vocabulary (`yyyy-MM-dd hh:mm a`) with the fixed
//! `en_US_POSIX` names and markers. A [`DatePattern`] can leniently parse a string into a
//! [`NaiveDateTime`] and render a [`NaiveDateTime`] back into a string.
//!
//! Supported field letters:
//!
//! * `y` year (`yy` is a two-digit year)
//! * `M` month (`MMM` short name, `MMMM` long name)
//! * `d` day of month
//! * `H` hour 0-23, `h` hour 1-12
//! * `m` minute, `s` second
//! * `a` `AM`/`PM` marker
//! * `E` weekday name (`EEEE` long name)
//!
//! Text inside single quotes is literal, and `''` is a literal single quote.

use std::{fmt, str::FromStr};

use chrono::{
    Datelike as _, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike as _,
};

use crate::DateParseError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Upper bound on digits consumed by a numeric field that is followed by a literal.
const MAX_FIELD_DIGITS: usize = 9;

/// Two-digit years below this value land in the 2000s, the rest in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i64 = 70;

const DEFAULT_YEAR: i64 = 1970;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    TwoDigitYear,
    Month,
    MonthName { long: bool },
    Day,
    Hour24,
    Hour12,
    Minute,
    Second,
    AmPm,
    Weekday { long: bool },
}

impl Field {
    const fn from_letter(letter: char, width: usize) -> Option<Self> {
        Some(match letter {
            'y' if width == 2 => Self::TwoDigitYear,
            'y' => Self::Year,
            'M' if width >= 3 => Self::MonthName { long: width >= 4 },
            'M' => Self::Month,
            'd' => Self::Day,
            'H' => Self::Hour24,
            'h' => Self::Hour12,
            'm' => Self::Minute,
            's' => Self::Second,
            'a' => Self::AmPm,
            'E' => Self::Weekday { long: width >= 4 },
            _ => return None,
        })
    }

    const fn is_numeric(self) -> bool {
        !matches!(
            self,
            Self::MonthName { .. } | Self::AmPm | Self::Weekday { .. }
        )
    }

    const fn is_time(self) -> bool {
        matches!(
            self,
            Self::Hour24 | Self::Hour12 | Self::Minute | Self::Second | Self::AmPm
        )
    }

    fn render(self, value: &NaiveDateTime, width: usize) -> String {
        let number = |n: i64| format!("{n:0width$}");

        match self {
            Self::Year => number(i64::from(value.year())),
            Self::TwoDigitYear => format!("{:02}", i64::from(value.year()).rem_euclid(100)),
            Self::Month => number(i64::from(value.month())),
            Self::Day => number(i64::from(value.day())),
            Self::Hour24 => number(i64::from(value.hour())),
            Self::Hour12 => match value.hour() % 12 {
                0 => number(12),
                hour => number(i64::from(hour)),
            },
            Self::Minute => number(i64::from(value.minute())),
            Self::Second => number(i64::from(value.second())),
            Self::MonthName { long } => name(MONTH_NAMES[value.month0() as usize], long),
            Self::Weekday { long } => name(
                WEEKDAY_NAMES[value.weekday().num_days_from_monday() as usize],
                long,
            ),
            Self::AmPm => String::from(if value.hour() < 12 { "AM" } else { "PM" }),
        }
    }

    /// Consumes this field from the front of `input`, returning the remainder.
    fn parse<'a>(
        self,
        input: &'a str,
        width: usize,
        abutting: bool,
        fields: &mut ParsedFields,
    ) -> Option<&'a str> {
        match self {
            Self::MonthName { .. } => {
                let (index, rest) = take_name(input, &MONTH_NAMES)?;
                fields.month = Some(i64::try_from(index).ok()? + 1);
                Some(rest)
            }
            // The weekday is implied by the date fields and only needs to be consumed.
            Self::Weekday { .. } => take_name(input, &WEEKDAY_NAMES).map(|(_, rest)| rest),
            Self::AmPm => {
                if let Some(rest) = strip_prefix_ignore_case(input, "AM") {
                    fields.pm = false;
                    Some(rest)
                } else {
                    let rest = strip_prefix_ignore_case(input, "PM")?;
                    fields.pm = true;
                    Some(rest)
                }
            }
            Self::Year
            | Self::TwoDigitYear
            | Self::Month
            | Self::Day
            | Self::Hour24
            | Self::Hour12
            | Self::Minute
            | Self::Second => {
                let max = if abutting { width } else { MAX_FIELD_DIGITS };
                let (value, digits, rest) = take_digits(input, max)?;

                let (slot, value) = match self {
                    Self::TwoDigitYear if digits == 2 => {
                        let century = if value < TWO_DIGIT_YEAR_PIVOT { 2000 } else { 1900 };
                        (&mut fields.year, century + value)
                    }
                    Self::Month => (&mut fields.month, value),
                    Self::Day => (&mut fields.day, value),
                    Self::Hour24 => (&mut fields.hour24, value),
                    Self::Hour12 => (&mut fields.hour12, value),
                    Self::Minute => (&mut fields.minute, value),
                    Self::Second => (&mut fields.second, value),
                    _ => (&mut fields.year, value),
                };
                *slot = Some(value);

                Some(rest)
            }
        }
    }
}

fn name(full: &str, long: bool) -> String {
    if long { full } else { &full[..3] }.to_string()
}

fn take_digits(input: &str, max: usize) -> Option<(i64, usize, &str)> {
    let len = input
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();

    if len == 0 {
        return None;
    }

    let (digits, rest) = input.split_at(len);
    digits.parse().ok().map(|value| (value, len, rest))
}

/// Matches a long name first, then its three letter abbreviation.
fn take_name<'a>(input: &'a str, names: &[&str]) -> Option<(usize, &'a str)> {
    let find = |short: bool| {
        names.iter().enumerate().find_map(|(index, name)| {
            let name: &str = if short { &name[..3] } else { name };
            strip_prefix_ignore_case(input, name).map(|rest| (index, rest))
        })
    };

    find(false).or_else(|| find(true))
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &input[prefix.len()..])
}

#[derive(Debug, Default)]
struct ParsedFields {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    hour24: Option<i64>,
    hour12: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    pm: bool,
}

impl ParsedFields {
    /// Resolves the fields, letting out-of-range values overflow into the next unit.
    ///
    /// Starts at January 1 of the year, then adds months, days and seconds in that order.
    fn resolve(&self) -> Option<NaiveDateTime> {
        let year = i32::try_from(self.year.unwrap_or(DEFAULT_YEAR)).ok()?;
        let date = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let date = shift_months(date, self.month.unwrap_or(1) - 1)?;
        let date = shift_days(date, self.day.unwrap_or(1) - 1)?;

        let meridiem = if self.pm { 12 } else { 0 };
        let hour = match (self.hour24, self.hour12) {
            (Some(hour), _) => hour,
            (None, Some(12)) => meridiem,
            (None, Some(hour)) => hour + meridiem,
            (None, None) => meridiem,
        };

        let seconds = hour
            .checked_mul(3600)?
            .checked_add(self.minute.unwrap_or(0).checked_mul(60)?)?
            .checked_add(self.second.unwrap_or(0))?;

        date.and_time(NaiveTime::MIN)
            .checked_add_signed(TimeDelta::try_seconds(seconds)?)
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field { field: Field, width: usize },
}

/// A compiled date pattern such as `yyyy-MM-dd hh:mm a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// * `DateParseError::InvalidPattern` - If the pattern is empty, contains an unsupported
    ///   field letter, or has an unterminated quoted literal.
    pub fn compile(pattern: &str) -> Result<Self, DateParseError> {
        let invalid = |reason: String| DateParseError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern.is_empty() {
            return Err(invalid("pattern is empty".to_string()));
        }

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                    continue;
                }

                let mut closed = false;
                while let Some(quoted) = chars.next() {
                    if quoted != '\'' {
                        literal.push(quoted);
                    } else if chars.next_if_eq(&'\'').is_some() {
                        literal.push('\'');
                    } else {
                        closed = true;
                        break;
                    }
                }

                if !closed {
                    return Err(invalid("unterminated quoted literal".to_string()));
                }
            } else if c.is_ascii_alphabetic() {
                let mut width = 1;
                while chars.next_if_eq(&c).is_some() {
                    width += 1;
                }

                let field = Field::from_letter(c, width)
                    .ok_or_else(|| invalid(format!("unsupported field letter '{c}'")))?;

                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Field { field, width });
            } else {
                literal.push(c);
            }
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_string(),
            tokens,
        })
    }

    /// The pattern string this was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern carries any time-of-day field.
    #[must_use]
    pub fn has_time(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, Token::Field { field, .. } if field.is_time()))
    }

    /// Renders `value` using this pattern.
    #[must_use]
    pub fn render(&self, value: &NaiveDateTime) -> String {
        let mut rendered = String::new();

        for token in &self.tokens {
            match token {
                Token::Literal(text) => rendered.push_str(text),
                Token::Field { field, width } => rendered.push_str(&field.render(value, *width)),
            }
        }

        rendered
    }

    /// Parses `input` without range checks on individual fields.
    ///
    /// Out-of-range values overflow into the adjacent unit, so `02/30/2023` under
    /// `MM/dd/yyyy` resolves to 2023-03-02. Fields missing from the pattern default to
    /// 1970-01-01 00:00:00.
    ///
    /// # Errors
    ///
    /// * `DateParseError::Mismatch` - If `input` does not line up with the pattern, or has
    ///   trailing text.
    /// * `DateParseError::OutOfRange` - If the resolved value cannot be represented.
    pub fn parse_lenient(&self, input: &str) -> Result<NaiveDateTime, DateParseError> {
        let mismatch = |rest: &str| DateParseError::Mismatch {
            input: input.to_string(),
            pattern: self.source.clone(),
            position: input.len() - rest.len(),
        };

        let mut fields = ParsedFields::default();
        let mut rest = input;

        for (i, token) in self.tokens.iter().enumerate() {
            rest = match token {
                Token::Literal(text) => rest.strip_prefix(text.as_str()),
                Token::Field { field, width } => {
                    let abutting = matches!(
                        self.tokens.get(i + 1),
                        Some(Token::Field { field: next, .. }) if next.is_numeric()
                    );
                    field.parse(rest, *width, abutting, &mut fields)
                }
            }
            .ok_or_else(|| mismatch(rest))?;
        }

        if !rest.is_empty() {
            return Err(mismatch(rest));
        }

        log::trace!("parse_lenient: input={input:?} pattern={:?} fields={fields:?}", self.source);

        fields.resolve().ok_or_else(|| DateParseError::OutOfRange {
            input: input.to_string(),
        })
    }

    /// Parses `input` and accepts the value only when it renders back to `input` exactly.
    ///
    /// # Errors
    ///
    /// * Any error from [`Self::parse_lenient`]
    /// * `DateParseError::RoundTrip` - If the parsed value renders differently from `input`.
    pub fn parse_exact(&self, input: &str) -> Result<NaiveDateTime, DateParseError> {
        let value = self.parse_lenient(input)?;
        let rendered = self.render(&value);

        if rendered == input {
            Ok(value)
        } else {
            Err(DateParseError::RoundTrip {
                input: input.to_string(),
                pattern: self.source.clone(),
                rendered,
            })
        }
    }
}

impl FromStr for DatePattern {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test_log::test]
    fn test_compile_splits_literals_and_fields() {
        let pattern = DatePattern::compile("yyyy-MM-dd hh:mm a").unwrap();

        assert_eq!(
            pattern.tokens,
            vec![
                Token::Field {
                    field: Field::Year,
                    width: 4
                },
                Token::Literal("-".to_string()),
                Token::Field {
                    field: Field::Month,
                    width: 2
                },
                Token::Literal("-".to_string()),
                Token::Field {
                    field: Field::Day,
                    width: 2
                },
                Token::Literal(" ".to_string()),
                Token::Field {
                    field: Field::Hour12,
                    width: 2
                },
                Token::Literal(":".to_string()),
                Token::Field {
                    field: Field::Minute,
                    width: 2
                },
                Token::Literal(" ".to_string()),
                Token::Field {
                    field: Field::AmPm,
                    width: 1
                },
            ]
        );
    }

    #[test_log::test]
    fn test_compile_quoted_literals() {
        let pattern = DatePattern::compile("yyyy-MM-dd'T'HH:mm 'o''clock'").unwrap();
        let value = datetime(2024, 10, 31, 14, 30, 0);

        assert_eq!(pattern.render(&value), "2024-10-31T14:30 o'clock");
        assert_eq!(
            pattern.parse_exact("2024-10-31T14:30 o'clock").unwrap(),
            value
        );
    }

    #[test_log::test]
    fn test_compile_doubled_quote_outside_literal() {
        let pattern = DatePattern::compile("HH''mm").unwrap();
        assert_eq!(pattern.render(&datetime(2024, 1, 1, 9, 5, 0)), "09'05");
    }

    #[test_case("" ; "empty")]
    #[test_case("yyyy-QQ" ; "unsupported_letter")]
    #[test_case("yyyy 'unterminated" ; "unterminated_quote")]
    #[test_case("zzzz" ; "time_zone_letter")]
    fn test_compile_rejects_invalid_patterns(pattern: &str) {
        let err = DatePattern::compile(pattern).unwrap_err();
        assert!(
            matches!(err, DateParseError::InvalidPattern { .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test_log::test]
    fn test_has_time() {
        assert!(!DatePattern::compile("yyyy-MM-dd").unwrap().has_time());
        assert!(DatePattern::compile("yyyy-MM-dd hh:mm").unwrap().has_time());
        assert!(DatePattern::compile("M/d/yyyy a").unwrap().has_time());
        assert!(!DatePattern::compile("EEEE, MMMM d").unwrap().has_time());
    }

    #[test_case("yyyy-MM-dd", "2023-05-06" ; "padded_date")]
    #[test_case("M/d/yyyy", "5/6/2023" ; "unpadded_date")]
    #[test_case("yy.M.d", "23.5.6" ; "two_digit_year")]
    #[test_case("hh:mm:ss a", "02:07:09 PM" ; "twelve_hour")]
    #[test_case("H:mm", "14:07" ; "twenty_four_hour")]
    #[test_case("EEE, MMM d", "Sat, May 6" ; "short_names")]
    #[test_case("EEEE, MMMM d y", "Saturday, May 6 2023" ; "long_names")]
    fn test_render(pattern: &str, expected: &str) {
        let pattern = DatePattern::compile(pattern).unwrap();
        assert_eq!(pattern.render(&datetime(2023, 5, 6, 14, 7, 9)), expected);
    }

    #[test_log::test]
    fn test_render_twelve_hour_midnight_and_noon() {
        let pattern = DatePattern::compile("hh:mm a").unwrap();
        assert_eq!(pattern.render(&datetime(2023, 5, 6, 0, 15, 0)), "12:15 AM");
        assert_eq!(pattern.render(&datetime(2023, 5, 6, 12, 15, 0)), "12:15 PM");
    }

    #[test_log::test]
    fn test_parse_lenient_day_overflow_rolls_into_next_month() {
        let pattern = DatePattern::compile("MM/dd/yyyy").unwrap();
        assert_eq!(
            pattern.parse_lenient("02/30/2023").unwrap(),
            datetime(2023, 3, 2, 0, 0, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_month_overflow_rolls_into_next_year() {
        let pattern = DatePattern::compile("yyyy-MM-dd").unwrap();
        assert_eq!(
            pattern.parse_lenient("2023-13-01").unwrap(),
            datetime(2024, 1, 1, 0, 0, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_zero_fields_roll_backwards() {
        let pattern = DatePattern::compile("yyyy-MM-dd").unwrap();
        assert_eq!(
            pattern.parse_lenient("2023-00-00").unwrap(),
            datetime(2022, 11, 30, 0, 0, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_time_overflow_rolls_into_next_day() {
        let pattern = DatePattern::compile("yyyy-MM-dd HH:mm").unwrap();
        assert_eq!(
            pattern.parse_lenient("2023-05-16 25:90").unwrap(),
            datetime(2023, 5, 17, 2, 30, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_twelve_hour_clock() {
        let pattern = DatePattern::compile("hh:mm a").unwrap();
        assert_eq!(
            pattern.parse_lenient("12:05 AM").unwrap(),
            datetime(1970, 1, 1, 0, 5, 0)
        );
        assert_eq!(
            pattern.parse_lenient("12:05 pm").unwrap(),
            datetime(1970, 1, 1, 12, 5, 0)
        );
        assert_eq!(
            pattern.parse_lenient("2:30 PM").unwrap(),
            datetime(1970, 1, 1, 14, 30, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_without_marker_assumes_morning() {
        let pattern = DatePattern::compile("hh:mm").unwrap();
        assert_eq!(
            pattern.parse_lenient("12:30").unwrap(),
            datetime(1970, 1, 1, 0, 30, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_two_digit_year_pivot() {
        let pattern = DatePattern::compile("yy-MM-dd").unwrap();
        assert_eq!(
            pattern.parse_lenient("69-01-01").unwrap(),
            datetime(2069, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            pattern.parse_lenient("70-01-01").unwrap(),
            datetime(1970, 1, 1, 0, 0, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_abutting_fields_take_fixed_widths() {
        let pattern = DatePattern::compile("yyyyMMdd").unwrap();
        assert_eq!(
            pattern.parse_lenient("20230516").unwrap(),
            datetime(2023, 5, 16, 0, 0, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_month_names_ignore_case() {
        let pattern = DatePattern::compile("MMM d, yyyy").unwrap();
        assert_eq!(
            pattern.parse_lenient("may 16, 2023").unwrap(),
            datetime(2023, 5, 16, 0, 0, 0)
        );
        assert_eq!(
            pattern.parse_lenient("September 1, 2023").unwrap(),
            datetime(2023, 9, 1, 0, 0, 0)
        );
    }

    #[test_log::test]
    fn test_parse_lenient_reports_mismatch_position() {
        let pattern = DatePattern::compile("yyyy-MM-dd").unwrap();
        let err = pattern.parse_lenient("2023/05/16").unwrap_err();

        assert_eq!(
            err,
            DateParseError::Mismatch {
                input: "2023/05/16".to_string(),
                pattern: "yyyy-MM-dd".to_string(),
                position: 4,
            }
        );
    }

    #[test_log::test]
    fn test_parse_lenient_rejects_trailing_text() {
        let pattern = DatePattern::compile("M/d/yyyy hh:mm").unwrap();
        let err = pattern.parse_lenient("5/16/2023 2:30 PM").unwrap_err();

        assert!(
            matches!(err, DateParseError::Mismatch { position: 14, .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test_log::test]
    fn test_parse_lenient_out_of_range_year() {
        let pattern = DatePattern::compile("yyyy").unwrap();
        let err = pattern.parse_lenient("999999999").unwrap_err();

        assert_eq!(
            err,
            DateParseError::OutOfRange {
                input: "999999999".to_string()
            }
        );
    }

    #[test_log::test]
    fn test_parse_exact_rejects_rolled_values() {
        let pattern = DatePattern::compile("MM/dd/yyyy").unwrap();
        let err = pattern.parse_exact("02/30/2023").unwrap_err();

        assert_eq!(
            err,
            DateParseError::RoundTrip {
                input: "02/30/2023".to_string(),
                pattern: "MM/dd/yyyy".to_string(),
                rendered: "03/02/2023".to_string(),
            }
        );
    }

    #[test_log::test]
    fn test_parse_exact_rejects_unpadded_input_for_padded_field() {
        let pattern = DatePattern::compile("yyyy-MM-dd hh:mm").unwrap();
        assert!(pattern.parse_exact("2023-05-16 2:30").is_err());
        assert!(pattern.parse_exact("2023-05-16 02:30").is_ok());
    }

    #[test_log::test]
    fn test_from_str_and_display() {
        let pattern: DatePattern = "M/d/yyyy".parse().unwrap();
        assert_eq!(pattern.to_string(), "M/d/yyyy");
        assert_eq!(pattern.as_str(), "M/d/yyyy");
    }
}
