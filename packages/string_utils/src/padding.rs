//! Decimal-point padding for lining up numbers in fixed-width columns.

/// The most spaces [`dpad`] will ever append.
pub const MAX_DPAD: usize = 23;

fn decimal_point(value: &str) -> Option<usize> {
    value.chars().position(|c| c == '.')
}

/// Appends spaces so that `decimals` characters follow the decimal point.
///
/// A value without a decimal point is padded as if the point itself were missing
/// too, so `"3"` and `"3.25"` line up when padded to the same `decimals`.
#[must_use]
pub fn dpad(value: &str, decimals: usize) -> String {
    let wanted = decimals.saturating_add(1);
    let fill = decimal_point(value).map_or(wanted, |point| {
        wanted
            .saturating_add(point)
            .saturating_sub(value.chars().count())
    });

    format!("{value}{}", " ".repeat(fill.min(MAX_DPAD)))
}

/// Appends `pad` until `decimals` characters follow the decimal point, adding the
/// point first if `value` has none and `decimals > 0`.
#[must_use]
pub fn dpad_with(value: &str, decimals: usize, pad: &str) -> String {
    let mut padded = value.to_string();

    let fill = if let Some(point) = decimal_point(value) {
        decimals
            .saturating_add(1)
            .saturating_add(point)
            .saturating_sub(value.chars().count())
    } else {
        if decimals > 0 {
            padded.push('.');
        }
        decimals
    };

    padded.push_str(&pad.repeat(fill));
    padded
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("3", 2, "3   " ; "no_point")]
    #[test_case("3.1", 2, "3.1 " ; "one_decimal")]
    #[test_case("3.14", 2, "3.14" ; "exact")]
    #[test_case("3.14159", 2, "3.14159" ; "longer_than_requested")]
    #[test_case("3", 40, "3                       " ; "capped")]
    #[test_case("3", usize::MAX, "3                       " ; "max_decimals_no_point")]
    #[test_case("3.1", usize::MAX, "3.1                       " ; "max_decimals_with_point")]
    fn test_dpad(value: &str, decimals: usize, expected: &str) {
        assert_eq!(dpad(value, decimals), expected);
    }

    #[test_case("3", 2, "0", "3.00" ; "adds_point")]
    #[test_case("3", 0, "0", "3" ; "zero_decimals")]
    #[test_case("3.1", 3, "0", "3.100" ; "fills_existing")]
    #[test_case("3.14159", 2, "0", "3.14159" ; "longer_than_requested")]
    #[test_case("7.", 2, "-", "7.--" ; "trailing_point")]
    #[test_case("3.1", usize::MAX, "", "3.1" ; "max_decimals_empty_pad")]
    fn test_dpad_with(value: &str, decimals: usize, pad: &str, expected: &str) {
        assert_eq!(dpad_with(value, decimals, pad), expected);
    }
}
