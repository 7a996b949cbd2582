//! Case conversions for titles, sentences and surnames.

/// Words left lowercase by [`title_case`] unless they start the title.
pub const SMALL_WORDS: [&str; 4] = ["a", "an", "and", "the"];

/// Uppercases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lowercases `value` and capitalizes every word except [`SMALL_WORDS`].
///
/// Words are separated by single spaces in the output; runs of spaces collapse.
/// The first word is always capitalized.
#[must_use]
pub fn title_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && SMALL_WORDS.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases `value` and capitalizes only the first word.
#[must_use]
pub fn sentence_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| if i == 0 { capitalize(word) } else { word.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixes the capitalization of `Mc` and `O'` surnames.
///
/// `mcdonald` becomes `McDonald` and `o'brien` becomes `O'Brien`. The rest is title
/// cased, keeping any whitespace right after the prefix, so `mc donald` becomes
/// `Mc Donald`. Anything else, including values of two characters or fewer, is
/// returned unchanged.
#[must_use]
pub fn name_case(value: &str) -> String {
    let mut chars = value.chars();
    let (Some(first), Some(second), Some(_)) = (chars.next(), chars.next(), chars.clone().next())
    else {
        return value.to_string();
    };

    let prefix = match (first.to_ascii_lowercase(), second.to_ascii_lowercase()) {
        ('m', 'c') => "Mc",
        ('o', '\'') => "O'",
        _ => return value.to_string(),
    };

    let rest = chars.as_str();
    let words = rest.trim_start();
    let gap = &rest[..rest.len() - words.len()];

    format!("{prefix}{gap}{}", title_case(words))
}

/// Whether every character other than a space is an uppercase letter.
#[must_use]
pub fn is_all_caps(value: &str) -> bool {
    value.chars().filter(|c| *c != ' ').all(char::is_uppercase)
}
