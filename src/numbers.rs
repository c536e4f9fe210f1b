// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Cardinal and ordinal numbers.

use std::sync::LazyLock;

use regex::Regex;

static CARDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{1,3}(?:,\d{3})+|\d+)\b").expect("valid cardinal pattern")
});
static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,3}(?:,\d{3})+|\d+)(?:st|nd|rd|th)\b").expect("valid ordinal pattern")
});

/// Appends an ordinal suffix to every whole number: "21" becomes "21st",
/// "1,002" becomes "1,002nd". Digits of a decimal are left alone.
///
/// # Examples
///
/// ```
/// use textwarp::numbers::cardinal_to_ordinal;
///
/// assert_eq!(cardinal_to_ordinal("the 11 and 21 and 112"), "the 11th and 21st and 112th");
/// ```
pub fn cardinal_to_ordinal(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for found in CARDINAL.find_iter(text) {
        if is_decimal_part(text, found.start(), found.end()) {
            continue;
        }
        result.push_str(&text[last..found.end()]);
        result.push_str(ordinal_suffix(found.as_str()));
        last = found.end();
    }
    result.push_str(&text[last..]);
    result
}

/// Strips the ordinal suffix from every ordinal number.
pub fn ordinal_to_cardinal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for caps in ORDINAL.captures_iter(text) {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if follows_decimal_point(text, whole.start()) {
            continue;
        }
        result.push_str(&text[last..whole.start()]);
        result.push_str(number.as_str());
        last = whole.end();
    }
    result.push_str(&text[last..]);
    result
}

fn ordinal_suffix(number: &str) -> &'static str {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    let ones = digits.last().copied().unwrap_or(0);
    let tens = digits.len().checked_sub(2).map_or(0, |i| digits[i]);
    let last_two = tens * 10 + ones;
    if (10..=20).contains(&last_two) {
        return "th";
    }
    match ones {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn follows_decimal_point(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    before.next() == Some('.') && before.next().is_some_and(|c| c.is_ascii_digit())
}

fn is_decimal_part(text: &str, start: usize, end: usize) -> bool {
    let mut after = text[end..].chars();
    follows_decimal_point(text, start)
        || (after.next() == Some('.') && after.next().is_some_and(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_to_ordinal_suffixes() {
        assert_eq!(cardinal_to_ordinal("1 2 3 4"), "1st 2nd 3rd 4th");
        assert_eq!(cardinal_to_ordinal("101 102 103"), "101st 102nd 103rd");
    }

    #[test]
    fn test_cardinal_to_ordinal_teens() {
        assert_eq!(cardinal_to_ordinal("11"), "11th");
        assert_eq!(cardinal_to_ordinal("12 13 20"), "12th 13th 20th");
        assert_eq!(cardinal_to_ordinal("112"), "112th");
        assert_eq!(cardinal_to_ordinal("21"), "21st");
    }

    #[test]
    fn test_cardinal_to_ordinal_thousands_separators() {
        assert_eq!(cardinal_to_ordinal("the 1,001 nights"), "the 1,001st nights");
    }

    #[test]
    fn test_cardinal_to_ordinal_skips_decimals() {
        assert_eq!(cardinal_to_ordinal("pi is 3.14"), "pi is 3.14");
    }

    #[test]
    fn test_cardinal_to_ordinal_skips_ordinals() {
        assert_eq!(cardinal_to_ordinal("the 2nd time"), "the 2nd time");
    }

    #[test]
    fn test_ordinal_to_cardinal() {
        assert_eq!(ordinal_to_cardinal("the 1st, 22nd and 1,000th"), "the 1, 22 and 1,000");
    }

    #[test]
    fn test_ordinal_round_trip() {
        assert_eq!(ordinal_to_cardinal(&cardinal_to_ordinal("21")), "21");
    }
}
