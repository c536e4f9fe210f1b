// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! `PascalCase` and `camelCase`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::string::capitalize_word;
use crate::lexicon::is_word_char;
use crate::punctuation::remove_apostrophes;

static PASCAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][A-Z0-9]*[a-z][A-Za-z0-9]*\b").expect("valid pascal pattern")
});
static PASCAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9]*[a-z][A-Za-z0-9]*\b").expect("valid pascal pattern")
});
static CAMEL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*[A-Z][A-Za-z0-9]*\b").expect("valid camel pattern")
});

/// Characters that, before a space, mean the space separates phrases
/// rather than words.
const CLOSES_PHRASE: &[char] = &[
    '.', '!', '?', '\u{2014}', '\u{2013}', '-', ',', ':', ';', '"', '\u{201D}', '\u{201C}', '\'',
    '\u{2019}', '\u{2018}', ')', ']', '}',
];

/// Characters that, after a space, mean the space separates phrases.
const OPENS_PHRASE: &[char] = &[
    '\u{2014}', '\u{2013}', '-', '"', '\u{201C}', '\u{201D}', '\'', '\u{2018}', '(', '[', '{',
];

/// Converts text to Pascal case.
///
/// Single spaces between words, `_`, and `.` or `-` joining alphanumeric
/// runs are removed, then each word is capitalized with the word-level
/// capitalization rules. Words already in Pascal case are kept and camel
/// case words get their first letter raised. Spaces around punctuation
/// survive, so separate phrases stay separate.
///
/// # Examples
///
/// ```
/// use textwarp::casing::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello world"), "HelloWorld");
/// assert_eq!(to_pascal_case("snake_case_words"), "SnakeCaseWords");
/// ```
pub fn to_pascal_case(text: &str) -> String {
    let text = remove_apostrophes(text);
    split_for_pascal(&text)
        .into_iter()
        .map(word_to_pascal)
        .collect()
}

/// Converts text to camel case: Pascal case with each word's first letter
/// lowered.
pub fn to_camel_case(text: &str) -> String {
    let pascal = to_pascal_case(text);
    PASCAL_WORD
        .replace_all(&pascal, |caps: &Captures| lower_first(&caps[0]))
        .into_owned()
}

fn word_to_pascal(word: &str) -> String {
    if !word.chars().any(char::is_alphabetic) {
        word.to_string()
    } else if PASCAL_PREFIX.is_match(word) {
        word.to_string()
    } else if CAMEL_PREFIX.is_match(word) {
        upper_first(word)
    } else {
        capitalize_word(word, false)
    }
}

/// Breaks text into pieces at word boundaries, dropping the characters
/// that join words.
fn split_for_pascal(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, &(offset, c)) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| chars[j].1);
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let removed = match c {
            ' ' => {
                !prev.is_some_and(|p| p.is_whitespace() || CLOSES_PHRASE.contains(&p))
                    && !next.is_some_and(|n| n.is_whitespace() || OPENS_PHRASE.contains(&n))
            }
            '.' | '-' => {
                let run_has_letter = chars[..i]
                    .iter()
                    .rev()
                    .map(|&(_, c)| c)
                    .take_while(char::is_ascii_alphanumeric)
                    .any(|c| c.is_ascii_alphabetic());
                run_has_letter && next.is_some_and(|n| n.is_ascii_alphanumeric())
            }
            '_' => true,
            _ => false,
        };

        if removed {
            pieces.push(&text[start..offset]);
            start = offset + c.len_utf8();
        } else if prev.is_some_and(is_word_char) != is_word_char(c) && offset > start {
            pieces.push(&text[start..offset]);
            start = offset;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_for_pascal_drops_joiners() {
        assert_eq!(split_for_pascal("a b_c-d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_for_pascal_keeps_phrase_spaces() {
        assert_eq!(
            split_for_pascal("hi, there"),
            vec!["hi", ", ", "there"]
        );
    }

    #[test]
    fn test_decimal_point_survives() {
        assert_eq!(split_for_pascal("3.14"), vec!["3", ".", "14"]);
    }
}
