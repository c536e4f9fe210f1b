// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Separator-joined cases: `snake_case`, `kebab-case` and `dot.case`.

use std::sync::LazyLock;

use regex::Regex;

use super::CaseSeparator;
use crate::lexicon::is_word_char;
use crate::punctuation::remove_apostrophes;

static SNAKE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^_?[a-zA-Z][a-zA-Z0-9]*(?:_[a-zA-Z0-9]+)+\b").expect("valid snake pattern")
});
static KEBAB_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*(?:-[a-zA-Z0-9]+)+\b").expect("valid kebab pattern")
});
static DOT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*(?:\.[a-zA-Z0-9]+)+\b").expect("valid dot pattern")
});
static CAMEL_OR_PASCAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z][a-z0-9]*[A-Z][A-Za-z0-9]*|[A-Z][A-Z0-9]*[a-z][A-Za-z0-9]*)$")
        .expect("valid camel pattern")
});

impl CaseSeparator {
    fn word_pattern(self) -> &'static Regex {
        match self {
            CaseSeparator::Dot => &DOT_WORD,
            CaseSeparator::Kebab => &KEBAB_WORD,
            CaseSeparator::Snake => &SNAKE_WORD,
        }
    }
}

const ALL_SEPARATORS: [CaseSeparator; 3] =
    [CaseSeparator::Dot, CaseSeparator::Kebab, CaseSeparator::Snake];

/// Converts text to a separator-joined case.
///
/// Apostrophes inside words are dropped first. A single space between two
/// purely alphabetic words becomes the separator; a word already joined by
/// this separator is kept; one joined by another separator has its
/// separators swapped; camel and Pascal case words are split at their
/// humps; everything else is lowercased. Text without letters is copied
/// through.
pub fn to_separator_case(text: &str, separator: CaseSeparator) -> String {
    let text = remove_apostrophes(text);
    let parts = split_at_word_boundaries(&text);
    let target = separator.as_char();
    let mut result = String::with_capacity(text.len());

    for (i, &part) in parts.iter().enumerate() {
        if part == " " {
            let between_words = i > 0
                && i + 1 < parts.len()
                && is_alpha(parts[i - 1])
                && is_alpha(parts[i + 1]);
            if between_words {
                result.push(target);
            } else {
                result.push(' ');
            }
        } else if !part.chars().any(char::is_alphabetic) {
            result.push_str(part);
        } else if separator.word_pattern().is_match(part) {
            result.push_str(part);
        } else if ALL_SEPARATORS
            .iter()
            .any(|other| *other != separator && other.word_pattern().is_match(part))
        {
            result.extend(
                part.chars()
                    .map(|c| if matches!(c, '.' | '-' | '_') { target } else { c }),
            );
        } else if CAMEL_OR_PASCAL_WORD.is_match(part) {
            let words: Vec<String> = split_camel(part).iter().map(|w| w.to_lowercase()).collect();
            result.push_str(&words.join(&target.to_string()));
        } else {
            result.push_str(&part.to_lowercase());
        }
    }
    result
}

pub fn to_snake_case(text: &str) -> String {
    to_separator_case(text, CaseSeparator::Snake)
}

pub fn to_kebab_case(text: &str) -> String {
    to_separator_case(text, CaseSeparator::Kebab)
}

pub fn to_dot_case(text: &str) -> String {
    to_separator_case(text, CaseSeparator::Dot)
}

fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Splits at every word boundary that does not touch a period or hyphen,
/// so `convert-to-kebab` stays whole. Boundaries at either end yield empty
/// leading or trailing parts.
fn split_at_word_boundaries(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut cuts = Vec::new();
    for i in 0..=chars.len() {
        let prev = i.checked_sub(1).map(|j| chars[j].1);
        let next = chars.get(i).map(|&(_, c)| c);
        let is_boundary = prev.is_some_and(is_word_char) != next.is_some_and(is_word_char);
        let touches_separator = prev.is_some_and(|c| matches!(c, '.' | '-'))
            || next.is_some_and(|c| matches!(c, '.' | '-'));
        if is_boundary && !touches_separator {
            cuts.push(chars.get(i).map_or(text.len(), |&(offset, _)| offset));
        }
    }

    let mut parts = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        parts.push(&text[start..cut]);
        start = cut;
    }
    parts.push(&text[start..]);
    parts
}

/// Splits a camel or Pascal case word into its humps: `parseHTTPResponse2`
/// becomes `parse`, `HTTP`, `Response`, `2`.
pub(crate) fn split_camel(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;
    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let next = chars[i].1;
        let after_next = chars.get(i + 1).map(|&(_, c)| c);
        let split = (prev.is_ascii_lowercase() && next.is_ascii_uppercase())
            || (prev.is_ascii_uppercase()
                && next.is_ascii_uppercase()
                && after_next.is_some_and(|c| c.is_ascii_lowercase()))
            || (prev.is_ascii_alphabetic() && next.is_ascii_digit())
            || (prev.is_ascii_digit() && next.is_ascii_alphabetic());
        if split {
            parts.push(&word[start..chars[i].0]);
            start = chars[i].0;
        }
    }
    parts.push(&word[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_word_boundaries() {
        assert_eq!(split_at_word_boundaries("hello world"), vec!["", "hello", " ", "world", ""]);
        assert_eq!(split_at_word_boundaries("a-b c"), vec!["", "a-b", " ", "c", ""]);
    }

    #[test]
    fn test_split_camel() {
        assert_eq!(split_camel("convertToCamel"), vec!["convert", "To", "Camel"]);
        assert_eq!(
            split_camel("parseHTTPResponse2"),
            vec!["parse", "HTTP", "Response", "2"]
        );
    }
}
