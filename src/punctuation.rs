// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Quote, apostrophe and dash transforms.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{self, APOSTROPHES};

/// Straight double quote (U+0022)
pub const STRAIGHT_DOUBLE_QUOTE: char = '\u{0022}';
/// Left double quotation mark (U+201C)
pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
/// Right double quotation mark (U+201D)
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';

/// Straight single quote / apostrophe (U+0027)
pub const STRAIGHT_SINGLE_QUOTE: char = '\u{0027}';
/// Left single quotation mark (U+2018)
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
/// Right single quotation mark (U+2019), also the curly apostrophe
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Horizontal ellipsis (U+2026)
pub const ELLIPSIS: char = '\u{2026}';
/// En dash (U+2013)
pub const EN_DASH: char = '\u{2013}';
/// Em dash (U+2014)
pub const EM_DASH: char = '\u{2014}';

/// Quote characters that can open a quotation.
pub const OPEN_QUOTES: [char; 4] = [
    STRAIGHT_DOUBLE_QUOTE,
    LEFT_DOUBLE_QUOTE,
    STRAIGHT_SINGLE_QUOTE,
    LEFT_SINGLE_QUOTE,
];

// Double hyphens, or a lone hyphen set off by spaces.
static EM_DASH_STAND_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?-{2,}\s?|\s-\s").expect("valid dash pattern"));
static PUNCT_INSIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([.,])(["”'’]?["”'’])"#).expect("valid quote pattern"));
static PUNCT_OUTSIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(["”'’]?["”'’])([.,])"#).expect("valid quote pattern"));

/// Replaces curly quotes with straight ones.
pub fn curly_to_straight(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            LEFT_SINGLE_QUOTE | RIGHT_SINGLE_QUOTE => STRAIGHT_SINGLE_QUOTE,
            LEFT_DOUBLE_QUOTE | RIGHT_DOUBLE_QUOTE => STRAIGHT_DOUBLE_QUOTE,
            c => c,
        })
        .collect()
}

/// Replaces straight quotes with curly ones.
///
/// Apostrophes inside words, and those standing in for elided letters
/// ("'tis", "'80s"), become `’`. A run of quotes at the start of the text
/// or after whitespace or an opening bracket opens a quotation; every
/// other straight quote closes one.
pub fn straight_to_curly(text: &str) -> String {
    let chars: Vec<char> = replace_word_apostrophes(text, Some(RIGHT_SINGLE_QUOTE))
        .chars()
        .collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch != STRAIGHT_SINGLE_QUOTE && ch != STRAIGHT_DOUBLE_QUOTE {
            result.push(ch);
            i += 1;
            continue;
        }
        let run = chars[i..].iter().take_while(|&&c| c == ch).count();
        let replacement = if ch == STRAIGHT_SINGLE_QUOTE {
            if opens_single_quote(&chars, i) {
                LEFT_SINGLE_QUOTE
            } else {
                RIGHT_SINGLE_QUOTE
            }
        } else if opens_double_quote(&chars, i) {
            LEFT_DOUBLE_QUOTE
        } else {
            RIGHT_DOUBLE_QUOTE
        };
        result.extend(std::iter::repeat_n(replacement, run));
        i += run;
    }

    result
}

fn opens_single_quote(chars: &[char], i: usize) -> bool {
    i == 0
        || chars[i - 1].is_whitespace()
        || matches!(
            chars[i - 1],
            '(' | '[' | '{' | STRAIGHT_DOUBLE_QUOTE | LEFT_DOUBLE_QUOTE
        )
}

fn opens_double_quote(chars: &[char], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    let prev = chars[i - 1];
    if !prev.is_whitespace() && !matches!(prev, '(' | '[' | '{') {
        return false;
    }
    // A quote after a closed single quotation and a space closes the outer one.
    !(i >= 2
        && prev.is_whitespace()
        && matches!(chars[i - 2], STRAIGHT_SINGLE_QUOTE | RIGHT_SINGLE_QUOTE))
}

/// Deletes apostrophes inside words and elisions, leaving quotation marks.
///
/// # Examples
///
/// ```
/// use textwarp::punctuation::remove_apostrophes;
///
/// assert_eq!(remove_apostrophes("don't say 'hi'"), "dont say 'hi'");
/// ```
pub fn remove_apostrophes(text: &str) -> String {
    replace_word_apostrophes(text, None)
}

fn replace_word_apostrophes(text: &str, replacement: Option<char>) -> String {
    let lexicon = lexicon::get();
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for (i, ch) in text.char_indices() {
        let rest = &text[i + ch.len_utf8()..];
        let in_word = APOSTROPHES.contains(&ch)
            && ((prev.is_some_and(|c| c.is_ascii_alphabetic())
                && rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic()))
                || lexicon.starts_with_elision(rest));
        if in_word {
            result.extend(replacement);
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }

    result
}

/// Replaces em dash stand-ins (`--`, or ` - ` between words) with `—`,
/// absorbing one space on either side.
pub fn hyphens_to_em(text: &str) -> String {
    EM_DASH_STAND_IN
        .replace_all(text, EM_DASH.to_string().as_str())
        .into_owned()
}

/// Replaces every hyphen with an en dash.
pub fn hyphen_to_en(text: &str) -> String {
    text.replace('-', &EN_DASH.to_string())
}

/// Moves periods and commas that follow a closing quote inside it.
pub fn punct_to_inside(text: &str) -> String {
    PUNCT_OUTSIDE.replace_all(text, "${2}${1}").into_owned()
}

/// Moves periods and commas that precede a closing quote outside it.
pub fn punct_to_outside(text: &str) -> String {
    PUNCT_INSIDE.replace_all(text, "${2}${1}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Quotes ==========

    #[test]
    fn test_curly_to_straight() {
        assert_eq!(
            curly_to_straight("\u{201C}It\u{2019}s\u{201D} \u{2018}fine\u{2019}"),
            "\"It's\" 'fine'"
        );
    }

    #[test]
    fn test_straight_to_curly_double() {
        assert_eq!(
            straight_to_curly("She said \"it's the '80s\" today"),
            "She said \u{201C}it\u{2019}s the \u{2019}80s\u{201D} today"
        );
    }

    #[test]
    fn test_straight_to_curly_single() {
        assert_eq!(
            straight_to_curly("'hello' she said"),
            "\u{2018}hello\u{2019} she said"
        );
    }

    #[test]
    fn test_straight_to_curly_elision() {
        assert_eq!(straight_to_curly("'tis true"), "\u{2019}tis true");
    }

    #[test]
    fn test_straight_to_curly_bracketed() {
        assert_eq!(straight_to_curly("(\"yes\")"), "(\u{201C}yes\u{201D})");
    }

    #[test]
    fn test_quote_symmetry() {
        let text = "He said \"don't\" and ('left').";
        assert_eq!(curly_to_straight(&straight_to_curly(text)), text);
    }

    // ========== Apostrophes ==========

    #[test]
    fn test_remove_apostrophes() {
        assert_eq!(remove_apostrophes("don't 'tis 'quoted'"), "dont tis 'quoted'");
        assert_eq!(remove_apostrophes("rock 'n' roll"), "rock n' roll");
        assert_eq!(remove_apostrophes("the '90s"), "the 90s");
    }

    #[test]
    fn test_remove_curly_apostrophes() {
        assert_eq!(remove_apostrophes("won\u{2019}t"), "wont");
    }

    // ========== Dashes ==========

    #[test]
    fn test_hyphens_to_em() {
        assert_eq!(hyphens_to_em("wait--what"), "wait\u{2014}what");
        assert_eq!(hyphens_to_em("wait -- what"), "wait\u{2014}what");
        assert_eq!(hyphens_to_em("this - that"), "this\u{2014}that");
    }

    #[test]
    fn test_hyphens_to_em_keeps_compounds() {
        assert_eq!(hyphens_to_em("well-known"), "well-known");
    }

    #[test]
    fn test_hyphen_to_en() {
        assert_eq!(hyphen_to_en("1990-1999"), "1990\u{2013}1999");
    }

    // ========== Punctuation and quotes ==========

    #[test]
    fn test_punct_to_inside() {
        assert_eq!(punct_to_inside("He said \"hi\". Then"), "He said \"hi.\" Then");
        assert_eq!(punct_to_inside("a \u{201C}b\u{201D}, c"), "a \u{201C}b,\u{201D} c");
    }

    #[test]
    fn test_punct_to_outside() {
        assert_eq!(punct_to_outside("He said \"hi.\" Then"), "He said \"hi\". Then");
    }
}
