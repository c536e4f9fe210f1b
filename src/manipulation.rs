// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Character-level manipulations that need no linguistic analysis.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::lexicon::is_word_char;

/// Block used by [`redact`] (U+2588).
pub const REDACTION_BLOCK: char = '\u{2588}';

static MULTIPLE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S) {2,}").expect("valid spacing pattern"));

/// Alternates lowercase and uppercase letters, starting in lowercase.
/// Non-letters are copied and do not advance the alternation.
///
/// # Examples
///
/// ```
/// use textwarp::manipulation::to_alternating_caps;
///
/// assert_eq!(to_alternating_caps("hello world"), "hElLo WoRlD");
/// ```
pub fn to_alternating_caps(text: &str) -> String {
    let mut upper = false;
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphabetic() {
            if upper {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            upper = !upper;
        } else {
            result.push(c);
        }
    }
    result
}

/// Gives each letter a random case.
pub fn random_case(text: &str) -> String {
    random_case_with(text, &mut rand::thread_rng())
}

/// [`random_case`] drawing from `rng`.
pub fn random_case_with<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if !c.is_alphabetic() {
            result.push(c);
        } else if rng.gen_bool(0.5) {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Shuffles the characters of the text.
pub fn randomize(text: &str) -> String {
    randomize_with(text, &mut rand::thread_rng())
}

/// [`randomize`] drawing from `rng`.
pub fn randomize_with<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Replaces every word character with a solid block.
pub fn redact(text: &str) -> String {
    text.chars()
        .map(|c| if is_word_char(c) { REDACTION_BLOCK } else { c })
        .collect()
}

/// Collapses runs of spaces that follow a non-space character. Leading
/// indentation is kept.
pub fn to_single_spaces(text: &str) -> String {
    MULTIPLE_SPACES.replace_all(text, "$1 ").into_owned()
}

/// Puts a space between every pair of characters.
pub fn widen(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Inverts the case of every letter.
pub fn swapcase(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            result.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Trims leading and trailing whitespace.
pub fn strip(text: &str) -> String {
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_alternating_caps_skips_non_letters() {
        assert_eq!(to_alternating_caps("a-b c!d"), "a-B c!D");
    }

    #[test]
    fn test_random_case_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = "Mixed Case, 42 times";
        let result = random_case_with(text, &mut rng);
        assert_eq!(result.to_lowercase(), text.to_lowercase());
    }

    #[test]
    fn test_randomize_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = "shuffle me";
        let mut expected: Vec<char> = text.chars().collect();
        let mut actual: Vec<char> = randomize_with(text, &mut rng).chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("caf\u{e9}!"), "!\u{e9}fac");
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact("PIN: 1234."), "\u{2588}\u{2588}\u{2588}: \u{2588}\u{2588}\u{2588}\u{2588}.");
    }

    #[test]
    fn test_single_spaces() {
        assert_eq!(to_single_spaces("one  two   three"), "one two three");
    }

    #[test]
    fn test_single_spaces_keeps_indentation() {
        assert_eq!(to_single_spaces("    indented  line"), "    indented line");
    }

    #[test]
    fn test_widen() {
        assert_eq!(widen("wide"), "w i d e");
        assert_eq!(widen(""), "");
    }

    #[test]
    fn test_swapcase() {
        assert_eq!(swapcase("Hello World 1"), "hELLO wORLD 1");
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("  \tpadded\n"), "padded");
    }
}
