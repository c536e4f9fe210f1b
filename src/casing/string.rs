// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Word-level capitalization.
//!
//! A word runs through an ordered chain of strategies. The first strategy
//! that produces a result wins; if none does, the word is either
//! lowercased or capitalized with the rest of the word lowercased.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{self, APOSTROPHES, capitalization};

static PERIOD_SEPARATED_INITIALISM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]\.){2,}").expect("valid initialism pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    IPronoun,
    CapitalizedAbbreviation,
    Initialism,
    MixedCase,
    LowercaseAbbreviation,
    PeriodSeparatedInitialism,
    PrefixedName,
    PreserveExisting,
}

use Strategy::*;

const DEFAULT_CHAIN: &[Strategy] = &[
    IPronoun,
    CapitalizedAbbreviation,
    Initialism,
    MixedCase,
    PeriodSeparatedInitialism,
    PrefixedName,
    PreserveExisting,
];

const LOWERCASE_CHAIN: &[Strategy] = &[
    IPronoun,
    CapitalizedAbbreviation,
    Initialism,
    MixedCase,
    LowercaseAbbreviation,
    PeriodSeparatedInitialism,
    PrefixedName,
    PreserveExisting,
];

// For sentences written entirely in capitals or title case.
const FORCED_LOWERCASE_CHAIN: &[Strategy] = &[
    IPronoun,
    CapitalizedAbbreviation,
    Initialism,
    MixedCase,
    LowercaseAbbreviation,
    PeriodSeparatedInitialism,
    PrefixedName,
];

impl Strategy {
    fn apply(self, word: &str, lower: &str) -> Option<String> {
        let lexicon = lexicon::get();
        match self {
            IPronoun => (lower == "i").then(|| "I".to_string()),
            CapitalizedAbbreviation => {
                let base = lower.strip_suffix('.').unwrap_or(lower);
                let mut result = lookup(base, &lexicon.capitalized_abbreviations)?;
                if base.len() < lower.len() {
                    result.push('.');
                }
                Some(result)
            }
            Initialism => lookup(lower, &lexicon.initialisms),
            MixedCase => lookup(lower, &lexicon.mixed_case_words),
            LowercaseAbbreviation => {
                let base = lower.strip_suffix('.').unwrap_or(lower);
                lexicon
                    .lowercase_abbreviations
                    .contains(base)
                    .then(|| lower.to_string())
            }
            PeriodSeparatedInitialism => {
                if !PERIOD_SEPARATED_INITIALISM.is_match(word) {
                    return None;
                }
                // Anything after an apostrophe ("U.S.'s") stays lowercase.
                let split = word.find(|c: char| APOSTROPHES.contains(&c)).unwrap_or(word.len());
                Some(format!(
                    "{}{}",
                    word[..split].to_uppercase(),
                    word[split..].to_lowercase()
                ))
            }
            PrefixedName => prefixed_name(lower),
            PreserveExisting => (!is_lower(word) && !is_upper(word)).then(|| word.to_string()),
        }
    }
}

/// Capitalizes a single word.
///
/// Words that are empty or start with a non-alphabetic character are
/// returned unchanged. Otherwise the chain of lexicon strategies runs: the
/// pronoun "I", capitalized abbreviations, initialisms, mixed-case words,
/// lowercase abbreviations (only when `lowercase_by_default`), initialisms
/// written with periods, prefixed surnames, and finally any existing mixed
/// capitalization. When nothing applies, the word is lowercased if
/// `lowercase_by_default` is set and capitalized otherwise.
///
/// # Examples
///
/// ```
/// use textwarp::casing::capitalize_word;
///
/// assert_eq!(capitalize_word("nasa", true), "NASA");
/// assert_eq!(capitalize_word("hello", false), "Hello");
/// assert_eq!(capitalize_word("Hello", true), "Hello");
/// assert_eq!(capitalize_word("HELLO", true), "hello");
/// ```
pub fn capitalize_word(word: &str, lowercase_by_default: bool) -> String {
    let chain = if lowercase_by_default {
        LOWERCASE_CHAIN
    } else {
        DEFAULT_CHAIN
    };
    run_chain(word, chain, lowercase_by_default)
}

/// Lowercases a word unless the lexicon knows a better casing for it.
///
/// Unlike [`capitalize_word`], existing mixed capitalization is not kept.
pub fn force_lowercase(word: &str) -> String {
    run_chain(word, FORCED_LOWERCASE_CHAIN, true)
}

fn run_chain(word: &str, chain: &[Strategy], lowercase_by_default: bool) -> String {
    if !word.chars().next().is_some_and(char::is_alphabetic) {
        return word.to_string();
    }
    let lower = word.to_lowercase();
    if let Some(result) = chain.iter().find_map(|strategy| strategy.apply(word, &lower)) {
        return result;
    }
    if lowercase_by_default {
        lower
    } else {
        capitalize_first(word)
    }
}

/// Looks `lower` up in a casing table.
///
/// The whole word is tried first. Failing that, the first known ending
/// (`'s`, `s`, ...) that reaches the end of the word is split off, the base
/// is looked up, and the ending is re-appended: "ceos" becomes "CEOs".
fn lookup(lower: &str, table: &HashMap<&'static str, &'static str>) -> Option<String> {
    if let Some(casing) = table.get(lower) {
        return Some(casing.to_string());
    }
    let (split, _) = lower
        .char_indices()
        .skip(1)
        .find(|&(i, _)| capitalization::MAP_SUFFIX_EXCEPTIONS.contains(&&lower[i..]))?;
    table
        .get(&lower[..split])
        .map(|casing| format!("{}{}", casing, &lower[split..]))
}

fn prefixed_name(lower: &str) -> Option<String> {
    if capitalization::NAME_PREFIX_EXCEPTIONS
        .iter()
        .any(|exception| lower.starts_with(exception))
    {
        return None;
    }
    for prefix in capitalization::NAME_PREFIXES {
        let Some(rest) = lower.strip_prefix(prefix) else {
            continue;
        };
        // The remainder must itself look like a name: "macs" is not one.
        if rest.chars().take_while(|c| c.is_alphabetic()).count() >= 2 {
            return Some(format!("{}{}", capitalize_first(prefix), capitalize_first(rest)));
        }
    }
    lookup(lower, &lexicon::get().other_prefixed_names)
}

/// Capitalize the first letter of a word and lowercase the rest.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_uppercase().to_string();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
    }
}

/// True if the text has at least one cased character and no uppercase ones.
pub fn is_lower(text: &str) -> bool {
    text.chars().any(char::is_lowercase) && !text.chars().any(char::is_uppercase)
}

/// True if the text has at least one cased character and no lowercase ones.
pub fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// True if every cased run starts with an uppercase letter followed only by
/// lowercase letters ("Hello", "Rock-And-Roll"; not "McDonald").
pub fn is_title(text: &str) -> bool {
    let mut previous_cased = false;
    let mut any_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else {
            previous_cased = false;
        }
    }
    any_cased
}
