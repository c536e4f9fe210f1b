// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Static word tables and the lookup structures built from them.
//!
//! The tables live in the submodules as `const` slices. [`get`] assembles
//! them into hash maps and compiled patterns the first time a transform
//! needs them, and every later call shares the same instance.

pub mod capitalization;
pub mod contractions;
pub mod encoding;
pub mod entities;
pub mod grammar;
pub mod tagger;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

pub use entities::ContextRule;

/// Apostrophe-like characters accepted wherever a table key has `'`.
pub const APOSTROPHES: [char; 3] = ['\'', '\u{2019}', '\u{2018}'];

static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

/// Returns the shared lexicon, building it on first use.
pub fn get() -> &'static Lexicon {
    &LEXICON
}

/// Lookup structures over the word tables.
#[derive(Debug)]
pub struct Lexicon {
    pub unambiguous_contractions: HashMap<&'static str, &'static str>,
    pub ambiguous_contractions: HashSet<&'static str>,
    pub elision_words: HashSet<&'static str>,
    pub contraction_suffixes: HashSet<&'static str>,
    pub whatcha_are_words: HashSet<&'static str>,
    pub whatcha_have_words: HashSet<&'static str>,
    pub capitalized_abbreviations: HashMap<&'static str, &'static str>,
    pub lowercase_abbreviations: HashSet<&'static str>,
    pub initialisms: HashMap<&'static str, &'static str>,
    pub mixed_case_words: HashMap<&'static str, &'static str>,
    pub other_prefixed_names: HashMap<&'static str, &'static str>,
    pub absolute_casings: HashMap<&'static str, &'static str>,
    pub contextual_casings: HashMap<&'static str, &'static [ContextRule]>,
    pub lowercase_particles: HashSet<&'static str>,
    pub proper_noun_entities: HashSet<&'static str>,
    pub morse: HashMap<char, &'static str>,
    pub morse_reverse: HashMap<&'static str, char>,
    /// Matches every known contraction as a whole word, longest first.
    pub contraction_pattern: Regex,
    /// Matches every absolute or contextual entity key, longest first.
    pub entity_pattern: Regex,
}

impl Lexicon {
    fn build() -> Self {
        let unambiguous_contractions: HashMap<_, _> =
            contractions::UNAMBIGUOUS_CONTRACTIONS.iter().copied().collect();
        let ambiguous_contractions: HashSet<_> =
            contractions::AMBIGUOUS_CONTRACTIONS.iter().copied().collect();
        let absolute_casings: HashMap<_, _> =
            entities::ABSOLUTE_CASINGS.iter().copied().collect();
        let contextual_casings: HashMap<_, _> =
            entities::CONTEXTUAL_CASINGS.iter().copied().collect();

        let contraction_pattern = words_pattern(
            unambiguous_contractions
                .keys()
                .chain(ambiguous_contractions.iter())
                .copied(),
        )
        .expect("contraction table compiles to a valid pattern");
        let entity_pattern = words_pattern(
            absolute_casings
                .keys()
                .chain(contextual_casings.keys())
                .copied(),
        )
        .expect("entity table compiles to a valid pattern");

        debug!(
            contractions = unambiguous_contractions.len() + ambiguous_contractions.len(),
            entities = absolute_casings.len() + contextual_casings.len(),
            "built lexicon"
        );

        Self {
            unambiguous_contractions,
            ambiguous_contractions,
            elision_words: contractions::ELISION_WORDS.iter().copied().collect(),
            contraction_suffixes: contractions::CONTRACTION_SUFFIXES.iter().copied().collect(),
            whatcha_are_words: contractions::WHATCHA_ARE_WORDS.iter().copied().collect(),
            whatcha_have_words: contractions::WHATCHA_HAVE_WORDS.iter().copied().collect(),
            capitalized_abbreviations: capitalization::CAPITALIZED_ABBREVIATIONS
                .iter()
                .copied()
                .collect(),
            lowercase_abbreviations: capitalization::LOWERCASE_ABBREVIATIONS
                .iter()
                .copied()
                .collect(),
            initialisms: capitalization::INITIALISMS.iter().copied().collect(),
            mixed_case_words: capitalization::MIXED_CASE_WORDS.iter().copied().collect(),
            other_prefixed_names: capitalization::OTHER_PREFIXED_NAMES.iter().copied().collect(),
            absolute_casings,
            contextual_casings,
            lowercase_particles: entities::LOWERCASE_PARTICLES.iter().copied().collect(),
            proper_noun_entities: entities::PROPER_NOUN_ENTITIES.iter().copied().collect(),
            morse: encoding::MORSE_CODE.iter().copied().collect(),
            morse_reverse: encoding::MORSE_CODE.iter().map(|&(c, code)| (code, c)).collect(),
            contraction_pattern,
            entity_pattern,
        }
    }

    /// Returns true if `token` is a clitic suffix such as `'s` or `n't`.
    pub fn is_contraction_suffix(&self, token: &str) -> bool {
        self.contraction_suffixes.contains(normalize(token).as_str())
    }

    /// Returns true if `rest`, the text right after an apostrophe, begins
    /// with an elided word ("tis", "em") or a decade ("80s").
    pub fn starts_with_elision(&self, rest: &str) -> bool {
        let word = normalize(&rest.chars().take_while(|&c| is_word_char(c)).collect::<String>());
        if self.elision_words.contains(word.as_str()) {
            return true;
        }
        let bytes = word.as_bytes();
        bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit() && bytes[2] == b's'
    }
}

/// Lowercases `word` and replaces curly apostrophes with straight ones.
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| if APOSTROPHES.contains(&c) { '\'' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Returns true for characters matched by `\w`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Compiles a case-insensitive alternation that matches any of `words` as a
/// whole word.
///
/// Longer words are tried first so that `can't've` wins over `can't`. A word
/// that begins or ends with a non-word character (`'tis`, `u.s.`) is bounded
/// by requiring a non-word neighbour on that side instead of a word
/// boundary. Any apostrophe in a word also matches its curly forms.
pub fn words_pattern<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Regex, regex::Error> {
    let mut words: Vec<&str> = words.into_iter().collect();
    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let alternatives: Vec<String> = words.iter().map(|word| bounded_word(word)).collect();
    Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))
}

fn bounded_word(word: &str) -> String {
    let mut pattern = String::new();
    let boundary = |c: Option<char>| match c {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"\B",
    };

    pattern.push_str(boundary(word.chars().next()));
    for c in word.chars() {
        if APOSTROPHES.contains(&c) {
            pattern.push_str("['\u{2019}\u{2018}]");
        } else {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    pattern.push_str(boundary(word.chars().last()));
    pattern
}
