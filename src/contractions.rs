// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Contraction expansion.
//!
//! Contractions are found in the raw text with the lexicon's contraction
//! pattern. Those with a single reading ("can't've", "y'all") are looked
//! up directly. Negations and the ambiguous forms ("he's", "I'd",
//! "whatcha") are resolved from the tags of the surrounding tokens.
//!
//! An inverted negation ("Don't you dare") is rewritten together with its
//! subject ("Do you not dare"), so the text consumed by an expansion can
//! reach past the contraction itself. [`Expansion::resume_at`] records where
//! the untouched text picks up again.

mod disambiguation;
mod handlers;

#[cfg(test)]
mod tests;

use std::ops::Range;

use tracing::{debug, trace};

use crate::casing::capitalize_word;
use crate::lexicon::{self, grammar, normalize};
use crate::oracle::{Doc, PosCategory, Token, Tokenizer};

/// A contraction found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionMatch<'a> {
    /// The contraction as written.
    pub surface: &'a str,
    /// Byte range of the contraction.
    pub range: Range<usize>,
    /// True for forms ending in "n't" and for forms with more than one
    /// reading.
    pub ambiguous: bool,
}

impl<'a> ContractionMatch<'a> {
    fn new(surface: &'a str, range: Range<usize>) -> Self {
        let normalized = normalize(surface);
        let ambiguous = normalized.ends_with("n't")
            || lexicon::get()
                .ambiguous_contractions
                .contains(normalized.as_str());
        Self {
            surface,
            range,
            ambiguous,
        }
    }
}

/// The text replacing a contraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    /// Byte offset where copying of the original text resumes. Past the
    /// end of the contraction when an inverted subject was rewritten too.
    pub resume_at: usize,
}

/// Expands every contraction in `text`.
///
/// # Examples
///
/// ```
/// use textwarp::contractions::expand_contractions;
/// use textwarp::oracle::RuleTagger;
///
/// let tagger = RuleTagger::new().unwrap();
/// assert_eq!(expand_contractions("Don't you dare", &tagger), "Do you not dare");
/// assert_eq!(expand_contractions("He's eaten", &tagger), "He has eaten");
/// ```
pub fn expand_contractions(text: &str, tokenizer: &dyn Tokenizer) -> String {
    expand_doc(&tokenizer.analyze(text))
}

/// Expands every contraction in an analysed document.
pub fn expand_doc(doc: &Doc) -> String {
    let lexicon = lexicon::get();
    let text = doc.text();
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    let mut resume_at = 0;

    for found in lexicon.contraction_pattern.find_iter(text) {
        // Already rewritten as part of an inverted subject.
        if found.start() < resume_at {
            continue;
        }
        result.push_str(&text[resume_at..found.start()]);
        let contraction = ContractionMatch::new(found.as_str(), found.range());

        let span = if contraction.ambiguous {
            doc.char_span(found.start(), found.end())
        } else {
            None
        };
        match span {
            Some(span) => match handlers::expand_ambiguous(doc, &contraction, span) {
                Some(expansion) => {
                    trace!(contraction = contraction.surface, expansion = %expansion.text, "expanded");
                    result.push_str(&expansion.text);
                    resume_at = expansion.resume_at;
                }
                None => {
                    debug!(contraction = contraction.surface, "left unresolved contraction as is");
                    result.push_str(contraction.surface);
                    resume_at = found.end();
                }
            },
            None => {
                result.push_str(&expand_unambiguous(contraction.surface));
                resume_at = found.end();
            }
        }
    }

    result.push_str(&text[resume_at..]);
    result
}

fn expand_unambiguous(contraction: &str) -> String {
    match lexicon::get()
        .unambiguous_contractions
        .get(normalize(contraction).as_str())
    {
        Some(expansion) => apply_expansion_casing(contraction, expansion),
        None => contraction.to_string(),
    }
}

/// Carries the casing of `original` over to `expanded`.
///
/// All capitals stay all capitals. When every word of a multi-word
/// original starts with a capital, every expanded word is capitalized.
/// When only the first letter is a capital, only the first expanded word
/// is. Otherwise the expansion keeps its own casing.
///
/// # Examples
///
/// ```
/// use textwarp::contractions::apply_expansion_casing;
///
/// assert_eq!(apply_expansion_casing("DON'T", "do not"), "DO NOT");
/// assert_eq!(apply_expansion_casing("Don't", "do not"), "Do not");
/// assert_eq!(apply_expansion_casing("don't", "do not"), "do not");
/// ```
pub fn apply_expansion_casing(original: &str, expanded: &str) -> String {
    if original.is_empty() || expanded.is_empty() {
        return expanded.to_string();
    }
    if crate::casing::is_upper(original) {
        return expanded.to_uppercase();
    }

    let original_parts: Vec<&str> = original.split_whitespace().collect();
    let expanded_parts: Vec<&str> = expanded.split_whitespace().collect();

    if original_parts.len() > 1 && original_parts.iter().all(|part| starts_capitalized(part)) {
        return expanded_parts
            .iter()
            .map(|part| capitalize_word(part, false))
            .collect::<Vec<_>>()
            .join(" ");
    }
    if starts_capitalized(original) {
        return expanded_parts
            .iter()
            .enumerate()
            .map(|(i, part)| capitalize_word(part, i > 0))
            .collect::<Vec<_>>()
            .join(" ");
    }
    expanded.to_string()
}

fn starts_capitalized(text: &str) -> bool {
    text.chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase)
}

/// Finds the subject of the verb at `verb`.
///
/// Dependency arcs are used when the oracle produced them. Otherwise the
/// subject is the nearest noun or pronoun before the verb, stopping at a
/// determiner, verb or punctuation; failing that, the nearest one within a
/// few tokens after the verb and its `n't`, stopping at a verb or
/// punctuation.
pub fn find_subject(doc: &Doc, verb: usize) -> Option<usize> {
    let tokens = doc.tokens();
    if let Some(subject) = doc
        .children(verb)
        .into_iter()
        .find(|&child| grammar::SUBJECT_DEPS.contains(&tokens[child].dep.as_str()))
    {
        return Some(subject);
    }

    for i in (0..verb).rev() {
        let token = &tokens[i];
        if token.is_space() {
            continue;
        }
        if is_subject_candidate(token) {
            return Some(i);
        }
        if matches!(token.pos, PosCategory::Det | PosCategory::Verb | PosCategory::Punct) {
            break;
        }
    }

    let mut start = verb + 1;
    if tokens.get(start).is_some_and(is_negation) {
        start += 1;
    }
    let end = (start + grammar::FORWARD_SCAN_LIMIT).min(tokens.len());
    for (i, token) in tokens.iter().enumerate().take(end).skip(start) {
        if is_subject_candidate(token) {
            return Some(i);
        }
        if matches!(token.pos, PosCategory::Verb | PosCategory::Punct) {
            break;
        }
    }
    None
}

fn is_subject_candidate(token: &Token) -> bool {
    matches!(token.pos, PosCategory::Pron | PosCategory::Propn | PosCategory::Noun)
}

fn is_negation(token: &Token) -> bool {
    normalize(&token.text) == "n't"
}

/// The verb a negative contraction negates: "won't" gives "will" and
/// "can't" gives "can".
pub fn negative_to_base_verb(contraction: &str) -> Option<String> {
    let normalized = normalize(contraction);
    if let Some(expansion) = lexicon::get()
        .unambiguous_contractions
        .get(normalized.as_str())
    {
        if *expansion == "cannot" {
            return Some("can".to_string());
        }
        return expansion.split_whitespace().next().map(str::to_string);
    }
    normalized
        .strip_suffix("n't")
        .filter(|base| !base.is_empty())
        .map(str::to_string)
}

/// Index of the next non-space token after `i`.
fn next_word(doc: &Doc, i: usize) -> Option<usize> {
    (i + 1..doc.len()).find(|&j| !doc.tokens()[j].is_space())
}
