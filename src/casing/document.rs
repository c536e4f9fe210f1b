// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Sentence, start and title case over an analysed document.

use std::collections::HashSet;
use std::ops::Range;

use tracing::trace;

use super::entity::map_all_entities;
use super::position::{sentence_positions, start_positions, title_positions};
use super::string::{capitalize_word, force_lowercase, is_upper};
use super::{Casing, CasingOptions};
use crate::lexicon;
use crate::oracle::{Doc, Token, Tokenizer};

/// Applies `casing` to every token of `doc`.
///
/// Entity spans are written in one piece: with their fixed casing when the
/// lexicon gives one, title-cased otherwise. Clitic suffixes such as `n't`
/// keep their own casing unless they would shout after a lowercased host.
pub fn case_doc(doc: &Doc, casing: Casing, options: &CasingOptions) -> String {
    let entities = map_all_entities(doc, options);
    let (positions, lowercase, lowercase_by_default) = match casing {
        Casing::Sentence => {
            let (starts, lowercase) = sentence_positions(doc);
            (starts, lowercase, true)
        }
        Casing::Start => (start_positions(doc), HashSet::new(), false),
        Casing::Title => (title_positions(doc, 0..doc.len()), HashSet::new(), true),
    };
    trace!(?casing, positions = positions.len(), lowercase = lowercase.len(), "casing document");

    let lexicon = lexicon::get();
    let tokens = doc.tokens();
    let mut result = String::with_capacity(doc.text().len());
    let mut previous = String::new();
    let mut i = 0;

    while i < tokens.len() {
        if let Some(entity) = entities.get(&i) {
            match &entity.casing {
                Some(casing) => {
                    result.push_str(casing);
                    result.push_str(&tokens[entity.end - 1].whitespace);
                    previous.clone_from(casing);
                }
                None => {
                    let (cased, last) = title_case_span(doc, entity.range());
                    result.push_str(&cased);
                    previous = last;
                }
            }
            i = entity.end;
            continue;
        }

        let token = &tokens[i];
        let cased = if token.is_space() {
            token.text.clone()
        } else if lexicon.is_contraction_suffix(&token.text) {
            case_suffix(token, &previous)
        } else if positions.contains(&i) {
            capitalize_word(&token.text, false)
        } else if lowercase.contains(&i) {
            force_lowercase(&token.text)
        } else {
            capitalize_word(&token.text, lowercase_by_default)
        };
        result.push_str(&cased);
        result.push_str(&token.whitespace);
        if !token.is_space() {
            previous = cased;
        }
        i += 1;
    }
    result
}

/// Title-cases the tokens of `range` without looking for entities inside
/// it. Returns the text and the last cased token.
fn title_case_span(doc: &Doc, range: Range<usize>) -> (String, String) {
    let positions = title_positions(doc, range.clone());
    let lexicon = lexicon::get();
    let mut result = String::new();
    let mut previous = String::new();

    for i in range {
        let token = &doc.tokens()[i];
        let cased = if token.is_space() {
            token.text.clone()
        } else if lexicon.is_contraction_suffix(&token.text) {
            case_suffix(token, &previous)
        } else if positions.contains(&i) {
            capitalize_word(&token.text, false)
        } else {
            token.lower()
        };
        result.push_str(&cased);
        result.push_str(&token.whitespace);
        previous = cased;
    }
    (result, previous)
}

fn case_suffix(token: &Token, host: &str) -> String {
    if is_upper(&token.text) && !is_upper(host) {
        token.lower()
    } else {
        token.text.clone()
    }
}

/// Capitalizes the first word of each sentence, keeping known casings.
pub fn to_sentence_case(text: &str, tokenizer: &dyn Tokenizer) -> String {
    case_doc(&tokenizer.analyze(text), Casing::Sentence, &CasingOptions::default())
}

/// Capitalizes every word.
pub fn to_start_case(text: &str, tokenizer: &dyn Tokenizer) -> String {
    case_doc(&tokenizer.analyze(text), Casing::Start, &CasingOptions::default())
}

/// Converts text to title case.
///
/// # Examples
///
/// ```
/// use textwarp::casing::to_title_case;
/// use textwarp::oracle::RuleTagger;
///
/// let tagger = RuleTagger::new().unwrap();
/// assert_eq!(to_title_case("the lord of the rings", &tagger), "The Lord of the Rings");
/// ```
pub fn to_title_case(text: &str, tokenizer: &dyn Tokenizer) -> String {
    case_doc(&tokenizer.analyze(text), Casing::Title, &CasingOptions::default())
}
