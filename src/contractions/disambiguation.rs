// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Choosing the verb behind an ambiguous contraction.

use std::ops::Range;

use super::{find_subject, next_word};
use crate::lexicon::{self, grammar, normalize};
use crate::oracle::{Doc, PosCategory};

fn is_participle(tag: &str) -> bool {
    grammar::PARTICIPLE_TAGS.contains(&tag)
}

/// Resolves "ain't" to "am", "is", "are", "has" or "have" from its
/// subject and whether a participle follows.
///
/// `suffix` is the index of the `n't` token.
pub(super) fn disambiguate_ain_t(doc: &Doc, suffix: usize) -> Option<&'static str> {
    let tokens = doc.tokens();
    let verb = suffix.checked_sub(1)?;
    let subject = &tokens[find_subject(doc, verb)?];
    let subject_text = subject.lower();
    let singular = grammar::SINGULAR_PRONOUNS.contains(&subject_text.as_str())
        || matches!(subject.tag.as_str(), "NN" | "NNP");

    let perfect = next_word(doc, suffix).is_some_and(|next| is_participle(&tokens[next].tag));
    Some(match (perfect, singular) {
        (true, true) => "has",
        (true, false) => "have",
        (false, _) if subject_text == "i" => "am",
        (false, true) => "is",
        (false, false) => "are",
    })
}

/// Resolves `'s` to "is", "has", "does" or "us", and `'d` to "would",
/// "had" or "did".
///
/// `span` covers the host word and its suffix.
pub(super) fn disambiguate_s_or_d(doc: &Doc, span: Range<usize>) -> Option<&'static str> {
    let tokens = doc.tokens();
    let suffix = span.end - 1;
    let kind = normalize(&tokens[suffix].text);
    let prev = suffix.checked_sub(1).map(|p| tokens[p].lower());
    if kind == "'s" && prev.as_deref() == Some("let") {
        return Some("us");
    }

    let Some(next) = next_word(doc, suffix) else {
        return match kind.as_str() {
            "'s" => Some("is"),
            "'d" => Some("would"),
            _ => None,
        };
    };
    let next_token = &tokens[next];
    let next_lower = next_token.lower();

    // In a question the auxiliary comes before its subject: "What's she
    // done?" reads the verb after "she".
    let question_verb = prev
        .as_deref()
        .filter(|p| grammar::WH_WORDS.contains(p))
        .map(|_| {
            let target = if matches!(
                next_token.pos,
                PosCategory::Pron | PosCategory::Propn | PosCategory::Noun
            ) {
                next_word(doc, next).unwrap_or(next)
            } else {
                next
            };
            &tokens[target]
        });

    match kind.as_str() {
        "'s" => {
            if let Some(verb) = question_verb {
                if verb.tag == "VB" {
                    return Some("does");
                }
                if is_participle(&verb.tag) {
                    return Some("has");
                }
            }
            Some(if is_participle(&next_token.tag) {
                "has"
            } else {
                "is"
            })
        }
        "'d" => {
            if next_lower == "better" {
                return Some("had");
            }
            if grammar::PREFERENCE_ADVERBS.contains(&next_lower.as_str()) {
                return Some("would");
            }
            if let Some(verb) = question_verb {
                if is_participle(&verb.tag) {
                    return Some("had");
                }
                if verb.tag == "VB" && grammar::PREFERENCE_VERBS.contains(&verb.lower().as_str()) {
                    return Some("would");
                }
                return Some("did");
            }
            Some(if is_participle(&next_token.tag) {
                "had"
            } else {
                "would"
            })
        }
        _ => None,
    }
}

/// Resolves "whatcha" to "what are you", "what have you" or "what do
/// you" from the word after it. Returns the verb.
///
/// Before "ain't" nothing is resolved: the negation carries the verb.
pub(super) fn disambiguate_whatcha(doc: &Doc, span: Range<usize>) -> Option<&'static str> {
    let lexicon = lexicon::get();
    let tokens = doc.tokens();
    let next = next_word(doc, span.end - 1)?;
    let next_lower = normalize(&tokens[next].text);

    if next_lower == "ai"
        && next_word(doc, next).is_some_and(|after| normalize(&tokens[after].text) == "n't")
    {
        return None;
    }
    if lexicon.whatcha_are_words.contains(next_lower.as_str()) || tokens[next].tag == "VBG" {
        Some("are")
    } else if lexicon.whatcha_have_words.contains(next_lower.as_str())
        || is_participle(&tokens[next].tag)
    {
        Some("have")
    } else {
        Some("do")
    }
}
