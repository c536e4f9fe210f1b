// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Token positions to capitalize or lowercase for each document casing.

use std::collections::HashSet;
use std::ops::Range;

use super::string::{is_title, is_upper};
use crate::lexicon::{self, grammar};
use crate::oracle::{Doc, Token};
use crate::punctuation::OPEN_QUOTES;

fn is_word(token: &Token) -> bool {
    !token.is_space() && !token.is_punct()
}

/// First word token at or after `from`, within `range`.
fn first_word(doc: &Doc, from: usize, range: &Range<usize>) -> Option<usize> {
    (from..range.end).find(|&i| is_word(&doc.tokens()[i]))
}

/// Positions for sentence case.
///
/// Returns the first word of every sentence, and the words to lowercase
/// outright: every alphabetic word but the first in a sentence written
/// entirely in capitals or entirely in title case.
pub(super) fn sentence_positions(doc: &Doc) -> (HashSet<usize>, HashSet<usize>) {
    let mut starts = HashSet::new();
    let mut lowercase = HashSet::new();

    for sentence in doc.sentences() {
        let Some(first) = first_word(doc, sentence.start, &sentence) else {
            continue;
        };
        starts.insert(first);

        let words: Vec<usize> = sentence
            .clone()
            .filter(|&i| doc.tokens()[i].is_alpha())
            .collect();
        if words.is_empty() {
            continue;
        }
        let all_upper = words.iter().all(|&i| is_upper(&doc.tokens()[i].text));
        let all_title = words.len() > 1 && words.iter().all(|&i| is_title(&doc.tokens()[i].text));
        if all_upper || all_title {
            lowercase.extend(words.into_iter().filter(|&i| i != first));
        }
    }
    (starts, lowercase)
}

/// Positions for start case: every word.
pub(super) fn start_positions(doc: &Doc) -> HashSet<usize> {
    (0..doc.len()).filter(|&i| is_word(&doc.tokens()[i])).collect()
}

/// Positions for title case within `range`.
///
/// The first word of the range and of each sentence, the first word after
/// a colon or opening quote, long words, words whose tag is not a minor
/// function-word tag, and the last word. Lowercase particles and clitic
/// suffixes are only capitalized by position.
pub(super) fn title_positions(doc: &Doc, range: Range<usize>) -> HashSet<usize> {
    let mut positions = HashSet::new();

    for i in range.clone() {
        let token = &doc.tokens()[i];
        if i == range.start || token.is_sent_start {
            positions.extend(first_word(doc, i, &range));
        } else if is_opener(&token.text) {
            if i + 1 < range.end {
                positions.extend(first_word(doc, i + 1, &range));
            }
        } else if capitalized_for_title(token) {
            positions.insert(i);
        }
    }

    if let Some(last) = range.clone().rev().find(|&i| is_word(&doc.tokens()[i])) {
        positions.insert(last);
    }
    positions
}

fn is_opener(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c == ':' || OPEN_QUOTES.contains(&c),
        _ => false,
    }
}

fn capitalized_for_title(token: &Token) -> bool {
    let lexicon = lexicon::get();
    if lexicon.lowercase_particles.contains(token.lower().as_str())
        || lexicon.is_contraction_suffix(&token.text)
    {
        return false;
    }
    if token.text.chars().count() >= grammar::TITLE_CASE_MIN_LENGTH {
        return true;
    }
    !grammar::TITLE_CASE_TAG_EXCEPTIONS.contains(&token.tag.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::PosCategory::*;
    use crate::oracle::fixture::doc;

    #[test]
    fn test_title_positions_skip_function_words() {
        let d = doc(&[
            ("the", " ", Det, "DT"),
            ("lord", " ", Noun, "NN"),
            ("of", " ", Adp, "IN"),
            ("the", " ", Det, "DT"),
            ("rings", "", Noun, "NNS"),
        ]);
        let positions = title_positions(&d, 0..d.len());
        assert_eq!(positions, HashSet::from([0, 1, 4]));
    }

    #[test]
    fn test_title_positions_after_colon() {
        let d = doc(&[
            ("war", "", Noun, "NN"),
            (":", " ", Punct, ":"),
            ("a", " ", Det, "DT"),
            ("story", "", Noun, "NN"),
        ]);
        let positions = title_positions(&d, 0..d.len());
        assert!(positions.contains(&2));
    }

    #[test]
    fn test_title_positions_particles_lowercase() {
        let d = doc(&[
            ("charles", " ", Propn, "NNP"),
            ("de", " ", Propn, "NNP"),
            ("gaulle", "", Propn, "NNP"),
        ]);
        let positions = title_positions(&d, 0..d.len());
        assert_eq!(positions, HashSet::from([0, 2]));
    }

    #[test]
    fn test_sentence_positions_all_caps() {
        let d = doc(&[
            ("HELLO", " ", Intj, "UH"),
            ("THERE", " ", Adv, "RB"),
            ("FRIEND", "", Noun, "NN"),
        ]);
        let (starts, lowercase) = sentence_positions(&d);
        assert_eq!(starts, HashSet::from([0]));
        assert_eq!(lowercase, HashSet::from([1, 2]));
    }

    #[test]
    fn test_sentence_positions_single_title_word() {
        let d = doc(&[("Hello", "", Intj, "UH"), ("!", "", Punct, ".")]);
        let (starts, lowercase) = sentence_positions(&d);
        assert_eq!(starts, HashSet::from([0]));
        assert!(lowercase.is_empty());
    }

    #[test]
    fn test_start_positions_skip_punctuation() {
        let d = doc(&[("hi", "", Intj, "UH"), (",", " ", Punct, ","), ("you", "", Pron, "PRP")]);
        assert_eq!(start_positions(&d), HashSet::from([0, 2]));
    }
}
