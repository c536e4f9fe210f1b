// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Entity spans for document casing.
//!
//! Spans come from three sources, in priority order: fixed casings from the
//! lexicon (plus any configured extras), context-dependent casings whose
//! conditions hold, and entities the oracle detected with a proper-noun
//! label. A lower-priority span touching a token already claimed by a
//! higher-priority one is dropped whole.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::Range;

use regex::Regex;
use tracing::{debug, trace};

use super::CasingOptions;
use crate::lexicon::{self, ContextRule, is_word_char, normalize, words_pattern};
use crate::oracle::Doc;

/// Where an entity span came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitySource {
    Absolute,
    Contextual,
    Model,
}

/// An entity span in the merged map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityEntry {
    /// First token index.
    pub start: usize,
    /// One past the last token index.
    pub end: usize,
    /// The forced casing, or `None` to title-case the span's tokens.
    pub casing: Option<String>,
    pub source: EntitySource,
}

impl EntityEntry {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Builds the merged entity map for `doc`, keyed by start token index.
pub fn map_all_entities(doc: &Doc, options: &CasingOptions) -> BTreeMap<usize, EntityEntry> {
    let mut map = map_custom_entities(doc, options);
    let claimed: HashSet<usize> = map.values().flat_map(EntityEntry::range).collect();

    let lexicon = lexicon::get();
    for ent in doc.ents() {
        if !lexicon.proper_noun_entities.contains(ent.label.as_str()) {
            continue;
        }
        if (ent.start..ent.end).any(|i| claimed.contains(&i)) {
            trace!(
                entity = doc.span_text(ent.start..ent.end),
                label = %ent.label,
                "dropping model entity overlapping a lexicon entity"
            );
            continue;
        }
        map.insert(
            ent.start,
            EntityEntry {
                start: ent.start,
                end: ent.end,
                casing: None,
                source: EntitySource::Model,
            },
        );
    }
    debug!(entities = map.len(), "mapped entities");
    map
}

fn map_custom_entities(doc: &Doc, options: &CasingOptions) -> BTreeMap<usize, EntityEntry> {
    let lexicon = lexicon::get();
    let extra: HashMap<String, &str> = options
        .extra_absolute
        .iter()
        .map(|(key, casing)| (normalize(key), casing.as_str()))
        .collect();

    let custom_pattern;
    let pattern: &Regex = if extra.is_empty() {
        &lexicon.entity_pattern
    } else {
        let keys = lexicon
            .absolute_casings
            .keys()
            .chain(lexicon.contextual_casings.keys())
            .copied()
            .chain(extra.keys().map(String::as_str));
        match words_pattern(keys) {
            Ok(built) => {
                custom_pattern = built;
                &custom_pattern
            }
            Err(err) => {
                debug!(%err, "configured entity keys rejected; using built-in keys");
                &lexicon.entity_pattern
            }
        }
    };

    let mut map = BTreeMap::new();
    for found in pattern.find_iter(doc.text()) {
        let Some(span) = doc.char_span(found.start(), found.end()) else {
            trace!(text = found.as_str(), "entity match does not align with tokens");
            continue;
        };
        let key = normalize(found.as_str());

        let (casing, source) = if let Some(casing) = extra.get(key.as_str()) {
            (Some(casing.to_string()), EntitySource::Absolute)
        } else if let Some(casing) = lexicon.absolute_casings.get(key.as_str()) {
            (Some(casing.to_string()), EntitySource::Absolute)
        } else if let Some(rules) = lexicon.contextual_casings.get(key.as_str()) {
            (
                contextual_casing(doc, span.clone(), rules, options.context_window),
                EntitySource::Contextual,
            )
        } else {
            (None, EntitySource::Absolute)
        };

        if let Some(casing) = casing {
            map.insert(
                span.start,
                EntityEntry {
                    start: span.start,
                    end: span.end,
                    casing: Some(casing),
                    source,
                },
            );
        }
    }
    map
}

/// Returns the casing of the first rule whose conditions hold for `span`.
///
/// A rule holds when the span's coarse tags equal one of its sequences, or
/// when one of its phrases appears within its window on either side. A rule
/// with neither condition always holds.
fn contextual_casing(
    doc: &Doc,
    span: Range<usize>,
    rules: &[ContextRule],
    default_window: usize,
) -> Option<String> {
    let tags: Vec<&str> = doc.tokens()[span.clone()]
        .iter()
        .map(|token| token.pos.as_str())
        .collect();

    for rule in rules {
        if rule.pos_sequences.iter().any(|sequence| *sequence == tags.as_slice()) {
            return Some(rule.casing.to_string());
        }
        if !rule.ngrams.is_empty() {
            let window = rule.context_window.unwrap_or(default_window);
            if ngrams_nearby(doc, span.clone(), rule.ngrams, window) {
                return Some(rule.casing.to_string());
            }
        }
        if rule.pos_sequences.is_empty() && rule.ngrams.is_empty() {
            return Some(rule.casing.to_string());
        }
    }
    trace!(entity = doc.span_text(span), "no contextual rule applies");
    None
}

fn ngrams_nearby(doc: &Doc, span: Range<usize>, ngrams: &[&str], window: usize) -> bool {
    let left = doc
        .span_text(span.start.saturating_sub(window)..span.start)
        .to_lowercase();
    let right = doc
        .span_text(span.end..(span.end + window).min(doc.len()))
        .to_lowercase();

    ngrams.iter().any(|ngram| {
        let ngram = ngram.to_lowercase();
        contains_word(&left, &ngram) || contains_word(&right, &ngram)
    })
}

/// True if `needle` occurs in `haystack` without a word character directly
/// on either side.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(at, _)| {
        let before = haystack[..at].chars().next_back();
        let after = haystack[at + needle.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}
