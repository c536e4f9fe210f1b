// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Tag sets and word classes used when disambiguating contractions and
//! choosing title-case positions.

/// Fine-grained tags for past participles and past-tense verbs.
pub const PARTICIPLE_TAGS: &[&str] = &["VBD", "VBN"];

/// Fine-grained tags that stay lowercase in title case when the word is
/// shorter than five characters.
pub const TITLE_CASE_TAG_EXCEPTIONS: &[&str] = &["CC", "DT", "IN", "RP", "TO", "WDT"];

/// Minimum length at which a word is capitalized in title case regardless
/// of its part of speech.
pub const TITLE_CASE_MIN_LENGTH: usize = 5;

/// Pronouns that take "has" rather than "have".
pub const SINGULAR_PRONOUNS: &[&str] = &["he", "it", "she"];

/// Words that open a question and invert the following auxiliary.
pub const WH_WORDS: &[&str] = &["how", "what", "when", "where", "who", "why"];

/// Adverbs that turn a following `'d` into "would".
pub const PREFERENCE_ADVERBS: &[&str] = &["rather", "sooner"];

/// Verbs that turn a preceding `'d` in a question into "would".
pub const PREFERENCE_VERBS: &[&str] = &["care", "like", "mind", "prefer"];

/// Dependency labels that mark a subject.
pub const SUBJECT_DEPS: &[&str] = &["nsubj", "nsubjpass"];

/// Tokens the subject search looks past when scanning forward from a verb.
pub const FORWARD_SCAN_LIMIT: usize = 6;

/// Coarse part-of-speech keys counted by the parts-of-speech analysis, with
/// their display names.
pub const POS_NAMES: &[(&str, &str)] = &[
    ("ADJ", "Adjectives"),
    ("ADP", "Adpositions"),
    ("ADV", "Adverbs"),
    ("CONJ", "Conjunctions"),
    ("DET", "Determiners"),
    ("NOUN", "Nouns"),
    ("NUM", "Numbers"),
    ("PART", "Particles"),
    ("PRON", "Pronouns"),
    ("VERB", "Verbs"),
    ("X", "Other"),
];
