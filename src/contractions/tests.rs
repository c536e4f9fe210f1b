// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::oracle::PosCategory::*;
use crate::oracle::RuleTagger;
use crate::oracle::fixture::doc;

fn expand(text: &str) -> String {
    expand_contractions(text, &RuleTagger::new().unwrap())
}

/// Rebuilds `d` with `(token, dep, head)` arcs applied.
fn with_arcs(d: Doc, arcs: &[(usize, &str, usize)]) -> Doc {
    let mut tokens = d.tokens().to_vec();
    for &(i, dep, head) in arcs {
        tokens[i].dep = dep.to_string();
        tokens[i].head = head;
    }
    Doc::new(d.text().to_string(), tokens, d.ents().to_vec())
}

// ========== Casing ==========

#[test]
fn test_expansion_casing() {
    assert_eq!(apply_expansion_casing("DON'T", "do not"), "DO NOT");
    assert_eq!(apply_expansion_casing("Don't", "do not"), "Do not");
    assert_eq!(apply_expansion_casing("don't", "do not"), "do not");
    assert_eq!(apply_expansion_casing("Ya Know", "you know"), "You Know");
    assert_eq!(apply_expansion_casing("I'm", "I am"), "I am");
}

#[test]
fn test_expand_keeps_casing() {
    assert_eq!(expand("DON'T STOP"), "DO NOT STOP");
    assert_eq!(expand("Don't stop"), "Do not stop");
    assert_eq!(expand("I don't know"), "I do not know");
}

// ========== Unambiguous ==========

#[test]
fn test_unambiguous_lookup() {
    assert_eq!(expand("I'm sure y'all are gonna win"), "I am sure you all are going to win");
}

#[test]
fn test_longest_contraction_wins() {
    assert_eq!(expand("I can't've known"), "I cannot have known");
}

#[test]
fn test_curly_apostrophe() {
    assert_eq!(expand("don\u{2019}t go"), "do not go");
}

#[test]
fn test_text_without_contractions() {
    assert_eq!(expand("Nothing to see here."), "Nothing to see here.");
}

// ========== Negation ==========

#[test]
fn test_negation_base_verb() {
    assert_eq!(negative_to_base_verb("won't").as_deref(), Some("will"));
    assert_eq!(negative_to_base_verb("Can't").as_deref(), Some("can"));
    assert_eq!(negative_to_base_verb("shouldn't").as_deref(), Some("should"));
}

#[test]
fn test_negation_without_subject() {
    assert_eq!(expand("Won't."), "Will not.");
    assert_eq!(expand("Don't!"), "Do not!");
}

#[test]
fn test_inverted_negation_moves_subject() {
    assert_eq!(expand("Don't you dare"), "Do you not dare");
}

#[test]
fn test_inverted_negation_then_contraction() {
    assert_eq!(expand("Don't you know it's late"), "Do you not know it is late");
}

#[test]
fn test_inverted_negation_with_dependency_subtree() {
    let d = with_arcs(
        doc(&[
            ("Do", "", Aux, "VBP"),
            ("n't", " ", Part, "RB"),
            ("the", " ", Det, "DT"),
            ("big", " ", Adj, "JJ"),
            ("dogs", " ", Noun, "NNS"),
            ("bark", "", Verb, "VB"),
        ]),
        &[(4, "nsubj", 0), (2, "det", 4), (3, "amod", 4)],
    );
    assert_eq!(expand_doc(&d), "Do the big dogs not bark");
}

// ========== Ain't ==========

#[test]
fn test_ain_t_by_subject() {
    assert_eq!(expand("She ain't here"), "She is not here");
    assert_eq!(expand("They ain't ready"), "They are not ready");
    assert_eq!(expand("I ain't sure"), "I am not sure");
}

#[test]
fn test_ain_t_before_participle() {
    assert_eq!(expand("I ain't eaten"), "I have not eaten");
    assert_eq!(expand("He ain't eaten"), "He has not eaten");
}

// ========== 's and 'd ==========

#[test]
fn test_s_is_or_has() {
    assert_eq!(expand("He's eaten"), "He has eaten");
    assert_eq!(expand("He's tall"), "He is tall");
    assert_eq!(expand("It's"), "It is");
}

#[test]
fn test_let_s() {
    assert_eq!(expand("Let's go"), "Let us go");
}

#[test]
fn test_let_s_at_end_of_text() {
    assert_eq!(expand("Let's"), "Let us");
    assert_eq!(expand("OK, let's"), "OK, let us");
    assert_eq!(expand("Let's."), "Let us.");
}

#[test]
fn test_s_in_question() {
    assert_eq!(expand("What's she eaten?"), "What has she eaten?");
}

#[test]
fn test_d_had_or_would() {
    assert_eq!(expand("I'd better go"), "I had better go");
    assert_eq!(expand("She'd eaten"), "She had eaten");
    assert_eq!(expand("I'd rather stay"), "I would rather stay");
    assert_eq!(expand("I'd like that"), "I would like that");
}

#[test]
fn test_d_in_question() {
    assert_eq!(expand("Where'd you go?"), "Where did you go?");
}

// ========== Whatcha ==========

#[test]
fn test_whatcha() {
    assert_eq!(expand("Whatcha doing?"), "What are you doing?");
    assert_eq!(expand("Whatcha got?"), "What have you got?");
    assert_eq!(expand("Whatcha want?"), "What do you want?");
}

#[test]
fn test_unresolved_whatcha_kept() {
    assert_eq!(expand("I know whatcha"), "I know whatcha");
}

// ========== Subject search ==========

#[test]
fn test_find_subject_positional() {
    let d = doc(&[
        ("he", " ", Pron, "PRP"),
        ("said", " ", Verb, "VBD"),
        ("dogs", " ", Noun, "NNS"),
        ("do", "", Aux, "VBP"),
        ("n't", " ", Part, "RB"),
        ("bark", "", Verb, "VB"),
    ]);
    assert_eq!(find_subject(&d, 3), Some(2));
}

#[test]
fn test_find_subject_prefers_dependency_arcs() {
    let d = with_arcs(
        doc(&[
            ("he", " ", Pron, "PRP"),
            ("said", " ", Verb, "VBD"),
            ("dogs", " ", Noun, "NNS"),
            ("do", "", Aux, "VBP"),
            ("n't", " ", Part, "RB"),
            ("bark", "", Verb, "VB"),
        ]),
        &[(0, "nsubj", 3)],
    );
    assert_eq!(find_subject(&d, 3), Some(0));
}

#[test]
fn test_find_subject_stops_at_punctuation() {
    let d = doc(&[("Do", "", Aux, "VBP"), ("n't", "", Part, "RB"), ("!", "", Punct, ".")]);
    assert_eq!(find_subject(&d, 0), None);
}
