// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::oracle::PosCategory::*;
use crate::oracle::fixture::doc;
use crate::oracle::{Doc, EntitySpan, RuleTagger};

fn tagger() -> RuleTagger {
    RuleTagger::new().unwrap()
}

fn with_ents(d: Doc, ents: &[(usize, usize, &str)]) -> Doc {
    let ents = ents
        .iter()
        .map(|&(start, end, label)| EntitySpan {
            start,
            end,
            label: label.to_string(),
        })
        .collect();
    Doc::new(d.text().to_string(), d.tokens().to_vec(), ents)
}

// ========== Separator case ==========

#[test]
fn test_snake_case_from_kebab() {
    assert_eq!(to_snake_case("convert-to-kebab"), "convert_to_kebab");
}

#[test]
fn test_snake_case_from_camel() {
    assert_eq!(to_snake_case("convertToCamel"), "convert_to_camel");
    assert_eq!(to_snake_case("ParseHTTPResponse"), "parse_http_response");
}

#[test]
fn test_separator_case_from_words() {
    assert_eq!(to_kebab_case("Hello World"), "hello-world");
    assert_eq!(to_dot_case("snake_case_text"), "snake.case.text");
    assert_eq!(to_snake_case("Don't Stop"), "dont_stop");
}

#[test]
fn test_separator_case_keeps_punctuation_spacing() {
    assert_eq!(to_snake_case("Hello, World"), "hello, world");
}

#[test]
fn test_separator_case_idempotent() {
    let inputs = [
        "Hello World",
        "convertToCamel",
        "already_snake",
        "mixed-case words.here",
        "Numbers 42 and 7",
    ];
    for separator in [CaseSeparator::Dot, CaseSeparator::Kebab, CaseSeparator::Snake] {
        for input in inputs {
            let once = to_separator_case(input, separator);
            assert_eq!(to_separator_case(&once, separator), once, "{input:?} {separator:?}");
        }
    }
}

// ========== Pascal and camel case ==========

#[test]
fn test_pascal_case() {
    assert_eq!(to_pascal_case("hello world"), "HelloWorld");
    assert_eq!(to_pascal_case("convert-to-pascal"), "ConvertToPascal");
    assert_eq!(to_pascal_case("alreadyCamel"), "AlreadyCamel");
    assert_eq!(to_pascal_case("don't stop"), "DontStop");
}

#[test]
fn test_pascal_case_keeps_phrases_apart() {
    assert_eq!(to_pascal_case("hello, world"), "Hello, World");
}

#[test]
fn test_pascal_case_uses_lexicon() {
    assert_eq!(to_pascal_case("nasa launch"), "NASALaunch");
}

#[test]
fn test_camel_case() {
    assert_eq!(to_camel_case("hello world"), "helloWorld");
    assert_eq!(to_camel_case("snake_case_words"), "snakeCaseWords");
    assert_eq!(to_camel_case("PascalCase"), "pascalCase");
}

// ========== Entity map ==========

#[test]
fn test_absolute_entity_beats_model_entity() {
    let d = with_ents(
        doc(&[
            ("saw", " ", Verb, "VBD"),
            ("van", " ", Propn, "NNP"),
            ("gogh", "", Propn, "NNP"),
        ]),
        &[(2, 3, "PERSON")],
    );
    let map = map_all_entities(&d, &CasingOptions::default());
    assert_eq!(map.len(), 1);
    let entry = &map[&1];
    assert_eq!(entry.end, 3);
    assert_eq!(entry.casing.as_deref(), Some("van Gogh"));
    assert_eq!(entry.source, EntitySource::Absolute);
}

#[test]
fn test_model_entity_kept_without_conflict() {
    let d = with_ents(
        doc(&[("visit", " ", Verb, "VB"), ("paris", "", Propn, "NNP")]),
        &[(1, 2, "GPE")],
    );
    let map = map_all_entities(&d, &CasingOptions::default());
    assert_eq!(map[&1].source, EntitySource::Model);
    assert_eq!(map[&1].casing, None);
}

#[test]
fn test_model_entity_needs_proper_noun_label() {
    let d = with_ents(
        doc(&[("next", " ", Adj, "JJ"), ("week", "", Noun, "NN")]),
        &[(0, 2, "DATE")],
    );
    assert!(map_all_entities(&d, &CasingOptions::default()).is_empty());
}

#[test]
fn test_contextual_entity_by_tag_sequence() {
    let proper = doc(&[("in", " ", Adp, "IN"), ("may", "", Propn, "NNP")]);
    let map = map_all_entities(&proper, &CasingOptions::default());
    assert_eq!(map[&1].casing.as_deref(), Some("May"));
    assert_eq!(map[&1].source, EntitySource::Contextual);

    let modal = doc(&[("it", " ", Pron, "PRP"), ("may", " ", Aux, "MD"), ("rain", "", Verb, "VB")]);
    assert!(map_all_entities(&modal, &CasingOptions::default()).is_empty());
}

#[test]
fn test_contextual_entity_by_nearby_words() {
    let d = doc(&[
        ("my", " ", Pron, "PRP$"),
        ("amazon", " ", Noun, "NN"),
        ("prime", " ", Adj, "JJ"),
        ("order", "", Noun, "NN"),
    ]);
    let map = map_all_entities(&d, &CasingOptions::default());
    assert_eq!(map[&1].casing.as_deref(), Some("Amazon"));
}

#[test]
fn test_contextual_entity_beats_overlapping_model_entity() {
    let d = with_ents(
        doc(&[
            ("my", " ", Pron, "PRP$"),
            ("amazon", " ", Noun, "NN"),
            ("prime", " ", Adj, "JJ"),
            ("order", "", Noun, "NN"),
        ]),
        &[(1, 3, "ORG")],
    );
    let map = map_all_entities(&d, &CasingOptions::default());
    assert_eq!(map.len(), 1);
    let entry = &map[&1];
    assert_eq!(entry.end, 2);
    assert_eq!(entry.source, EntitySource::Contextual);
    assert_eq!(entry.casing.as_deref(), Some("Amazon"));
    assert!(!map.values().any(|e| e.source == EntitySource::Model));
}

#[test]
fn test_model_entity_kept_when_context_fails() {
    let d = with_ents(
        doc(&[("eat", " ", Verb, "VB"), ("an", " ", Det, "DT"), ("apple", "", Noun, "NN")]),
        &[(2, 3, "ORG")],
    );
    let map = map_all_entities(&d, &CasingOptions::default());
    assert_eq!(map.len(), 1);
    assert_eq!(map[&2].source, EntitySource::Model);
    assert_eq!(map[&2].casing, None);
}

#[test]
fn test_configured_absolute_entity() {
    let d = doc(&[("ask", " ", Verb, "VB"), ("textwarp", "", Noun, "NN")]);
    let options = CasingOptions {
        extra_absolute: vec![("TextWarp".to_string(), "textWarp".to_string())],
        ..CasingOptions::default()
    };
    let map = map_all_entities(&d, &options);
    assert_eq!(map[&1].casing.as_deref(), Some("textWarp"));
}

// ========== Document casing ==========

#[test]
fn test_title_case_minor_words() {
    assert_eq!(to_title_case("the lord of the rings", &tagger()), "The Lord of the Rings");
}

#[test]
fn test_title_case_keeps_contraction_suffix() {
    let d = doc(&[("do", "", Aux, "VBP"), ("n't", " ", Part, "RB"), ("stop", "", Verb, "VB")]);
    assert_eq!(case_doc(&d, Casing::Title, &CasingOptions::default()), "Don't Stop");
}

#[test]
fn test_title_case_model_entity() {
    let d = with_ents(
        doc(&[
            ("meeting", " ", Noun, "NN"),
            ("charles", " ", Propn, "NNP"),
            ("de", " ", Propn, "NNP"),
            ("gaulle", "", Propn, "NNP"),
        ]),
        &[(1, 4, "PERSON")],
    );
    assert_eq!(
        case_doc(&d, Casing::Sentence, &CasingOptions::default()),
        "Meeting Charles de Gaulle"
    );
}

#[test]
fn test_sentence_case_from_all_caps() {
    assert_eq!(
        to_sentence_case("HELLO THERE. HOW ARE YOU?", &tagger()),
        "Hello there. How are you?"
    );
}

#[test]
fn test_sentence_case_lowercases_shouting_suffix() {
    let d = doc(&[
        ("DO", "", Aux, "VBP"),
        ("N'T", " ", Part, "RB"),
        ("STOP", "", Verb, "VB"),
        (".", "", Punct, "."),
    ]);
    assert_eq!(case_doc(&d, Casing::Sentence, &CasingOptions::default()), "Don't stop.");
}

#[test]
fn test_sentence_case_keeps_known_casings() {
    assert_eq!(
        to_sentence_case("the nasa launch was delayed.", &tagger()),
        "The NASA launch was delayed."
    );
    assert_eq!(to_sentence_case("i love my iphone.", &tagger()), "I love my iPhone.");
}

#[test]
fn test_sentence_case_keeps_ok() {
    assert_eq!(capitalize_word("ok", true), "OK");
    assert_eq!(to_sentence_case("i'm HERE now. OK", &tagger()), "I'm here now. OK");
}

#[test]
fn test_sentence_case_preserves_mixed_case() {
    let d = doc(&[
        ("visit", " ", Verb, "VB"),
        ("McDonald", " ", Propn, "NNP"),
        ("farm", "", Noun, "NN"),
    ]);
    assert_eq!(
        case_doc(&d, Casing::Sentence, &CasingOptions::default()),
        "Visit McDonald farm"
    );
}

#[test]
fn test_start_case() {
    assert_eq!(to_start_case("hello there, old friend", &tagger()), "Hello There, Old Friend");
}

#[test]
fn test_start_case_uses_absolute_entity() {
    assert_eq!(to_start_case("a van gogh painting", &tagger()), "A van Gogh Painting");
}
