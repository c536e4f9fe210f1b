// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! A deterministic, rule-based tagger.
//!
//! Text is split the way statistical English tokenizers split it: leading
//! and trailing punctuation, infix hyphens and dashes, and clitics such as
//! `n't` and `'s` become tokens of their own. Tags come from closed word
//! classes and suffix heuristics, sentence starts follow terminal
//! punctuation and line breaks, and entities come from a gazetteer. No
//! dependency parse is produced: every token is its own head.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use regex::Regex;
use tracing::trace;

use super::{Doc, EntitySpan, PosCategory, Token, Tokenizer};
use crate::lexicon::{self, APOSTROPHES, entities, tagger as words};

const PREFIX_PUNCT: &[char] = &[
    '"', '\'', '\u{201C}', '\u{2018}', '(', '[', '{', '\u{BF}', '\u{A1}', '\u{AB}', '*',
];
const SUFFIX_PUNCT: &[char] = &[
    '.', ',', '!', '?', ';', ':', ')', ']', '}', '"', '\'', '\u{201D}', '\u{2019}', '\u{2026}',
    '%', '*', '\u{BB}',
];
const CLOSING_PUNCT: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', ')', ']', '}', '\u{BB}'];
const TERMINALS: &[char] = &['.', '!', '?', '\u{2026}'];

/// Clitics split off the end of a word, checked in order. `'` stands for
/// any apostrophe.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Words after which `'s` is a form of "is" or "has".
const S_HOSTS: &[&str] = &[
    "everybody", "everyone", "he", "here", "how", "it", "nobody", "she", "somebody", "someone",
    "that", "there", "this", "what", "when", "where", "who", "why",
];

/// Auxiliaries after which a past-tense form reads as a participle.
const PERFECT_OR_PASSIVE: &[&str] = &[
    "'d", "'m", "'re", "'ve", "am", "are", "be", "been", "being", "had", "has", "have", "having",
    "is", "was", "were",
];

#[derive(Debug)]
enum Piece {
    Word(Range<usize>),
    Space(Range<usize>),
}

/// The built-in [`Tokenizer`].
#[derive(Debug)]
pub struct RuleTagger {
    words: HashMap<&'static str, (&'static str, PosCategory)>,
    abbreviations: HashSet<String>,
    proper_candidates: HashSet<&'static str>,
    gazetteer: Vec<(Vec<&'static str>, &'static str)>,
    number: Regex,
    ordinal: Regex,
    initials: Regex,
}

fn insert_all(
    map: &mut HashMap<&'static str, (&'static str, PosCategory)>,
    list: &[&'static str],
    tag: &'static str,
    pos: PosCategory,
) {
    for &word in list {
        map.entry(word).or_insert((tag, pos));
    }
}

impl RuleTagger {
    pub fn new() -> Result<Self, regex::Error> {
        use PosCategory::*;

        let mut map = HashMap::new();
        map.insert("to", ("TO", Part));
        map.insert("not", ("RB", Part));
        for &(word, tag) in words::AUXILIARIES {
            map.insert(word, (tag, Aux));
        }
        insert_all(&mut map, words::MODALS, "MD", Aux);
        insert_all(&mut map, words::PERSONAL_PRONOUNS, "PRP", Pron);
        insert_all(&mut map, words::POSSESSIVE_PRONOUNS, "PRP$", Pron);
        insert_all(&mut map, words::WH_PRONOUNS, "WP", Pron);
        insert_all(&mut map, words::WH_DETERMINERS, "WDT", Det);
        insert_all(&mut map, words::WH_ADVERBS, "WRB", Adv);
        insert_all(&mut map, words::DETERMINERS, "DT", Det);
        insert_all(&mut map, words::COORDINATORS, "CC", Cconj);
        insert_all(&mut map, words::SUBORDINATORS, "IN", Sconj);
        insert_all(&mut map, words::PREPOSITIONS, "IN", Adp);
        insert_all(&mut map, words::ADVERBS, "RB", Adv);
        insert_all(&mut map, words::INTERJECTIONS, "UH", Intj);
        insert_all(&mut map, words::NUMBER_WORDS, "CD", Num);
        insert_all(&mut map, words::ADJECTIVES, "JJ", Adj);
        insert_all(&mut map, words::PAST_PARTICIPLES, "VBN", Verb);
        insert_all(&mut map, words::PAST_TENSE_VERBS, "VBD", Verb);
        insert_all(&mut map, words::BASE_VERBS, "VB", Verb);

        let mut gazetteer: Vec<(Vec<&'static str>, &'static str)> = entities::GAZETTEER
            .iter()
            .map(|&(phrase, label)| (phrase.split_whitespace().collect(), label))
            .collect();
        gazetteer.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Ok(Self {
            words: map,
            abbreviations: words::ABBREVIATIONS.iter().map(|&abbr| abbr.to_string()).collect(),
            proper_candidates: words::PROPER_NOUN_CANDIDATES.iter().copied().collect(),
            gazetteer,
            number: Regex::new(r"^[+-]?(?:\d+(?:[.,:]\d+)*|\.\d+)%?$")?,
            ordinal: Regex::new(r"(?i)^\d+(?:st|nd|rd|th)$")?,
            initials: Regex::new(r"^(?:[A-Za-z]\.)+$")?,
        })
    }

    /// Builds a tagger that also treats `extra` abbreviations ("approx.",
    /// "fig") as not ending a sentence. A missing trailing period is added.
    pub fn with_abbreviations<I, S>(extra: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tagger = Self::new()?;
        for abbr in extra {
            let mut abbr = abbr.as_ref().trim().to_lowercase();
            if abbr.is_empty() {
                continue;
            }
            if !abbr.ends_with('.') {
                abbr.push('.');
            }
            tagger.abbreviations.insert(abbr);
        }
        Ok(tagger)
    }

    // ========== Segmentation ==========

    fn segment(&self, text: &str) -> Vec<Piece> {
        let mut pieces = Vec::new();
        let mut chars = text.char_indices().peekable();
        while let Some(&(start, first)) = chars.peek() {
            let is_space = first.is_whitespace();
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_whitespace() != is_space {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            if is_space {
                pieces.push(Piece::Space(start..end));
            } else {
                self.split_chunk(text, start..end, &mut pieces);
            }
        }
        pieces
    }

    /// Splits a whitespace-free chunk into leading punctuation, a core and
    /// trailing punctuation.
    fn split_chunk(&self, text: &str, range: Range<usize>, out: &mut Vec<Piece>) {
        let (mut start, mut end) = (range.start, range.end);

        while let Some(c) = text[start..end].chars().next() {
            let rest = &text[start + c.len_utf8()..end];
            if !PREFIX_PUNCT.contains(&c) || rest.is_empty() {
                break;
            }
            if APOSTROPHES.contains(&c) && lexicon::get().starts_with_elision(rest) {
                break;
            }
            out.push(Piece::Word(start..start + c.len_utf8()));
            start += c.len_utf8();
        }

        let mut trailing = Vec::new();
        while let Some(c) = text[start..end].chars().next_back() {
            let word = &text[start..end];
            if !SUFFIX_PUNCT.contains(&c) || word.len() == c.len_utf8() {
                break;
            }
            if c == '.' && self.keeps_period(word) {
                break;
            }
            let mut cut = end - c.len_utf8();
            if TERMINALS.contains(&c) {
                // Keep runs such as "..." or "?!" together.
                while let Some(p) = text[start..cut].chars().next_back() {
                    if !TERMINALS.contains(&p) {
                        break;
                    }
                    cut -= p.len_utf8();
                }
            }
            trailing.push(cut..end);
            end = cut;
        }

        self.split_infixes(text, start..end, out);
        out.extend(trailing.into_iter().rev().map(Piece::Word));
    }

    fn keeps_period(&self, word: &str) -> bool {
        self.abbreviations.contains(word.to_lowercase().as_str()) || self.initials.is_match(word)
    }

    fn split_infixes(&self, text: &str, range: Range<usize>, out: &mut Vec<Piece>) {
        let word = &text[range.clone()];
        if word.is_empty() {
            return;
        }
        let chars: Vec<(usize, char)> = word.char_indices().collect();
        let mut piece_start = 0;
        let mut i = 0;
        while i < chars.len() {
            let (offset, c) = chars[i];
            let prev = i.checked_sub(1).map(|j| chars[j].1);
            let next = chars.get(i + 1).map(|&(_, c)| c);
            let between_digits = prev.is_some_and(|p| p.is_ascii_digit())
                && next.is_some_and(|n| n.is_ascii_digit());

            let split_to = if c == '-' && next == Some('-') {
                let mut j = i;
                while j < chars.len() && chars[j].1 == '-' {
                    j += 1;
                }
                Some(j)
            } else if matches!(c, '\u{2014}' | '\u{2013}' | '\u{2026}') {
                Some(i + 1)
            } else if c == '-'
                && prev.is_some_and(char::is_alphabetic)
                && next.is_some_and(char::is_alphabetic)
            {
                Some(i + 1)
            } else if matches!(c, '/' | ',' | ':' | ';') && i > 0 && next.is_some() && !between_digits
            {
                Some(i + 1)
            } else {
                None
            };

            match split_to {
                Some(j) => {
                    let split_end = chars.get(j).map_or(word.len(), |&(o, _)| o);
                    if piece_start < offset {
                        split_clitics(text, range.start + piece_start..range.start + offset, out);
                    }
                    out.push(Piece::Word(range.start + offset..range.start + split_end));
                    piece_start = split_end;
                    i = j;
                }
                None => i += 1,
            }
        }
        if piece_start < word.len() {
            split_clitics(text, range.start + piece_start..range.end, out);
        }
    }

    // ========== Tagging ==========

    fn lexical_tag(&self, token: &Token) -> (&'static str, PosCategory) {
        use PosCategory::*;

        let text = token.text.as_str();
        if token.is_punct() {
            return (punct_tag(text), Punct);
        }
        let lower = lexicon::normalize(text);
        match lower.as_str() {
            "n't" => return ("RB", Part),
            "'ll" | "'d" => return ("MD", Aux),
            "'re" | "'m" => return ("VBP", Aux),
            "'ve" => return ("VB", Aux),
            "'s" => return ("POS", Part),
            "i" => return ("PRP", Pron),
            _ => {}
        }
        if self.number.is_match(text) {
            return ("CD", Num);
        }
        if self.ordinal.is_match(text) {
            return ("JJ", Adj);
        }

        let capitalized =
            !token.is_sent_start && text.chars().next().is_some_and(char::is_uppercase);
        if capitalized && self.proper_candidates.contains(lower.as_str()) {
            return ("NNP", Propn);
        }
        if let Some(&tagged) = self.words.get(lower.as_str()) {
            return tagged;
        }
        if capitalized {
            return ("NNP", Propn);
        }
        if !text.chars().any(char::is_alphabetic) {
            return if text.chars().any(|c| c.is_ascii_digit()) {
                ("CD", Num)
            } else {
                ("SYM", Sym)
            };
        }

        let length = lower.chars().count();
        if lower.ends_with("ing") && length > 4 && !words::ING_EXCEPTIONS.contains(&lower.as_str())
        {
            ("VBG", Verb)
        } else if lower.ends_with("ed") && length > 3 {
            ("VBD", Verb)
        } else if lower.ends_with("ly") && length > 3 && !words::LY_EXCEPTIONS.contains(&lower.as_str())
        {
            ("RB", Adv)
        } else if words::ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix) && length > suffix.len() + 2)
        {
            ("JJ", Adj)
        } else if self.is_third_person_verb(&lower) {
            ("VBZ", Verb)
        } else if lower.ends_with('s')
            && length > 3
            && !["ss", "us", "is"].iter().any(|end| lower.ends_with(end))
        {
            ("NNS", Noun)
        } else {
            ("NN", Noun)
        }
    }

    fn is_third_person_verb(&self, lower: &str) -> bool {
        let is_base = |stem: &str| matches!(self.words.get(stem), Some(&(_, PosCategory::Verb)));
        lower.strip_suffix("es").is_some_and(is_base) || lower.strip_suffix('s').is_some_and(is_base)
    }

    /// Revises tags that depend on neighbouring tokens.
    fn apply_context(&self, tokens: &mut [Token]) {
        use PosCategory::*;

        for i in 0..tokens.len() {
            let lower = lexicon::normalize(&tokens[i].text);
            let prev = previous_word(tokens, i).map(|p| lexicon::normalize(&tokens[p].text));
            let next = next_word(tokens, i);
            let next_lower = next.map(|n| lexicon::normalize(&tokens[n].text));

            let revised = match lower.as_str() {
                "'s" if prev.as_deref() == Some("let") => Some(("PRP", Pron)),
                "'s" if prev.as_deref().is_some_and(|p| S_HOSTS.contains(&p)) => {
                    Some(("VBZ", Aux))
                }
                "'s" if next.is_some_and(|n| matches!(tokens[n].tag.as_str(), "VBN" | "VBG"))
                    || next_lower
                        .as_deref()
                        .is_some_and(|n| ["been", "going", "gone", "got", "not"].contains(&n)) =>
                {
                    Some(("VBZ", Aux))
                }
                "there"
                    if next_lower.as_deref().is_some_and(|n| {
                        ["'d", "'ll", "'re", "'s", "are", "is", "was", "were"].contains(&n)
                    }) =>
                {
                    Some(("EX", Pron))
                }
                _ => None,
            };
            if let Some((tag, pos)) = revised {
                tokens[i].tag = tag.to_string();
                tokens[i].pos = pos;
            }
        }

        for i in 0..tokens.len() {
            if tokens[i].tag != "VBD" {
                continue;
            }
            let mut j = previous_word(tokens, i);
            while let Some(p) = j {
                if matches!(tokens[p].pos, Adv | Part) && tokens[p].tag != "POS" {
                    j = previous_word(tokens, p);
                } else {
                    break;
                }
            }
            let after_auxiliary = j.is_some_and(|p| {
                let word = lexicon::normalize(&tokens[p].text);
                PERFECT_OR_PASSIVE.contains(&word.as_str())
                    || (word == "'s" && tokens[p].tag == "VBZ")
            });
            if after_auxiliary {
                tokens[i].tag = "VBN".to_string();
            }
        }
    }

    fn find_entities(&self, tokens: &mut [Token]) -> Vec<EntitySpan> {
        let mut ents = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if tokens[i].is_space() || tokens[i].is_punct() {
                i += 1;
                continue;
            }
            let found = self.gazetteer.iter().find(|(phrase, _)| {
                phrase.len() <= tokens.len() - i
                    && phrase
                        .iter()
                        .zip(&tokens[i..])
                        .all(|(word, token)| token.lower() == *word)
            });
            let Some((phrase, label)) = found else {
                i += 1;
                continue;
            };
            let end = i + phrase.len();
            if lexicon::get().proper_noun_entities.contains(label) {
                for token in &mut tokens[i..end] {
                    if matches!(token.tag.as_str(), "NN" | "NNS" | "JJ") {
                        token.tag = "NNP".to_string();
                        token.pos = PosCategory::Propn;
                    }
                }
            }
            ents.push(EntitySpan {
                start: i,
                end,
                label: label.to_string(),
            });
            i = end;
        }
        ents
    }
}

impl Tokenizer for RuleTagger {
    fn analyze(&self, text: &str) -> Doc {
        let mut tokens = assemble(text, self.segment(text));
        mark_sentence_starts(&mut tokens);
        for i in 0..tokens.len() {
            if tokens[i].is_space() {
                continue;
            }
            let (tag, pos) = self.lexical_tag(&tokens[i]);
            tokens[i].tag = tag.to_string();
            tokens[i].pos = pos;
        }
        self.apply_context(&mut tokens);
        let ents = self.find_entities(&mut tokens);
        trace!(tokens = tokens.len(), entities = ents.len(), "analyzed text");
        Doc::new(text, tokens, ents)
    }
}

/// Splits trailing clitics off a word; `cannot` becomes `can` + `not`.
fn split_clitics(text: &str, range: Range<usize>, out: &mut Vec<Piece>) {
    let word = &text[range.clone()];
    if word.eq_ignore_ascii_case("cannot") {
        out.push(Piece::Word(range.start..range.start + 3));
        out.push(Piece::Word(range.start + 3..range.end));
        return;
    }
    let mut end = range.end;
    let mut clitics = Vec::new();
    while let Some(len) = clitic_len(&text[range.start..end]) {
        clitics.push(end - len..end);
        end -= len;
    }
    out.push(Piece::Word(range.start..end));
    out.extend(clitics.into_iter().rev().map(Piece::Word));
}

/// Byte length of the clitic ending `word`, if it has one and a non-empty
/// host remains.
fn clitic_len(word: &str) -> Option<usize> {
    let total = word.chars().count();
    CLITICS.iter().find_map(|clitic| {
        let k = clitic.chars().count();
        if total <= k {
            return None;
        }
        let tail: Vec<char> = word.chars().rev().take(k).collect();
        let matches = clitic.chars().rev().zip(&tail).all(|(expected, &c)| {
            if expected == '\'' {
                APOSTROPHES.contains(&c)
            } else {
                c.eq_ignore_ascii_case(&expected)
            }
        });
        matches.then(|| tail.iter().map(|c| c.len_utf8()).sum())
    })
}

fn assemble(text: &str, pieces: Vec<Piece>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Word(range) => tokens.push(new_token(text, range, PosCategory::X)),
            Piece::Space(range) => {
                let mut start = range.start;
                if let Some(prev) = tokens.last_mut()
                    && !prev.is_space()
                    && text[range.clone()].starts_with(' ')
                {
                    prev.whitespace.push(' ');
                    start += 1;
                }
                if start < range.end {
                    let mut token = new_token(text, start..range.end, PosCategory::Space);
                    token.tag = "_SP".to_string();
                    tokens.push(token);
                }
            }
        }
    }
    for (i, token) in tokens.iter_mut().enumerate() {
        token.head = i;
    }
    tokens
}

fn new_token(text: &str, range: Range<usize>, pos: PosCategory) -> Token {
    Token {
        text: text[range.clone()].to_string(),
        whitespace: String::new(),
        start: range.start,
        end: range.end,
        pos,
        tag: String::new(),
        dep: String::new(),
        head: 0,
        is_sent_start: false,
    }
}

fn mark_sentence_starts(tokens: &mut [Token]) {
    let mut pending = true;
    for i in 0..tokens.len() {
        if tokens[i].is_space() {
            if tokens[i].text.contains('\n') {
                pending = true;
            }
            continue;
        }
        if pending {
            let attached = i > 0 && !tokens[i - 1].is_space() && tokens[i - 1].whitespace.is_empty();
            let closing = tokens[i].text.chars().all(|c| CLOSING_PUNCT.contains(&c));
            if !(attached && closing) {
                tokens[i].is_sent_start = true;
                pending = false;
            }
        }
        let text = &tokens[i].text;
        if !text.is_empty() && text.chars().all(|c| TERMINALS.contains(&c)) {
            pending = true;
        }
    }
}

fn previous_word(tokens: &[Token], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !tokens[j].is_space())
}

fn next_word(tokens: &[Token], i: usize) -> Option<usize> {
    (i + 1..tokens.len()).find(|&j| !tokens[j].is_space())
}

fn punct_tag(text: &str) -> &'static str {
    match text {
        "," => ",",
        ":" | ";" | "--" | "\u{2014}" | "\u{2013}" => ":",
        "-" => "HYPH",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "\u{201C}" | "\u{2018}" => "``",
        "\"" | "'" | "\u{201D}" | "\u{2019}" => "''",
        _ if text.chars().all(|c| TERMINALS.contains(&c)) => ".",
        _ => "NFP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> Doc {
        RuleTagger::new().unwrap().analyze(text)
    }

    fn texts(doc: &Doc) -> Vec<&str> {
        doc.tokens().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokens_reproduce_text() {
        let text = "  \"Don't,\" she said...  Really?\nYes -- it's 'tis the U.S. way.";
        let doc = analyze(text);
        let rebuilt: String = doc
            .tokens()
            .iter()
            .map(|t| format!("{}{}", t.text, t.whitespace))
            .collect();
        assert_eq!(rebuilt, text);
        for token in doc.tokens() {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_split_negation_clitics() {
        assert_eq!(texts(&analyze("Don't go")), vec!["Do", "n't", "go"]);
        assert_eq!(texts(&analyze("can't")), vec!["ca", "n't"]);
        assert_eq!(texts(&analyze("ain\u{2019}t")), vec!["ai", "n\u{2019}t"]);
        assert_eq!(texts(&analyze("cannot")), vec!["can", "not"]);
    }

    #[test]
    fn test_split_stacked_clitics() {
        assert_eq!(texts(&analyze("can't've")), vec!["ca", "n't", "'ve"]);
        assert_eq!(texts(&analyze("he's")), vec!["he", "'s"]);
    }

    #[test]
    fn test_keep_elision_and_abbreviation() {
        assert_eq!(texts(&analyze("'tis Dr. Who")), vec!["'tis", "Dr.", "Who"]);
        assert_eq!(texts(&analyze("the '90s")), vec!["the", "'90s"]);
        assert_eq!(texts(&analyze("U.S.")), vec!["U.S."]);
    }

    #[test]
    fn test_split_punctuation_and_hyphens() {
        assert_eq!(
            texts(&analyze("(well-known)")),
            vec!["(", "well", "-", "known", ")"]
        );
        assert_eq!(texts(&analyze("Wait...")), vec!["Wait", "..."]);
    }

    #[test]
    fn test_whitespace_tokens() {
        let doc = analyze("a  b\nc");
        assert_eq!(texts(&doc), vec!["a", " ", "b", "\n", "c"]);
        assert_eq!(doc.tokens()[0].whitespace, " ");
        assert!(doc.tokens()[1].is_space());
    }

    #[test]
    fn test_sentence_starts() {
        let doc = analyze("Hello there. How are you?\nFine");
        let starts: Vec<&str> = doc
            .tokens()
            .iter()
            .filter(|t| t.is_sent_start)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(starts, vec!["Hello", "How", "Fine"]);
        assert_eq!(doc.sentences().len(), 3);
    }

    #[test]
    fn test_abbreviation_does_not_end_sentence() {
        let doc = analyze("Ask Dr. Smith.");
        assert_eq!(doc.sentences().len(), 1);
    }

    #[test]
    fn test_configured_abbreviation() {
        let text = "See fig. Two for details.";
        assert_eq!(analyze(text).sentences().len(), 2);
        let tagger = RuleTagger::with_abbreviations(["Fig"]).unwrap();
        assert_eq!(tagger.analyze(text).sentences().len(), 1);
    }

    #[test]
    fn test_closed_class_tags() {
        let doc = analyze("the dog of the house");
        let tags: Vec<&str> = doc.tokens().iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["DT", "NN", "IN", "DT", "NN"]);
    }

    #[test]
    fn test_participle_after_contracted_has() {
        let doc = analyze("He's finished");
        assert_eq!(doc.tokens()[1].tag, "VBZ");
        assert_eq!(doc.tokens()[2].tag, "VBN");
    }

    #[test]
    fn test_possessive_s() {
        let doc = analyze("John's car");
        assert_eq!(doc.tokens()[1].tag, "POS");
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper() {
        let doc = analyze("we met Alice in May");
        assert_eq!(doc.tokens()[2].pos, PosCategory::Propn);
        assert_eq!(doc.tokens()[4].pos, PosCategory::Propn);
        let doc = analyze("you may go");
        assert_eq!(doc.tokens()[1].tag, "MD");
    }

    #[test]
    fn test_gazetteer_entities() {
        let doc = analyze("I flew from new york to London.");
        let ents: Vec<(&str, &str)> = doc
            .ents()
            .iter()
            .map(|e| (doc.span_text(e.start..e.end), e.label.as_str()))
            .collect();
        assert_eq!(ents, vec![("new york", "GPE"), ("London", "GPE")]);
        assert_eq!(doc.tokens()[3].pos, PosCategory::Propn);
    }
}
