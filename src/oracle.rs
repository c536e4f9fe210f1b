// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! The linguistic oracle: tokenization, tagging, sentence boundaries and
//! named entities.
//!
//! Context-sensitive transforms read a [`Doc`] produced by a [`Tokenizer`].
//! A `Doc` is an immutable snapshot: every token records its byte offsets
//! into the analysed text, and concatenating each token's text followed by
//! its trailing whitespace reproduces that text exactly.

mod rules;

use std::ops::Range;
use std::sync::OnceLock;

use tracing::debug;

use crate::WarpError;

pub use rules::RuleTagger;

/// Coarse (universal) part-of-speech categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCategory {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Space,
    Sym,
    Verb,
    X,
}

impl PosCategory {
    /// The conventional upper-case label, e.g. `PROPN`.
    pub fn as_str(self) -> &'static str {
        match self {
            PosCategory::Adj => "ADJ",
            PosCategory::Adp => "ADP",
            PosCategory::Adv => "ADV",
            PosCategory::Aux => "AUX",
            PosCategory::Cconj => "CCONJ",
            PosCategory::Det => "DET",
            PosCategory::Intj => "INTJ",
            PosCategory::Noun => "NOUN",
            PosCategory::Num => "NUM",
            PosCategory::Part => "PART",
            PosCategory::Pron => "PRON",
            PosCategory::Propn => "PROPN",
            PosCategory::Punct => "PUNCT",
            PosCategory::Sconj => "SCONJ",
            PosCategory::Space => "SPACE",
            PosCategory::Sym => "SYM",
            PosCategory::Verb => "VERB",
            PosCategory::X => "X",
        }
    }

    /// The key this category is counted under by the parts-of-speech
    /// analysis, or `None` for punctuation and whitespace.
    pub fn count_key(self) -> Option<&'static str> {
        match self {
            PosCategory::Adj => Some("ADJ"),
            PosCategory::Adp => Some("ADP"),
            PosCategory::Adv => Some("ADV"),
            PosCategory::Cconj | PosCategory::Sconj => Some("CONJ"),
            PosCategory::Det => Some("DET"),
            PosCategory::Noun | PosCategory::Propn => Some("NOUN"),
            PosCategory::Num => Some("NUM"),
            PosCategory::Part => Some("PART"),
            PosCategory::Pron => Some("PRON"),
            PosCategory::Verb | PosCategory::Aux => Some("VERB"),
            PosCategory::Intj | PosCategory::Sym | PosCategory::X => Some("X"),
            PosCategory::Punct | PosCategory::Space => None,
        }
    }
}

/// A single token of an analysed text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's text, exactly as it appears in the source.
    pub text: String,
    /// Whitespace immediately following the token (possibly empty).
    pub whitespace: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Coarse part of speech.
    pub pos: PosCategory,
    /// Fine-grained (Penn Treebank) tag.
    pub tag: String,
    /// Dependency label; empty when the oracle produced no parse.
    pub dep: String,
    /// Index of the syntactic head. A token that is its own head is a root.
    pub head: usize,
    /// True for the first token of a sentence.
    pub is_sent_start: bool,
}

impl Token {
    /// True if the token consists only of whitespace.
    pub fn is_space(&self) -> bool {
        self.pos == PosCategory::Space
    }

    /// True if the token consists only of punctuation characters.
    pub fn is_punct(&self) -> bool {
        !self.text.is_empty()
            && self
                .text
                .chars()
                .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
    }

    /// True if every character of the token is alphabetic.
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    /// The token's text lowercased.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// A labelled run of tokens recognized as a named entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// First token index.
    pub start: usize,
    /// One past the last token index.
    pub end: usize,
    pub label: String,
}

/// An analysed text: tokens with tags, sentence boundaries and entities.
#[derive(Debug, Clone, PartialEq)]
pub struct Doc {
    text: String,
    tokens: Vec<Token>,
    ents: Vec<EntitySpan>,
}

impl Doc {
    /// Assembles a document from already-analysed tokens.
    ///
    /// The first token always starts a sentence.
    pub fn new(text: impl Into<String>, mut tokens: Vec<Token>, ents: Vec<EntitySpan>) -> Self {
        if let Some(first) = tokens.first_mut() {
            first.is_sent_start = true;
        }
        Self {
            text: text.into(),
            tokens,
            ents,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn ents(&self) -> &[EntitySpan] {
        &self.ents
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Maps a byte range of the text to the token range covering exactly
    /// those bytes, or `None` if either end falls inside a token.
    pub fn char_span(&self, start: usize, end: usize) -> Option<Range<usize>> {
        if start >= end {
            return None;
        }
        let first = self.tokens.iter().position(|t| t.start == start)?;
        let last = self.tokens[first..]
            .iter()
            .position(|t| t.end == end)
            .map(|offset| first + offset)?;
        Some(first..last + 1)
    }

    /// Token ranges of each sentence, in order.
    pub fn sentences(&self) -> Vec<Range<usize>> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for (i, token) in self.tokens.iter().enumerate().skip(1) {
            // Leading whitespace joins the sentence that follows it.
            if token.is_sent_start && !self.tokens[start..i].iter().all(Token::is_space) {
                sentences.push(start..i);
                start = i;
            }
        }
        if start < self.tokens.len() {
            sentences.push(start..self.tokens.len());
        }
        sentences
    }

    /// Indices of the tokens whose head is `index`.
    pub fn children(&self, index: usize) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|&(i, t)| i != index && t.head == index)
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the last token in the subtree rooted at `index`.
    pub fn subtree_end(&self, index: usize) -> usize {
        let mut last = index;
        for i in index + 1..self.tokens.len() {
            if self.descends_from(i, index) {
                last = i;
            }
        }
        last
    }

    fn descends_from(&self, mut i: usize, ancestor: usize) -> bool {
        for _ in 0..self.tokens.len() {
            if i == ancestor {
                return true;
            }
            let head = self.tokens[i].head;
            if head == i {
                return false;
            }
            i = head;
        }
        false
    }

    /// Source text covered by a token range, without the trailing
    /// whitespace of the last token.
    pub fn span_text(&self, range: Range<usize>) -> &str {
        if range.is_empty() || range.end > self.tokens.len() {
            return "";
        }
        &self.text[self.tokens[range.start].start..self.tokens[range.end - 1].end]
    }
}

/// Produces analysed documents from raw text.
pub trait Tokenizer: Send + Sync {
    fn analyze(&self, text: &str) -> Doc;
}

static SHARED: OnceLock<Result<RuleTagger, String>> = OnceLock::new();

/// Returns the process-wide oracle, initializing it on first use.
///
/// Initialization happens at most once; a failure is remembered and
/// reported on every later call.
pub fn shared() -> Result<&'static dyn Tokenizer, WarpError> {
    shared_with(&[])
}

/// Like [`shared`], with extra abbreviations that do not end a sentence.
///
/// The abbreviations only take effect if this call initializes the
/// oracle; later calls get the instance built by the first one.
pub fn shared_with(abbreviations: &[String]) -> Result<&'static dyn Tokenizer, WarpError> {
    let tagger = SHARED.get_or_init(|| {
        debug!(extra_abbreviations = abbreviations.len(), "initializing rule-based tagger");
        RuleTagger::with_abbreviations(abbreviations).map_err(|err| err.to_string())
    });
    match tagger {
        Ok(tagger) => Ok(tagger),
        Err(message) => Err(WarpError::OracleUnavailable(message.clone())),
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! Hand-built documents for exercising consumers of [`Doc`] without
    //! depending on the tagger's choices.

    use super::*;

    /// Builds a document from `(text, whitespace, pos, tag)` tuples.
    pub fn doc(parts: &[(&str, &str, PosCategory, &str)]) -> Doc {
        let mut text = String::new();
        let mut tokens = Vec::new();
        for (i, &(word, ws, pos, tag)) in parts.iter().enumerate() {
            let start = text.len();
            text.push_str(word);
            let end = text.len();
            text.push_str(ws);
            tokens.push(Token {
                text: word.to_string(),
                whitespace: ws.to_string(),
                start,
                end,
                pos,
                tag: tag.to_string(),
                dep: String::new(),
                head: i,
                is_sent_start: false,
            });
        }
        Doc::new(text, tokens, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::fixture::doc;
    use super::*;
    use PosCategory::*;

    #[test]
    fn test_char_span_aligned() {
        let d = doc(&[("He", "", Pron, "PRP"), ("'s", " ", Aux, "VBZ"), ("here", "", Adv, "RB")]);
        assert_eq!(d.char_span(0, 4), Some(0..2));
        assert_eq!(d.char_span(5, 9), Some(2..3));
    }

    #[test]
    fn test_char_span_misaligned() {
        let d = doc(&[("Hello", " ", Intj, "UH"), ("world", "", Noun, "NN")]);
        assert_eq!(d.char_span(1, 5), None);
        assert_eq!(d.char_span(0, 3), None);
    }

    #[test]
    fn test_sentences_follow_starts() {
        let mut d = doc(&[
            ("Hi", "", Intj, "UH"),
            (".", " ", Punct, "."),
            ("Bye", "", Intj, "UH"),
        ]);
        d.tokens[2].is_sent_start = true;
        assert_eq!(d.sentences(), vec![0..2, 2..3]);
    }

    #[test]
    fn test_subtree_end_follows_heads() {
        let mut d = doc(&[
            ("the", " ", Det, "DT"),
            ("big", " ", Adj, "JJ"),
            ("dog", " ", Noun, "NN"),
            ("barked", "", Verb, "VBD"),
        ]);
        d.tokens[0].head = 2;
        d.tokens[1].head = 2;
        d.tokens[2].head = 3;
        assert_eq!(d.subtree_end(2), 2);
        assert_eq!(d.subtree_end(3), 3);
        assert_eq!(d.children(2), vec![0, 1]);
    }

    #[test]
    fn test_span_text_excludes_trailing_whitespace() {
        let d = doc(&[("new", " ", Propn, "NNP"), ("york", " ", Propn, "NNP")]);
        assert_eq!(d.span_text(0..2), "new york");
        assert_eq!(d.span_text(1..1), "");
    }

    #[test]
    fn test_count_keys() {
        assert_eq!(Propn.count_key(), Some("NOUN"));
        assert_eq!(Aux.count_key(), Some("VERB"));
        assert_eq!(Sconj.count_key(), Some("CONJ"));
        assert_eq!(Punct.count_key(), None);
    }

    #[test]
    fn test_shared_oracle_initializes_once() {
        let first = shared().unwrap() as *const dyn Tokenizer;
        let second = shared().unwrap() as *const dyn Tokenizer;
        assert!(std::ptr::addr_eq(first, second));
    }
}
