// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Text statistics: counts, word frequencies, parts of speech and reading
//! time.

use std::fmt;

use indexmap::IndexMap;

use crate::lexicon::grammar::POS_NAMES;
use crate::oracle::Doc;

/// Default reading speed for [`time_to_read`].
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Default number of entries reported by [`most_frequent_words`].
pub const DEFAULT_MOST_FREQUENT_WORDS: usize = 10;

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequency {
    /// The word, lowercased.
    pub word: String,
    pub count: usize,
    /// Share of all words, from 0 to 100.
    pub percentage: f64,
}

/// How many words fall in one part-of-speech group.
#[derive(Debug, Clone, PartialEq)]
pub struct PosCount {
    /// Display name of the group, e.g. "Nouns".
    pub name: &'static str,
    pub count: usize,
    /// Share of all words, from 0 to 100.
    pub percentage: f64,
}

/// The result of an analysis command.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    CharCount(usize),
    LineCount(usize),
    WordCount(usize),
    SentenceCount(usize),
    MostFrequentWords(Vec<WordFrequency>),
    PosCounts(Vec<PosCount>),
    /// Estimated reading time in whole minutes.
    TimeToRead(u64),
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::CharCount(n) => write!(f, "Character count: {n}"),
            Analysis::LineCount(n) => write!(f, "Line count: {n}"),
            Analysis::WordCount(n) => write!(f, "Word count: {n}"),
            Analysis::SentenceCount(n) => write!(f, "Sentence count: {n}"),
            Analysis::MostFrequentWords(words) => {
                let rows = words
                    .iter()
                    .map(|w| [w.word.clone(), w.count.to_string(), percent(w.percentage)])
                    .collect::<Vec<_>>();
                f.write_str(&format_table(&rows))
            }
            Analysis::PosCounts(counts) => {
                let rows = counts
                    .iter()
                    .map(|c| [c.name.to_string(), c.count.to_string(), percent(c.percentage)])
                    .collect::<Vec<_>>();
                f.write_str(&format_table(&rows))
            }
            Analysis::TimeToRead(minutes) => f.write_str(&format_minutes(*minutes)),
        }
    }
}

fn percent(value: f64) -> String {
    format!("({value:.2}%)")
}

/// Lays rows out in columns two spaces apart. The last column is
/// right-aligned.
fn format_table<const N: usize>(rows: &[[String; N]]) -> String {
    let mut widths = [0; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 < N {
                line.push_str(&format!("{cell:<width$}", width = widths[i] + 2));
            } else {
                line.push_str(&format!("{cell:>width$}", width = widths[i]));
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Renders a reading time: "Less than 1 minute", "5 minutes",
/// "1 hour, 1 minute", "2 hours".
pub fn format_minutes(total: u64) -> String {
    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };
    let (hours, minutes) = (total / 60, total % 60);
    match (hours, minutes) {
        (0, 0) => "Less than 1 minute".to_string(),
        (0, m) => plural(m, "minute"),
        (h, 0) => plural(h, "hour"),
        (h, m) => format!("{}, {}", plural(h, "hour"), plural(m, "minute")),
    }
}

pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Counts lines with at least one non-whitespace character.
pub fn count_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

/// The lowercased words of a document, in order. Punctuation and
/// whitespace tokens are not words.
pub fn words(doc: &Doc) -> Vec<String> {
    doc.tokens()
        .iter()
        .filter(|token| token.pos.count_key().is_some())
        .map(|token| token.lower())
        .collect()
}

pub fn count_words(doc: &Doc) -> usize {
    words(doc).len()
}

pub fn count_sentences(doc: &Doc) -> usize {
    doc.sentences().len()
}

/// The `limit` most frequent words, most frequent first. Words with equal
/// counts keep the order in which they first appear.
pub fn most_frequent_words(doc: &Doc, limit: usize) -> Vec<WordFrequency> {
    let words = words(doc);
    let total = words.len();
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for word in words {
        *counts.entry(word).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word,
            count,
            percentage: share(count, total),
        })
        .collect()
}

/// Word counts per part-of-speech group, in the order of the tag name
/// table. Groups without words are listed with a zero count.
pub fn count_pos(doc: &Doc) -> Vec<PosCount> {
    let mut counts: IndexMap<&str, usize> = POS_NAMES.iter().map(|&(key, _)| (key, 0)).collect();
    let mut total = 0;
    for token in doc.tokens() {
        if let Some(key) = token.pos.count_key() {
            total += 1;
            if let Some(count) = counts.get_mut(key) {
                *count += 1;
            }
        }
    }

    POS_NAMES
        .iter()
        .map(|&(key, name)| {
            let count = counts.get(key).copied().unwrap_or(0);
            PosCount {
                name,
                count,
                percentage: share(count, total),
            }
        })
        .collect()
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Minutes needed to read `word_count` words at `words_per_minute`.
///
/// Anything under a minute rounds up to one minute (zero words take zero
/// minutes); longer times round to the nearest minute, halves rounding up.
pub fn time_to_read(word_count: usize, words_per_minute: u32) -> u64 {
    let minutes = word_count as f64 / f64::from(words_per_minute.max(1));
    if minutes < 1.0 {
        minutes.ceil() as u64
    } else {
        (minutes + 0.5).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::PosCategory::*;
    use crate::oracle::fixture::doc;
    use crate::oracle::{RuleTagger, Tokenizer};

    fn sample() -> Doc {
        doc(&[
            ("the", " ", Det, "DT"),
            ("cat", " ", Noun, "NN"),
            ("saw", " ", Verb, "VBD"),
            ("the", " ", Det, "DT"),
            ("dog", "", Noun, "NN"),
            (".", "", Punct, "."),
        ])
    }

    // ========== Counts ==========

    #[test]
    fn test_count_chars() {
        assert_eq!(count_chars("caf\u{e9}"), 4);
    }

    #[test]
    fn test_count_lines_skips_blank() {
        assert_eq!(count_lines("one\n\n  \ntwo\nthree"), 3);
    }

    #[test]
    fn test_count_words_skips_punctuation() {
        assert_eq!(count_words(&sample()), 5);
    }

    #[test]
    fn test_count_sentences() {
        let tagger = RuleTagger::new().unwrap();
        assert_eq!(count_sentences(&tagger.analyze("One. Two! Three?")), 3);
    }

    // ========== Frequencies ==========

    #[test]
    fn test_most_frequent_words() {
        let words = most_frequent_words(&sample(), 2);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "the");
        assert_eq!(words[0].count, 2);
        assert!((words[0].percentage - 40.0).abs() < 1e-9);
        // Ties keep first-seen order.
        assert_eq!(words[1].word, "cat");
    }

    #[test]
    fn test_count_pos() {
        let counts = count_pos(&sample());
        assert_eq!(counts.len(), POS_NAMES.len());
        let nouns = counts.iter().find(|c| c.name == "Nouns").unwrap();
        assert_eq!(nouns.count, 2);
        assert!((nouns.percentage - 40.0).abs() < 1e-9);
        let numbers = counts.iter().find(|c| c.name == "Numbers").unwrap();
        assert_eq!(numbers.count, 0);
    }

    // ========== Reading time ==========

    #[test]
    fn test_time_to_read() {
        assert_eq!(time_to_read(0, 200), 0);
        assert_eq!(time_to_read(50, 200), 1);
        assert_eq!(time_to_read(300, 200), 2);
        assert_eq!(time_to_read(290, 200), 1);
        assert_eq!(time_to_read(10, 0), 10);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "Less than 1 minute");
        assert_eq!(format_minutes(1), "1 minute");
        assert_eq!(format_minutes(45), "45 minutes");
        assert_eq!(format_minutes(60), "1 hour");
        assert_eq!(format_minutes(61), "1 hour, 1 minute");
        assert_eq!(format_minutes(150), "2 hours, 30 minutes");
    }

    // ========== Display ==========

    #[test]
    fn test_display_count() {
        assert_eq!(Analysis::WordCount(12).to_string(), "Word count: 12");
    }

    #[test]
    fn test_display_table() {
        let analysis = Analysis::MostFrequentWords(vec![
            WordFrequency {
                word: "the".to_string(),
                count: 12,
                percentage: 24.0,
            },
            WordFrequency {
                word: "cat".to_string(),
                count: 3,
                percentage: 6.0,
            },
        ]);
        assert_eq!(analysis.to_string(), "the  12  (24.00%)\ncat  3    (6.00%)");
    }
}
