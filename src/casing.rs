// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Casing transforms.
//!
//! Three families live here:
//!
//! - word-level capitalization ([`capitalize_word`]), a chain of lexicon
//!   lookups with a plain fallback;
//! - context-free case conversions ([`to_snake_case`], [`to_pascal_case`]
//!   and friends) that work on the raw string;
//! - document-level casing ([`case_doc`]) for sentence, start and title
//!   case, which reads tags, sentence boundaries and entities from a
//!   [`Doc`](crate::oracle::Doc).

mod document;
mod entity;
mod pascal;
mod position;
mod separator;
mod string;

#[cfg(test)]
mod tests;

pub use document::{case_doc, to_sentence_case, to_start_case, to_title_case};
pub use entity::{EntityEntry, EntitySource, map_all_entities};
pub use pascal::{to_camel_case, to_pascal_case};
pub use separator::{to_dot_case, to_kebab_case, to_separator_case, to_snake_case};
pub use string::{capitalize_first, capitalize_word, force_lowercase, is_lower, is_title, is_upper};

/// Document-level capitalization styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Capitalize the first word of each sentence.
    Sentence,
    /// Capitalize every word.
    Start,
    /// Capitalize principal words, leaving short function words lowercase.
    Title,
}

/// Separators for the separator-joined case conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSeparator {
    /// `dot.case`
    Dot,
    /// `kebab-case`
    Kebab,
    /// `snake_case`
    Snake,
}

impl CaseSeparator {
    pub fn as_char(self) -> char {
        match self {
            CaseSeparator::Dot => '.',
            CaseSeparator::Kebab => '-',
            CaseSeparator::Snake => '_',
        }
    }
}

/// Options for document-level casing.
#[derive(Debug, Clone, PartialEq)]
pub struct CasingOptions {
    /// Words inspected on each side of a contextual entity (default: 4).
    pub context_window: usize,
    /// Extra fixed entity casings as `(key, casing)` pairs. Keys are
    /// matched case-insensitively and take precedence over built-in
    /// entries with the same key.
    pub extra_absolute: Vec<(String, String)>,
}

impl Default for CasingOptions {
    fn default() -> Self {
        Self {
            context_window: 4,
            extra_absolute: Vec::new(),
        }
    }
}
