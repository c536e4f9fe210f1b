// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Textwarp transforms text: context-aware casing, contraction expansion,
//! punctuation, encodings, and analysis.
//!
//! # Example
//!
//! ```
//! use textwarp::{Command, Options, Output, warp};
//!
//! let options = Options::default();
//! let output = warp("the lord of the rings", Command::TitleCase, &options).unwrap();
//! assert_eq!(output, Output::Text("The Lord of the Rings".to_string()));
//! ```

pub mod analysis;
pub mod casing;
pub mod config;
pub mod contractions;
pub mod encoding;
pub mod lexicon;
pub mod manipulation;
pub mod numbers;
pub mod oracle;
pub mod punctuation;
pub mod registry;
pub mod replacement;

use tracing::debug;

pub use analysis::Analysis;
use casing::{Casing, CasingOptions};
pub use config::Config;
use oracle::{Doc, Tokenizer};
pub use registry::{Command, CommandKind};

/// Options shared by all commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Reading speed for `time-to-read`. Default: 200.
    pub words_per_minute: u32,
    /// Number of entries reported by `mfws`. Default: 10.
    pub most_frequent_words: usize,
    /// Entity settings for the document-level casings.
    pub casing: CasingOptions,
    /// Extra abbreviations for the built-in tokenizer.
    pub sentence_abbreviations: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            words_per_minute: analysis::DEFAULT_WORDS_PER_MINUTE,
            most_frequent_words: analysis::DEFAULT_MOST_FREQUENT_WORDS,
            casing: CasingOptions::default(),
            sentence_abbreviations: Vec::new(),
        }
    }
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Self {
            words_per_minute: config.analysis.words_per_minute,
            most_frequent_words: config.analysis.most_frequent_words,
            casing: CasingOptions {
                context_window: config.entities.context_window,
                extra_absolute: config
                    .entities
                    .absolute
                    .iter()
                    .map(|(key, casing)| (key.clone(), casing.clone()))
                    .collect(),
            },
            sentence_abbreviations: config.oracle.sentence_abbreviations.clone(),
        }
    }
}

/// The result of running one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    Analysis(Analysis),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Analysis(analysis) => write!(f, "{analysis}"),
        }
    }
}

/// The result of running several commands in turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pipeline {
    /// The text after every text command has run.
    pub text: String,
    /// Analysis reports, each taken of the text as it stood when its
    /// command ran.
    pub analyses: Vec<(Command, Analysis)>,
}

/// Rejects empty and whitespace-only input, except for commands that
/// accept it.
pub fn validate_input(text: &str, command: Command) -> Result<(), WarpError> {
    if command.accepts_blank_input() {
        return Ok(());
    }
    if text.is_empty() {
        return Err(WarpError::EmptyInput);
    }
    if text.trim().is_empty() {
        return Err(WarpError::WhitespaceInput);
    }
    Ok(())
}

/// Runs `command` on `text`.
///
/// The shared oracle is initialized on first use by a command that needs
/// it; other commands never touch it.
///
/// # Errors
///
/// Returns an error if the input is blank, the oracle cannot be loaded,
/// or the command itself fails (malformed encodings).
pub fn warp(text: &str, command: Command, options: &Options) -> Result<Output, WarpError> {
    validate_input(text, command)?;
    let tokenizer = if command.needs_oracle() {
        Some(oracle::shared_with(&options.sentence_abbreviations)?)
    } else {
        None
    };
    apply(text, command, options, tokenizer)
}

/// Like [`warp`], analysing text with `tokenizer` instead of the shared
/// oracle.
pub fn warp_with(
    text: &str,
    command: Command,
    options: &Options,
    tokenizer: &dyn Tokenizer,
) -> Result<Output, WarpError> {
    validate_input(text, command)?;
    apply(text, command, options, Some(tokenizer))
}

/// Runs `commands` in order. Text commands rewrite the text for the next
/// command; analysis commands report on it and leave it unchanged.
pub fn warp_pipeline(
    text: &str,
    commands: &[Command],
    options: &Options,
) -> Result<Pipeline, WarpError> {
    let mut pipeline = Pipeline {
        text: text.to_string(),
        analyses: Vec::new(),
    };
    for &command in commands {
        debug!(%command, "running command");
        match warp(&pipeline.text, command, options)? {
            Output::Text(text) => pipeline.text = text,
            Output::Analysis(analysis) => pipeline.analyses.push((command, analysis)),
        }
    }
    Ok(pipeline)
}

fn apply(
    text: &str,
    command: Command,
    options: &Options,
    tokenizer: Option<&dyn Tokenizer>,
) -> Result<Output, WarpError> {
    let analyze = || -> Result<Doc, WarpError> {
        tokenizer
            .map(|tokenizer| tokenizer.analyze(text))
            .ok_or_else(|| WarpError::OracleUnavailable("no tokenizer supplied".to_string()))
    };

    let transformed = match command {
        Command::Capitalize => casing::case_doc(&analyze()?, Casing::Start, &options.casing),
        Command::SentenceCase => casing::case_doc(&analyze()?, Casing::Sentence, &options.casing),
        Command::TitleCase => casing::case_doc(&analyze()?, Casing::Title, &options.casing),
        Command::CamelCase => casing::to_camel_case(text),
        Command::PascalCase => casing::to_pascal_case(text),
        Command::SnakeCase => casing::to_snake_case(text),
        Command::KebabCase => casing::to_kebab_case(text),
        Command::DotCase => casing::to_dot_case(text),
        Command::Lowercase => manipulation::to_lowercase(text),
        Command::Uppercase => manipulation::to_uppercase(text),
        Command::Swapcase => manipulation::swapcase(text),
        Command::AlternatingCaps => manipulation::to_alternating_caps(text),
        Command::RandomCase => manipulation::random_case(text),
        Command::ExpandContractions => contractions::expand_doc(&analyze()?),
        Command::CurlyQuotes => punctuation::straight_to_curly(text),
        Command::StraightQuotes => punctuation::curly_to_straight(text),
        Command::HyphensToEm => punctuation::hyphens_to_em(text),
        Command::HyphenToEn => punctuation::hyphen_to_en(text),
        Command::PunctToInside => punctuation::punct_to_inside(text),
        Command::PunctToOutside => punctuation::punct_to_outside(text),
        Command::Binary => encoding::to_binary(text),
        Command::FromBinary => encoding::from_binary(text)?,
        Command::Hexadecimal => encoding::to_hexadecimal(text),
        Command::FromHexadecimal => encoding::from_hexadecimal(text)?,
        Command::Morse => encoding::to_morse(text),
        Command::FromMorse => encoding::from_morse(text),
        Command::Ordinal => numbers::cardinal_to_ordinal(text),
        Command::Cardinal => numbers::ordinal_to_cardinal(text),
        Command::Randomize => manipulation::randomize(text),
        Command::Reverse => manipulation::reverse(text),
        Command::Redact => manipulation::redact(text),
        Command::SingleSpaces => manipulation::to_single_spaces(text),
        Command::Widen => manipulation::widen(text),
        Command::Strip => manipulation::strip(text),
        Command::PlainText => text.to_string(),
        Command::Clear => String::new(),
        Command::CharCount => {
            return Ok(Output::Analysis(Analysis::CharCount(analysis::count_chars(text))));
        }
        Command::LineCount => {
            return Ok(Output::Analysis(Analysis::LineCount(analysis::count_lines(text))));
        }
        Command::WordCount
        | Command::SentenceCount
        | Command::Mfws
        | Command::PosCount
        | Command::TimeToRead => {
            return Ok(Output::Analysis(analyze_doc(&analyze()?, command, options)));
        }
    };
    Ok(Output::Text(transformed))
}

fn analyze_doc(doc: &Doc, command: Command, options: &Options) -> Analysis {
    match command {
        Command::SentenceCount => Analysis::SentenceCount(analysis::count_sentences(doc)),
        Command::Mfws => Analysis::MostFrequentWords(analysis::most_frequent_words(
            doc,
            options.most_frequent_words,
        )),
        Command::PosCount => Analysis::PosCounts(analysis::count_pos(doc)),
        Command::TimeToRead => Analysis::TimeToRead(analysis::time_to_read(
            analysis::count_words(doc),
            options.words_per_minute,
        )),
        _ => Analysis::WordCount(analysis::count_words(doc)),
    }
}

/// Errors that can occur while transforming text.
#[derive(Debug)]
pub enum WarpError {
    /// The input was empty.
    EmptyInput,
    /// The input held only whitespace.
    WhitespaceInput,
    /// The linguistic oracle could not be loaded.
    OracleUnavailable(String),
    /// No command has the given name.
    UnknownCommand(String),
    /// A user-supplied regular expression did not compile.
    InvalidRegex(regex::Error),
    /// A case name was not recognized.
    InvalidCaseName(String),
    /// No word in the text is written in the named case.
    CaseNotFound(String),
    /// A regular expression matched nothing in the text.
    PatternNotFound(String),
    /// The text to replace does not occur in the text.
    TextNotFound(String),
    /// A binary or hexadecimal code does not denote a character.
    InvalidEncoding(String),
}

impl std::fmt::Display for WarpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarpError::EmptyInput => write!(f, "input is empty"),
            WarpError::WhitespaceInput => write!(f, "input contains only whitespace"),
            WarpError::OracleUnavailable(msg) => write!(f, "tokenizer unavailable: {}", msg),
            WarpError::UnknownCommand(name) => write!(f, "unknown command '{}'", name),
            WarpError::InvalidRegex(err) => write!(f, "invalid regular expression: {}", err),
            WarpError::InvalidCaseName(name) => write!(f, "unknown case '{}'", name),
            WarpError::CaseNotFound(name) => write!(f, "no {} case words found in text", name),
            WarpError::PatternNotFound(pattern) => {
                write!(f, "pattern '{}' not found in text", pattern)
            }
            WarpError::TextNotFound(find) => write!(f, "'{}' not found in text", find),
            WarpError::InvalidEncoding(code) => write!(f, "invalid character code '{}'", code),
        }
    }
}

impl std::error::Error for WarpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WarpError::InvalidRegex(err) => Some(err),
            _ => None,
        }
    }
}
