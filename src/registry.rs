// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Named commands.
//!
//! Every transformation is addressable by a stable kebab-case name such as
//! `title-case` or `expand-contractions`. Names may also be written with a
//! leading `to-` (`to-title-case`).

use std::fmt;
use std::str::FromStr;

use crate::WarpError;

/// What a command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Rewrites the text.
    Text,
    /// Reports on the text without changing it.
    Analysis,
}

macro_rules! commands {
    ($($variant:ident => $name:literal, $description:literal;)+) => {
        /// A registered transformation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Command {
            $($variant,)+
        }

        impl Command {
            /// Every command, in listing order.
            pub const ALL: &'static [Command] = &[$(Command::$variant,)+];

            /// The stable command name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Command::$variant => $name,)+
                }
            }

            /// A one-line summary for listings.
            pub fn description(self) -> &'static str {
                match self {
                    $(Command::$variant => $description,)+
                }
            }
        }
    };
}

commands! {
    // Casing
    Capitalize => "capitalize", "Capitalize every word, keeping known casings";
    SentenceCase => "sentence-case", "Capitalize the first word of each sentence and proper nouns";
    TitleCase => "title-case", "Capitalize words except short function words";
    CamelCase => "camel-case", "Join words as camelCase";
    PascalCase => "pascal-case", "Join words as PascalCase";
    SnakeCase => "snake-case", "Join words as snake_case";
    KebabCase => "kebab-case", "Join words as kebab-case";
    DotCase => "dot-case", "Join words as dot.case";
    Lowercase => "lowercase", "Convert to lowercase";
    Uppercase => "uppercase", "Convert to uppercase";
    Swapcase => "swapcase", "Swap the case of every letter";
    AlternatingCaps => "alternating-caps", "Alternate lowercase and uppercase letters";
    RandomCase => "random-case", "Give each letter a random case";
    // Contractions
    ExpandContractions => "expand-contractions", "Expand contractions such as \"don't\"";
    // Punctuation
    CurlyQuotes => "curly-quotes", "Convert straight quotes and apostrophes to curly ones";
    StraightQuotes => "straight-quotes", "Convert curly quotes and apostrophes to straight ones";
    HyphensToEm => "hyphens-to-em", "Replace \"--\" and spaced hyphens with em dashes";
    HyphenToEn => "hyphen-to-en", "Replace hyphens with en dashes";
    PunctToInside => "punct-to-inside", "Move periods and commas inside closing quotes";
    PunctToOutside => "punct-to-outside", "Move periods and commas outside closing quotes";
    // Encoding
    Binary => "binary", "Encode as binary code points";
    FromBinary => "from-binary", "Decode binary code points";
    Hexadecimal => "hexadecimal", "Encode as hexadecimal code points";
    FromHexadecimal => "from-hexadecimal", "Decode hexadecimal code points";
    Morse => "morse", "Encode as Morse code";
    FromMorse => "from-morse", "Decode Morse code";
    // Numbers
    Ordinal => "ordinal", "Convert cardinal numbers to ordinals";
    Cardinal => "cardinal", "Convert ordinal numbers to cardinals";
    // Manipulation
    Randomize => "randomize", "Shuffle the characters";
    Reverse => "reverse", "Reverse the characters";
    Redact => "redact", "Replace word characters with blocks";
    SingleSpaces => "single-spaces", "Collapse runs of spaces";
    Widen => "widen", "Put a space between characters";
    Strip => "strip", "Trim leading and trailing whitespace";
    PlainText => "plain-text", "Leave the text unchanged";
    Clear => "clear", "Produce empty output";
    // Analysis
    CharCount => "char-count", "Count characters";
    LineCount => "line-count", "Count non-blank lines";
    WordCount => "word-count", "Count words";
    SentenceCount => "sentence-count", "Count sentences";
    Mfws => "mfws", "List the most frequent words";
    PosCount => "pos-count", "Count parts of speech";
    TimeToRead => "time-to-read", "Estimate reading time";
}

impl Command {
    pub fn kind(self) -> CommandKind {
        match self {
            Command::CharCount
            | Command::LineCount
            | Command::WordCount
            | Command::SentenceCount
            | Command::Mfws
            | Command::PosCount
            | Command::TimeToRead => CommandKind::Analysis,
            _ => CommandKind::Text,
        }
    }

    /// True for commands that need the linguistic oracle.
    pub fn needs_oracle(self) -> bool {
        matches!(
            self,
            Command::Capitalize
                | Command::SentenceCase
                | Command::TitleCase
                | Command::ExpandContractions
                | Command::WordCount
                | Command::SentenceCount
                | Command::Mfws
                | Command::PosCount
                | Command::TimeToRead
        )
    }

    /// True for case conversions, which can be chained with one another.
    /// Other commands are meant to run on their own.
    pub fn is_case_conversion(self) -> bool {
        matches!(
            self,
            Command::Capitalize
                | Command::SentenceCase
                | Command::TitleCase
                | Command::CamelCase
                | Command::PascalCase
                | Command::SnakeCase
                | Command::KebabCase
                | Command::DotCase
                | Command::Lowercase
                | Command::Uppercase
                | Command::Swapcase
                | Command::AlternatingCaps
                | Command::RandomCase
        )
    }

    /// True if the command accepts empty or whitespace-only input.
    pub fn accepts_blank_input(self) -> bool {
        self == Command::Clear
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = WarpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        let find = |name: &str| Command::ALL.iter().copied().find(|c| c.name() == name);
        find(&name)
            .or_else(|| name.strip_prefix("to-").and_then(find))
            .ok_or_else(|| WarpError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for &command in Command::ALL {
            assert_eq!(command.name().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Command::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("to-title-case".parse::<Command>().unwrap(), Command::TitleCase);
        assert_eq!("Snake_Case".parse::<Command>().unwrap(), Command::SnakeCase);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "shout".parse::<Command>(),
            Err(WarpError::UnknownCommand(name)) if name == "shout"
        ));
    }

    #[test]
    fn test_classification() {
        assert!(Command::TitleCase.needs_oracle());
        assert!(!Command::CamelCase.needs_oracle());
        assert!(!Command::Binary.needs_oracle());
        assert!(Command::CamelCase.is_case_conversion());
        assert!(!Command::Morse.is_case_conversion());
        assert_eq!(Command::Mfws.kind(), CommandKind::Analysis);
        assert_eq!(Command::Reverse.kind(), CommandKind::Text);
    }
}
