// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Find-and-replace by substring, by regular expression and by naming
//! convention.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::WarpError;
use crate::casing::{to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, to_snake_case};

static CAMEL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-z][a-z0-9]*[A-Z][A-Za-z0-9]*\b").expect("valid camel pattern")
});
static DOT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z][a-zA-Z0-9]*(?:\.[a-zA-Z0-9]+)+\b").expect("valid dot pattern")
});
static KEBAB_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z][a-zA-Z0-9]*(?:-[a-zA-Z0-9]+)+\b").expect("valid kebab pattern")
});
static PASCAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][A-Z0-9]*[a-z][A-Za-z0-9]*\b").expect("valid pascal pattern")
});
static SNAKE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b_?[a-zA-Z][a-zA-Z0-9]*(?:_[a-zA-Z0-9]+)+\b").expect("valid snake pattern")
});
// Lowercase and uppercase words may carry separators; a match must also
// hold at least one letter of its case, checked after matching.
static LOWER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z0-9._-]+\b").expect("valid lowercase pattern"));
static UPPER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z0-9._-]+\b").expect("valid uppercase pattern"));

/// A naming convention that [`replace_case`] can find and produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Camel,
    Dot,
    Kebab,
    Lower,
    Pascal,
    Snake,
    Upper,
}

impl WordCase {
    pub const ALL: [WordCase; 7] = [
        WordCase::Camel,
        WordCase::Dot,
        WordCase::Kebab,
        WordCase::Lower,
        WordCase::Pascal,
        WordCase::Snake,
        WordCase::Upper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WordCase::Camel => "camel",
            WordCase::Dot => "dot",
            WordCase::Kebab => "kebab",
            WordCase::Lower => "lower",
            WordCase::Pascal => "pascal",
            WordCase::Snake => "snake",
            WordCase::Upper => "upper",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            WordCase::Camel => &*CAMEL_WORD,
            WordCase::Dot => &*DOT_WORD,
            WordCase::Kebab => &*KEBAB_WORD,
            WordCase::Lower => &*LOWER_WORD,
            WordCase::Pascal => &*PASCAL_WORD,
            WordCase::Snake => &*SNAKE_WORD,
            WordCase::Upper => &*UPPER_WORD,
        }
    }

    fn accepts(self, word: &str) -> bool {
        match self {
            WordCase::Lower => word.chars().any(|c| c.is_ascii_lowercase()),
            WordCase::Upper => word.chars().any(|c| c.is_ascii_uppercase()),
            _ => true,
        }
    }

    /// Byte ranges of the words written in this case.
    fn find_words<'t>(self, text: &'t str) -> impl Iterator<Item = regex::Match<'t>> {
        self.pattern()
            .find_iter(text)
            .filter(move |found| self.accepts(found.as_str()))
    }

    /// Rewrites `word` in this case.
    pub fn convert(self, word: &str) -> String {
        match self {
            WordCase::Camel => to_camel_case(word),
            WordCase::Dot => to_dot_case(word),
            WordCase::Kebab => to_kebab_case(word),
            WordCase::Lower => word.to_lowercase(),
            WordCase::Pascal => to_pascal_case(word),
            WordCase::Snake => to_snake_case(word),
            WordCase::Upper => word.to_uppercase(),
        }
    }
}

impl fmt::Display for WordCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WordCase {
    type Err = WarpError;

    /// Accepts "snake", "snake case", "snake_case" and the like, plus
    /// "lowercase" and "uppercase", in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', '-'], " ");
        let key = key.strip_suffix(" case").unwrap_or(&key);
        let case = match key {
            "camel" => WordCase::Camel,
            "dot" => WordCase::Dot,
            "kebab" => WordCase::Kebab,
            "lower" | "lowercase" => WordCase::Lower,
            "pascal" => WordCase::Pascal,
            "snake" => WordCase::Snake,
            "upper" | "uppercase" => WordCase::Upper,
            _ => return Err(WarpError::InvalidCaseName(s.to_string())),
        };
        Ok(case)
    }
}

/// Replaces every occurrence of `find` with `with`.
///
/// Fails if `find` is empty or does not occur in `text`.
pub fn replace(text: &str, find: &str, with: &str) -> Result<String, WarpError> {
    if find.is_empty() || !text.contains(find) {
        return Err(WarpError::TextNotFound(find.to_string()));
    }
    Ok(text.replace(find, with))
}

/// Replaces every match of `pattern` with `with`, which may refer to
/// capture groups as `$1` or `${name}`.
///
/// # Examples
///
/// ```
/// use textwarp::replacement::replace_regex;
///
/// let swapped = replace_regex("2024-06-01", r"(\d+)-(\d+)-(\d+)", "$3.$2.$1").unwrap();
/// assert_eq!(swapped, "01.06.2024");
/// ```
pub fn replace_regex(text: &str, pattern: &str, with: &str) -> Result<String, WarpError> {
    let regex = Regex::new(pattern).map_err(WarpError::InvalidRegex)?;
    if !regex.is_match(text) {
        return Err(WarpError::PatternNotFound(pattern.to_string()));
    }
    Ok(regex.replace_all(text, with).into_owned())
}

/// Rewrites every word written in case `from` into case `to`.
///
/// Both names are parsed with [`WordCase::from_str`]. Fails if either
/// name is unknown or no word in `text` is written in `from`.
pub fn replace_case(text: &str, from: &str, to: &str) -> Result<String, WarpError> {
    let from_case: WordCase = from.parse()?;
    let to_case: WordCase = to.parse()?;

    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    let mut replaced = 0;
    for found in from_case.find_words(text) {
        result.push_str(&text[last..found.start()]);
        result.push_str(&to_case.convert(found.as_str()));
        last = found.end();
        replaced += 1;
    }
    if replaced == 0 {
        return Err(WarpError::CaseNotFound(from_case.name().to_string()));
    }
    result.push_str(&text[last..]);
    debug!(from = %from_case, to = %to_case, replaced, "replaced case");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Substring ==========

    #[test]
    fn test_replace() {
        assert_eq!(replace("a cat and a cat", "cat", "dog").unwrap(), "a dog and a dog");
        assert_eq!(replace("remove me", " me", "").unwrap(), "remove");
    }

    #[test]
    fn test_replace_missing_text() {
        assert!(matches!(
            replace("hello", "bye", "x"),
            Err(WarpError::TextNotFound(find)) if find == "bye"
        ));
        assert!(matches!(replace("hello", "", "x"), Err(WarpError::TextNotFound(_))));
    }

    // ========== Regex ==========

    #[test]
    fn test_replace_regex() {
        assert_eq!(replace_regex("a1b22c333", r"\d+", "#").unwrap(), "a#b#c#");
    }

    #[test]
    fn test_replace_regex_invalid() {
        assert!(matches!(
            replace_regex("text", "(unclosed", "x"),
            Err(WarpError::InvalidRegex(_))
        ));
    }

    #[test]
    fn test_replace_regex_not_found() {
        assert!(matches!(
            replace_regex("letters", r"\d", "x"),
            Err(WarpError::PatternNotFound(_))
        ));
    }

    // ========== Case ==========

    #[test]
    fn test_parse_case_names() {
        assert_eq!("Snake Case".parse::<WordCase>().unwrap(), WordCase::Snake);
        assert_eq!("kebab_case".parse::<WordCase>().unwrap(), WordCase::Kebab);
        assert_eq!("UPPERCASE".parse::<WordCase>().unwrap(), WordCase::Upper);
        assert!(matches!(
            "title".parse::<WordCase>(),
            Err(WarpError::InvalidCaseName(_))
        ));
    }

    #[test]
    fn test_case_names_round_trip() {
        for case in WordCase::ALL {
            assert_eq!(case.name().parse::<WordCase>().unwrap(), case);
            assert_eq!(format!("{case} case").parse::<WordCase>().unwrap(), case);
        }
    }

    #[test]
    fn test_replace_snake_with_camel() {
        assert_eq!(
            replace_case("call get_user_name then exit", "snake", "camel").unwrap(),
            "call getUserName then exit"
        );
    }

    #[test]
    fn test_replace_camel_with_kebab() {
        assert_eq!(
            replace_case("use fetchData and parseJson", "camel case", "kebab").unwrap(),
            "use fetch-data and parse-json"
        );
    }

    #[test]
    fn test_replace_upper_with_lower() {
        assert_eq!(
            replace_case("STOP and GO_NOW", "upper", "lower").unwrap(),
            "stop and go_now"
        );
    }

    #[test]
    fn test_replace_case_not_found() {
        assert!(matches!(
            replace_case("plain words here", "pascal", "snake"),
            Err(WarpError::CaseNotFound(name)) if name == "pascal"
        ));
    }
}
