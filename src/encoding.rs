// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Binary, hexadecimal and Morse encodings.

use crate::WarpError;
use crate::lexicon;
use crate::punctuation::{EM_DASH, EN_DASH, ELLIPSIS, curly_to_straight};

/// Encodes each character as its code point in binary, at least eight
/// digits wide, separated by spaces.
///
/// # Examples
///
/// ```
/// use textwarp::encoding::to_binary;
///
/// assert_eq!(to_binary("Hi"), "01001000 01101001");
/// ```
pub fn to_binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", u32::from(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes whitespace-separated binary code points.
pub fn from_binary(text: &str) -> Result<String, WarpError> {
    decode_code_points(text, 2)
}

/// Encodes each character as its code point in lowercase hexadecimal, at
/// least two digits wide, separated by spaces. Curly quotes are
/// straightened first.
pub fn to_hexadecimal(text: &str) -> String {
    curly_to_straight(text)
        .chars()
        .map(|c| format!("{:02x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes whitespace-separated hexadecimal code points.
pub fn from_hexadecimal(text: &str) -> Result<String, WarpError> {
    decode_code_points(text, 16)
}

fn decode_code_points(text: &str, radix: u32) -> Result<String, WarpError> {
    text.split_whitespace()
        .map(|code| {
            u32::from_str_radix(code, radix)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| WarpError::InvalidEncoding(code.to_string()))
        })
        .collect()
}

/// Encodes text in Morse code: one space between letters, three between
/// words.
///
/// Letters are uppercased, dashes folded into hyphens and an ellipsis
/// spelled out as three periods. Characters without a Morse code are
/// dropped, and so are words left empty by that.
pub fn to_morse(text: &str) -> String {
    let morse = &lexicon::get().morse;
    let normalized: String = curly_to_straight(&text.to_uppercase())
        .chars()
        .map(|c| match c {
            EN_DASH | EM_DASH => "-".to_string(),
            ELLIPSIS => "...".to_string(),
            c => c.to_string(),
        })
        .collect();

    normalized
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(|c| morse.get(&c).copied())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("   ")
}

/// Decodes Morse code produced by [`to_morse`]. Unknown codes are
/// skipped; the result is in capitals.
///
/// # Examples
///
/// ```
/// use textwarp::encoding::from_morse;
///
/// assert_eq!(from_morse(".... ..   - .... . .-. ."), "HI THERE");
/// ```
pub fn from_morse(text: &str) -> String {
    let reverse = &lexicon::get().morse_reverse;
    text.trim()
        .split("   ")
        .map(|word| {
            word.split_whitespace()
                .filter_map(|code| reverse.get(code).copied())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
