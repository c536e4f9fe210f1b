// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Expansion of ambiguous contractions.
//!
//! Each handler returns `None` when the context does not settle the
//! reading; the caller then keeps the contraction as written.

use std::ops::Range;

use super::disambiguation::{disambiguate_ain_t, disambiguate_s_or_d, disambiguate_whatcha};
use super::{ContractionMatch, Expansion, apply_expansion_casing, find_subject, negative_to_base_verb};
use crate::lexicon::normalize;
use crate::oracle::Doc;

/// Expands an ambiguous contraction whose tokens are `span`.
///
/// "whatcha" is tried first, then negations, then `'s` and `'d`.
pub(super) fn expand_ambiguous(
    doc: &Doc,
    contraction: &ContractionMatch<'_>,
    span: Range<usize>,
) -> Option<Expansion> {
    let surface = normalize(contraction.surface);
    if surface == "whatcha" || surface == "watcha" {
        return handle_whatcha(doc, contraction, span);
    }
    let suffix = normalize(&doc.tokens()[span.end - 1].text);
    match suffix.as_str() {
        "n't" => handle_negation(doc, contraction, span),
        "'s" | "'d" => handle_s_or_d(doc, contraction, span),
        _ => None,
    }
}

fn handle_whatcha(
    doc: &Doc,
    contraction: &ContractionMatch<'_>,
    span: Range<usize>,
) -> Option<Expansion> {
    let verb = disambiguate_whatcha(doc, span)?;
    Some(Expansion {
        text: apply_expansion_casing(contraction.surface, &format!("what {verb} you")),
        resume_at: contraction.range.end,
    })
}

/// Expands "n't" contractions, moving an inverted subject in front of
/// "not": "Don't I" becomes "Do I not".
fn handle_negation(
    doc: &Doc,
    contraction: &ContractionMatch<'_>,
    span: Range<usize>,
) -> Option<Expansion> {
    let tokens = doc.tokens();
    let suffix = span.end - 1;
    let verb = suffix.checked_sub(1)?;

    let base = if tokens[verb].lower() == "ai" {
        disambiguate_ain_t(doc, suffix)?.to_string()
    } else {
        negative_to_base_verb(contraction.surface)?
    };

    match find_subject(doc, verb) {
        Some(subject) if subject > verb => {
            let subject_end = tokens[doc.subtree_end(subject)].end;
            let between = &doc.text()[contraction.range.end..subject_end];
            Some(Expansion {
                text: apply_expansion_casing(contraction.surface, &format!("{base}{between} not")),
                resume_at: subject_end,
            })
        }
        _ => Some(Expansion {
            text: apply_expansion_casing(contraction.surface, &format!("{base} not")),
            resume_at: contraction.range.end,
        }),
    }
}

fn handle_s_or_d(
    doc: &Doc,
    contraction: &ContractionMatch<'_>,
    span: Range<usize>,
) -> Option<Expansion> {
    let host = span.end.checked_sub(2)?;
    let verb = disambiguate_s_or_d(doc, span)?;
    let expanded = format!("{} {verb}", doc.tokens()[host].text);
    Some(Expansion {
        text: apply_expansion_casing(contraction.surface, &expanded),
        resume_at: contraction.range.end,
    })
}
