// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Named-entity tables: fixed casings, context-dependent casings, the
//! particles kept lowercase inside names, and the gazetteer the rule-based
//! tagger uses to recognize entities.

/// A casing that applies only when its context conditions hold.
#[derive(Debug, Clone, Copy)]
pub struct ContextRule {
    /// The casing to apply.
    pub casing: &'static str,
    /// Exact coarse part-of-speech sequences for the matched span.
    pub pos_sequences: &'static [&'static [&'static str]],
    /// Phrases that must appear near the span.
    pub ngrams: &'static [&'static str],
    /// Words inspected on each side for `ngrams`. Falls back to the
    /// configured window when unset.
    pub context_window: Option<usize>,
}

/// Entities whose casing never depends on context.
pub const ABSOLUTE_CASINGS: &[(&str, &str)] = &[
    ("adidas", "adidas"),
    ("bell hooks", "bell hooks"),
    ("da vinci", "da Vinci"),
    ("e. e. cummings", "e. e. cummings"),
    ("ebay", "eBay"),
    ("ipad", "iPad"),
    ("iphone", "iPhone"),
    ("k.d. lang", "k.d. lang"),
    ("ludwig van beethoven", "Ludwig van Beethoven"),
    ("mcdonald's", "McDonald's"),
    ("playstation", "PlayStation"),
    ("the hague", "The Hague"),
    ("u.k.", "U.K."),
    ("u.s.", "U.S."),
    ("van gogh", "van Gogh"),
    ("vincent van gogh", "Vincent van Gogh"),
    ("world war i", "World War I"),
    ("world war ii", "World War II"),
    ("youtube", "YouTube"),
];

const PROPN: &[&[&str]] = &[&["PROPN"]];

/// Entities whose casing depends on nearby words or their part of speech.
pub const CONTEXTUAL_CASINGS: &[(&str, &[ContextRule])] = &[
    (
        "amazon",
        &[
            ContextRule {
                casing: "Amazon",
                pos_sequences: PROPN,
                ngrams: &[
                    "alexa", "aws", "bezos", "delivery", "jeff bezos", "kindle", "order", "prime",
                    "shipping",
                ],
                context_window: None,
            },
            ContextRule {
                casing: "Amazon",
                pos_sequences: &[],
                ngrams: &["basin", "jungle", "rainforest", "river"],
                context_window: None,
            },
        ],
    ),
    (
        "apple",
        &[ContextRule {
            casing: "Apple",
            pos_sequences: PROPN,
            ngrams: &[
                "app store", "ceo", "imac", "inc", "ipad", "iphone", "mac", "macbook", "shares",
                "stock", "tim cook",
            ],
            context_window: None,
        }],
    ),
    (
        "china",
        &[ContextRule {
            casing: "China",
            pos_sequences: PROPN,
            ngrams: &[
                "beijing", "country", "government", "president", "shanghai", "trade", "visit",
                "visited",
            ],
            context_window: None,
        }],
    ),
    (
        "jordan",
        &[ContextRule {
            casing: "Jordan",
            pos_sequences: PROPN,
            ngrams: &["amman", "basketball", "king", "michael", "river"],
            context_window: None,
        }],
    ),
    (
        "may",
        &[ContextRule {
            casing: "May",
            pos_sequences: PROPN,
            ngrams: &[],
            context_window: None,
        }],
    ),
    (
        "polish",
        &[ContextRule {
            casing: "Polish",
            pos_sequences: &[],
            ngrams: &["language", "people", "poland", "speak", "speaks", "warsaw"],
            context_window: Some(3),
        }],
    ),
    (
        "turkey",
        &[ContextRule {
            casing: "Turkey",
            pos_sequences: PROPN,
            ngrams: &[
                "ankara", "country", "government", "istanbul", "president", "visit", "visited",
            ],
            context_window: None,
        }],
    ),
    (
        "word",
        &[ContextRule {
            casing: "Word",
            pos_sequences: &[],
            ngrams: &["docx", "excel", "microsoft", "office", "powerpoint"],
            context_window: Some(2),
        }],
    ),
];

/// Particles that stay lowercase inside title-cased names.
pub const LOWERCASE_PARTICLES: &[&str] = &[
    "al", "bin", "da", "de", "del", "della", "den", "der", "di", "du", "ibn", "la", "le", "ten",
    "ter", "van", "von",
];

/// Entity labels treated as proper nouns.
pub const PROPER_NOUN_ENTITIES: &[&str] = &[
    "EVENT",
    "FAC",
    "GPE",
    "LANGUAGE",
    "LAW",
    "LOC",
    "NORP",
    "ORG",
    "PERSON",
    "PRODUCT",
    "WORK_OF_ART",
];

/// Phrases the rule-based tagger recognizes as entities, with their labels.
pub const GAZETTEER: &[(&str, &str)] = &[
    // Events
    ("christmas", "EVENT"),
    ("easter", "EVENT"),
    ("halloween", "EVENT"),
    ("olympics", "EVENT"),
    ("super bowl", "EVENT"),
    ("thanksgiving", "EVENT"),
    ("world war ii", "EVENT"),
    // Facilities
    ("big ben", "FAC"),
    ("eiffel tower", "FAC"),
    ("empire state building", "FAC"),
    ("golden gate bridge", "FAC"),
    ("statue of liberty", "FAC"),
    // Places
    ("australia", "GPE"),
    ("berlin", "GPE"),
    ("boston", "GPE"),
    ("brazil", "GPE"),
    ("california", "GPE"),
    ("canada", "GPE"),
    ("chicago", "GPE"),
    ("egypt", "GPE"),
    ("england", "GPE"),
    ("florida", "GPE"),
    ("france", "GPE"),
    ("germany", "GPE"),
    ("india", "GPE"),
    ("ireland", "GPE"),
    ("italy", "GPE"),
    ("japan", "GPE"),
    ("london", "GPE"),
    ("los angeles", "GPE"),
    ("madrid", "GPE"),
    ("mexico", "GPE"),
    ("moscow", "GPE"),
    ("new york", "GPE"),
    ("new york city", "GPE"),
    ("paris", "GPE"),
    ("rome", "GPE"),
    ("russia", "GPE"),
    ("san francisco", "GPE"),
    ("scotland", "GPE"),
    ("seattle", "GPE"),
    ("spain", "GPE"),
    ("texas", "GPE"),
    ("tokyo", "GPE"),
    ("united kingdom", "GPE"),
    ("united states", "GPE"),
    ("wales", "GPE"),
    ("africa", "LOC"),
    ("antarctica", "LOC"),
    ("asia", "LOC"),
    ("atlantic ocean", "LOC"),
    ("europe", "LOC"),
    ("mount everest", "LOC"),
    ("north america", "LOC"),
    ("pacific ocean", "LOC"),
    ("sahara", "LOC"),
    ("south america", "LOC"),
    // Languages and groups
    ("arabic", "LANGUAGE"),
    ("english", "LANGUAGE"),
    ("greek", "LANGUAGE"),
    ("hindi", "LANGUAGE"),
    ("latin", "LANGUAGE"),
    ("mandarin", "LANGUAGE"),
    ("portuguese", "LANGUAGE"),
    ("american", "NORP"),
    ("british", "NORP"),
    ("buddhist", "NORP"),
    ("canadian", "NORP"),
    ("chinese", "NORP"),
    ("christian", "NORP"),
    ("democrats", "NORP"),
    ("french", "NORP"),
    ("german", "NORP"),
    ("italian", "NORP"),
    ("japanese", "NORP"),
    ("jewish", "NORP"),
    ("mexican", "NORP"),
    ("muslim", "NORP"),
    ("republicans", "NORP"),
    ("russian", "NORP"),
    ("spanish", "NORP"),
    // Organizations
    ("european union", "ORG"),
    ("facebook", "ORG"),
    ("google", "ORG"),
    ("harvard", "ORG"),
    ("microsoft", "ORG"),
    ("netflix", "ORG"),
    ("oxford", "ORG"),
    ("stanford", "ORG"),
    ("united nations", "ORG"),
    ("white house", "ORG"),
    // People
    ("abraham lincoln", "PERSON"),
    ("albert einstein", "PERSON"),
    ("beethoven", "PERSON"),
    ("charles de gaulle", "PERSON"),
    ("charles dickens", "PERSON"),
    ("einstein", "PERSON"),
    ("jane austen", "PERSON"),
    ("leonardo da vinci", "PERSON"),
    ("martin luther king", "PERSON"),
    ("mozart", "PERSON"),
    ("napoleon", "PERSON"),
    ("shakespeare", "PERSON"),
    ("william shakespeare", "PERSON"),
    // Works, laws, products
    ("bill of rights", "LAW"),
    ("first amendment", "LAW"),
    ("hamlet", "WORK_OF_ART"),
    ("mona lisa", "WORK_OF_ART"),
    ("xbox", "PRODUCT"),
    // Dates are recognized but never treated as proper nouns.
    ("last week", "DATE"),
    ("next week", "DATE"),
    ("yesterday", "DATE"),
];
