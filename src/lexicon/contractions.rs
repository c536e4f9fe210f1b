// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Contraction tables.
//!
//! Keys are lowercase and use the straight apostrophe. Lookups normalize
//! curly apostrophes before consulting these tables.

/// Contractions that expand the same way regardless of context.
pub const UNAMBIGUOUS_CONTRACTIONS: &[(&str, &str)] = &[
    ("'cause", "because"),
    ("'tis", "it is"),
    ("'twas", "it was"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("daren't", "dare not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("dunno", "do not know"),
    ("gimme", "give me"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("hadn't", "had not"),
    ("hadn't've", "had not have"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'll", "he will"),
    ("he'll've", "he will have"),
    ("how'll", "how will"),
    ("i'd've", "I would have"),
    ("i'll", "I will"),
    ("i'll've", "I will have"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("isn't", "is not"),
    ("it'll", "it will"),
    ("it'll've", "it will have"),
    ("kinda", "kind of"),
    ("lemme", "let me"),
    ("ma'am", "madam"),
    ("mayn't", "may not"),
    ("might've", "might have"),
    ("mightn't", "might not"),
    ("must've", "must have"),
    ("mustn't", "must not"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("oughtn't", "ought not"),
    ("sha'n't", "shall not"),
    ("shan't", "shall not"),
    ("she'll", "she will"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("shouldn't've", "should not have"),
    ("sorta", "sort of"),
    ("that'll", "that will"),
    ("there'll", "there will"),
    ("there're", "there are"),
    ("they'll", "they will"),
    ("they'll've", "they will have"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wanna", "want to"),
    ("wasn't", "was not"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what've", "what have"),
    ("where've", "where have"),
    ("who'll", "who will"),
    ("who're", "who are"),
    ("who've", "who have"),
    ("won't", "will not"),
    ("won't've", "will not have"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("wouldn't've", "would not have"),
    ("y'all", "you all"),
    ("y'all're", "you all are"),
    ("you'd've", "you would have"),
    ("you'll", "you will"),
    ("you'll've", "you will have"),
    ("you're", "you are"),
    ("you've", "you have"),
];

/// Contractions whose expansion depends on the surrounding words.
pub const AMBIGUOUS_CONTRACTIONS: &[&str] = &[
    "ain't",
    "he'd",
    "he's",
    "here's",
    "how'd",
    "how's",
    "i'd",
    "it'd",
    "it's",
    "let's",
    "she'd",
    "she's",
    "that'd",
    "that's",
    "there'd",
    "there's",
    "they'd",
    "watcha",
    "we'd",
    "what'd",
    "what's",
    "whatcha",
    "when's",
    "where'd",
    "where's",
    "who'd",
    "who's",
    "why'd",
    "why's",
    "you'd",
];

/// Words that may follow a leading elision apostrophe (`'tis`, `'em`).
pub const ELISION_WORDS: &[&str] = &[
    "bout", "cause", "cept", "em", "gainst", "n", "neath", "nuff", "round", "scuse", "sup",
    "til", "tis", "twas", "twere", "twill",
];

/// Clitic suffixes split off their host word during tokenization.
pub const CONTRACTION_SUFFIXES: &[&str] = &["'d", "'ll", "'m", "'re", "'s", "'ve", "n't"];

/// Words after "whatcha" that imply "what are you".
pub const WHATCHA_ARE_WORDS: &[&str] = &[
    "doin", "doing", "finna", "fixin", "fixing", "goin", "going", "gonna", "thinkin", "thinking",
    "tryin", "trying", "tryna",
];

/// Words after "whatcha" that imply "what have you".
pub const WHATCHA_HAVE_WORDS: &[&str] = &["been", "got", "gotta"];
