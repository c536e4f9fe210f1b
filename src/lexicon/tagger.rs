// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Closed-class word lists and exceptions for the rule-based tagger.

pub const DETERMINERS: &[&str] = &[
    "a", "all", "an", "another", "any", "both", "each", "either", "every", "neither", "no",
    "some", "that", "the", "these", "this", "those",
];

pub const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite",
    "down", "during", "except", "for", "from", "in", "inside", "into", "like", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "past", "per", "since", "through",
    "throughout", "toward", "towards", "under", "underneath", "until", "up", "upon", "via",
    "with", "within", "without",
];

pub const SUBORDINATORS: &[&str] = &[
    "although", "because", "if", "lest", "once", "than", "though", "unless", "whereas",
    "whether", "while",
];

pub const COORDINATORS: &[&str] = &["and", "but", "nor", "or", "plus", "so", "yet"];

pub const PERSONAL_PRONOUNS: &[&str] = &[
    "he", "herself", "him", "himself", "i", "it", "itself", "me", "mine", "myself", "one",
    "ours", "ourselves", "she", "something", "someone", "somebody", "anything", "anyone",
    "anybody", "everything", "everyone", "everybody", "nothing", "nobody", "theirs", "them",
    "themselves", "they", "us", "we", "you", "yours", "yourself", "yourselves", "y'all",
];

pub const POSSESSIVE_PRONOUNS: &[&str] = &["her", "his", "its", "my", "our", "their", "your"];

pub const WH_PRONOUNS: &[&str] = &["what", "whatever", "who", "whoever", "whom", "whose"];

pub const WH_DETERMINERS: &[&str] = &["which", "whichever"];

pub const WH_ADVERBS: &[&str] = &["how", "when", "whenever", "where", "wherever", "why"];

/// Modals, including the bases left behind by splitting `can't`, `won't`
/// and `shan't`.
pub const MODALS: &[&str] = &[
    "ca", "can", "could", "may", "might", "must", "ought", "sha", "shall", "should", "will",
    "wo", "would",
];

/// Forms of "be", "have" and "do" with their fine-grained tags.
pub const AUXILIARIES: &[(&str, &str)] = &[
    ("ai", "VBP"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("did", "VBD"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("had", "VBD"),
    ("has", "VBZ"),
    ("have", "VBP"),
    ("having", "VBG"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
];

pub const ADVERBS: &[&str] = &[
    "again", "ago", "almost", "already", "also", "always", "anyway", "away", "back", "else",
    "enough", "even", "ever", "here", "however", "instead", "just", "later", "maybe", "more",
    "most", "much", "never", "now", "often", "only", "perhaps", "quite", "rather", "really",
    "seldom", "sometimes", "soon", "sooner", "still", "then", "there", "therefore", "thus",
    "today", "together", "tomorrow", "tonight", "too", "very", "well", "yesterday",
];

pub const INTERJECTIONS: &[&str] = &[
    "ah", "aha", "hello", "hey", "hi", "hmm", "oh", "oops", "ouch", "please", "thanks", "uh",
    "um", "wow", "yeah", "yes",
];

pub const ADJECTIVES: &[&str] = &[
    "bad", "best", "better", "big", "black", "blue", "cold", "dark", "different", "early",
    "easy", "few", "fine", "first", "free", "full", "good", "great", "green", "happy", "hard",
    "high", "hot", "important", "large", "last", "late", "little", "long", "low", "many", "new",
    "next", "nice", "old", "other", "own", "poor", "ready", "real", "red", "right", "sad",
    "same", "short", "small", "strong", "sure", "tall", "true", "white", "whole", "wrong",
    "young",
];

pub const BASE_VERBS: &[&str] = &[
    "ask", "be", "become", "begin", "believe", "break", "bring", "build", "buy", "call", "care",
    "change", "come", "dare", "eat", "feel", "find", "get", "give", "go", "happen", "hear",
    "help", "hold", "keep", "know", "leave", "let", "like", "listen", "live", "look", "lose",
    "love", "make", "mean", "meet", "mind", "move", "need", "pay", "play", "prefer", "put",
    "read", "remember", "run", "say", "see", "seem", "sell", "send", "show", "sing", "sit",
    "sleep", "speak", "stand", "start", "stay", "stop", "take", "talk", "teach", "tell",
    "think", "try", "turn", "understand", "use", "wait", "walk", "want", "watch", "win", "work",
    "worry", "write",
];

pub const PAST_TENSE_VERBS: &[&str] = &[
    "ate", "became", "began", "bought", "brought", "built", "came", "felt", "found", "gave",
    "got", "heard", "held", "kept", "knew", "left", "lost", "made", "meant", "met", "paid",
    "ran", "read", "said", "sang", "sat", "saw", "sent", "slept", "sold", "spoke", "stood",
    "taught", "thought", "told", "took", "understood", "went", "won", "wrote",
];

pub const PAST_PARTICIPLES: &[&str] = &[
    "begun", "broken", "chosen", "done", "driven", "eaten", "fallen", "flown", "forgotten",
    "given", "gone", "gotten", "grown", "hidden", "known", "ridden", "risen", "seen", "shown",
    "spoken", "stolen", "sung", "swum", "taken", "thrown", "woken", "worn", "written",
];

pub const NUMBER_WORDS: &[&str] = &[
    "billion", "eight", "eighteen", "eighty", "eleven", "fifteen", "fifty", "five", "forty",
    "four", "fourteen", "hundred", "million", "nine", "nineteen", "ninety", "seven", "seventeen",
    "seventy", "six", "sixteen", "sixty", "ten", "thirteen", "thirty", "thousand", "three",
    "twelve", "twenty", "two", "zero",
];

/// Words ending in "-ing" that are not gerunds or participles.
pub const ING_EXCEPTIONS: &[&str] = &[
    "anything", "building", "ceiling", "evening", "everything", "king", "morning", "nothing",
    "pudding", "ring", "something", "spring", "sting", "string", "thing", "wedding", "wing",
];

/// Words ending in "-ly" that are not adverbs.
pub const LY_EXCEPTIONS: &[&str] = &[
    "belly", "bully", "family", "fly", "friendly", "holy", "italy", "lily", "lonely", "lovely",
    "rally", "reply", "silly", "supply", "ugly", "ally", "only",
];

/// Suffixes that mark adjectives.
pub const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ful", "ible", "ical", "ish", "ive", "less", "ous"];

/// Abbreviations whose trailing period does not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "a.m.", "approx.", "capt.", "cf.", "co.", "col.", "corp.", "dept.", "dr.", "e.g.", "etc.",
    "i.e.", "inc.", "jr.", "lt.", "ltd.", "messrs.", "mr.", "mrs.", "ms.", "mt.", "mx.", "no.",
    "p.m.", "ph.d.", "prof.", "sgt.", "sr.", "st.", "vs.",
];

/// Words whose capitalized form in mid-sentence usually names something.
pub const PROPER_NOUN_CANDIDATES: &[&str] = &[
    "april", "august", "bill", "china", "grace", "hope", "jordan", "june", "march", "mark",
    "may", "rose", "turkey", "will",
];
