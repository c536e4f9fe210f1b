// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Word-level capitalization tables consulted by the capitalization chain.

/// Abbreviations that are always capitalized. Keys omit the trailing period.
pub const CAPITALIZED_ABBREVIATIONS: &[(&str, &str)] = &[
    ("apr", "Apr"),
    ("aug", "Aug"),
    ("capt", "Capt"),
    ("col", "Col"),
    ("dr", "Dr"),
    ("feb", "Feb"),
    ("gov", "Gov"),
    ("jan", "Jan"),
    ("jr", "Jr"),
    ("jul", "Jul"),
    ("lt", "Lt"),
    ("messrs", "Messrs"),
    ("mr", "Mr"),
    ("mrs", "Mrs"),
    ("ms", "Ms"),
    ("mt", "Mt"),
    ("mx", "Mx"),
    ("nov", "Nov"),
    ("oct", "Oct"),
    ("ph.d", "Ph.D"),
    ("prof", "Prof"),
    ("sen", "Sen"),
    ("sept", "Sept"),
    ("sgt", "Sgt"),
    ("sr", "Sr"),
    ("thurs", "Thurs"),
    ("tues", "Tues"),
];

/// Abbreviations that stay lowercase unless they open a sentence.
/// Keys omit the trailing period.
pub const LOWERCASE_ABBREVIATIONS: &[&str] = &[
    "a.m", "approx", "cf", "e.g", "et al", "etc", "i.e", "p.m", "viz", "vs",
];

/// Words written in all capitals.
pub const INITIALISMS: &[(&str, &str)] = &[
    ("api", "API"),
    ("asap", "ASAP"),
    ("atm", "ATM"),
    ("aws", "AWS"),
    ("bbc", "BBC"),
    ("ceo", "CEO"),
    ("cfo", "CFO"),
    ("cia", "CIA"),
    ("cnn", "CNN"),
    ("covid", "COVID"),
    ("cpu", "CPU"),
    ("css", "CSS"),
    ("cto", "CTO"),
    ("diy", "DIY"),
    ("dna", "DNA"),
    ("dvd", "DVD"),
    ("eu", "EU"),
    ("faq", "FAQ"),
    ("fbi", "FBI"),
    ("fyi", "FYI"),
    ("gdp", "GDP"),
    ("gps", "GPS"),
    ("gpu", "GPU"),
    ("hiv", "HIV"),
    ("html", "HTML"),
    ("http", "HTTP"),
    ("https", "HTTPS"),
    ("ibm", "IBM"),
    ("json", "JSON"),
    ("mba", "MBA"),
    ("mit", "MIT"),
    ("nasa", "NASA"),
    ("nato", "NATO"),
    ("nba", "NBA"),
    ("nfl", "NFL"),
    ("nyc", "NYC"),
    ("ok", "OK"),
    ("pdf", "PDF"),
    ("rna", "RNA"),
    ("sql", "SQL"),
    ("tv", "TV"),
    ("ucla", "UCLA"),
    ("ufo", "UFO"),
    ("uk", "UK"),
    ("url", "URL"),
    ("usa", "USA"),
    ("usb", "USB"),
];

/// Words with irregular interior capitalization.
pub const MIXED_CASE_WORDS: &[(&str, &str)] = &[
    ("chatgpt", "ChatGPT"),
    ("covid", "Covid"),
    ("doordash", "DoorDash"),
    ("ebay", "eBay"),
    ("fedex", "FedEx"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("imac", "iMac"),
    ("ios", "iOS"),
    ("ipad", "iPad"),
    ("iphone", "iPhone"),
    ("ipod", "iPod"),
    ("javascript", "JavaScript"),
    ("linkedin", "LinkedIn"),
    ("macos", "macOS"),
    ("mysql", "MySQL"),
    ("openai", "OpenAI"),
    ("paypal", "PayPal"),
    ("phd", "PhD"),
    ("playstation", "PlayStation"),
    ("postgresql", "PostgreSQL"),
    ("powerpoint", "PowerPoint"),
    ("tiktok", "TikTok"),
    ("typescript", "TypeScript"),
    ("whatsapp", "WhatsApp"),
    ("wordpress", "WordPress"),
    ("youtube", "YouTube"),
];

/// Endings split off a word before a table lookup and re-appended in
/// lowercase, so that "apis" becomes "APIs".
pub const MAP_SUFFIX_EXCEPTIONS: &[&str] = &["'s", "’s", "'", "’", "s"];

/// Prefixes that begin surnames whose remainder is capitalized separately.
pub const NAME_PREFIXES: &[&str] = &["d'", "d’", "mac", "mc", "o'", "o’"];

/// Ordinary words that begin with a name prefix.
pub const NAME_PREFIX_EXCEPTIONS: &[&str] = &[
    "d'oh", "d’oh", "macabre", "macadam", "macadamia", "macaque", "macaroni", "macaroon", "macaw",
    "mace", "macerat", "mach", "machete", "machiavellian", "machination", "machine", "machinery",
    "machinist", "machismo", "macho", "mack", "mackerel", "mackinaw", "mackintosh", "macrame",
    "macro", "macron", "macula", "o'clock", "o’clock", "o'er", "o’er",
];

/// Surnames and given names with an interior capital that is not produced
/// by a name prefix.
pub const OTHER_PREFIXED_NAMES: &[(&str, &str)] = &[
    ("deandre", "DeAndre"),
    ("delorean", "DeLorean"),
    ("desantis", "DeSantis"),
    ("deshawn", "DeShawn"),
    ("dicaprio", "DiCaprio"),
    ("dimaggio", "DiMaggio"),
    ("lafontaine", "LaFontaine"),
    ("lebron", "LeBron"),
    ("vanderwaal", "VanderWaal"),
];
