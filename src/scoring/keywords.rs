// Phrase tables used by the text heuristics.
//
// Phrases are lowercase and matched as plain substrings of the lowercased
// bio, so "crypto" also hits "cryptocurrency".

/// Scam, phishing and financial-lure phrases.
pub const SUSPICIOUS_KEYWORDS: [&str; 16] = [
    "make money",
    "quick cash",
    "guarantee",
    "limited time",
    "urgent",
    "click here",
    "verify account",
    "confirm identity",
    "update payment",
    "congratulations won",
    "claim prize",
    "bitcoin",
    "crypto",
    "investment opportunity",
    "no experience needed",
    "work from home",
];

/// Filler phrases common in low-effort dating profiles.
pub const GENERIC_WORDS: [&str; 8] = [
    "hello",
    "hi there",
    "beautiful",
    "gorgeous",
    "handsome",
    "love travel",
    "love fitness",
    "adventure",
];

/// Number of distinct phrases from `table` that occur in `lower_text`.
///
/// Each phrase counts once no matter how often it repeats.
pub fn count_matches(lower_text: &str, table: &[&str]) -> usize {
    table.iter().filter(|phrase| lower_text.contains(*phrase)).count()
}

/// Whether any phrase from `table` occurs in `lower_text`.
pub fn contains_any(lower_text: &str, table: &[&str]) -> bool {
    table.iter().any(|phrase| lower_text.contains(phrase))
}
