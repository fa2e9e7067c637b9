// Text sub-score — cheap lexical heuristics over the bio.
//
// Starts at 80 and subtracts for scam phrases, filler phrases, very short
// bios, Instagram link-in-bio, and heavy emoji use. Lengths and emoji are
// counted in Unicode scalar values, never bytes.

use crate::models::Platform;
use crate::scoring::keywords::{self, GENERIC_WORDS, SUSPICIOUS_KEYWORDS};

const BASE_SCORE: i32 = 80;
const SUSPICIOUS_PENALTY: i32 = 15;
const GENERIC_PENALTY: i32 = 5;
/// Bios shorter than this many characters are penalized.
pub const SHORT_BIO_CHARS: usize = 20;
const SHORT_BIO_PENALTY: i32 = 20;
const LINK_IN_BIO_PENALTY: i32 = 25;
const EMOJI_LIMIT: usize = 5;
const EMOJI_PENALTY: i32 = 15;

pub fn text_sub_score(bio: &str, platform: Platform) -> u8 {
    let lower = bio.to_lowercase();
    let mut score = BASE_SCORE;

    score -= keywords::count_matches(&lower, &SUSPICIOUS_KEYWORDS) as i32 * SUSPICIOUS_PENALTY;
    score -= keywords::count_matches(&lower, &GENERIC_WORDS) as i32 * GENERIC_PENALTY;

    if bio.chars().count() < SHORT_BIO_CHARS {
        score -= SHORT_BIO_PENALTY;
    }

    // Case-sensitive, checked on the bio as written.
    if bio.contains("http") && platform == Platform::Instagram {
        score -= LINK_IN_BIO_PENALTY;
    }

    if count_emoji(bio) > EMOJI_LIMIT {
        score -= EMOJI_PENALTY;
    }

    score.clamp(0, 100) as u8
}

/// Count characters in the pictograph/symbol class used for emoji detection.
pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|c| is_emoji(*c)).count()
}

/// © and ®, the general punctuation through CJK compatibility blocks, and
/// the supplementary pictograph planes U+1F000..=U+1FBFF.
fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{00A9}' | '\u{00AE}' | '\u{2000}'..='\u{3300}' | '\u{1F000}'..='\u{1FBFF}'
    )
}
