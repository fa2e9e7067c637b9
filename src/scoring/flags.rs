// Red-flag extraction.
//
// Checks run in a fixed order and each appends at most one flag, so the
// output order is stable for golden comparisons.

use crate::models::{Platform, ProfileInput, RedFlag, SubScores};
use crate::scoring::behavior::VERY_NEW_ACCOUNT_DAYS;
use crate::scoring::keywords::{self, SUSPICIOUS_KEYWORDS};
use crate::scoring::text::SHORT_BIO_CHARS;

/// Follower/following ratio below this is flagged (stricter display rule than
/// the 0.1 scoring threshold).
const FLAG_RATIO_THRESHOLD: f64 = 0.2;
/// Sub-scores below this are flagged.
const LOW_SUB_SCORE: u8 = 50;

pub fn extract_red_flags(input: &ProfileInput, scores: &SubScores) -> Vec<RedFlag> {
    let mut flags = Vec::new();

    if input.account_age_in_days < VERY_NEW_ACCOUNT_DAYS {
        flags.push(RedFlag::VeryNewAccount);
    }

    if input.followers_count == 0 {
        flags.push(RedFlag::NoFollowers);
    }

    if input.posts_count == 0 {
        flags.push(RedFlag::NoPosts);
    }

    if input.following_count > 0
        && (input.followers_count as f64 / input.following_count as f64) < FLAG_RATIO_THRESHOLD
    {
        flags.push(RedFlag::UnusualFollowRatio);
    }

    if keywords::contains_any(&input.bio.to_lowercase(), &SUSPICIOUS_KEYWORDS) {
        flags.push(RedFlag::SuspiciousKeywords);
    }

    let bio_chars = input.bio.chars().count();
    if bio_chars > 0 && bio_chars < SHORT_BIO_CHARS {
        flags.push(RedFlag::ShortBio);
    }

    if scores.image_score < LOW_SUB_SCORE {
        flags.push(RedFlag::GenericImage);
    }

    if scores.text_score < LOW_SUB_SCORE {
        flags.push(RedFlag::SpamLikeText);
    }

    if scores.behavior_score < LOW_SUB_SCORE {
        flags.push(RedFlag::UnusualBehavior);
    }

    if input.platform == Platform::Twitter && !input.is_verified {
        flags.push(RedFlag::NotVerifiedOnTwitter);
    }

    flags
}
