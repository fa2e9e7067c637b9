// Profile analysis — orchestrates scoring for a single profile.
//
// Given a profile description, this module:
// 1. Computes the image, text and behavior sub-scores independently
// 2. Combines them into the weighted trust score
// 3. Derives the confidence from the trust score
// 4. Extracts red flags using the sub-scores already computed
//
// The whole pass is pure and synchronous: no I/O, no shared state. It is
// safe to call from any number of threads at once.

use tracing::debug;

use crate::models::{AnalysisResult, ProfileInput, SubScores};
use crate::scoring::behavior::behavior_sub_score;
use crate::scoring::flags::extract_red_flags;
use crate::scoring::image::image_sub_score;
use crate::scoring::text::text_sub_score;
use crate::scoring::trust::{self, TrustWeights};

/// Analyze a profile with the default weights.
///
/// Total over every well-typed input, including empty bios, zero counts and
/// a missing image URL.
pub fn analyze_profile(input: &ProfileInput) -> AnalysisResult {
    analyze_profile_with(input, &TrustWeights::default())
}

/// Analyze a profile with caller-supplied weights.
pub fn analyze_profile_with(input: &ProfileInput, weights: &TrustWeights) -> AnalysisResult {
    let scores = SubScores {
        image_score: image_sub_score(input.profile_image_url.as_deref()),
        text_score: text_sub_score(&input.bio, input.platform),
        behavior_score: behavior_sub_score(
            input.followers_count,
            input.following_count,
            input.posts_count,
            input.account_age_in_days,
            input.is_verified,
        ),
    };

    let trust_score = trust::compute_trust_score(
        scores.image_score,
        scores.text_score,
        scores.behavior_score,
        weights,
    );
    let confidence = trust::compute_confidence(trust_score);
    let red_flags = extract_red_flags(input, &scores);

    debug!(
        platform = input.platform.as_str(),
        image = scores.image_score,
        text = scores.text_score,
        behavior = scores.behavior_score,
        trust = trust_score,
        confidence,
        flags = red_flags.len(),
        "Analyzed profile"
    );

    AnalysisResult {
        trust_score,
        confidence,
        analysis: scores,
        red_flags,
    }
}
