// Combined trust score and confidence.
//
// The trust score is a fixed weighted sum of the three sub-scores. Behavior
// carries the most weight, the placeholder image heuristic the least.
//
// Confidence grows linearly with distance from the neutral midpoint 50:
// 75 at the midpoint, 95 at either extreme.

/// Weights for combining the sub-scores. They must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrustWeights {
    /// Default 0.25
    pub image: f64,
    /// Default 0.35
    pub text: f64,
    /// Default 0.40
    pub behavior: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            image: 0.25,
            text: 0.35,
            behavior: 0.40,
        }
    }
}

impl TrustWeights {
    pub fn total(&self) -> f64 {
        self.image + self.text + self.behavior
    }
}

const NEUTRAL_SCORE: f64 = 50.0;
const MIN_CONFIDENCE: f64 = 75.0;
const CONFIDENCE_SPAN: f64 = 20.0;
const MAX_CONFIDENCE: u8 = 95;

/// Combine the sub-scores into a 0-100 trust score, rounded half-up.
pub fn compute_trust_score(image: u8, text: u8, behavior: u8, weights: &TrustWeights) -> u8 {
    // Keep the summation order fixed so rounding is reproducible.
    let raw = image as f64 * weights.image
        + text as f64 * weights.text
        + behavior as f64 * weights.behavior;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Confidence in a trust score, 75-95.
pub fn compute_confidence(trust_score: u8) -> u8 {
    let distance = (trust_score as f64 - NEUTRAL_SCORE).abs() / NEUTRAL_SCORE;
    let confidence = (MIN_CONFIDENCE + distance * CONFIDENCE_SPAN).round() as u8;
    confidence.min(MAX_CONFIDENCE)
}
