// Data models — the input record, the analysis result, and the small enums
// that flow between the scoring modules and the output layer.
//
// Field names serialize in camelCase so JSON produced here matches what the
// web front end and the stats store already exchange.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Platform the profile was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
    Tinder,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Twitter,
        Platform::Tinder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Tinder => "tinder",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a platform name is not one of the supported five.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlatformError(pub String);

impl fmt::Display for ParsePlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown platform '{}' (expected facebook, instagram, linkedin, twitter or tinder)",
            self.0
        )
    }
}

impl std::error::Error for ParsePlatformError {}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| ParsePlatformError(s.to_string()))
    }
}

/// Everything the engine knows about a profile.
///
/// Counts are unsigned: negative or non-numeric form values must be coerced
/// by the caller before construction (see `crate::input`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Not used in scoring.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub posts_count: u64,
    #[serde(default = "default_account_age")]
    pub account_age_in_days: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub platform: Platform,
}

/// Account age assumed when the caller doesn't supply one.
pub const DEFAULT_ACCOUNT_AGE_DAYS: u32 = 30;

fn default_account_age() -> u32 {
    DEFAULT_ACCOUNT_AGE_DAYS
}

/// The three independent sub-scores, each in 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub image_score: u8,
    pub text_score: u8,
    pub behavior_score: u8,
}

/// A human-readable warning attached to an analysis.
///
/// Variants are declared in the order the checks run; serialized as the
/// exact message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedFlag {
    VeryNewAccount,
    NoFollowers,
    NoPosts,
    UnusualFollowRatio,
    SuspiciousKeywords,
    ShortBio,
    GenericImage,
    SpamLikeText,
    UnusualBehavior,
    NotVerifiedOnTwitter,
}

impl RedFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedFlag::VeryNewAccount => "Very new account (less than 7 days old)",
            RedFlag::NoFollowers => "No followers",
            RedFlag::NoPosts => "No posts on record",
            RedFlag::UnusualFollowRatio => "Unusual follower-to-following ratio",
            RedFlag::SuspiciousKeywords => "Bio contains suspicious keywords",
            RedFlag::ShortBio => "Unusually short bio",
            RedFlag::GenericImage => "Generic or suspicious profile image",
            RedFlag::SpamLikeText => "Bio contains spam-like language",
            RedFlag::UnusualBehavior => "Unusual account behavior patterns",
            RedFlag::NotVerifiedOnTwitter => "Not verified on Twitter",
        }
    }
}

impl fmt::Display for RedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RedFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Output of a single analysis. Carries no identity beyond the call that made it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Combined score, 0-100.
    pub trust_score: u8,
    /// 75-95.
    pub confidence: u8,
    pub analysis: SubScores,
    pub red_flags: Vec<RedFlag>,
}

impl AnalysisResult {
    pub fn tier(&self) -> TrustTier {
        TrustTier::from_score(self.trust_score)
    }
}

/// Coarse trust band used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustTier {
    Low,
    Medium,
    High,
}

impl TrustTier {
    /// Determine the tier from a trust score (0-100).
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 75 => TrustTier::High,
            s if s >= 50 => TrustTier::Medium,
            _ => TrustTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustTier::Low => "Low",
            TrustTier::Medium => "Medium",
            TrustTier::High => "High",
        }
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
