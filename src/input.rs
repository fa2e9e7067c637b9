// Caller-side coercion of raw form values into a `ProfileInput`.
//
// The scoring engine trusts its input. Anything typed by a person goes
// through here first:
// - counts: leading integer, anything unparseable or negative becomes 0
// - account age: leading integer, anything unparseable or below 1 becomes 1;
//   an absent field falls back to the configured default
// - platform: must name one of the supported platforms

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::{Platform, ProfileInput};

/// Profile fields as collected from a form or command line.
#[derive(Debug, Clone, Default)]
pub struct RawProfileInput {
    pub username: String,
    pub bio: String,
    pub followers: String,
    pub following: String,
    pub posts: String,
    /// `None` when the field was left out entirely.
    pub account_age_days: Option<String>,
    pub is_verified: bool,
    pub profile_image_url: Option<String>,
    pub platform: String,
}

impl RawProfileInput {
    /// Coerce into a well-typed profile. Fails only on an unknown platform.
    pub fn into_profile(self, default_account_age: u32) -> Result<ProfileInput> {
        let platform: Platform = self
            .platform
            .parse()
            .with_context(|| format!("invalid platform for @{}", self.username))?;

        let account_age_in_days = match self.account_age_days.as_deref() {
            None => default_account_age.max(1),
            Some(raw) => coerce_account_age(raw),
        };

        Ok(ProfileInput {
            username: self.username,
            bio: self.bio,
            followers_count: coerce_count(&self.followers),
            following_count: coerce_count(&self.following),
            posts_count: coerce_count(&self.posts),
            account_age_in_days,
            is_verified: self.is_verified,
            profile_image_url: self.profile_image_url.filter(|url| !url.trim().is_empty()),
            platform,
        })
    }
}

/// Read a JSON array of already-typed profiles from disk.
///
/// Omitted fields take their serde defaults (zero counts, empty bio, 30-day age).
pub fn load_profiles(path: &Path) -> Result<Vec<ProfileInput>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let profiles: Vec<ProfileInput> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of profiles", path.display()))?;
    if profiles.is_empty() {
        warn!(path = %path.display(), "Batch file contains no profiles");
    }
    Ok(profiles)
}

/// Parse a count, mapping garbage and negatives to 0.
pub fn coerce_count(raw: &str) -> u64 {
    match parse_leading_int(raw) {
        Some(n) if n > 0 => n as u64,
        _ => 0,
    }
}

/// Parse an account age in days, mapping garbage and values below 1 to 1.
pub fn coerce_account_age(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Parse an optional sign followed by digits, ignoring leading whitespace and
/// anything after the digits ("42 days" is 42). Saturates on overflow.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
