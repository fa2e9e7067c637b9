// Unit tests for caller-side coercion, batch loading and the running aggregate.

use std::io::Write;

use trustlens::input::{coerce_account_age, coerce_count, load_profiles, RawProfileInput};
use trustlens::models::{Platform, DEFAULT_ACCOUNT_AGE_DAYS};
use trustlens::stats::{running_average, UserStats};

fn raw(platform: &str) -> RawProfileInput {
    RawProfileInput {
        username: "tester".to_string(),
        bio: "Just here for the memes and the dogs".to_string(),
        followers: "10".to_string(),
        following: "20".to_string(),
        posts: "30".to_string(),
        account_age_days: Some("40".to_string()),
        is_verified: false,
        profile_image_url: None,
        platform: platform.to_string(),
    }
}

// ============================================================
// Count and age coercion
// ============================================================

#[test]
fn counts_parse_leading_digits() {
    assert_eq!(coerce_count("123"), 123);
    assert_eq!(coerce_count(" 1200 followers"), 1200);
}

#[test]
fn counts_garbage_and_negative_become_zero() {
    assert_eq!(coerce_count(""), 0);
    assert_eq!(coerce_count("lots"), 0);
    assert_eq!(coerce_count("-5"), 0);
}

#[test]
fn age_garbage_zero_and_negative_become_one() {
    assert_eq!(coerce_account_age(""), 1);
    assert_eq!(coerce_account_age("0"), 1);
    assert_eq!(coerce_account_age("-30"), 1);
    assert_eq!(coerce_account_age("a while"), 1);
    assert_eq!(coerce_account_age("90"), 90);
}

// ============================================================
// RawProfileInput::into_profile
// ============================================================

#[test]
fn raw_input_converts() {
    let input = raw("Instagram").into_profile(DEFAULT_ACCOUNT_AGE_DAYS).unwrap();
    assert_eq!(input.platform, Platform::Instagram);
    assert_eq!(input.followers_count, 10);
    assert_eq!(input.following_count, 20);
    assert_eq!(input.posts_count, 30);
    assert_eq!(input.account_age_in_days, 40);
}

#[test]
fn missing_age_uses_default() {
    let mut r = raw("tinder");
    r.account_age_days = None;
    assert_eq!(r.clone().into_profile(30).unwrap().account_age_in_days, 30);
    assert_eq!(r.into_profile(0).unwrap().account_age_in_days, 1);
}

#[test]
fn blank_image_url_is_dropped() {
    let mut r = raw("facebook");
    r.profile_image_url = Some("   ".to_string());
    assert_eq!(r.into_profile(30).unwrap().profile_image_url, None);
}

#[test]
fn unknown_platform_is_an_error() {
    let err = raw("friendster").into_profile(30).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("friendster"), "unexpected message: {msg}");
}

// ============================================================
// load_profiles
// ============================================================

#[test]
fn load_profiles_reads_array_with_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"username": "a", "platform": "twitter", "followersCount": 5}},
            {{"username": "b", "bio": "hi", "platform": "linkedin",
              "accountAgeInDays": 400, "isVerified": true,
              "profileImageUrl": "https://x.example/p.png"}}
        ]"#
    )
    .unwrap();

    let profiles = load_profiles(file.path()).unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].platform, Platform::Twitter);
    assert_eq!(profiles[0].followers_count, 5);
    assert_eq!(profiles[0].account_age_in_days, DEFAULT_ACCOUNT_AGE_DAYS);
    assert!(profiles[1].is_verified);
    assert_eq!(
        profiles[1].profile_image_url.as_deref(),
        Some("https://x.example/p.png")
    );
}

#[test]
fn load_profiles_rejects_unknown_platform() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"platform": "myspace"}}]"#).unwrap();
    assert!(load_profiles(file.path()).is_err());
}

#[test]
fn load_profiles_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_profiles(&dir.path().join("nope.json")).is_err());
}

// ============================================================
// Running aggregate
// ============================================================

#[test]
fn running_average_matches_formula() {
    // round((60 * 3 + 80) / 4) = 65
    assert_eq!(running_average(60, 3, 80), 65);
    // round((90 * 9 + 0) / 10) = 81
    assert_eq!(running_average(90, 9, 0), 81);
}

#[test]
fn stats_json_uses_store_column_names() {
    let stats = UserStats {
        trust_score: 64,
        profiles_analyzed: 12,
        reports_submitted: 2,
    };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["trust_score"], 64);
    assert_eq!(json["profiles_analyzed"], 12);
    assert_eq!(json["reports_submitted"], 2);
}
