use trustlens::scoring::behavior::{behavior_sub_score, follow_ratio, post_frequency};

// --- Follower graph ---

#[test]
fn no_followers_with_following() {
    // 70 - 20 (empty graph) - 15 (ratio < 0.1) - 25 (ratio == 0)
    assert_eq!(behavior_sub_score(0, 50, 100, 100, false), 10);
}

#[test]
fn ratio_above_ten_penalized() {
    // ratio 11
    assert_eq!(behavior_sub_score(1100, 100, 100, 100, false), 55);
}

#[test]
fn ratio_exactly_ten_not_penalized() {
    assert_eq!(behavior_sub_score(1000, 100, 100, 100, false), 70);
}

#[test]
fn ratio_exactly_point_one_not_penalized() {
    assert_eq!(behavior_sub_score(10, 100, 100, 100, false), 70);
}

#[test]
fn ratio_just_below_point_one_penalized() {
    assert_eq!(behavior_sub_score(9, 100, 100, 100, false), 55);
}

#[test]
fn ratio_helper_values() {
    assert_eq!(follow_ratio(0, 0), 0.0);
    assert!((follow_ratio(300, 100) - 3.0).abs() < f64::EPSILON);
}

// --- Posting cadence ---

#[test]
fn no_posts_penalized() {
    assert_eq!(behavior_sub_score(100, 100, 0, 100, false), 55);
}

#[test]
fn posting_too_fast_penalized() {
    // 1100 posts in 100 days = 11/day
    assert_eq!(behavior_sub_score(100, 100, 1100, 100, false), 60);
}

#[test]
fn posting_exactly_ten_per_day_allowed() {
    assert_eq!(behavior_sub_score(100, 100, 1000, 100, false), 70);
}

#[test]
fn dormant_account_penalized() {
    // 5 posts in 100 days = 0.05/day
    assert_eq!(behavior_sub_score(100, 100, 5, 100, false), 55);
}

#[test]
fn zero_age_treated_as_one_day() {
    assert!((post_frequency(20, 0) - 20.0).abs() < f64::EPSILON);
    // 70 - 10 (20/day) - 30 (age < 7)
    assert_eq!(behavior_sub_score(100, 100, 20, 0, false), 30);
}

// --- Account age ---

#[test]
fn age_six_days_takes_only_the_steep_penalty() {
    assert_eq!(behavior_sub_score(100, 100, 6, 6, false), 40);
}

#[test]
fn age_seven_days_takes_the_mild_penalty() {
    assert_eq!(behavior_sub_score(100, 100, 7, 7, false), 55);
}

#[test]
fn age_twenty_nine_and_thirty() {
    assert_eq!(behavior_sub_score(100, 100, 29, 29, false), 55);
    assert_eq!(behavior_sub_score(100, 100, 30, 30, false), 70);
}

// --- Bonuses ---

#[test]
fn verified_adds_twenty() {
    assert_eq!(behavior_sub_score(100, 100, 100, 100, true), 90);
}

#[test]
fn established_account_bonus() {
    // ratio 1, 1 post/day over 1000 days
    assert_eq!(behavior_sub_score(200_000, 200_000, 1000, 1000, false), 85);
}

#[test]
fn established_bonus_thresholds_are_strict() {
    assert_eq!(behavior_sub_score(100_000, 100_000, 1000, 1000, false), 70);
    assert_eq!(behavior_sub_score(200_000, 200_000, 100, 366, false), 70);
    assert_eq!(behavior_sub_score(200_000, 200_000, 365, 365, false), 70);
}

#[test]
fn bonuses_clamp_at_100() {
    assert_eq!(behavior_sub_score(200_000, 200_000, 1000, 1000, true), 100);
}

// --- Clamping ---

#[test]
fn worst_case_clamps_to_zero() {
    assert_eq!(behavior_sub_score(0, 0, 0, 1, false), 0);
}
