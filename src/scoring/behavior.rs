// Behavioral sub-score — account activity patterns.
//
// Starts at 70. Penalizes empty follower graphs, lopsided follow ratios,
// missing or implausible posting cadence, and young accounts. Rewards the
// verified flag and established high-reach accounts.
//
// When `following == 0` the ratio is defined as 0, which triggers both the
// out-of-range penalty and the zero-ratio penalty on top of the empty-graph
// penalty. The stacking is intentional and must be preserved.

const BASE_SCORE: i32 = 70;

const EMPTY_GRAPH_PENALTY: i32 = 20;
const RATIO_HIGH: f64 = 10.0;
const RATIO_LOW: f64 = 0.1;
const RATIO_RANGE_PENALTY: i32 = 15;
const ZERO_RATIO_PENALTY: i32 = 25;

const NO_POSTS_PENALTY: i32 = 15;
const POST_FREQ_HIGH: f64 = 10.0;
const POST_FREQ_HIGH_PENALTY: i32 = 10;
const POST_FREQ_LOW: f64 = 0.1;
const POST_FREQ_LOW_PENALTY: i32 = 15;

/// Accounts younger than this many days get the steepest age penalty.
pub const VERY_NEW_ACCOUNT_DAYS: u32 = 7;
const VERY_NEW_PENALTY: i32 = 30;
const NEW_ACCOUNT_DAYS: u32 = 30;
const NEW_PENALTY: i32 = 15;

const VERIFIED_BONUS: i32 = 20;

const ESTABLISHED_FOLLOWERS: u64 = 100_000;
const ESTABLISHED_POSTS: u64 = 100;
const ESTABLISHED_AGE_DAYS: u32 = 365;
const ESTABLISHED_BONUS: i32 = 15;

/// Followers divided by following, or 0.0 when following is 0.
pub fn follow_ratio(followers: u64, following: u64) -> f64 {
    if following == 0 {
        return 0.0;
    }
    followers as f64 / following as f64
}

/// Posts per day of account age. Age is floored at one day.
pub fn post_frequency(posts: u64, account_age_days: u32) -> f64 {
    posts as f64 / account_age_days.max(1) as f64
}

pub fn behavior_sub_score(
    followers: u64,
    following: u64,
    posts: u64,
    account_age_days: u32,
    verified: bool,
) -> u8 {
    let mut score = BASE_SCORE;

    if followers == 0 || following == 0 {
        score -= EMPTY_GRAPH_PENALTY;
    }

    let ratio = follow_ratio(followers, following);
    if ratio > RATIO_HIGH || ratio < RATIO_LOW {
        score -= RATIO_RANGE_PENALTY;
    }
    if ratio == 0.0 {
        score -= ZERO_RATIO_PENALTY;
    }

    if posts == 0 {
        score -= NO_POSTS_PENALTY;
    } else {
        let frequency = post_frequency(posts, account_age_days);
        if frequency > POST_FREQ_HIGH {
            score -= POST_FREQ_HIGH_PENALTY;
        }
        if frequency < POST_FREQ_LOW {
            score -= POST_FREQ_LOW_PENALTY;
        }
    }

    // Only the tightest age band applies.
    if account_age_days < VERY_NEW_ACCOUNT_DAYS {
        score -= VERY_NEW_PENALTY;
    } else if account_age_days < NEW_ACCOUNT_DAYS {
        score -= NEW_PENALTY;
    }

    if verified {
        score += VERIFIED_BONUS;
    }

    if followers > ESTABLISHED_FOLLOWERS
        && posts > ESTABLISHED_POSTS
        && account_age_days > ESTABLISHED_AGE_DAYS
    {
        score += ESTABLISHED_BONUS;
    }

    score.clamp(0, 100) as u8
}
