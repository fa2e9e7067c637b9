// Image sub-score.
//
// Placeholder heuristic keyed only on the URL text. Nothing is fetched and no
// pixels are inspected. Matching is case-sensitive, so ".../STOCK/..." is
// treated as a unique image.

/// Score when no image URL was supplied.
pub const NO_IMAGE_SCORE: u8 = 30;
/// Score for URLs that look like stock photography.
pub const STOCK_IMAGE_SCORE: u8 = 40;
/// Score for anything else.
pub const UNIQUE_IMAGE_SCORE: u8 = 75;

const STOCK_MARKERS: [&str; 3] = ["stock", "unsplash", "pexels"];

pub fn image_sub_score(image_url: Option<&str>) -> u8 {
    match image_url {
        None => NO_IMAGE_SCORE,
        Some(url) if url.is_empty() => NO_IMAGE_SCORE,
        Some(url) if STOCK_MARKERS.iter().any(|m| url.contains(m)) => STOCK_IMAGE_SCORE,
        Some(_) => UNIQUE_IMAGE_SCORE,
    }
}
