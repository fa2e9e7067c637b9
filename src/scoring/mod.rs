// Scoring engine — three independent heuristics combined into one trust score.

pub mod behavior;
pub mod flags;
pub mod image;
pub mod keywords;
pub mod profile;
pub mod text;
pub mod trust;

pub use profile::{analyze_profile, analyze_profile_with};
