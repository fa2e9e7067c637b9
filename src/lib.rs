// TrustLens: heuristic trust scoring for social and dating profiles.
//
// This is the library root. The scoring engine is pure; everything around it
// (coercion, aggregation, config, output) exists to feed it and present it.

pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod scoring;
pub mod stats;

pub use models::{AnalysisResult, Platform, ProfileInput, RedFlag, SubScores, TrustTier};
pub use scoring::analyze_profile;
