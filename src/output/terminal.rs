// Colored terminal output for analysis results.
//
// main.rs delegates all human-facing formatting here.

use colored::Colorize;

use crate::models::{AnalysisResult, ProfileInput, TrustTier};
use crate::scoring::keywords::{GENERIC_WORDS, SUSPICIOUS_KEYWORDS};
use crate::stats::UserStats;

/// Display a single profile's analysis.
pub fn display_analysis(input: &ProfileInput, result: &AnalysisResult) {
    let name = if input.username.is_empty() {
        "(no username)".to_string()
    } else {
        format!("@{}", input.username)
    };
    println!(
        "\n{}",
        format!("=== Trust report for {} on {} ===", name, input.platform).bold()
    );

    if !input.bio.is_empty() {
        println!("  Bio: {}", super::truncate_chars(&input.bio, 100).dimmed());
    }

    let tier = result.tier();
    println!(
        "  Trust score: {}  ({})",
        colorize_tier(tier, &format!("{}/100", result.trust_score)),
        colorize_tier(tier, tier.as_str()),
    );
    println!("  Confidence: {}%", result.confidence);
    println!(
        "  Image: {:>3}   Text: {:>3}   Behavior: {:>3}",
        result.analysis.image_score, result.analysis.text_score, result.analysis.behavior_score,
    );

    if result.red_flags.is_empty() {
        println!("\n  {} No red flags detected", "ok".green().bold());
    } else {
        println!("\n  {} red flag(s):", result.red_flags.len());
        for flag in &result.red_flags {
            println!("    {} {}", "!".red().bold(), flag);
        }
    }
}

/// Display a ranked summary of a batch run plus the running aggregate.
pub fn display_batch_summary(results: &[(ProfileInput, AnalysisResult)], stats: &UserStats) {
    if results.is_empty() {
        println!("No profiles in batch.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Batch Summary ({} profiles) ===", results.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<28} {:<10} {:>5}  {:<7}  {:>5}",
        "Rank".dimmed(),
        "Username".dimmed(),
        "Platform".dimmed(),
        "Trust".dimmed(),
        "Tier".dimmed(),
        "Flags".dimmed(),
    );
    println!("  {}", "-".repeat(68).dimmed());

    let mut ranked: Vec<&(ProfileInput, AnalysisResult)> = results.iter().collect();
    ranked.sort_by_key(|(_, r)| r.trust_score);

    for (i, (input, result)) in ranked.iter().enumerate() {
        let tier = result.tier();
        println!(
            "  {:>4}. {:<28} {:<10} {:>5}  {:<7}  {:>5}",
            i + 1,
            super::truncate_chars(&input.username, 25),
            input.platform.as_str(),
            result.trust_score,
            colorize_tier(tier, tier.as_str()),
            result.red_flags.len(),
        );
    }

    println!();
    println!(
        "  Average trust: {}  across {} analyses",
        stats.trust_score.to_string().bold(),
        stats.profiles_analyzed
    );
}

/// Print the phrase tables the text heuristics match against.
pub fn display_keywords() {
    println!("\n{}", "=== Suspicious phrases (-15 each) ===".bold());
    for phrase in SUSPICIOUS_KEYWORDS {
        println!("  {}", phrase.red());
    }
    println!("\n{}", "=== Generic phrases (-5 each) ===".bold());
    for phrase in GENERIC_WORDS {
        println!("  {}", phrase.yellow());
    }
}

/// Colorize text according to a trust tier.
fn colorize_tier(tier: TrustTier, text: &str) -> colored::ColoredString {
    match tier {
        TrustTier::High => text.green().bold(),
        TrustTier::Medium => text.yellow(),
        TrustTier::Low => text.red().bold(),
    }
}
