use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use trustlens::config::{Config, OutputFormat};
use trustlens::input::{load_profiles, RawProfileInput};
use trustlens::models::{AnalysisResult, ProfileInput};
use trustlens::output::{self, terminal};
use trustlens::scoring::analyze_profile;
use trustlens::stats::UserStats;

/// TrustLens: heuristic trust scoring for social and dating profiles.
///
/// Scores a profile from its bio, follower graph, activity and verification
/// status, and explains the score with a list of red flags.
#[derive(Parser)]
#[command(name = "trustlens", version, about)]
struct Cli {
    /// Print results as JSON (overrides TRUSTLENS_OUTPUT)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single profile described on the command line
    Analyze {
        /// Platform: facebook, instagram, linkedin, twitter or tinder
        #[arg(long)]
        platform: String,

        /// Profile handle (informational only)
        #[arg(long, default_value = "")]
        username: String,

        /// Bio / description text
        #[arg(long, default_value = "")]
        bio: String,

        /// Follower count (non-numeric or negative values count as 0)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        followers: String,

        /// Following count
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        following: String,

        /// Number of posts
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        posts: String,

        /// Account age in days (default from TRUSTLENS_DEFAULT_ACCOUNT_AGE, else 30)
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        /// The account carries a platform verification badge
        #[arg(long)]
        verified: bool,

        /// Profile image URL
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Analyze every profile in a JSON file (an array of profile objects)
    Batch {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// List the phrase tables used by the bio heuristics
    Keywords,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trustlens=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match cli.command {
        Commands::Analyze {
            platform,
            username,
            bio,
            followers,
            following,
            posts,
            age,
            verified,
            image_url,
        } => {
            let raw = RawProfileInput {
                username,
                bio,
                followers,
                following,
                posts,
                account_age_days: age,
                is_verified: verified,
                profile_image_url: image_url,
                platform,
            };
            let input = raw.into_profile(config.default_account_age)?;
            let result = analyze_profile(&input);
            print_result(&input, &result, format)?;
        }

        Commands::Batch { path } => {
            let profiles = load_profiles(&path)?;
            info!(count = profiles.len(), path = %path.display(), "Loaded batch");

            let mut stats = UserStats::default();
            let mut results = Vec::with_capacity(profiles.len());
            for input in profiles {
                let result = analyze_profile(&input);
                stats = stats.record_analysis(&result);
                results.push((input, result));
            }

            match format {
                OutputFormat::Json => {
                    let doc = serde_json::json!({
                        "results": results.iter().map(|(_, r)| r).collect::<Vec<_>>(),
                        "stats": stats,
                    });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
                OutputFormat::Terminal => {
                    for (input, result) in &results {
                        terminal::display_analysis(input, result);
                    }
                    terminal::display_batch_summary(&results, &stats);
                }
            }
        }

        Commands::Keywords => {
            terminal::display_keywords();
        }
    }

    Ok(())
}

fn print_result(input: &ProfileInput, result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", output::render_json(input, result)?),
        OutputFormat::Terminal => terminal::display_analysis(input, result),
    }
    Ok(())
}
