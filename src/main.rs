use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use deck_diff::{compute_diff, format_diff_summary, read_deck_file};

/// Compare two decklist exports and print what changed
#[derive(Parser, Debug)]
#[command(name = "deck_diff")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the "before" decklist file
    before: PathBuf,

    /// Path to the "after" decklist file
    after: PathBuf,

    /// Emit the diff as pretty-printed JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let before = read_deck_file(&args.before)
        .with_context(|| format!("Failed to read {}", args.before.display()))?;
    let after = read_deck_file(&args.after)
        .with_context(|| format!("Failed to read {}", args.after.display()))?;

    let diff = compute_diff(&before, &after);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print!("{}", format_diff_summary(&diff));
    }

    Ok(())
}
