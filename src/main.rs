use anyhow::Context;
use clap::Parser;
use dupex_core::RawEntry;
use dupex_similarity::{DupeEngine, EngineConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find fragrance dupes by note similarity
#[derive(Parser, Debug)]
#[command(name = "dupex")]
#[command(about = "Find fragrance dupes by note similarity", long_about = None)]
struct Args {
    /// Path to the catalog file (JSON array of entries)
    catalog: PathBuf,

    /// Fragrance name to look up
    query: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 5)]
    limit: usize,

    /// Rank the query text itself by note overlap instead of resolving it
    /// to a catalog entry
    #[arg(long)]
    by_notes: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let raw = std::fs::read_to_string(&args.catalog)
        .with_context(|| format!("reading catalog {}", args.catalog.display()))?;
    let entries: Vec<RawEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog {}", args.catalog.display()))?;
    info!(count = entries.len(), "catalog loaded");

    let engine = DupeEngine::new(entries, EngineConfig::default())?;

    let results = if args.by_notes {
        engine.find_similar_text(&args.query, args.limit)?
    } else {
        engine.find_similar(&args.query, args.limit)?
    };

    if results.is_empty() {
        println!("No match found for \"{}\"", args.query);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
