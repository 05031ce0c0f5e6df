use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chase_core::{InputJournal, ReplayResult, replay::replay_to_end};
use chase_tools::{init_tracing, load_config, load_level};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Level TOML file; the classic layout when omitted
    #[arg(short, long)]
    level: Option<PathBuf>,
    /// Simulation config TOML file; defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal: InputJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;
    let level = load_level(args.level.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    tracing::info!(
        seed = journal.seed,
        records = journal.inputs.len(),
        build_id = %journal.build_id,
        "replaying journal"
    );

    let result: ReplayResult =
        replay_to_end(&level, &config, &journal).context("Replay failed during execution")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("State: {:?}", result.final_state);
    println!("Score: {}  Lives: {}", result.score, result.lives);
    println!("Checkpoints Verified: {}", result.checkpoints_verified);
    println!("Snapshot Hash: {:016x}", result.final_snapshot_hash);

    Ok(())
}
