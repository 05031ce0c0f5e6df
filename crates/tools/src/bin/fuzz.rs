use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use chase_core::{
    BehaviorMode, Direction, GameState, InputJournal, Intent, IntentOutcome, Session, SimConfig,
};
use chase_tools::{init_tracing, load_config, load_level};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,
    /// Level TOML file; the classic layout when omitted
    #[arg(short, long)]
    level: Option<PathBuf>,
    /// Simulation config TOML file; defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the accepted inputs as a replayable JSON journal
    #[arg(short, long)]
    out: Option<PathBuf>,
}

const INTENTS: [Intent; 6] = [
    Intent::Move(Direction::Up),
    Intent::Move(Direction::Down),
    Intent::Move(Direction::Left),
    Intent::Move(Direction::Right),
    Intent::Move(Direction::Neutral),
    Intent::Restart,
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn check_invariants(session: &Session, config: &SimConfig) -> Result<()> {
    let state = session.state();
    let tick = session.current_tick();
    ensure!(state.grid.is_open(state.player.pos), "player inside wall at tick {tick}");
    for adversary in state.adversaries.values() {
        ensure!(state.grid.is_open(adversary.pos), "adversary inside wall at tick {tick}");
    }
    ensure!(state.player.lives <= config.starting_lives, "lives grew at tick {tick}");
    ensure!(
        (session.behavior_mode() == BehaviorMode::Flee) == state.power.is_active(),
        "behaviour mode out of sync with power mode at tick {tick}"
    );
    if state.status == GameState::Victory {
        ensure!(state.collectibles.is_empty(), "victory with collectibles left at tick {tick}");
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let level = load_level(args.level.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    let mut session =
        Session::new(&level, config.clone(), args.seed).context("Failed to set up session")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut journal = InputJournal::new(args.seed, level.content_hash());

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut runs_finished = 0u32;
    while session.current_tick() < args.ticks {
        if rng.next_u64() % 6 == 0 {
            let intent = choose(&mut rng, &INTENTS);
            if session.apply_intent(intent) == IntentOutcome::Accepted {
                journal.append_intent(session.current_tick(), intent);
            }
        }

        let before = session.game_state();
        session.advance_one_tick();
        if !before.is_terminal() && session.game_state().is_terminal() {
            runs_finished += 1;
            tracing::info!(
                tick = session.current_tick(),
                state = ?session.game_state(),
                score = session.state().player.score,
                "run finished"
            );
        }
        check_invariants(&session, &config)?;
    }

    let snapshot_hash = session.snapshot_hash();
    journal.append_checkpoint(session.current_tick(), snapshot_hash);
    if let Some(path) = &args.out {
        let text = serde_json::to_string_pretty(&journal)?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        tracing::info!(path = %path.display(), records = journal.inputs.len(), "journal written");
    }

    println!(
        "Fuzzing completed: {} ticks, {} finished runs, hash {:016x}",
        session.current_tick(),
        runs_finished,
        snapshot_hash
    );
    Ok(())
}
