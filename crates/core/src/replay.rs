//! Deterministic re-execution of a journaled run.
//! This module exists to turn an `InputJournal` back into the session state it produced.
//! It does not own journal persistence or input collection.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::config::SimConfig;
use crate::game::{Session, SetupError};
use crate::journal::{InputJournal, InputPayload};
use crate::level::Level;
use crate::types::GameState;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplayError {
    /// The journal was recorded on a different level.
    LevelMismatch { expected: u64, found: u64 },
    /// A record's sequence number or tick goes backwards.
    RecordOutOfOrder { seq: u64 },
    /// The replayed session does not hash like the recorded checkpoint.
    Diverged { seq: u64, expected: u64, found: u64 },
    Setup(SetupError),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelMismatch { expected, found } => {
                write!(f, "journal level hash {expected:016x} does not match level {found:016x}")
            }
            Self::RecordOutOfOrder { seq } => write!(f, "journal record {seq} is out of order"),
            Self::Diverged { seq, expected, found } => write!(
                f,
                "replay diverged at checkpoint {seq}: expected {expected:016x}, found {found:016x}"
            ),
            Self::Setup(e) => write!(f, "replay setup failed: {e}"),
        }
    }
}

impl Error for ReplayError {}

impl From<SetupError> for ReplayError {
    fn from(e: SetupError) -> Self {
        Self::Setup(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayResult {
    pub final_state: GameState,
    pub final_tick: u64,
    pub score: u32,
    pub lives: u32,
    pub final_snapshot_hash: u64,
    pub checkpoints_verified: usize,
}

/// Rebuilds the session from the journal's seed and applies every record before the tick
/// it was taken at. Ends at the tick of the last record.
pub fn replay_to_end(
    level: &Level,
    config: &SimConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let level_hash = level.content_hash();
    if journal.level_hash != level_hash {
        return Err(ReplayError::LevelMismatch { expected: journal.level_hash, found: level_hash });
    }

    let mut session = Session::new(level, config.clone(), journal.seed)?;
    let mut checkpoints_verified = 0;

    for (index, record) in journal.inputs.iter().enumerate() {
        if record.seq != index as u64 || record.tick < session.current_tick() {
            return Err(ReplayError::RecordOutOfOrder { seq: record.seq });
        }
        while session.current_tick() < record.tick {
            session.advance_one_tick();
        }

        match record.payload {
            InputPayload::Intent(intent) => {
                session.apply_intent(intent);
            }
            InputPayload::Checkpoint { snapshot_hash } => {
                let found = session.snapshot_hash();
                if found != snapshot_hash {
                    return Err(ReplayError::Diverged {
                        seq: record.seq,
                        expected: snapshot_hash,
                        found,
                    });
                }
                checkpoints_verified += 1;
            }
        }
    }

    let player = &session.state().player;
    let result = ReplayResult {
        final_state: session.game_state(),
        final_tick: session.current_tick(),
        score: player.score,
        lives: player.lives,
        final_snapshot_hash: session.snapshot_hash(),
        checkpoints_verified,
    };
    tracing::info!(
        seed = journal.seed,
        records = journal.inputs.len(),
        final_tick = result.final_tick,
        "replay finished"
    );
    Ok(result)
}
