//! In-memory input journal: every intent a driver fed a session, stamped with the tick
//! it was applied before. Together with the seed and the level this is enough to
//! rebuild a run exactly.

use serde::{Deserialize, Serialize};

use crate::types::Intent;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;
pub const BUILD_ID: &str = concat!("chase-core/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub level_hash: u64,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    /// Value of `Session::current_tick()` when the record was taken.
    pub tick: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Intent(Intent),
    /// Where the driver stopped, with the hash it saw there.
    Checkpoint { snapshot_hash: u64 },
}

impl InputJournal {
    pub fn new(seed: u64, level_hash: u64) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: BUILD_ID.to_string(),
            level_hash,
            seed,
            inputs: Vec::new(),
        }
    }

    pub fn append_intent(&mut self, tick: u64, intent: Intent) {
        self.push(tick, InputPayload::Intent(intent));
    }

    pub fn append_checkpoint(&mut self, tick: u64, snapshot_hash: u64) {
        self.push(tick, InputPayload::Checkpoint { snapshot_hash });
    }

    fn push(&mut self, tick: u64, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, tick, payload });
    }
}
