use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::grid::GridWorld;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Coord,
    pub direction: Direction,
    pub score: u32,
    pub lives: u32,
    pub mouth_open: bool,
}

#[derive(Clone, Debug)]
pub struct Adversary {
    pub slot: AdversarySlot,
    pub pos: Coord,
    pub direction: Direction,
    pub spawn: Coord,
}

/// Global role-reversal state. Active exactly while ticks remain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerMode {
    remaining_ticks: u32,
}

impl PowerMode {
    pub fn is_active(self) -> bool {
        self.remaining_ticks > 0
    }

    pub fn remaining_ticks(self) -> u32 {
        self.remaining_ticks
    }

    /// Starts or refreshes power mode; a refresh replaces whatever was left.
    pub fn activate(&mut self, ticks: u32) {
        self.remaining_ticks = ticks;
    }

    /// One driver tick of countdown. Returns true on the tick power mode ends.
    pub fn count_down(&mut self) -> bool {
        if self.remaining_ticks == 0 {
            return false;
        }
        self.remaining_ticks -= 1;
        self.remaining_ticks == 0
    }
}

pub struct SessionState {
    pub grid: GridWorld,
    pub player: Player,
    pub adversaries: SlotMap<AdversaryId, Adversary>,
    pub collectibles: BTreeMap<Coord, CollectibleKind>,
    pub power: PowerMode,
    pub status: GameState,
}

impl SessionState {
    pub fn collectibles_remaining(&self, kind: CollectibleKind) -> usize {
        self.collectibles.values().filter(|k| **k == kind).count()
    }
}
