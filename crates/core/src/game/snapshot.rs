//! Read-only view handed to renderers after each tick.

use serde::Serialize;

use super::*;
use crate::grid::GridWorld;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub pos: Coord,
    pub direction: Direction,
    pub mouth_open: bool,
    pub score: u32,
    pub lives: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdversaryView {
    pub slot: AdversarySlot,
    pub pos: Coord,
    pub direction: Direction,
    pub mode: BehaviorMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CollectibleView {
    pub pos: Coord,
    pub kind: CollectibleKind,
}

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    #[serde(skip)]
    pub grid: &'a GridWorld,
    pub width: usize,
    pub height: usize,
    pub walls: Vec<String>,
    pub tick: u64,
    pub state: GameState,
    pub player: PlayerView,
    pub adversaries: Vec<AdversaryView>,
    pub collectibles: Vec<CollectibleView>,
    pub power_active: bool,
    pub power_remaining_ticks: u32,
}

impl<C: Chance> Session<C> {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let player = &self.state.player;
        let mode = self.behavior_mode();
        Snapshot {
            grid: &self.state.grid,
            width: self.state.grid.width(),
            height: self.state.grid.height(),
            walls: self.state.grid.rows(),
            tick: self.tick,
            state: self.state.status,
            player: PlayerView {
                pos: player.pos,
                direction: player.direction,
                mouth_open: player.mouth_open,
                score: player.score,
                lives: player.lives,
            },
            adversaries: self
                .state
                .adversaries
                .values()
                .map(|adversary| AdversaryView {
                    slot: adversary.slot,
                    pos: adversary.pos,
                    direction: adversary.direction,
                    mode,
                })
                .collect(),
            collectibles: self
                .state
                .collectibles
                .iter()
                .map(|(&pos, &kind)| CollectibleView { pos, kind })
                .collect(),
            power_active: self.state.power.is_active(),
            power_remaining_ticks: self.state.power.remaining_ticks(),
        }
    }
}
