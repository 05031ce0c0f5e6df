use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct AdversaryId;
}

/// Board cell, column `x` and row `y`. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub y: i32,
    pub x: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Neutral,
}

impl Direction {
    /// The four cardinal directions in the order adversaries enumerate them.
    pub const CARDINALS: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Unit delta `(dx, dy)`; rows grow downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Neutral => (0, 0),
        }
    }
}

/// Opaque palette slot of an adversary; renderers map it to a colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdversarySlot(pub u8);

impl AdversarySlot {
    pub const COUNT: usize = 4;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Ordinary,
    Power,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BehaviorMode {
    Chase,
    Flee,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Victory,
    GameOver,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Already-decoded input delivered by the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Accepted,
    Ignored,
    QuitRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStopReason {
    Finished(RunOutcome),
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug)]
pub struct AdvanceResult {
    pub simulated_ticks: u32,
    pub stop_reason: AdvanceStopReason,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LogEvent {
    CollectibleConsumed { tick: u64, pos: Coord, kind: CollectibleKind, value: u32 },
    PowerModeStarted { tick: u64, duration_ticks: u32 },
    PowerModeEnded { tick: u64 },
    AdversaryCaptured { tick: u64, slot: AdversarySlot, bonus: u32 },
    LifeLost { tick: u64, slot: AdversarySlot, lives_left: u32 },
    GameOver { tick: u64, score: u32 },
    Victory { tick: u64, score: u32 },
    Restarted { tick: u64 },
}
