pub mod config;
pub mod game;
pub mod grid;
pub mod journal;
pub mod level;
pub mod replay;
pub mod state;
pub mod types;

pub use config::{ConfigError, SimConfig};
pub use game::chance::{Chance, SimRng};
pub use game::clock::TimeSource;
pub use game::snapshot::{AdversaryView, CollectibleView, PlayerView, Snapshot};
pub use game::{Session, SetupError};
pub use grid::GridWorld;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use level::{Level, LevelError, LevelLayout, Region};
pub use replay::*;
pub use state::{Adversary, Player, PowerMode, SessionState};
pub use types::*;
