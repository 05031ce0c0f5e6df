//! Static level data and its one-time validation into a playable layout.
//!
//! A level is plain data: ASCII rows (`#` is a wall, anything else is open),
//! spawn points, power collectible positions, the adversary home region and
//! the tunnel rows whose edge cells are carved open. Misconfiguration is
//! reported once, when the layout is built.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::grid::GridWorld;
use crate::types::{AdversarySlot, Cell, CollectibleKind, Coord};

const WALL_CHAR: char = '#';

/// Inclusive rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub min: Coord,
    pub max: Coord,
}

impl Region {
    pub fn contains(&self, pos: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x) && (self.min.y..=self.max.y).contains(&pos.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub rows: Vec<String>,
    pub player_spawn: Coord,
    pub adversary_spawns: Vec<Coord>,
    #[serde(default)]
    pub power_positions: Vec<Coord>,
    #[serde(default)]
    pub home_region: Option<Region>,
    #[serde(default)]
    pub tunnel_rows: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    EmptyGrid,
    RaggedRow { row: usize, expected: usize, found: usize },
    TunnelRowOutOfBounds { row: i32 },
    OutOfBounds { what: &'static str, pos: Coord },
    InWall { what: &'static str, pos: Coord },
    TooManyAdversaries { count: usize },
    HomeRegionOutOfBounds { region: Region },
    ReservedCell { what: &'static str, pos: Coord },
    Parse(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "level grid has no cells"),
            Self::RaggedRow { row, expected, found } => {
                write!(f, "level row {row} has {found} cells, expected {expected}")
            }
            Self::TunnelRowOutOfBounds { row } => write!(f, "tunnel row {row} is off the board"),
            Self::OutOfBounds { what, pos } => {
                write!(f, "{what} at ({}, {}) is off the board", pos.x, pos.y)
            }
            Self::InWall { what, pos } => {
                write!(f, "{what} at ({}, {}) is inside a wall", pos.x, pos.y)
            }
            Self::TooManyAdversaries { count } => write!(
                f,
                "level declares {count} adversary spawns, at most {} palette slots exist",
                AdversarySlot::COUNT
            ),
            Self::HomeRegionOutOfBounds { region } => write!(
                f,
                "home region ({}, {})..=({}, {}) is not a valid on-board rectangle",
                region.min.x, region.min.y, region.max.x, region.max.y
            ),
            Self::ReservedCell { what, pos } => {
                write!(f, "{what} at ({}, {}) sits on a reserved cell", pos.x, pos.y)
            }
            Self::Parse(message) => write!(f, "invalid level TOML: {message}"),
        }
    }
}

impl Error for LevelError {}

/// Validated, ready-to-play form of a [`Level`].
#[derive(Clone, Debug)]
pub struct LevelLayout {
    pub grid: GridWorld,
    pub player_spawn: Coord,
    pub adversary_spawns: Vec<(AdversarySlot, Coord)>,
    pub collectibles: BTreeMap<Coord, CollectibleKind>,
}

impl Level {
    pub fn from_toml_str(text: &str) -> Result<Self, LevelError> {
        toml::from_str(text).map_err(|e| LevelError::Parse(e.to_string()))
    }

    pub fn build(&self) -> Result<LevelLayout, LevelError> {
        let width = self.rows.first().map_or(0, |row| row.chars().count());
        let height = self.rows.len();
        if width == 0 {
            return Err(LevelError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row_index, row) in self.rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow { row: row_index, expected: width, found });
            }
            cells.extend(row.chars().map(|c| if c == WALL_CHAR { Cell::Wall } else { Cell::Open }));
        }

        for &row in &self.tunnel_rows {
            if row < 0 || row as usize >= height {
                return Err(LevelError::TunnelRowOutOfBounds { row });
            }
            let start = row as usize * width;
            cells[start] = Cell::Open;
            cells[start + width - 1] = Cell::Open;
        }

        let grid = GridWorld::from_cells(width, height, cells);

        require_open(&grid, "player spawn", self.player_spawn)?;

        if self.adversary_spawns.len() > AdversarySlot::COUNT {
            return Err(LevelError::TooManyAdversaries { count: self.adversary_spawns.len() });
        }
        let mut adversary_spawns = Vec::with_capacity(self.adversary_spawns.len());
        for (slot, &spawn) in self.adversary_spawns.iter().enumerate() {
            require_open(&grid, "adversary spawn", spawn)?;
            adversary_spawns.push((AdversarySlot(slot as u8), spawn));
        }

        if let Some(region) = self.home_region
            && (!grid.in_bounds(region.min)
                || !grid.in_bounds(region.max)
                || region.min.x > region.max.x
                || region.min.y > region.max.y)
        {
            return Err(LevelError::HomeRegionOutOfBounds { region });
        }

        for &pos in &self.power_positions {
            require_open(&grid, "power collectible", pos)?;
            if self.is_reserved(pos) {
                return Err(LevelError::ReservedCell { what: "power collectible", pos });
            }
        }

        let collectibles = self.place_collectibles(&grid);

        Ok(LevelLayout { grid, player_spawn: self.player_spawn, adversary_spawns, collectibles })
    }

    /// Spawn cells and the home region never hold a collectible.
    fn is_reserved(&self, pos: Coord) -> bool {
        pos == self.player_spawn
            || self.adversary_spawns.contains(&pos)
            || self.home_region.is_some_and(|region| region.contains(pos))
    }

    /// Every open cell outside spawns and the home region gets an ordinary collectible,
    /// except the explicit power positions which hold a power collectible instead.
    fn place_collectibles(&self, grid: &GridWorld) -> BTreeMap<Coord, CollectibleKind> {
        let mut collectibles: BTreeMap<Coord, CollectibleKind> = grid
            .open_cells()
            .filter(|pos| !self.is_reserved(*pos))
            .map(|pos| (pos, CollectibleKind::Ordinary))
            .collect();
        for &pos in &self.power_positions {
            collectibles.insert(pos, CollectibleKind::Power);
        }
        collectibles
    }

    /// Stable fingerprint used to tie a journal to the level it was recorded on.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_usize(self.rows.len());
        for row in &self.rows {
            hasher.write(row.as_bytes());
            hasher.write_u8(b'\n');
        }
        write_coord(&mut hasher, self.player_spawn);
        hasher.write_usize(self.adversary_spawns.len());
        for &spawn in &self.adversary_spawns {
            write_coord(&mut hasher, spawn);
        }
        hasher.write_usize(self.power_positions.len());
        for &pos in &self.power_positions {
            write_coord(&mut hasher, pos);
        }
        match self.home_region {
            Some(region) => {
                hasher.write_u8(1);
                write_coord(&mut hasher, region.min);
                write_coord(&mut hasher, region.max);
            }
            None => hasher.write_u8(0),
        }
        hasher.write_usize(self.tunnel_rows.len());
        for &row in &self.tunnel_rows {
            hasher.write_i32(row);
        }
        hasher.finish()
    }

    /// The 28x31 arcade layout: corridor lattice, open home region, four corner
    /// boxes and a tunnel through row 14.
    pub fn classic() -> Self {
        const WIDTH: usize = 28;
        const HEIGHT: usize = 31;
        let mut wall = [[true; WIDTH]; HEIGHT];

        for y in [1, 5, 8, 14, 20, 23, 26, 29] {
            for cell in &mut wall[y][1..WIDTH - 1] {
                *cell = false;
            }
        }
        for x in [1, 6, 12, 15, 21, 26] {
            for row in &mut wall[1..HEIGHT - 1] {
                row[x] = false;
            }
        }
        for row in &mut wall[11..=14] {
            for cell in &mut row[11..=16] {
                *cell = false;
            }
        }
        // (y1, x1, y2, x2) corner boxes
        for (y1, x1, y2, x2) in [(2, 2, 4, 4), (2, 23, 4, 25), (26, 2, 28, 4), (26, 23, 28, 25)] {
            for row in &mut wall[y1..=y2] {
                for cell in &mut row[x1..=x2] {
                    *cell = false;
                }
            }
        }

        let rows = wall
            .iter()
            .map(|row| {
                row.iter().map(|&is_wall| if is_wall { WALL_CHAR } else { '.' }).collect::<String>()
            })
            .collect();

        Self {
            rows,
            player_spawn: Coord::new(14, 23),
            adversary_spawns: vec![
                Coord::new(13, 11),
                Coord::new(14, 11),
                Coord::new(13, 12),
                Coord::new(14, 12),
            ],
            power_positions: vec![
                Coord::new(1, 3),
                Coord::new(26, 3),
                Coord::new(1, 23),
                Coord::new(26, 23),
            ],
            home_region: Some(Region { min: Coord::new(11, 11), max: Coord::new(16, 14) }),
            tunnel_rows: vec![14],
        }
    }
}

fn require_open(grid: &GridWorld, what: &'static str, pos: Coord) -> Result<(), LevelError> {
    if !grid.in_bounds(pos) {
        return Err(LevelError::OutOfBounds { what, pos });
    }
    if !grid.is_open(pos) {
        return Err(LevelError::InWall { what, pos });
    }
    Ok(())
}

fn write_coord(hasher: &mut Xxh3, pos: Coord) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}
