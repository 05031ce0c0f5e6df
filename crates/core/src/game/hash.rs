//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.
//! It does not own replay execution or journal persistence policies.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl<C: Chance> Session<C> {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u8(match self.state.status {
            GameState::Playing => 0,
            GameState::Victory => 1,
            GameState::GameOver => 2,
        });

        let player = &self.state.player;
        write_coord(&mut hasher, player.pos);
        hasher.write_u8(player.direction as u8);
        hasher.write_u32(player.score);
        hasher.write_u32(player.lives);
        hasher.write_u8(u8::from(player.mouth_open));

        hasher.write_u32(self.state.power.remaining_ticks());
        let (last_player_move_ms, adversary_ticks, animation_ticks) = self.clock.counters();
        hasher.write_u64(last_player_move_ms);
        hasher.write_u32(adversary_ticks);
        hasher.write_u32(animation_ticks);

        hasher.write_usize(self.state.adversaries.len());
        for adversary in self.state.adversaries.values() {
            hasher.write_u8(adversary.slot.0);
            write_coord(&mut hasher, adversary.pos);
            hasher.write_u8(adversary.direction as u8);
        }

        hasher.write_usize(self.state.collectibles.len());
        for (&pos, &kind) in &self.state.collectibles {
            write_coord(&mut hasher, pos);
            hasher.write_u8(kind as u8);
        }

        hasher.finish()
    }
}

fn write_coord(hasher: &mut Xxh3, pos: Coord) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn hash_changes_with_player_position_only_when_it_moves() {
        let mut session = scripted_session(&corridor_level(), SimConfig::default());
        let before = session.snapshot_hash();
        assert_eq!(before, session.snapshot_hash());

        session.state.player.pos = Coord::new(2, 1);
        assert_ne!(before, session.snapshot_hash());
    }
}
