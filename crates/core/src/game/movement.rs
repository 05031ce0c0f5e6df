//! Directional legality shared by the player and every adversary.
//! This module exists so both kinds of actor see identical wall, bounds and tunnel rules.
//! It does not decide which direction an actor wants to go.

use crate::grid::GridWorld;
use crate::types::{Coord, Direction};

/// The cell one step away, if that step is legal. Horizontal steps wrap; vertical ones do not.
pub fn step_target(grid: &GridWorld, from: Coord, direction: Direction) -> Option<Coord> {
    let (dx, dy) = direction.delta();
    let candidate = Coord::new(grid.wrap_column(from.x + dx), from.y + dy);
    let vertical_ok = candidate.y >= 0 && (candidate.y as usize) < grid.height();
    (vertical_ok && grid.is_open(candidate)).then_some(candidate)
}

/// Resolves one move attempt. A rejected move leaves the actor where it was.
pub fn attempt_move(grid: &GridWorld, from: Coord, direction: Direction) -> Coord {
    step_target(grid, from, direction).unwrap_or(from)
}

/// Cardinal directions whose target cell is open, in [`Direction::CARDINALS`] order.
pub fn legal_directions(grid: &GridWorld, from: Coord) -> Vec<Direction> {
    Direction::CARDINALS
        .into_iter()
        .filter(|direction| step_target(grid, from, *direction).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::grid_from_rows;

    #[test]
    fn open_step_moves_and_wall_step_is_rejected() {
        let grid = grid_from_rows(&["...", ".#.", "..."]);
        assert_eq!(attempt_move(&grid, Coord::new(0, 0), Direction::Right), Coord::new(1, 0));
        assert_eq!(attempt_move(&grid, Coord::new(1, 0), Direction::Down), Coord::new(1, 0));
    }

    #[test]
    fn rejected_move_is_idempotent() {
        let grid = grid_from_rows(&["...", ".#.", "..."]);
        let start = Coord::new(1, 0);
        let first = attempt_move(&grid, start, Direction::Down);
        let second = attempt_move(&grid, first, Direction::Down);
        assert_eq!(first, start);
        assert_eq!(second, start);
    }

    #[test]
    fn moving_left_from_column_zero_on_a_tunnel_row_wraps() {
        let grid = grid_from_rows(&["####", "....", "####"]);
        assert_eq!(attempt_move(&grid, Coord::new(0, 1), Direction::Left), Coord::new(3, 1));
        assert_eq!(attempt_move(&grid, Coord::new(3, 1), Direction::Right), Coord::new(0, 1));
    }

    #[test]
    fn wrap_into_a_wall_is_still_rejected() {
        let grid = grid_from_rows(&["...#", "....", "...."]);
        assert_eq!(attempt_move(&grid, Coord::new(0, 0), Direction::Left), Coord::new(0, 0));
    }

    #[test]
    fn vertical_moves_never_wrap() {
        let grid = grid_from_rows(&["...", "...", "..."]);
        assert_eq!(step_target(&grid, Coord::new(1, 0), Direction::Up), None);
        assert_eq!(step_target(&grid, Coord::new(1, 2), Direction::Down), None);
    }

    #[test]
    fn neutral_is_always_legal_on_an_open_cell() {
        let grid = grid_from_rows(&["..", ".."]);
        let center = Coord::new(1, 1);
        assert_eq!(step_target(&grid, center, Direction::Neutral), Some(center));
    }

    #[test]
    fn legal_directions_filters_walls_in_cardinal_order() {
        let grid = grid_from_rows(&["#.#", "...", "###"]);
        assert_eq!(
            legal_directions(&grid, Coord::new(1, 1)),
            vec![Direction::Left, Direction::Right, Direction::Up]
        );
        let boxed = grid_from_rows(&["###", "#.#", "###"]);
        assert!(legal_directions(&boxed, Coord::new(1, 1)).is_empty());
    }
}
