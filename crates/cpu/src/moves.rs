//! Move enumeration and application for the active group
//!
//! A [`Move`] is an anchor column plus a number of clockwise rotations. It is
//! legal when the rotated group fits at every column between its current
//! anchor and the target, at the group's current row, so the group never
//! passes through a block on the way.

use std::fmt;

use sevens_core::{Grid, Group};
use sevens_types::{Coord, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NoActiveGroup,
    RotationOutOfRange,
    ColumnOutOfBounds,
    ColumnBlocked,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::NoActiveGroup => "no_active_group",
            MoveError::RotationOutOfRange
            | MoveError::ColumnOutOfBounds
            | MoveError::ColumnBlocked => "invalid_move",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::NoActiveGroup => "no active group",
            MoveError::RotationOutOfRange => "rotation exceeds the group's orientations",
            MoveError::ColumnOutOfBounds => "target column would place the group out of bounds",
            MoveError::ColumnBlocked => "could not reach target column due to collision",
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for MoveError {}

/// The group `mv` would produce, validated against the live board.
pub fn check_move(grid: &Grid, mv: Move) -> Result<Group, MoveError> {
    let group = grid.group().ok_or(MoveError::NoActiveGroup)?;
    if mv.rotation >= group.rotations() {
        return Err(MoveError::RotationOutOfRange);
    }

    let placed = group.placed(mv.column, mv.rotation);
    if placed.cells().any(|c| grid.board().is_out_of_bounds(c)) {
        return Err(MoveError::ColumnOutOfBounds);
    }

    // Walk from the current column to the target, one step at a time.
    let row = group.location().y;
    let from = group.location().x;
    let step = if mv.column >= from { 1 } else { -1 };
    let mut x = from;
    loop {
        if placed
            .cells_at(Coord::new(x, row))
            .any(|c| !grid.board().is_valid(c))
        {
            return Err(MoveError::ColumnBlocked);
        }
        if x == mv.column {
            break;
        }
        x += step;
    }

    Ok(placed)
}

/// Every legal move with the group it produces, rotation-major then by
/// ascending column. The order is fixed so callers can break ties by
/// position.
pub fn legal_placements(grid: &Grid) -> Vec<(Move, Group)> {
    let Some(group) = grid.group() else {
        return Vec::new();
    };

    let min_dx = group.children().iter().map(|c| c.offset.x).min().unwrap_or(0);
    let max_dx = group.children().iter().map(|c| c.offset.x).max().unwrap_or(0);

    let mut out = Vec::new();
    for rotation in 0..group.rotations() {
        for column in -min_dx..grid.width() - max_dx {
            let mv = Move::new(column, rotation);
            if let Ok(placed) = check_move(grid, mv) {
                out.push((mv, placed));
            }
        }
    }
    out
}

pub fn legal_moves(grid: &Grid) -> Vec<Move> {
    legal_placements(grid).into_iter().map(|(mv, _)| mv).collect()
}

/// Rotate and shift the live active group to `mv`.
pub fn apply_move(grid: &mut Grid, mv: Move) -> Result<(), MoveError> {
    let placed = check_move(grid, mv)?;
    if !grid.replace_group(placed) {
        return Err(MoveError::ColumnBlocked);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevens_core::{GroupPattern, Settings};
    use sevens_types::BlockType;

    fn grid_with_pair() -> Grid {
        let settings = Settings::default();
        let mut grid = Grid::new(&settings);
        assert!(grid.spawn_group(
            &settings,
            &[BlockType::Two, BlockType::Six],
            &GroupPattern::pair()
        ));
        grid
    }

    #[test]
    fn no_group_has_no_moves() {
        let grid = Grid::new(&Settings::default());
        assert!(legal_moves(&grid).is_empty());
        assert_eq!(
            check_move(&grid, Move::new(0, 0)).unwrap_err(),
            MoveError::NoActiveGroup
        );
    }

    #[test]
    fn pair_has_six_columns_per_rotation() {
        let grid = grid_with_pair();
        let moves = legal_moves(&grid);
        assert_eq!(moves.len(), 12);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[5], Move::new(5, 0));
        assert_eq!(moves[6], Move::new(0, 1));
    }

    #[test]
    fn rejects_out_of_bounds_and_bad_rotation() {
        let grid = grid_with_pair();
        assert_eq!(
            check_move(&grid, Move::new(6, 0)).unwrap_err(),
            MoveError::ColumnOutOfBounds
        );
        assert_eq!(
            check_move(&grid, Move::new(-1, 0)).unwrap_err(),
            MoveError::ColumnOutOfBounds
        );
        assert_eq!(
            check_move(&grid, Move::new(0, 2)).unwrap_err(),
            MoveError::RotationOutOfRange
        );
    }

    #[test]
    fn blocked_path_is_rejected() {
        let mut grid = grid_with_pair();
        // Pair spawns at columns 2-3 of the top row; block column 1.
        grid.board_mut()
            .set(
                Coord::new(1, 13),
                Some(sevens_core::Block::new(
                    sevens_core::BlockId(99),
                    BlockType::One,
                    Coord::default(),
                )),
            )
            .unwrap();
        assert_eq!(
            check_move(&grid, Move::new(0, 0)).unwrap_err(),
            MoveError::ColumnBlocked
        );
        assert!(check_move(&grid, Move::new(5, 0)).is_ok());
    }

    #[test]
    fn apply_move_updates_live_group() {
        let mut grid = grid_with_pair();
        apply_move(&mut grid, Move::new(5, 1)).unwrap();
        let group = grid.group().unwrap();
        assert_eq!(group.location(), Coord::new(5, 13));
        assert_eq!(group.children()[0].block.number, 6);
        assert_eq!(group.children()[1].block.number, 2);
    }
}
