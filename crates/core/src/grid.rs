//! Grid module - the live play field owned by a game session
//!
//! A [`Grid`] pairs the [`Board`] with the currently falling [`Group`] and the
//! block id allocator. The simulator only ever reads from it.

use crate::block::{Block, BlockId, BlockIds};
use crate::board::Board;
use crate::error::GridError;
use crate::group::{BlockPattern, Group, GroupPattern};
use crate::matching::MatchRule;
use crate::scoring::{CascadeResult, ScoreTable};
use crate::settings::Settings;
use crate::types::{BlockType, Coord};

#[derive(Debug, Clone)]
pub struct Grid {
    board: Board,
    group: Option<Group>,
    ids: BlockIds,
}

impl Grid {
    pub fn new(settings: &Settings) -> Self {
        Self {
            board: Board::from_settings(settings),
            group: None,
            ids: BlockIds::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.board.width()
    }

    pub fn height(&self) -> i32 {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    /// True if every cell of `group` is on the board and empty.
    pub fn fits(&self, group: &Group) -> bool {
        group.cells().all(|c| self.board.is_valid(c))
    }

    /// Install `group` as the active group. Fails if one is already active or
    /// the group does not fit.
    pub fn add_group(&mut self, group: Group) -> bool {
        if self.group.is_some() || !self.fits(&group) {
            return false;
        }
        self.group = Some(group);
        true
    }

    /// Build a group from the patterns at the spawn position and add it.
    pub fn spawn_group(
        &mut self,
        settings: &Settings,
        blocks: &dyn BlockPattern,
        layout: &GroupPattern,
    ) -> bool {
        let group = Group::from_patterns(&mut self.ids, settings, blocks, layout);
        self.add_group(group)
    }

    /// Replace the active group with a repositioned copy of itself.
    pub fn replace_group(&mut self, group: Group) -> bool {
        if !self.fits(&group) {
            return false;
        }
        self.group = Some(group);
        true
    }

    /// Place a fresh block of `block_type` at `c`.
    pub fn place_block(&mut self, c: Coord, block_type: BlockType) -> Result<BlockId, GridError> {
        let id = self.ids.next_id();
        self.board.place(c, Block::new(id, block_type, c))?;
        Ok(id)
    }

    /// Drop the active group onto the board. Returns the number of blocks
    /// that landed; 0 when there is no active group.
    pub fn land_group(&mut self) -> usize {
        match self.group.take() {
            Some(group) => self.board.land_group(&group),
            None => 0,
        }
    }

    /// Run the drop/delete cascade on the live board.
    pub fn resolve(&mut self, rule: &dyn MatchRule, table: &dyn ScoreTable) -> CascadeResult {
        self.board.resolve_cascade(rule, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SevensRule;
    use crate::scoring::SevensScoreTable;

    const TYPES: [BlockType; 4] = [BlockType::One, BlockType::Six, BlockType::Three, BlockType::Five];

    #[test]
    fn add_group_refuses_second_group() {
        let settings = Settings::default();
        let mut grid = Grid::new(&settings);
        assert!(grid.spawn_group(&settings, &TYPES, &GroupPattern::square()));
        assert!(!grid.spawn_group(&settings, &TYPES, &GroupPattern::square()));
    }

    #[test]
    fn add_group_refuses_blocked_spawn() {
        let settings = Settings::default();
        let mut grid = Grid::new(&settings);
        grid.place_block(Coord::new(3, 13), BlockType::Two).unwrap();
        assert!(!grid.spawn_group(&settings, &TYPES, &GroupPattern::square()));
        assert!(grid.group().is_none());
    }

    #[test]
    fn place_block_rejects_occupied_cell() {
        let mut grid = Grid::new(&Settings::default());
        grid.place_block(Coord::new(0, 0), BlockType::Two).unwrap();
        assert_eq!(
            grid.place_block(Coord::new(0, 0), BlockType::Two),
            Err(GridError::Occupied(Coord::new(0, 0)))
        );
        assert_eq!(
            grid.place_block(Coord::new(0, 14), BlockType::Two),
            Err(GridError::OutOfBounds(Coord::new(0, 14)))
        );
    }

    #[test]
    fn land_and_resolve_scores_the_pair() {
        let settings = Settings::default();
        let mut grid = Grid::new(&settings);
        assert!(grid.spawn_group(&settings, &TYPES, &GroupPattern::square()));
        assert_eq!(grid.land_group(), 4);
        assert!(grid.group().is_none());

        let result = grid.resolve(&SevensRule::default(), &SevensScoreTable::default());
        assert_eq!(result.total, 70);
        assert_eq!(result.removed.len(), 2);
        assert_eq!(grid.board().block_count(), 2);
    }
}
