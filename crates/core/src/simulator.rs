//! Grid simulator - predict drops, deletions and score without touching the
//! live board
//!
//! [`GridSimulator::snapshot`] deep-copies a board (and optionally the active
//! group) twice: once into a retained original and once into the working
//! "simulated" copy. Every other operation mutates only the working copy, and
//! [`GridSimulator::rollback_to_snapshot`] restores it from the original.
//!
//! ```text
//! snapshot -> { drop_blocks | delete_blocks }* -> score_from_simulation
//!     ^                                               |
//!     +------------- rollback_to_snapshot ------------+
//! ```
//!
//! The simulator is `Clone`; give each thread its own instance when scoring
//! candidates in parallel.

use std::sync::Arc;

use crate::block::Block;
use crate::board::Board;
use crate::error::GridError;
use crate::grid::Grid;
use crate::group::Group;
use crate::matching::{MatchRule, SevensRule};
use crate::scoring::{CascadeResult, ScoreTable, SevensScoreTable};
use crate::settings::Settings;

#[derive(Clone)]
pub struct GridSimulator {
    settings: Settings,
    rule: Arc<dyn MatchRule>,
    table: Arc<dyn ScoreTable>,
    original_board: Board,
    original_group: Option<Group>,
    simulated_board: Board,
    simulated_group: Option<Group>,
}

impl GridSimulator {
    /// Simulator with the default sevens rule and score table from `settings`.
    pub fn new(settings: Settings) -> Self {
        let rule = Arc::new(SevensRule::new(settings.match_target));
        let table = Arc::new(SevensScoreTable {
            points_per_number: settings.points_per_number,
        });
        Self::with_rules(settings, rule, table)
    }

    pub fn with_rules(
        settings: Settings,
        rule: Arc<dyn MatchRule>,
        table: Arc<dyn ScoreTable>,
    ) -> Self {
        Self {
            settings,
            rule,
            table,
            original_board: Board::from_settings(&settings),
            original_group: None,
            simulated_board: Board::from_settings(&settings),
            simulated_group: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn match_rule(&self) -> &dyn MatchRule {
        self.rule.as_ref()
    }

    pub fn simulated_board(&self) -> &Board {
        &self.simulated_board
    }

    pub fn simulated_group(&self) -> Option<&Group> {
        self.simulated_group.as_ref()
    }

    pub fn original_board(&self) -> &Board {
        &self.original_board
    }

    /// Capture `board` and `group` as the new original and reset the working
    /// copy to it.
    pub fn snapshot(&mut self, board: &Board, group: Option<&Group>) -> Result<(), GridError> {
        let expected = self.settings.dimensions();
        if board.dimensions() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: board.dimensions(),
            });
        }

        self.original_board.clone_from(board);
        self.original_group = group.cloned();
        self.rollback_to_snapshot();
        Ok(())
    }

    /// [`GridSimulator::snapshot`] of a live session grid and its active group
    pub fn snapshot_grid(&mut self, grid: &Grid) -> Result<(), GridError> {
        self.snapshot(grid.board(), grid.group())
    }

    /// Discard all simulated work since the last snapshot.
    pub fn rollback_to_snapshot(&mut self) {
        self.simulated_board.clone_from(&self.original_board);
        self.simulated_group.clone_from(&self.original_group);
    }

    /// Gravity on the simulated board. True if any block moved.
    pub fn drop_blocks(&mut self) -> bool {
        self.simulated_board.drop_blocks()
    }

    /// Remove every matched block from the simulated board and return them.
    /// Does not cascade.
    pub fn delete_blocks(&mut self) -> Vec<Block> {
        let runs = self.simulated_board.find_matches(self.rule.as_ref());
        self.simulated_board.delete_runs(&runs)
    }

    /// Land the simulated group (if any) and resolve the full cascade.
    pub fn simulate(&mut self) -> CascadeResult {
        if let Some(group) = self.simulated_group.take() {
            self.simulated_board.land_group(&group);
        }
        self.simulated_board
            .resolve_cascade(self.rule.as_ref(), self.table.as_ref())
    }

    /// Total score of the cascade triggered by the current simulated state.
    pub fn score_from_simulation(&mut self) -> u32 {
        self.simulate().total
    }
}

impl std::fmt::Debug for GridSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridSimulator")
            .field("settings", &self.settings)
            .field("rule", &self.rule.name())
            .field("simulated_group", &self.simulated_group)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockId;
    use crate::matching::SameNumberRule;
    use crate::types::{BlockType, Coord};

    fn block(id: u32, n: u32) -> Block {
        Block::new(BlockId(id), BlockType::from_number(n).unwrap(), Coord::default())
    }

    #[test]
    fn snapshot_rejects_wrong_dimensions() {
        let mut sim = GridSimulator::new(Settings::default());
        let err = sim.snapshot(&Board::new(6, 14), None).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                expected: (7, 14),
                actual: (6, 14)
            }
        );
    }

    #[test]
    fn simulated_board_is_independent_of_source() {
        let mut board = Board::new(7, 14);
        board.set(Coord::new(0, 5), Some(block(1, 3))).unwrap();

        let mut sim = GridSimulator::new(Settings::default());
        sim.snapshot(&board, None).unwrap();
        assert!(sim.drop_blocks());

        assert!(board.is_occupied(Coord::new(0, 5)));
        assert!(!board.is_occupied(Coord::new(0, 0)));
        assert!(sim.original_board().is_occupied(Coord::new(0, 5)));
    }

    #[test]
    fn already_resolved_board_scores_zero_without_changes() {
        let mut board = Board::new(7, 14);
        board.set(Coord::new(0, 0), Some(block(1, 3))).unwrap();
        board.set(Coord::new(1, 0), Some(block(2, 3))).unwrap();

        let mut sim = GridSimulator::new(Settings::default());
        sim.snapshot(&board, None).unwrap();
        assert_eq!(sim.score_from_simulation(), 0);
        assert_eq!(sim.simulated_board(), &board);
    }

    #[test]
    fn cascade_second_chain_scores_double() {
        // Column 0 from the bottom: 3 4 (sevens) then 2 on top.
        // Column 1: 5 at row 0.
        // Chain 1 removes 3+4; the 2 falls next to the 5 and chains.
        let mut board = Board::new(7, 14);
        board.set(Coord::new(0, 0), Some(block(1, 3))).unwrap();
        board.set(Coord::new(0, 1), Some(block(2, 4))).unwrap();
        board.set(Coord::new(0, 2), Some(block(3, 2))).unwrap();
        board.set(Coord::new(1, 0), Some(block(4, 5))).unwrap();

        let mut sim = GridSimulator::new(Settings::default());
        sim.snapshot(&board, None).unwrap();
        let result = sim.simulate();
        assert_eq!(result.chains, 2);
        assert_eq!(result.total, 70 + 140);
        assert!(sim.simulated_board().is_empty());
    }

    #[test]
    fn injected_rule_is_used() {
        let mut board = Board::new(7, 14);
        for (i, x) in [0, 1, 2].into_iter().enumerate() {
            board.set(Coord::new(x, 0), Some(block(i as u32 + 1, 5))).unwrap();
        }
        let mut sim = GridSimulator::with_rules(
            Settings::default(),
            Arc::new(SameNumberRule::default()),
            Arc::new(SevensScoreTable::default()),
        );
        sim.snapshot(&board, None).unwrap();
        assert_eq!(sim.delete_blocks().len(), 3);
        assert_eq!(sim.match_rule().name(), "same-number");
    }
}
