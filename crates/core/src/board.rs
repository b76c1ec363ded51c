//! Board module - fixed-size storage for placed blocks
//!
//! Cells are kept in a flat row-major vector (`y * width + x`). Row 0 is the
//! bottom of the board, so gravity compacts each column toward `y == 0`.
//!
//! The board knows nothing about snapshots or CPU players; it only offers
//! bounds-checked access plus the gravity and match-removal passes that both
//! the live grid and the simulator run.

use std::fmt;
use std::ops::Index;

use crate::block::Block;
use crate::error::GridError;
use crate::group::Group;
use crate::matching::{MatchRule, MatchedRun};
use crate::scoring::{CascadeResult, ScoreTable};
use crate::settings::Settings;
use crate::types::{Coord, MAX_GRID_SIDE};

/// Cell on the board (None = empty)
pub type Cell = Option<Block>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Each side is clamped to `0..=MAX_GRID_SIDE`.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.clamp(0, MAX_GRID_SIDE);
        let height = height.clamp(0, MAX_GRID_SIDE);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.grid_width, settings.grid_height)
    }

    #[inline(always)]
    fn flat_index(&self, c: Coord) -> Option<usize> {
        if self.is_out_of_bounds(c) {
            return None;
        }
        Some((c.y * self.width + c.x) as usize)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn is_out_of_bounds(&self, c: Coord) -> bool {
        c.x < 0 || c.x >= self.width || c.y < 0 || c.y >= self.height
    }

    /// In bounds and empty
    pub fn is_valid(&self, c: Coord) -> bool {
        matches!(self.flat_index(c).map(|i| &self.cells[i]), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, c: Coord) -> bool {
        matches!(self.flat_index(c).map(|i| &self.cells[i]), Some(Some(_)))
    }

    /// Block at `c`; `None` for empty or out-of-bounds cells.
    pub fn get(&self, c: Coord) -> Option<&Block> {
        self.flat_index(c).and_then(|i| self.cells[i].as_ref())
    }

    /// Bounds-checked cell read
    pub fn cell(&self, c: Coord) -> Result<Option<&Block>, GridError> {
        self.flat_index(c)
            .map(|i| self.cells[i].as_ref())
            .ok_or(GridError::OutOfBounds(c))
    }

    /// Bounds-checked cell write. A stored block has its location set to `c`.
    /// Returns the previous content.
    pub fn set(&mut self, c: Coord, cell: Cell) -> Result<Cell, GridError> {
        let i = self.flat_index(c).ok_or(GridError::OutOfBounds(c))?;
        let cell = cell.map(|b| Block { location: c, ..b });
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Put a block into an empty cell.
    pub fn place(&mut self, c: Coord, block: Block) -> Result<(), GridError> {
        if self.cell(c)?.is_some() {
            return Err(GridError::Occupied(c));
        }
        self.set(c, Some(block)).map(|_| ())
    }

    /// Empty a cell, returning what was there.
    pub fn take(&mut self, c: Coord) -> Result<Cell, GridError> {
        self.set(c, None)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupied blocks in scan order (bottom row first, left to right)
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.cells.iter().flatten()
    }

    pub fn block_count(&self) -> usize {
        self.blocks().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Gravity pass: compact every column toward row 0.
    ///
    /// Blocks in a column keep their relative order. Returns true if any
    /// block moved.
    pub fn drop_blocks(&mut self) -> bool {
        let width = self.width as usize;
        let mut moved = false;

        for x in 0..width {
            let mut write_y = 0usize;
            for read_y in 0..self.height as usize {
                let src = read_y * width + x;
                let Some(block) = self.cells[src].take() else {
                    continue;
                };
                let dst = write_y * width + x;
                if dst != src {
                    moved = true;
                }
                self.cells[dst] = Some(Block {
                    location: Coord::new(x as i32, write_y as i32),
                    ..block
                });
                write_y += 1;
            }
        }

        moved
    }

    /// Runs currently satisfying `rule`; the board is not modified.
    pub fn find_matches(&self, rule: &dyn MatchRule) -> Vec<MatchedRun> {
        rule.find_runs(self)
    }

    /// Remove every block covered by `runs`.
    ///
    /// Blocks shared by several runs are removed and reported once. The result
    /// is in scan order.
    pub fn delete_runs(&mut self, runs: &[MatchedRun]) -> Vec<Block> {
        let mut coords: Vec<Coord> = runs
            .iter()
            .flat_map(|r| r.blocks.iter().map(|b| b.location))
            .collect();
        coords.sort_by_key(|c| (c.y, c.x));
        coords.dedup();

        coords
            .into_iter()
            .filter_map(|c| self.take(c).ok().flatten())
            .collect()
    }

    /// Drop the group's blocks straight down onto their columns.
    ///
    /// Lower children land first so a vertical group keeps its order. A
    /// block whose column is already full is discarded. Returns the number
    /// of blocks that landed.
    pub fn land_group(&mut self, group: &Group) -> usize {
        let mut children: Vec<_> = group.children().to_vec();
        children.sort_by_key(|c| (c.offset.y, c.offset.x));

        let mut landed = 0;
        for child in children {
            let x = child.block.location.x;
            if x < 0 || x >= self.width {
                continue;
            }
            let top = (0..self.height)
                .rev()
                .find(|&y| self.is_occupied(Coord::new(x, y)))
                .map_or(0, |y| y + 1);
            if self.place(Coord::new(x, top), child.block).is_ok() {
                landed += 1;
            }
        }
        landed
    }

    /// Drop then delete until the board settles, scoring every matched run
    /// through `table` with its 1-based chain index.
    pub fn resolve_cascade(&mut self, rule: &dyn MatchRule, table: &dyn ScoreTable) -> CascadeResult {
        let mut result = CascadeResult::default();

        loop {
            let moved = self.drop_blocks();
            // After a deletion, nothing new can line up unless something fell.
            if result.chains > 0 && !moved {
                break;
            }

            let runs = self.find_matches(rule);
            if runs.is_empty() {
                break;
            }

            result.chains += 1;
            for run in &runs {
                result.total = result
                    .total
                    .saturating_add(table.score_run(run, result.chains));
            }
            result.runs += runs.len();
            result.removed.extend(self.delete_runs(&runs));
        }

        result
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    /// Panics on out-of-bounds coordinates, like slice indexing.
    fn index(&self, c: Coord) -> &Cell {
        match self.flat_index(c) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate {} out of bounds for {}x{} board",
                c, self.width, self.height
            ),
        }
    }
}

impl fmt::Display for Board {
    /// Top row first; digits for blocks, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                match self.get(Coord::new(x, y)) {
                    Some(b) => write!(f, "{}", b.number)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
