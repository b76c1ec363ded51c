//! Matching module - which blocks are eligible for removal
//!
//! The rule is injected into the simulator so the scoring design can change
//! without touching the board code. Two rules ship with the crate:
//!
//! - [`SevensRule`] (default): within any horizontal or vertical line of
//!   touching blocks, every contiguous stretch whose numbers add up to the
//!   target is removed. `1 2 4`, `3 4`, and a lone `7` all qualify.
//! - [`SameNumberRule`]: orthogonally connected regions of equal numbers with
//!   at least `min_len` members.

use std::collections::VecDeque;

use crate::block::Block;
use crate::board::Board;
use crate::types::{Coord, MATCH_TARGET, SAME_NUMBER_MIN_LEN};

/// One group of blocks that satisfied a match rule, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRun {
    pub blocks: Vec<Block>,
}

impl MatchedRun {
    pub fn sum(&self) -> u32 {
        self.blocks
            .iter()
            .fold(0u32, |acc, b| acc.saturating_add(b.number))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.blocks.iter().any(|b| b.location == c)
    }
}

pub trait MatchRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Every run currently present on `board`. Must not depend on anything
    /// but the board contents, and must return runs in a stable order.
    fn find_runs(&self, board: &Board) -> Vec<MatchedRun>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SevensRule {
    pub target: u32,
}

impl SevensRule {
    pub fn new(target: u32) -> Self {
        Self { target }
    }

    fn scan_line(&self, line: &[Block], allow_single: bool, out: &mut Vec<MatchedRun>) {
        for start in 0..line.len() {
            let mut sum = 0u32;
            for end in start..line.len() {
                sum = sum.saturating_add(line[end].number);
                if sum > self.target {
                    break;
                }
                if sum == self.target && (allow_single || end > start) {
                    out.push(MatchedRun {
                        blocks: line[start..=end].to_vec(),
                    });
                    break;
                }
            }
        }
    }
}

impl Default for SevensRule {
    fn default() -> Self {
        Self::new(MATCH_TARGET)
    }
}

impl MatchRule for SevensRule {
    fn name(&self) -> &'static str {
        "sevens"
    }

    fn find_runs(&self, board: &Board) -> Vec<MatchedRun> {
        let mut runs = Vec::new();
        let mut line: Vec<Block> = Vec::with_capacity(board.width().max(board.height()) as usize);

        // Rows, bottom to top. Singletons are reported here only so a lone
        // target block is not counted twice.
        for y in 0..board.height() {
            line.clear();
            for x in 0..=board.width() {
                match board.get(Coord::new(x, y)) {
                    Some(b) => line.push(*b),
                    None => {
                        self.scan_line(&line, true, &mut runs);
                        line.clear();
                    }
                }
            }
        }

        for x in 0..board.width() {
            line.clear();
            for y in 0..=board.height() {
                match board.get(Coord::new(x, y)) {
                    Some(b) => line.push(*b),
                    None => {
                        self.scan_line(&line, false, &mut runs);
                        line.clear();
                    }
                }
            }
        }

        runs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SameNumberRule {
    pub min_len: usize,
}

impl Default for SameNumberRule {
    fn default() -> Self {
        Self {
            min_len: SAME_NUMBER_MIN_LEN,
        }
    }
}

impl MatchRule for SameNumberRule {
    fn name(&self) -> &'static str {
        "same-number"
    }

    fn find_runs(&self, board: &Board) -> Vec<MatchedRun> {
        let (w, h) = board.dimensions();
        let mut visited = vec![false; (w * h) as usize];
        let mut runs = Vec::new();
        let mut queue = VecDeque::new();

        for start in board.blocks() {
            let si = (start.location.y * w + start.location.x) as usize;
            if visited[si] {
                continue;
            }
            visited[si] = true;

            let mut region = vec![*start];
            queue.push_back(start.location);
            while let Some(c) = queue.pop_front() {
                for d in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                    let n = c + Coord::new(d.0, d.1);
                    let Some(b) = board.get(n) else {
                        continue;
                    };
                    let ni = (n.y * w + n.x) as usize;
                    if visited[ni] || b.number != start.number {
                        continue;
                    }
                    visited[ni] = true;
                    region.push(*b);
                    queue.push_back(n);
                }
            }

            if region.len() >= self.min_len {
                region.sort_by_key(|b| (b.location.y, b.location.x));
                runs.push(MatchedRun { blocks: region });
            }
        }

        runs
    }
}
