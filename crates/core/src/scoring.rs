//! Scoring module - turning matched runs into points
//!
//! The simulator calls the installed [`ScoreTable`] once per matched run.
//! The default table pays `sum * points_per_number * chain`, so a cascade
//! is worth more the deeper it goes.

use crate::block::Block;
use crate::matching::MatchedRun;
use crate::types::POINTS_PER_NUMBER;

pub trait ScoreTable: Send + Sync {
    /// Points for one run removed on chain step `chain` (1-based).
    fn score_run(&self, run: &MatchedRun, chain: u32) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SevensScoreTable {
    pub points_per_number: u32,
}

impl Default for SevensScoreTable {
    fn default() -> Self {
        Self {
            points_per_number: POINTS_PER_NUMBER,
        }
    }
}

impl ScoreTable for SevensScoreTable {
    fn score_run(&self, run: &MatchedRun, chain: u32) -> u32 {
        calculate_run_score(run.sum(), chain, self.points_per_number)
    }
}

/// `sum * points_per_number * chain`, saturating.
pub fn calculate_run_score(sum: u32, chain: u32, points_per_number: u32) -> u32 {
    sum.saturating_mul(points_per_number)
        .saturating_mul(chain.max(1))
}

/// Outcome of one full drop/delete cascade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeResult {
    pub total: u32,
    /// Number of drop/delete cycles that removed something
    pub chains: u32,
    /// Number of matched runs scored
    pub runs: usize,
    pub removed: Vec<Block>,
}
