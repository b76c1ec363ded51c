//! Normal CPU: simulate every legal move and play the best-scoring one
//!
//! Each candidate is evaluated by snapshotting the live board together with
//! the repositioned group into a private [`GridSimulator`] and scoring the
//! resulting cascade. The live grid is only written once, when the winning
//! move is applied. Ties go to the first move in enumeration order.

use sevens_core::{Grid, GridSimulator, Settings};
use sevens_types::Move;

use crate::behaviour::CpuBehaviour;
use crate::moves::{apply_move, legal_placements};

/// Score predicted for one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub mv: Move,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct SmartCpuBehaviour {
    simulator: GridSimulator,
    last_choice: Option<Evaluation>,
}

impl SmartCpuBehaviour {
    pub fn new(settings: Settings) -> Self {
        Self::with_simulator(GridSimulator::new(settings))
    }

    /// Use a simulator configured with custom match and score rules.
    pub fn with_simulator(simulator: GridSimulator) -> Self {
        Self {
            simulator,
            last_choice: None,
        }
    }

    /// Move chosen by the most recent [`CpuBehaviour::do_action`] call
    pub fn last_choice(&self) -> Option<Evaluation> {
        self.last_choice
    }

    /// Predicted score of every legal move, in enumeration order.
    ///
    /// Empty when there is no active group, no legal move, or the grid does
    /// not match the simulator's dimensions.
    pub fn evaluate_all(&mut self, grid: &Grid) -> Vec<Evaluation> {
        let mut out = Vec::new();
        for (mv, placed) in legal_placements(grid) {
            if self.simulator.snapshot(grid.board(), Some(&placed)).is_err() {
                return Vec::new();
            }
            let score = self.simulator.score_from_simulation();
            out.push(Evaluation { mv, score });
        }
        out
    }

    /// Highest-scoring legal move; the earliest wins a tie.
    pub fn best_move(&mut self, grid: &Grid) -> Option<Evaluation> {
        self.evaluate_all(grid)
            .into_iter()
            .fold(None, |best: Option<Evaluation>, e| match best {
                Some(b) if b.score >= e.score => Some(b),
                _ => Some(e),
            })
    }
}

impl CpuBehaviour for SmartCpuBehaviour {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn do_action(&mut self, grid: &mut Grid) {
        self.last_choice = self.best_move(grid);
        if let Some(choice) = self.last_choice {
            let applied = apply_move(grid, choice.mv);
            debug_assert!(applied.is_ok(), "smart cpu chose {}: {:?}", choice.mv, applied);
        }
    }
}
