//! CPU behaviours - what an automated player does on each tick

use sevens_core::Grid;

/// A policy that may change the live grid once per tick.
pub trait CpuBehaviour {
    fn name(&self) -> &'static str;

    /// Make at most one move on `grid`. Having no legal move is not an error;
    /// the call then does nothing.
    fn do_action(&mut self, grid: &mut Grid);
}

/// Does nothing; installed while no CPU is playing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBehaviour;

impl CpuBehaviour for NullBehaviour {
    fn name(&self) -> &'static str {
        "null"
    }

    fn do_action(&mut self, _grid: &mut Grid) {}
}
