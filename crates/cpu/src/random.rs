//! Easy CPU: a uniformly random legal move each tick

use sevens_core::{Grid, SimpleRng};

use crate::behaviour::CpuBehaviour;
use crate::moves::{apply_move, legal_moves};

#[derive(Debug, Clone)]
pub struct RandomMovementBehaviour {
    rng: SimpleRng,
}

impl RandomMovementBehaviour {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl CpuBehaviour for RandomMovementBehaviour {
    fn name(&self) -> &'static str {
        "random"
    }

    fn do_action(&mut self, grid: &mut Grid) {
        let moves = legal_moves(grid);
        if let Some(&mv) = self.rng.choose(&moves) {
            let applied = apply_move(grid, mv);
            debug_assert!(applied.is_ok(), "random cpu chose {}: {:?}", mv, applied);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevens_core::{GroupPattern, Settings};
    use sevens_types::BlockType;

    fn spawn(grid: &mut Grid, settings: &Settings) {
        assert!(grid.spawn_group(
            settings,
            &[BlockType::One, BlockType::Three, BlockType::Five, BlockType::Two],
            &GroupPattern::square()
        ));
    }

    #[test]
    fn random_move_keeps_group_legal() {
        let settings = Settings::default();
        let mut grid = Grid::new(&settings);
        spawn(&mut grid, &settings);

        let mut cpu = RandomMovementBehaviour::new(42);
        for _ in 0..20 {
            cpu.do_action(&mut grid);
            let group = grid.group().unwrap();
            assert!(group.cells().all(|c| grid.board().is_valid(c)));
            assert_eq!(group.location().y, 12);
        }
        assert!(grid.board().is_empty());
    }

    #[test]
    fn same_seed_same_choices() {
        let settings = Settings::default();
        let mut a = Grid::new(&settings);
        let mut b = Grid::new(&settings);
        spawn(&mut a, &settings);
        spawn(&mut b, &settings);

        let mut cpu_a = RandomMovementBehaviour::new(9);
        let mut cpu_b = RandomMovementBehaviour::new(9);
        for _ in 0..10 {
            cpu_a.do_action(&mut a);
            cpu_b.do_action(&mut b);
            assert_eq!(a.group(), b.group());
        }
    }

    #[test]
    fn without_group_is_noop() {
        let mut grid = Grid::new(&Settings::default());
        RandomMovementBehaviour::new(1).do_action(&mut grid);
        assert!(grid.group().is_none());
    }
}
