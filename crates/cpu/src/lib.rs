//! CPU opponent - pluggable move selection on top of the grid simulator
//!
//! Three behaviours share the [`CpuBehaviour`] capability:
//!
//! | Mode | Behaviour | Strategy |
//! |------|-----------|----------|
//! | `None` | [`NullBehaviour`] | does nothing |
//! | `Easy` | [`RandomMovementBehaviour`] | uniformly random legal move |
//! | `Normal` | [`SmartCpuBehaviour`] | best simulated cascade score |
//!
//! [`CpuManager`] owns the installed behaviour, swaps it on
//! [`CpuManager::change_mode`] and forwards each game tick via
//! [`CpuManager::on_update`].
//!
//! # Example
//!
//! ```
//! use sevens_core::{Grid, GroupPattern, Settings};
//! use sevens_cpu::CpuManager;
//! use sevens_types::{BlockType, Coord, CpuMode};
//!
//! let settings = Settings::default();
//! let mut grid = Grid::new(&settings);
//! grid.place_block(Coord::new(6, 0), BlockType::Four).unwrap();
//! grid.spawn_group(&settings, &[BlockType::One, BlockType::Three], &GroupPattern::pair());
//!
//! let mut cpu = CpuManager::new(settings);
//! cpu.change_mode(CpuMode::Normal);
//! cpu.on_update(&mut grid);
//!
//! // The 3 is steered next to the 4.
//! assert_eq!(grid.group().unwrap().location(), Coord::new(4, 13));
//! ```

pub mod behaviour;
pub mod manager;
pub mod moves;
pub mod random;
pub mod smart;

pub use sevens_core as core;
pub use sevens_types as types;

pub use behaviour::{CpuBehaviour, NullBehaviour};
pub use manager::{create_behaviour, CpuManager};
pub use moves::{apply_move, check_move, legal_moves, legal_placements, MoveError};
pub use random::RandomMovementBehaviour;
pub use smart::{Evaluation, SmartCpuBehaviour};
