//! Core rules module - pure, deterministic, and testable
//!
//! This crate holds the board model and the grid simulation engine. It does
//! no I/O and has no notion of rendering or input, so the same code drives the
//! live game, the CPU opponent and the tests.
//!
//! # Module Structure
//!
//! - [`block`]: a single numbered block and its identity
//! - [`group`]: the falling group, its layout patterns and rotation
//! - [`board`]: bounds-checked cell storage with gravity and match removal
//! - [`grid`]: the live play field (board + active group) owned by a session
//! - [`matching`]: pluggable match rules ([`SevensRule`], [`SameNumberRule`])
//! - [`scoring`]: pluggable score tables and cascade results
//! - [`simulator`]: copy-on-simulate prediction ([`GridSimulator`])
//! - [`settings`]: board size and scoring configuration
//! - [`rng`]: seeded LCG and the 7-bag block feed
//!
//! # Game Rules
//!
//! - **Gravity**: blocks fall straight down; columns never exchange blocks
//! - **Sevens**: a straight run of touching blocks adding up to 7 is removed
//! - **Cascade**: removal lets blocks fall, which may complete new runs; each
//!   further step is a new chain and scores more
//!
//! # Example
//!
//! ```
//! use sevens_core::{Board, Block, BlockId, GridSimulator, Settings};
//! use sevens_core::types::{BlockType, Coord};
//!
//! let mut board = Board::new(7, 14);
//! board.set(Coord::new(0, 9), Some(Block::new(BlockId(1), BlockType::Three, Coord::default()))).unwrap();
//! board.set(Coord::new(1, 0), Some(Block::new(BlockId(2), BlockType::Four, Coord::default()))).unwrap();
//!
//! let mut sim = GridSimulator::new(Settings::default());
//! sim.snapshot(&board, None).unwrap();
//!
//! // The 3 falls next to the 4 and the pair is removed.
//! assert_eq!(sim.score_from_simulation(), 70);
//! assert!(sim.simulated_board().is_empty());
//!
//! // The live board is untouched.
//! assert_eq!(board.block_count(), 2);
//! ```

pub mod block;
pub mod board;
pub mod error;
pub mod grid;
pub mod group;
pub mod matching;
pub mod rng;
pub mod scoring;
pub mod settings;
pub mod simulator;

pub use sevens_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, BlockId, BlockIds};
pub use board::{Board, Cell};
pub use error::GridError;
pub use grid::Grid;
pub use group::{BlockPattern, Group, GroupChild, GroupPattern};
pub use matching::{MatchRule, MatchedRun, SameNumberRule, SevensRule};
pub use rng::{BlockQueue, SimpleRng};
pub use scoring::{calculate_run_score, CascadeResult, ScoreTable, SevensScoreTable};
pub use settings::Settings;
pub use simulator::GridSimulator;
