//! Core types module - shared value types and constants
//!
//! Everything here is plain data with no dependencies, so the same types are
//! usable by the rules engine, the CPU player and any front end.
//!
//! # Grid Dimensions
//!
//! - **Width**: 7 columns (indexed 0-6, left to right)
//! - **Height**: 14 rows (indexed 0-13, **row 0 is the bottom**)
//!
//! Gravity pulls blocks toward row 0.
//!
//! # Matching
//!
//! Blocks carry a number between 1 and 7. In the default rule a straight run
//! of neighbouring blocks whose numbers add up to [`MATCH_TARGET`] is removed.
//!
//! # Examples
//!
//! ```
//! use sevens_types::{BlockType, Coord, CpuMode, GRID_HEIGHT, GRID_WIDTH};
//!
//! let t = BlockType::from_str("three").unwrap();
//! assert_eq!(t.number(), 3);
//! assert_eq!(BlockType::from_number(7), Some(BlockType::Seven));
//!
//! let c = Coord::new(1, 2) + Coord::new(1, 0);
//! assert_eq!(c, Coord::new(2, 2));
//!
//! assert_eq!(CpuMode::from_str("normal"), Some(CpuMode::Normal));
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (7, 14));
//! ```

use std::fmt;
use std::ops::Add;

/// Grid width in cells (7 columns)
pub const GRID_WIDTH: i32 = 7;

/// Grid height in cells (14 rows)
pub const GRID_HEIGHT: i32 = 14;

/// Largest accepted board side, in cells
pub const MAX_GRID_SIDE: i32 = 1024;

/// Sum a run of numbers must reach to be removed
pub const MATCH_TARGET: u32 = 7;

/// Score awarded per matched number on the first chain step
pub const POINTS_PER_NUMBER: u32 = 10;

/// Minimum size of an equal-number region for the same-number rule
pub const SAME_NUMBER_MIN_LEN: usize = 3;

/// Upper bound on the number of blocks in one falling group
pub const MAX_GROUP_SIZE: usize = 4;

/// Position on the grid. `y == 0` is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The seven block kinds
///
/// Each kind carries a face value equal to its name (`One` = 1 ... `Seven` = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockType {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl BlockType {
    /// All block types in ascending order
    pub const ALL: [BlockType; 7] = [
        BlockType::One,
        BlockType::Two,
        BlockType::Three,
        BlockType::Four,
        BlockType::Five,
        BlockType::Six,
        BlockType::Seven,
    ];

    /// Face value of the block
    pub fn number(&self) -> u32 {
        match self {
            BlockType::One => 1,
            BlockType::Two => 2,
            BlockType::Three => 3,
            BlockType::Four => 4,
            BlockType::Five => 5,
            BlockType::Six => 6,
            BlockType::Seven => 7,
        }
    }

    /// Inverse of [`BlockType::number`]
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=7 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// Parse block type from string (case-insensitive, word or digit)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "one" | "1" => Some(BlockType::One),
            "two" | "2" => Some(BlockType::Two),
            "three" | "3" => Some(BlockType::Three),
            "four" | "4" => Some(BlockType::Four),
            "five" | "5" => Some(BlockType::Five),
            "six" | "6" => Some(BlockType::Six),
            "seven" | "7" => Some(BlockType::Seven),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::One => "one",
            BlockType::Two => "two",
            BlockType::Three => "three",
            BlockType::Four => "four",
            BlockType::Five => "five",
            BlockType::Six => "six",
            BlockType::Seven => "seven",
        }
    }
}

/// CPU difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CpuMode {
    /// No automated play
    #[default]
    None,
    /// Random legal moves
    Easy,
    /// Best simulated score
    Normal,
}

impl CpuMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Some(CpuMode::None),
            "easy" | "random" => Some(CpuMode::Easy),
            "normal" | "smart" => Some(CpuMode::Normal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CpuMode::None => "none",
            CpuMode::Easy => "easy",
            CpuMode::Normal => "normal",
        }
    }
}

/// A placement of the active group: anchor column plus number of clockwise
/// rotations from the spawn orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: i32,
    pub rotation: u8,
}

impl Move {
    pub const fn new(column: i32, rotation: u8) -> Self {
        Self { column, rotation }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col={} rot={}", self.column, self.rotation)
    }
}
