use std::fmt;

use crate::types::Coord;

/// Precondition violations raised by board access and snapshotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, width) x [0, height)`.
    OutOfBounds(Coord),
    /// Source board does not match the configured dimensions.
    DimensionMismatch {
        expected: (i32, i32),
        actual: (i32, i32),
    },
    /// Target cell already holds a block.
    Occupied(Coord),
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::OutOfBounds(_) => "out_of_bounds",
            GridError::DimensionMismatch { .. } => "dimension_mismatch",
            GridError::Occupied(_) => "occupied",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::OutOfBounds(_) => "coordinate is outside the board",
            GridError::DimensionMismatch { .. } => "board dimensions differ from settings",
            GridError::Occupied(_) => "cell is already occupied",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds(c) | GridError::Occupied(c) => {
                write!(f, "{}: {} at {}", self.code(), self.message(), c)
            }
            GridError::DimensionMismatch { expected, actual } => write!(
                f,
                "{}: expected {}x{}, got {}x{}",
                self.code(),
                expected.0,
                expected.1,
                actual.0,
                actual.1
            ),
        }
    }
}

impl std::error::Error for GridError {}
