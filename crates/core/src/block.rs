//! Block module - a single numbered unit occupying one cell

use crate::types::{BlockType, Coord};

/// Stable identity of a block across copies and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

/// A placed or falling block
///
/// `id` and `block_type` never change after creation; `location` follows the
/// block as gravity moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub id: BlockId,
    pub block_type: BlockType,
    pub number: u32,
    pub location: Coord,
}

impl Block {
    /// Create a block whose number is the face value of its type
    pub fn new(id: BlockId, block_type: BlockType, location: Coord) -> Self {
        Self {
            id,
            block_type,
            number: block_type.number(),
            location,
        }
    }
}

/// Monotonic block id allocator
#[derive(Debug, Clone, Default)]
pub struct BlockIds {
    next: u32,
}

impl BlockIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next unused id
    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next.max(1));
        self.next = id.0.wrapping_add(1);
        id
    }
}
