//! Group module - the falling piece
//!
//! A group is a small cluster of blocks moving together. Each child keeps a
//! fixed offset from the group anchor for the group's whole life; moving the
//! group only changes the anchor, and rotating it cycles the block payloads
//! clockwise around the ring of offsets.

use arrayvec::ArrayVec;

use crate::block::{Block, BlockIds};
use crate::settings::Settings;
use crate::types::{BlockType, Coord, MAX_GROUP_SIZE};

/// Supplies the block types used to build the next group.
pub trait BlockPattern {
    fn types(&self) -> &[BlockType];
}

impl BlockPattern for [BlockType] {
    fn types(&self) -> &[BlockType] {
        self
    }
}

impl BlockPattern for Vec<BlockType> {
    fn types(&self) -> &[BlockType] {
        self
    }
}

impl<const N: usize> BlockPattern for [BlockType; N] {
    fn types(&self) -> &[BlockType] {
        self
    }
}

/// Child layout of a group, as offsets from the anchor (bottom-left).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPattern {
    offsets: ArrayVec<Coord, MAX_GROUP_SIZE>,
}

impl GroupPattern {
    /// Build a pattern from offsets; anything past [`MAX_GROUP_SIZE`] is ignored.
    pub fn new(offsets: &[Coord]) -> Self {
        Self {
            offsets: offsets.iter().copied().take(MAX_GROUP_SIZE).collect(),
        }
    }

    /// 2x2 square, filled bottom row first
    pub fn square() -> Self {
        Self::new(&[
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
        ])
    }

    /// Horizontal domino
    pub fn pair() -> Self {
        Self::new(&[Coord::new(0, 0), Coord::new(1, 0)])
    }

    pub fn offsets(&self) -> &[Coord] {
        &self.offsets
    }

    /// Width and height of the pattern's bounding box
    pub fn extent(&self) -> (i32, i32) {
        let w = self.offsets.iter().map(|c| c.x + 1).max().unwrap_or(0);
        let h = self.offsets.iter().map(|c| c.y + 1).max().unwrap_or(0);
        (w, h)
    }
}

impl Default for GroupPattern {
    fn default() -> Self {
        Self::square()
    }
}

/// One block of a group plus its offset from the anchor ("location in the group").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupChild {
    pub block: Block,
    pub offset: Coord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    location: Coord,
    children: ArrayVec<GroupChild, MAX_GROUP_SIZE>,
    /// Child indices in clockwise order around the group centre.
    ring: ArrayVec<u8, MAX_GROUP_SIZE>,
}

impl Group {
    /// Create a group anchored at `location`. Each block's location is
    /// rewritten to `location + offset`.
    pub fn new(location: Coord, children: impl IntoIterator<Item = (Block, Coord)>) -> Self {
        let children: ArrayVec<GroupChild, MAX_GROUP_SIZE> = children
            .into_iter()
            .take(MAX_GROUP_SIZE)
            .map(|(mut block, offset)| {
                block.location = location + offset;
                GroupChild { block, offset }
            })
            .collect();
        let ring = clockwise_ring(&children);
        Self {
            location,
            children,
            ring,
        }
    }

    /// Build a spawn-ready group from a block pattern and a layout.
    ///
    /// Types are paired with offsets in order; the group is as long as the
    /// shorter of the two. The anchor is centred horizontally against the top
    /// of the board.
    pub fn from_patterns(
        ids: &mut BlockIds,
        settings: &Settings,
        blocks: &dyn BlockPattern,
        layout: &GroupPattern,
    ) -> Self {
        let location = spawn_location(settings, layout);
        let children = blocks
            .types()
            .iter()
            .zip(layout.offsets())
            .map(|(&t, &offset)| (Block::new(ids.next_id(), t, location + offset), offset));
        Self::new(location, children)
    }

    pub fn location(&self) -> Coord {
        self.location
    }

    pub fn children(&self) -> &[GroupChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of distinct orientations reachable by [`Group::rotate_cw`]
    pub fn rotations(&self) -> u8 {
        self.children.len().max(1) as u8
    }

    /// Board cells covered by the group at its current anchor
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.children.iter().map(|c| c.block.location)
    }

    /// Board cells the group would cover if anchored at `anchor`
    pub fn cells_at(&self, anchor: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.children.iter().map(move |c| anchor + c.offset)
    }

    /// Move the anchor; offsets are untouched.
    pub fn set_location(&mut self, location: Coord) {
        self.location = location;
        for child in &mut self.children {
            child.block.location = location + child.offset;
        }
    }

    /// Cycle block payloads one step clockwise around the offset ring.
    pub fn rotate_cw(&mut self) {
        let n = self.ring.len();
        if n < 2 {
            return;
        }
        let blocks: ArrayVec<Block, MAX_GROUP_SIZE> = self
            .ring
            .iter()
            .map(|&i| self.children[i as usize].block)
            .collect();
        for (k, block) in blocks.into_iter().enumerate() {
            let dst = self.ring[(k + 1) % n] as usize;
            let location = self.children[dst].block.location;
            self.children[dst].block = Block { location, ..block };
        }
    }

    /// Copy of this group rotated `times` steps clockwise and anchored at `column`.
    pub fn placed(&self, column: i32, times: u8) -> Group {
        let mut g = self.clone();
        for _ in 0..times % self.rotations() {
            g.rotate_cw();
        }
        g.set_location(Coord::new(column, self.location.y));
        g
    }
}

/// Spawn anchor for a layout: centred, touching the top row.
pub fn spawn_location(settings: &Settings, layout: &GroupPattern) -> Coord {
    let (w, h) = layout.extent();
    Coord::new(
        (settings.grid_width - w) / 2,
        settings.grid_height - h.max(1),
    )
}

fn clockwise_ring(children: &[GroupChild]) -> ArrayVec<u8, MAX_GROUP_SIZE> {
    let n = children.len().max(1) as f64;
    let cx = children.iter().map(|c| c.offset.x as f64).sum::<f64>() / n;
    let cy = children.iter().map(|c| c.offset.y as f64).sum::<f64>() / n;

    let mut ring: ArrayVec<(f64, u8), MAX_GROUP_SIZE> = children
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let angle = (c.offset.y as f64 - cy).atan2(c.offset.x as f64 - cx);
            (angle, i as u8)
        })
        .collect();
    // Descending angle is clockwise with y pointing up.
    ring.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
    ring.into_iter().map(|(_, i)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockId;

    fn square(types: [BlockType; 4]) -> Group {
        let mut ids = BlockIds::new();
        Group::from_patterns(&mut ids, &Settings::default(), &types, &GroupPattern::square())
    }

    #[test]
    fn spawn_is_centred_at_top() {
        let g = square([BlockType::One, BlockType::Six, BlockType::Three, BlockType::Five]);
        assert_eq!(g.location(), Coord::new(2, 12));
        let cells: Vec<Coord> = g.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(2, 12),
                Coord::new(3, 12),
                Coord::new(2, 13),
                Coord::new(3, 13)
            ]
        );
    }

    #[test]
    fn children_pair_types_with_offsets_in_order() {
        let g = square([BlockType::One, BlockType::Six, BlockType::Three, BlockType::Five]);
        let numbers: Vec<u32> = g.children().iter().map(|c| c.block.number).collect();
        assert_eq!(numbers, vec![1, 6, 3, 5]);
        assert_eq!(g.children()[3].offset, Coord::new(1, 1));
    }

    #[test]
    fn short_block_pattern_shrinks_group() {
        let mut ids = BlockIds::new();
        let types = [BlockType::Two];
        let g = Group::from_patterns(&mut ids, &Settings::default(), &types, &GroupPattern::pair());
        assert_eq!(g.len(), 1);
        assert_eq!(g.rotations(), 1);
    }

    #[test]
    fn set_location_keeps_offsets() {
        let mut g = square([BlockType::One, BlockType::Two, BlockType::Three, BlockType::Four]);
        let offsets: Vec<Coord> = g.children().iter().map(|c| c.offset).collect();
        g.set_location(Coord::new(0, 5));
        assert_eq!(g.children()[3].block.location, Coord::new(1, 6));
        let after: Vec<Coord> = g.children().iter().map(|c| c.offset).collect();
        assert_eq!(offsets, after);
    }

    #[test]
    fn rotate_cw_moves_payloads_clockwise() {
        // Layout (y up):   3 4
        //                  1 2
        let mut g = square([BlockType::One, BlockType::Two, BlockType::Three, BlockType::Four]);
        g.rotate_cw();
        // Clockwise:       1 3
        //                  2 4
        let by_offset = |x: i32, y: i32| {
            g.children()
                .iter()
                .find(|c| c.offset == Coord::new(x, y))
                .map(|c| c.block.number)
        };
        assert_eq!(by_offset(0, 1), Some(1));
        assert_eq!(by_offset(1, 1), Some(3));
        assert_eq!(by_offset(1, 0), Some(4));
        assert_eq!(by_offset(0, 0), Some(2));
    }

    #[test]
    fn full_turn_restores_group() {
        let g = square([BlockType::One, BlockType::Two, BlockType::Three, BlockType::Four]);
        let mut r = g.clone();
        for _ in 0..g.rotations() {
            r.rotate_cw();
        }
        assert_eq!(r, g);
    }

    #[test]
    fn rotation_keeps_block_locations_on_their_cells() {
        let mut g = square([BlockType::One, BlockType::Two, BlockType::Three, BlockType::Four]);
        g.rotate_cw();
        for child in g.children() {
            assert_eq!(child.block.location, g.location() + child.offset);
        }
    }

    #[test]
    fn placed_moves_column_and_keeps_row() {
        let g = Group::new(
            Coord::new(2, 12),
            [
                (Block::new(BlockId(1), BlockType::Three, Coord::default()), Coord::new(0, 0)),
                (Block::new(BlockId(2), BlockType::Four, Coord::default()), Coord::new(1, 0)),
            ],
        );
        let p = g.placed(5, 1);
        assert_eq!(p.location(), Coord::new(5, 12));
        assert_eq!(p.children()[0].block.number, 4);
        assert_eq!(p.children()[1].block.number, 3);
        // Source untouched.
        assert_eq!(g.children()[0].block.number, 3);
    }
}
