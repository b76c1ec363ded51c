//! RNG module - deterministic randomness for the CPU and the block feed
//!
//! [`SimpleRng`] is a small LCG so that a seed fully determines a game: the
//! random CPU picks the same moves and the [`BlockQueue`] deals the same
//! blocks every run.
//!
//! [`BlockQueue`] deals block types from a shuffled bag holding one of each of
//! the seven types, refilling when the bag runs out.

use arrayvec::ArrayVec;

use crate::group::BlockPattern;
use crate::types::{BlockType, MAX_GROUP_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`; 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly chosen element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Block types for one group, as dealt by [`BlockQueue::next_pattern`].
pub type DealtPattern = ArrayVec<BlockType, MAX_GROUP_SIZE>;

impl BlockPattern for DealtPattern {
    fn types(&self) -> &[BlockType] {
        self
    }
}

/// 7-bag block type generator
#[derive(Debug, Clone)]
pub struct BlockQueue {
    bag: [BlockType; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl BlockQueue {
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: BlockType::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        self.bag = BlockType::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    pub fn draw(&mut self) -> BlockType {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let t = self.bag[self.bag_index];
        self.bag_index += 1;
        t
    }

    /// Deal `len` block types (capped at [`MAX_GROUP_SIZE`]) for the next group.
    pub fn next_pattern(&mut self, len: usize) -> DealtPattern {
        (0..len.min(MAX_GROUP_SIZE)).map(|_| self.draw()).collect()
    }
}

impl Default for BlockQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = SimpleRng::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn test_bag_deals_all_seven() {
        let mut queue = BlockQueue::new(1);
        let mut drawn: Vec<BlockType> = (0..7).map(|_| queue.draw()).collect();
        drawn.sort();
        assert_eq!(drawn, BlockType::ALL.to_vec());
    }

    #[test]
    fn test_next_pattern_is_capped() {
        let mut queue = BlockQueue::new(1);
        assert_eq!(queue.next_pattern(2).len(), 2);
        assert_eq!(queue.next_pattern(10).len(), MAX_GROUP_SIZE);
    }
}
