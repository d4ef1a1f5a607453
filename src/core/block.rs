//! Block - an identity-bearing colored cell
//!
//! Blocks are immutable values, but each carries a unique id so a renderer
//! can diff frames and animate movement. Ids come from an explicit
//! generator threaded through construction rather than global state.

use crate::core::vector::Vector;
use crate::types::Color;

/// Unique identity of a block, stable for the block's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockId(pub u32);

/// Monotonic id generator, owned by the session (see `Tetrion`).
#[derive(Debug, Clone)]
pub struct BlockIds {
    next: u32,
}

impl Default for BlockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> BlockId {
        let id = BlockId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// A position and color with a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub id: BlockId,
    pub position: Vector,
    pub color: Color,
}

impl Block {
    pub fn new(id: BlockId, position: Vector, color: Color) -> Self {
        Self {
            id,
            position,
            color,
        }
    }

    /// The same block at a new position (identity preserved). Used when
    /// rows shift down after a line clear.
    pub fn with_position(&self, position: Vector) -> Block {
        Block { position, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_and_unique() {
        let mut ids = BlockIds::new();
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_with_position_keeps_identity() {
        let mut ids = BlockIds::new();
        let block = Block::new(ids.next(), Vector::new(3, 7), Color::Purple);
        let shifted = block.with_position(Vector::new(3, 5));
        assert_eq!(shifted.id, block.id);
        assert_eq!(shifted.color, block.color);
        assert_eq!(shifted.position, Vector::new(3, 5));
    }

    #[test]
    fn test_separate_generators_are_independent() {
        let mut a = BlockIds::new();
        let mut b = BlockIds::new();
        assert_eq!(a.next(), b.next());
        a.next();
        assert_ne!(a.next(), b.next());
    }
}
