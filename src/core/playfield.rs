//! Playfield - the grid of locked blocks
//!
//! The playfield is 10 columns by 20 visible rows, with 2 hidden buffer
//! rows above for spawning. It stores locked blocks as identity-bearing
//! values rather than a cell grid so renderers can diff frames.
//! Invariant: no two blocks share a position.

use crate::core::block::Block;
use crate::core::vector::Vector;
use crate::types::{BUFFER_ROWS, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Total rows, including the hidden spawn buffer.
pub const TOTAL_ROWS: i8 = PLAYFIELD_HEIGHT + BUFFER_ROWS;

#[derive(Debug, Clone, Default)]
pub struct Playfield {
    blocks: Vec<Block>,
}

impl Playfield {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// True if any cell overlaps a locked block or lies outside
    /// `[0, WIDTH) x [0, HEIGHT + 2)`.
    pub fn collide(&self, cells: &[Vector; 4]) -> bool {
        cells.iter().any(|c| self.is_outside(*c) || self.is_occupied(*c))
    }

    fn is_outside(&self, cell: Vector) -> bool {
        cell.x < 0 || cell.x >= PLAYFIELD_WIDTH || cell.y < 0 || cell.y >= TOTAL_ROWS
    }

    fn is_occupied(&self, cell: Vector) -> bool {
        self.blocks.iter().any(|b| b.position == cell)
    }

    /// Locks the given blocks in. The caller must have verified there is no
    /// collision; locking over an occupied cell is a caller error.
    pub fn lock(&self, blocks: &[Block]) -> Playfield {
        let mut locked = self.blocks.clone();
        locked.extend_from_slice(blocks);
        Playfield { blocks: locked }
    }

    /// Removes completed rows and shifts the rows above them down. A single
    /// bottom-to-top pass cascades correctly over multiple, possibly
    /// non-adjacent complete rows.
    ///
    /// Returns the new playfield and the number of rows cleared.
    pub fn clear_lines(&self) -> (Playfield, u32) {
        let mut remaining = Vec::with_capacity(self.blocks.len());
        let mut cleared: u32 = 0;

        for y in 0..TOTAL_ROWS {
            let row = self.blocks.iter().filter(|b| b.position.y == y);
            if row.clone().count() == PLAYFIELD_WIDTH as usize {
                cleared += 1;
            } else if cleared > 0 {
                let shift = Vector::new(0, cleared as i8);
                remaining.extend(row.map(|b| b.with_position(b.position.sub(shift))));
            } else {
                remaining.extend(row.copied());
            }
        }

        (Playfield { blocks: remaining }, cleared)
    }

    /// The locked blocks at any of the given positions. Used for T-spin
    /// corner detection.
    pub fn blocks_at(&self, positions: &[Vector]) -> Vec<Block> {
        self.blocks
            .iter()
            .filter(|b| positions.contains(&b.position))
            .copied()
            .collect()
    }
}
