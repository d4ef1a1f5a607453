//! Tetromino - a positioned, rotated shape instance
//!
//! A tetromino is the SRS shape table applied through a transform. Its four
//! block identities are minted once at construction, so the same four
//! blocks move across frames as the piece is pushed around.

use arrayvec::ArrayVec;

use crate::core::block::{Block, BlockId, BlockIds};
use crate::core::srs::shape_data;
use crate::core::vector::{Transform, Vector};
use crate::types::{Color, Shape};

/// The collision collaborator: true if any of the four cells overlaps a
/// locked block or lies outside the playfield.
pub trait Collide {
    fn collides(&self, cells: &[Vector; 4]) -> bool;
}

impl<F> Collide for F
where
    F: Fn(&[Vector; 4]) -> bool,
{
    fn collides(&self, cells: &[Vector; 4]) -> bool {
        self(cells)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    shape: Shape,
    transform: Transform,
    last_transform: Option<Transform>,
    was_held: bool,
    block_ids: [BlockId; 4],
}

impl Tetromino {
    /// Create a tetromino at the zero transform, minting its block ids.
    pub fn new(shape: Shape, ids: &mut BlockIds) -> Self {
        Self {
            shape,
            transform: Transform::ZERO,
            last_transform: None,
            was_held: false,
            block_ids: [ids.next(), ids.next(), ids.next(), ids.next()],
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn last_transform(&self) -> Option<Transform> {
        self.last_transform
    }

    pub fn was_held(&self) -> bool {
        self.was_held
    }

    pub fn color(&self) -> Color {
        shape_data(self.shape).color
    }

    /// Moves the tetromino to its shape's spawn transform.
    pub fn spawn(&self) -> Tetromino {
        Tetromino {
            transform: Transform::from_vector(shape_data(self.shape).spawn),
            last_transform: None,
            ..*self
        }
    }

    /// Resets the transform and marks the piece held for this lifetime.
    pub fn hold(&self) -> Tetromino {
        Tetromino {
            transform: Transform::ZERO,
            last_transform: None,
            was_held: true,
            ..*self
        }
    }

    /// The four cells occupied at the current transform.
    pub fn cells(&self) -> [Vector; 4] {
        self.cells_at(self.transform)
    }

    fn cells_at(&self, transform: Transform) -> [Vector; 4] {
        let positions = &shape_data(self.shape).positions[transform.rotation as usize];
        positions.map(|p| transform.vector.add(p))
    }

    /// The four blocks at the current transform, carrying this piece's
    /// stable identities.
    pub fn blocks(&self) -> [Block; 4] {
        let color = self.color();
        let cells = self.cells();
        [
            Block::new(self.block_ids[0], cells[0], color),
            Block::new(self.block_ids[1], cells[1], color),
            Block::new(self.block_ids[2], cells[2], color),
            Block::new(self.block_ids[3], cells[3], color),
        ]
    }

    /// True if applying `t` directly (no kicks) yields a non-colliding
    /// position.
    pub fn can_apply<C: Collide>(&self, t: Transform, collide: &C) -> bool {
        !collide.collides(&self.cells_at(self.transform.add(t)))
    }

    /// Applies `t` without collision checking, recording it as the last
    /// applied transform.
    fn applied(&self, t: Transform) -> Tetromino {
        Tetromino {
            transform: self.transform.add(t),
            last_transform: Some(t),
            ..*self
        }
    }

    /// Applies `t`, falling back through the wall-kick candidates in table
    /// order. If no candidate fits, returns the tetromino unchanged (a
    /// no-op, not an error).
    pub fn apply_transform<C: Collide>(&self, t: Transform, collide: &C) -> Tetromino {
        match self
            .wall_kicks(t)
            .into_iter()
            .find(|&u| self.can_apply(u, collide))
        {
            Some(u) => self.applied(u),
            None => *self,
        }
    }

    /// Drops the tetromino straight down as far as it can go without
    /// colliding. Terminates because the playfield floor bounds y.
    pub fn drop<C: Collide>(&self, collide: &C) -> Tetromino {
        let mut t = Transform::ZERO;
        loop {
            let u = t.add(Transform::DOWN);
            if !self.can_apply(u, collide) {
                break;
            }
            t = u;
        }
        self.applied(t)
    }

    /// The kick-adjusted candidates for a requested transform `t`, in the
    /// order they must be attempted: candidate i composes `t` with
    /// `from[i] - to[i]`, pairing the offset rows of the current and target
    /// rotation.
    fn wall_kicks(&self, t: Transform) -> ArrayVec<Transform, 5> {
        let offsets = &shape_data(self.shape).offsets;
        let from = offsets[self.transform.rotation as usize];
        let to = offsets[self.transform.add(t).rotation as usize];
        from.iter()
            .zip(to.iter())
            .map(|(&a, &b)| {
                t.add(Transform::from_vector(a.sub(b)))
            })
            .collect()
    }

    /// Test hook: place the piece at an arbitrary transform with a chosen
    /// arrival history.
    #[cfg(test)]
    pub(crate) fn at(&self, transform: Transform, last_transform: Option<Transform>) -> Tetromino {
        Tetromino {
            transform,
            last_transform,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BUFFER_ROWS, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

    fn bounds_only(cells: &[Vector; 4]) -> bool {
        cells.iter().any(|c| {
            c.x < 0
                || c.x >= PLAYFIELD_WIDTH
                || c.y < 0
                || c.y >= PLAYFIELD_HEIGHT + BUFFER_ROWS
        })
    }

    #[test]
    fn test_always_four_blocks() {
        let mut ids = BlockIds::new();
        for shape in Shape::ALL {
            let piece = Tetromino::new(shape, &mut ids).spawn();
            assert_eq!(piece.blocks().len(), 4);
        }
    }

    #[test]
    fn test_spawn_cells_fit_in_buffer() {
        let mut ids = BlockIds::new();
        for shape in Shape::ALL {
            let piece = Tetromino::new(shape, &mut ids).spawn();
            assert!(
                !bounds_only(&piece.cells()),
                "{:?} spawns out of bounds: {:?}",
                shape,
                piece.cells()
            );
        }
    }

    #[test]
    fn test_drop_reaches_floor_on_empty_field() {
        let mut ids = BlockIds::new();
        for shape in Shape::ALL {
            let dropped = Tetromino::new(shape, &mut ids).spawn().drop(&bounds_only);
            let lowest = dropped.cells().iter().map(|c| c.y).min().unwrap();
            assert_eq!(lowest, 0, "{:?} should rest on the floor", shape);
        }
    }

    #[test]
    fn test_drop_records_translation() {
        let mut ids = BlockIds::new();
        let dropped = Tetromino::new(Shape::T, &mut ids).spawn().drop(&bounds_only);
        let last = dropped.last_transform().unwrap();
        assert!(last.is_translation());
        assert!(!last.is_rotation());
    }

    #[test]
    fn test_failed_transform_is_noop() {
        let mut ids = BlockIds::new();
        let piece = Tetromino::new(Shape::O, &mut ids).spawn().drop(&bounds_only);
        // On the floor, down cannot apply.
        let moved = piece.apply_transform(Transform::DOWN, &bounds_only);
        assert_eq!(moved, piece);
    }

    #[test]
    fn test_rotation_near_left_wall_kicks_right() {
        let mut ids = BlockIds::new();
        // T against the left wall, pointing east. Rotating CCW to north
        // collides at the wall; the second kick (+1, 0) must win.
        let mut piece = Tetromino::new(Shape::T, &mut ids);
        piece.transform = Transform::new(0, 1, 1);
        let rotated = piece.apply_transform(Transform::ROTATE_CCW, &bounds_only);
        assert_eq!(rotated.transform(), Transform::new(1, 1, 0));
        // Deterministic: same inputs, same candidate.
        let again = piece.apply_transform(Transform::ROTATE_CCW, &bounds_only);
        assert_eq!(again.transform(), rotated.transform());
    }

    #[test]
    fn test_kick_is_recorded_in_last_transform() {
        let mut ids = BlockIds::new();
        let mut piece = Tetromino::new(Shape::T, &mut ids);
        piece.transform = Transform::new(0, 1, 1);
        let rotated = piece.apply_transform(Transform::ROTATE_CCW, &bounds_only);
        let last = rotated.last_transform().unwrap();
        assert!(last.is_rotation());
        // The kick shifted the piece, so the transform also translates.
        assert!(last.is_translation());
    }

    #[test]
    fn test_hold_resets_and_marks() {
        let mut ids = BlockIds::new();
        let piece = Tetromino::new(Shape::J, &mut ids).spawn();
        let held = piece.hold();
        assert!(held.was_held());
        assert_eq!(held.transform(), Transform::ZERO);
        assert_eq!(held.shape(), Shape::J);
    }

    #[test]
    fn test_block_ids_stable_across_moves() {
        let mut ids = BlockIds::new();
        let piece = Tetromino::new(Shape::S, &mut ids).spawn();
        let before: Vec<_> = piece.blocks().iter().map(|b| b.id).collect();
        let moved = piece.apply_transform(Transform::LEFT, &bounds_only);
        let after: Vec<_> = moved.blocks().iter().map(|b| b.id).collect();
        assert_eq!(before, after);
    }
}
