//! Vector and Transform - immutable positioning primitives
//!
//! Coordinates are y-up: the playfield floor is y = 0 and "down" is (0, -1).
//! A transform combines a translation with a rotation index in 0..4.

/// A position or translation on the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    pub const fn add(&self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub const fn sub(&self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

/// A position plus a rotation index, normalized to 0..4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub vector: Vector,
    pub rotation: u8,
}

impl Transform {
    pub const ZERO: Transform = Transform::new(0, 0, 0);
    pub const LEFT: Transform = Transform::new(-1, 0, 0);
    pub const RIGHT: Transform = Transform::new(1, 0, 0);
    pub const DOWN: Transform = Transform::new(0, -1, 0);
    /// One counter-clockwise quarter turn (-1 ≡ 3 mod 4).
    pub const ROTATE_CCW: Transform = Transform::new(0, 0, 3);
    /// One clockwise quarter turn.
    pub const ROTATE_CW: Transform = Transform::new(0, 0, 1);

    pub const fn new(x: i8, y: i8, rotation: u8) -> Self {
        Self {
            vector: Vector::new(x, y),
            rotation: rotation % 4,
        }
    }

    pub const fn from_vector(vector: Vector) -> Self {
        Self {
            vector,
            rotation: 0,
        }
    }

    /// True if the transform rotates the piece.
    pub const fn is_rotation(&self) -> bool {
        self.rotation != 0
    }

    /// True if the transform moves the piece.
    pub const fn is_translation(&self) -> bool {
        !self.vector.is_zero()
    }

    pub const fn is_zero(&self) -> bool {
        self.vector.is_zero() && self.rotation == 0
    }

    /// Combines two transforms: translations add, rotations add mod 4.
    pub const fn add(&self, other: Transform) -> Transform {
        Transform {
            vector: self.vector.add(other.vector),
            rotation: (self.rotation + other.rotation) % 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector::new(3, -2);
        let b = Vector::new(-1, 5);
        assert_eq!(a.add(b), Vector::new(2, 3));
        assert_eq!(a.sub(b), Vector::new(4, -7));
        assert!(Vector::ZERO.is_zero());
        assert!(!a.is_zero());
    }

    #[test]
    fn test_transform_rotation_wraps() {
        let quarter = Transform::ROTATE_CW;
        let mut t = Transform::ZERO;
        for _ in 0..4 {
            t = t.add(quarter);
        }
        assert_eq!(t.rotation, 0);

        // CCW from zero lands on 3.
        assert_eq!(Transform::ZERO.add(Transform::ROTATE_CCW).rotation, 3);
        // CW then CCW cancels.
        assert_eq!(
            Transform::ROTATE_CW.add(Transform::ROTATE_CCW).rotation,
            0
        );
    }

    #[test]
    fn test_transform_predicates() {
        assert!(Transform::ROTATE_CW.is_rotation());
        assert!(!Transform::ROTATE_CW.is_translation());
        assert!(Transform::DOWN.is_translation());
        assert!(!Transform::DOWN.is_rotation());
        assert!(Transform::ZERO.is_zero());
        assert!(!Transform::new(1, 0, 1).is_zero());
        assert!(Transform::new(1, 0, 1).is_rotation());
        assert!(Transform::new(1, 0, 1).is_translation());
    }

    #[test]
    fn test_transform_add_combines_both() {
        let t = Transform::new(2, -1, 1).add(Transform::new(-3, 4, 3));
        assert_eq!(t.vector, Vector::new(-1, 3));
        assert_eq!(t.rotation, 0);
    }
}
