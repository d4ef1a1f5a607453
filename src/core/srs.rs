//! Static Super Rotation System data
//!
//! Per shape: color, spawn position, block offsets per rotation index, and
//! the true-SRS wall-kick offset tables. Kick candidates for a rotation are
//! derived by pairing the offset rows of the current and target rotation
//! element-wise: candidate i = from[i] - to[i].
//!
//! Reference: http://harddrop.com/wiki/SRS#How_Guideline_SRS_Really_Works

use crate::core::vector::Vector;
use crate::types::{Color, Shape};

/// Static data for one shape.
pub struct ShapeData {
    pub color: Color,
    pub spawn: Vector,
    /// Block offsets from the pivot, one row per rotation index.
    pub positions: [[Vector; 4]; 4],
    /// Wall-kick offsets, one row per rotation index. JLSTZ and I carry
    /// five offsets, O carries one (no kicks).
    pub offsets: [&'static [Vector]; 4],
}

const fn v(x: i8, y: i8) -> Vector {
    Vector::new(x, y)
}

/// Pivot spawn position: pieces materialize in the hidden buffer rows,
/// horizontally centered.
const SPAWN: Vector = v(4, 20);

const JLSTZ_OFFSETS: [&[Vector]; 4] = [
    &[v(0, 0), v(0, 0), v(0, 0), v(0, 0), v(0, 0)],
    &[v(0, 0), v(1, 0), v(1, -1), v(0, 2), v(1, 2)],
    &[v(0, 0), v(0, 0), v(0, 0), v(0, 0), v(0, 0)],
    &[v(0, 0), v(-1, 0), v(-1, -1), v(0, 2), v(-1, 2)],
];

const I_OFFSETS: [&[Vector]; 4] = [
    &[v(0, 0), v(-1, 0), v(2, 0), v(-1, 0), v(2, 0)],
    &[v(-1, 0), v(0, 0), v(0, 0), v(0, 1), v(0, -2)],
    &[v(-1, 1), v(1, 1), v(-2, 1), v(1, 0), v(-2, 0)],
    &[v(0, 1), v(0, 1), v(0, 1), v(0, -1), v(0, 2)],
];

const O_OFFSETS: [&[Vector]; 4] = [&[v(0, 0)], &[v(0, -1)], &[v(-1, -1)], &[v(-1, 0)]];

// Block offsets by rotation index. Index 0 is the spawn orientation; each
// successive index is one clockwise quarter turn around the pivot
// ((x, y) -> (y, -x) in y-up coordinates).

const I_DATA: ShapeData = ShapeData {
    color: Color::Cyan,
    spawn: SPAWN,
    positions: [
        [v(-1, 0), v(0, 0), v(1, 0), v(2, 0)],
        [v(0, 1), v(0, 0), v(0, -1), v(0, -2)],
        [v(1, 0), v(0, 0), v(-1, 0), v(-2, 0)],
        [v(0, -1), v(0, 0), v(0, 1), v(0, 2)],
    ],
    offsets: I_OFFSETS,
};

const O_DATA: ShapeData = ShapeData {
    color: Color::Yellow,
    spawn: SPAWN,
    positions: [
        [v(0, 0), v(1, 0), v(0, 1), v(1, 1)],
        [v(0, 0), v(0, -1), v(1, 0), v(1, -1)],
        [v(0, 0), v(-1, 0), v(0, -1), v(-1, -1)],
        [v(0, 0), v(0, 1), v(-1, 0), v(-1, 1)],
    ],
    offsets: O_OFFSETS,
};

const T_DATA: ShapeData = ShapeData {
    color: Color::Purple,
    spawn: SPAWN,
    positions: [
        [v(-1, 0), v(0, 0), v(1, 0), v(0, 1)],
        [v(0, 1), v(0, 0), v(0, -1), v(1, 0)],
        [v(1, 0), v(0, 0), v(-1, 0), v(0, -1)],
        [v(0, -1), v(0, 0), v(0, 1), v(-1, 0)],
    ],
    offsets: JLSTZ_OFFSETS,
};

const S_DATA: ShapeData = ShapeData {
    color: Color::Green,
    spawn: SPAWN,
    positions: [
        [v(-1, 0), v(0, 0), v(0, 1), v(1, 1)],
        [v(0, 1), v(0, 0), v(1, 0), v(1, -1)],
        [v(1, 0), v(0, 0), v(0, -1), v(-1, -1)],
        [v(0, -1), v(0, 0), v(-1, 0), v(-1, 1)],
    ],
    offsets: JLSTZ_OFFSETS,
};

const Z_DATA: ShapeData = ShapeData {
    color: Color::Red,
    spawn: SPAWN,
    positions: [
        [v(-1, 1), v(0, 1), v(0, 0), v(1, 0)],
        [v(1, 1), v(1, 0), v(0, 0), v(0, -1)],
        [v(1, -1), v(0, -1), v(0, 0), v(-1, 0)],
        [v(-1, -1), v(-1, 0), v(0, 0), v(0, 1)],
    ],
    offsets: JLSTZ_OFFSETS,
};

const J_DATA: ShapeData = ShapeData {
    color: Color::Blue,
    spawn: SPAWN,
    positions: [
        [v(-1, 1), v(-1, 0), v(0, 0), v(1, 0)],
        [v(1, 1), v(0, 1), v(0, 0), v(0, -1)],
        [v(1, -1), v(1, 0), v(0, 0), v(-1, 0)],
        [v(-1, -1), v(0, -1), v(0, 0), v(0, 1)],
    ],
    offsets: JLSTZ_OFFSETS,
};

const L_DATA: ShapeData = ShapeData {
    color: Color::Orange,
    spawn: SPAWN,
    positions: [
        [v(-1, 0), v(0, 0), v(1, 0), v(1, 1)],
        [v(0, 1), v(0, 0), v(0, -1), v(1, -1)],
        [v(1, 0), v(0, 0), v(-1, 0), v(-1, -1)],
        [v(0, -1), v(0, 0), v(0, 1), v(-1, 1)],
    ],
    offsets: JLSTZ_OFFSETS,
};

/// Look up the static data for a shape.
pub fn shape_data(shape: Shape) -> &'static ShapeData {
    match shape {
        Shape::I => &I_DATA,
        Shape::O => &O_DATA,
        Shape::T => &T_DATA,
        Shape::S => &S_DATA,
        Shape::Z => &Z_DATA,
        Shape::J => &J_DATA,
        Shape::L => &L_DATA,
    }
}
