//! The rules engine: pure, deterministic Tetris state and its operations.

pub mod bag;
pub mod block;
pub mod game;
pub mod playfield;
pub mod scoring;
pub mod srs;
pub mod tetrion;
pub mod tetromino;
pub mod vector;

pub use bag::Bag;
pub use block::{Block, BlockId, BlockIds};
pub use game::{gravity_delay, Game};
pub use playfield::Playfield;
pub use scoring::{Progress, Reward};
pub use srs::{shape_data, ShapeData};
pub use tetrion::{Step, Tetrion};
pub use tetromino::{Collide, Tetromino};
pub use vector::{Transform, Vector};
