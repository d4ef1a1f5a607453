//! Tetrion - a pure, deterministic Tetris rules engine
//!
//! This crate contains the complete rules of the game and nothing else: no
//! rendering, no input handling, no clock. The outer driver feeds elapsed
//! time and at most one command per tick, and receives a fresh immutable
//! snapshot back. Same seed, same commands, same game.
//!
//! # Module Structure
//!
//! - [`core::vector`]: 2D vectors and transforms (translation + quarter-turn rotation)
//! - [`core::srs`]: static shape table with SRS wall-kick offset data
//! - [`core::block`]: identity-carrying playfield blocks
//! - [`core::bag`]: 7-bag randomizer over a seeded generator
//! - [`core::tetromino`]: a positioned, rotated shape with kick-aware movement
//! - [`core::playfield`]: the 10x20 board (plus spawn buffer) with line clearing
//! - [`core::scoring`]: rewards, combo scaling and level progression
//! - [`core::tetrion`]: one operation per player command, plus spawn and lock
//! - [`core::game`]: the outer timed state machine driving the tetrion
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of 7 pieces is a permutation of all shapes
//! - **SRS Rotation**: offset-form wall kicks for all pieces, O included
//! - **T-Spin Detection**: 3-corner rule, with a reduced table for kicked spins
//! - **Combo**: consecutive difficult clears (tetris or T-spin) scale 3/2
//! - **Ghost, Hold, Next**: dropped preview, once-per-piece hold, bag preview
//!
//! # Value Semantics
//!
//! Every operation takes `&self` and returns a new value. Nothing in the
//! engine is mutated in place, so a snapshot handed to a renderer stays
//! valid forever and block identities can be diffed across frames.
//!
//! # Example
//!
//! ```
//! use tetrion::core::Game;
//! use tetrion::types::Command;
//!
//! let game = Game::new(42);
//! // 100ms with no input: the spawn delay expires and a piece appears.
//! let game = game.tick(100, None);
//! let game = game.tick(0, Some(Command::HardDrop));
//! assert!(game.progress().score > 0);
//! ```

pub mod core;
pub mod types;

pub use crate::core::{Game, Progress, Reward, Step, Tetrion};
pub use crate::types::{Command, Message, Phase, Shape};
