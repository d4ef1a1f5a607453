//! Tetrion - the rules engine for one game session
//!
//! Orchestrates the bag, the playfield and the falling/ghost/hold/next
//! pieces. Every player command maps to exactly one operation; each
//! operation returns a `Step` holding the successor tetrion and the reward
//! earned, leaving the receiver untouched.

use crate::core::bag::Bag;
use crate::core::block::BlockIds;
use crate::core::playfield::Playfield;
use crate::core::scoring::{is_difficult, Reward};
use crate::core::tetromino::Tetromino;
use crate::core::vector::{Transform, Vector};
use crate::types::{Command, Shape};

/// The result of one tetrion operation.
#[derive(Debug, Clone)]
pub struct Step {
    pub tetrion: Tetrion,
    pub reward: Reward,
}

#[derive(Debug, Clone)]
pub struct Tetrion {
    bag: Bag,
    playfield: Playfield,
    falling_piece: Option<Tetromino>,
    ghost_piece: Option<Tetromino>,
    hold_piece: Option<Tetromino>,
    next_piece: Option<Tetromino>,
    /// Whether the last clear was difficult (tetris or T-spin), making the
    /// next difficult clear combo-eligible.
    difficult: bool,
    ids: BlockIds,
}

impl Tetrion {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: Bag::new(seed),
            playfield: Playfield::new(),
            falling_piece: None,
            ghost_piece: None,
            hold_piece: None,
            next_piece: None,
            difficult: false,
            ids: BlockIds::new(),
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Current bag seed, usable to replay the remaining piece sequence.
    pub fn seed(&self) -> u32 {
        self.bag.seed()
    }

    pub fn falling_piece(&self) -> Option<&Tetromino> {
        self.falling_piece.as_ref()
    }

    pub fn ghost_piece(&self) -> Option<&Tetromino> {
        self.ghost_piece.as_ref()
    }

    pub fn hold_piece(&self) -> Option<&Tetromino> {
        self.hold_piece.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Tetromino> {
        self.next_piece.as_ref()
    }

    /// True if the falling piece could move down one row.
    pub fn can_move_down(&self) -> bool {
        match &self.falling_piece {
            Some(piece) => {
                let playfield = &self.playfield;
                piece.can_apply(Transform::DOWN, &|cells: &[Vector; 4]| {
                    playfield.collide(cells)
                })
            }
            None => false,
        }
    }

    /// Dispatches a player command to the matching operation.
    pub fn apply(&self, command: Command, level: u32) -> Step {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveDown => self.move_down(),
            Command::RotateLeft => self.rotate_left(),
            Command::RotateRight => self.rotate_right(),
            Command::SoftDrop => self.soft_drop(level),
            Command::FirmDrop => self.firm_drop(level),
            Command::HardDrop => self.hard_drop(level),
            Command::Hold => self.hold(),
        }
    }

    /// Spawns a new falling piece from the bag. If the spawn position
    /// collides (the board topped out), the piece is not installed and the
    /// tetrion comes back unchanged - the caller reads the missing falling
    /// piece as the game-over signal.
    pub fn spawn(&self) -> Step {
        let (shape, bag) = self.bag.shift();
        let mut next = self.clone();
        let piece = Tetromino::new(shape, &mut next.ids).spawn();

        if self.playfield.collide(&piece.cells()) {
            return Step {
                tetrion: self.clone(),
                reward: Reward::none(),
            };
        }

        let ghost = {
            let playfield = &self.playfield;
            piece.drop(&|cells: &[Vector; 4]| playfield.collide(cells))
        };
        next.next_piece = Some(Tetromino::new(bag.next(), &mut next.ids));
        next.bag = bag;
        next.falling_piece = Some(piece);
        next.ghost_piece = Some(ghost);

        Step {
            tetrion: next,
            reward: Reward::none(),
        }
    }

    /// Stashes the falling piece in the hold slot, spawning the previously
    /// held piece (or a fresh one if the slot was empty). A piece can only
    /// be held once per lifetime; a second hold is a no-op.
    pub fn hold(&self) -> Step {
        let Some(falling) = self.falling_piece else {
            return self.noop();
        };
        if falling.was_held() {
            return self.noop();
        }

        let mut next = self.clone();
        match self.hold_piece {
            Some(held) => {
                let piece = held.spawn();
                let ghost = {
                    let playfield = &self.playfield;
                    piece.drop(&|cells: &[Vector; 4]| playfield.collide(cells))
                };
                next.hold_piece = Some(falling.hold());
                next.falling_piece = Some(piece);
                next.ghost_piece = Some(ghost);
                Step {
                    tetrion: next,
                    reward: Reward::none(),
                }
            }
            None => {
                next.hold_piece = Some(falling.hold());
                next.falling_piece = None;
                next.ghost_piece = None;
                let step = next.spawn();
                // Hold pieces respawn later, so hold itself never rewards.
                Step {
                    tetrion: step.tetrion,
                    reward: Reward::none(),
                }
            }
        }
    }

    pub fn move_left(&self) -> Step {
        self.transformed(Transform::LEFT)
    }

    pub fn move_right(&self) -> Step {
        self.transformed(Transform::RIGHT)
    }

    pub fn move_down(&self) -> Step {
        self.transformed(Transform::DOWN)
    }

    pub fn rotate_left(&self) -> Step {
        self.transformed(Transform::ROTATE_CCW)
    }

    pub fn rotate_right(&self) -> Step {
        self.transformed(Transform::ROTATE_CW)
    }

    /// Moves down one row, rewarding the step when it is accepted.
    pub fn soft_drop(&self, level: u32) -> Step {
        let before = self.falling_piece.map(|p| p.transform());
        let next = self.transform(Transform::DOWN);
        let moved = next.falling_piece.map(|p| p.transform()) != before;
        Step {
            tetrion: next,
            reward: if moved {
                Reward::soft_drop(level)
            } else {
                Reward::none()
            },
        }
    }

    /// Drops the falling piece to its lowest legal position without
    /// locking it.
    pub fn firm_drop(&self, level: u32) -> Step {
        let Some(falling) = self.falling_piece else {
            return self.noop();
        };

        let dropped = {
            let playfield = &self.playfield;
            falling.drop(&|cells: &[Vector; 4]| playfield.collide(cells))
        };
        let distance = (falling.transform().vector.y - dropped.transform().vector.y) as u32;

        let mut next = self.clone();
        next.falling_piece = Some(dropped);
        next.ghost_piece = Some(dropped);
        Step {
            tetrion: next,
            reward: Reward::firm_drop(distance, level),
        }
    }

    /// Drops the falling piece to its lowest legal position and locks it
    /// immediately.
    pub fn hard_drop(&self, level: u32) -> Step {
        let Some(falling) = self.falling_piece else {
            return self.noop();
        };

        let dropped = {
            let playfield = &self.playfield;
            falling.drop(&|cells: &[Vector; 4]| playfield.collide(cells))
        };
        let distance = (falling.transform().vector.y - dropped.transform().vector.y) as u32;
        let (playfield, cleared) = self.playfield.lock(&dropped.blocks()).clear_lines();

        // The final transform is the drop translation, so a hard drop never
        // scores as a T-spin.
        let difficult = is_difficult(cleared, false);
        let combo = difficult && self.difficult;
        let reward = Reward::hard_drop(distance, cleared, level, combo);

        let mut next = self.clone();
        next.playfield = playfield;
        next.falling_piece = None;
        next.ghost_piece = None;
        if cleared > 0 {
            next.difficult = difficult;
        }
        Step {
            tetrion: next,
            reward,
        }
    }

    /// Locks the falling piece at its current position and clears any
    /// completed rows. Called when the lock delay expires.
    ///
    /// # Panics
    ///
    /// Panics if the falling piece collides with the playfield; the state
    /// machine must never lock a colliding piece.
    pub fn lock(&self, level: u32) -> Step {
        let Some(falling) = self.falling_piece else {
            return self.noop();
        };
        if self.playfield.collide(&falling.cells()) {
            panic!("cannot lock a colliding falling piece");
        }

        let (tspin, kick) = self.tspin(&falling);
        let (playfield, cleared) = self.playfield.lock(&falling.blocks()).clear_lines();

        let difficult = is_difficult(cleared, tspin);
        let combo = difficult && self.difficult;
        let reward = Reward::clear_lines(cleared, tspin, kick, level, combo);

        let mut next = self.clone();
        next.playfield = playfield;
        next.falling_piece = None;
        next.ghost_piece = None;
        if cleared > 0 {
            next.difficult = difficult;
        }
        Step {
            tetrion: next,
            reward,
        }
    }

    /// Applies a transform to the falling piece, recomputing the ghost
    /// piece if it actually moved.
    fn transform(&self, t: Transform) -> Tetrion {
        let Some(falling) = self.falling_piece else {
            return self.clone();
        };

        let playfield = &self.playfield;
        let collide = |cells: &[Vector; 4]| playfield.collide(cells);
        let moved = falling.apply_transform(t, &collide);
        if moved.transform() == falling.transform() {
            return self.clone();
        }

        let mut next = self.clone();
        next.ghost_piece = Some(moved.drop(&collide));
        next.falling_piece = Some(moved);
        next
    }

    fn transformed(&self, t: Transform) -> Step {
        Step {
            tetrion: self.transform(t),
            reward: Reward::none(),
        }
    }

    fn noop(&self) -> Step {
        Step {
            tetrion: self.clone(),
            reward: Reward::none(),
        }
    }

    /// 3-corner T-spin detection: the piece is a T, its last applied
    /// transform was a rotation, and at least 3 of the pivot's diagonal
    /// neighbours hold locked blocks. The second flag reports whether the
    /// rotation was kick-assisted.
    fn tspin(&self, piece: &Tetromino) -> (bool, bool) {
        if piece.shape() != Shape::T {
            return (false, false);
        }
        let Some(last) = piece.last_transform() else {
            return (false, false);
        };
        if !last.is_rotation() {
            return (false, false);
        }

        let pivot = piece.transform().vector;
        let corners = [
            Vector::new(pivot.x - 1, pivot.y - 1),
            Vector::new(pivot.x + 1, pivot.y - 1),
            Vector::new(pivot.x - 1, pivot.y + 1),
            Vector::new(pivot.x + 1, pivot.y + 1),
        ];
        let occupied = self.playfield.blocks_at(&corners).len();
        (occupied >= 3, last.is_translation())
    }
}
