//! Game - the outer timed state machine
//!
//! Drives the tetrion through the spawning/idle/locking cycle using three
//! timers: the spawn delay, the lock delay and the level-derived gravity
//! delay. `tick` is a pure step function: each call takes the previous
//! snapshot plus elapsed time and at most one command, and returns the
//! successor snapshot.

use crate::core::scoring::{Progress, Reward};
use crate::core::tetrion::Tetrion;
use crate::types::{
    Command, Phase, GRAVITY_BASE, GRAVITY_COEFF, GRAVITY_FLOOR_MS, LOCK_DELAY_MS, SPAWN_DELAY_MS,
};

/// Milliseconds a piece takes to fall one row at the given level.
///
/// Approximates the classic gravity curve: ~1000ms at level 1, dropping
/// non-linearly to the floor at level 20.
pub fn gravity_delay(level: u32) -> u64 {
    let level = level.max(1) as f64;
    let delay = (GRAVITY_COEFF * level.ln() + GRAVITY_BASE).round() as i64;
    delay.max(GRAVITY_FLOOR_MS as i64) as u64
}

#[derive(Debug, Clone)]
pub struct Game {
    time: u64,
    phase: Phase,
    tetrion: Tetrion,
    progress: Progress,
    /// Reward earned by the most recent tick, for transient messaging.
    reward: Reward,
    spawn_timer: u64,
    lock_timer: u64,
    gravity_timer: u64,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        Self {
            time: 0,
            phase: Phase::Spawning,
            tetrion: Tetrion::new(seed),
            progress: Progress::new(),
            reward: Reward::none(),
            spawn_timer: 0,
            lock_timer: 0,
            gravity_timer: 0,
        }
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tetrion(&self) -> &Tetrion {
        &self.tetrion
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn reward(&self) -> Reward {
        self.reward
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Current bag seed, for restarting with the same piece sequence.
    pub fn seed(&self) -> u32 {
        self.tetrion.seed()
    }

    pub fn is_spawning(&self) -> bool {
        self.phase == Phase::Spawning
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_locking(&self) -> bool {
        self.phase == Phase::Locking
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Current gravity delay, derived from the progress level.
    pub fn gravity_delay(&self) -> u64 {
        gravity_delay(self.progress.level())
    }

    /// Advances the clock by `delta` milliseconds and fires at most one
    /// phase action, in priority order: spawn, gravity, lock, command.
    pub fn tick(&self, delta: u64, command: Option<Command>) -> Game {
        let mut next = self.clone();
        next.time = self.time + delta;
        next.reward = Reward::none();

        match self.phase {
            Phase::Spawning if next.time - self.spawn_timer >= SPAWN_DELAY_MS => {
                let step = self.tetrion.spawn();
                match step.tetrion.falling_piece() {
                    Some(_) => {
                        next.tetrion = step.tetrion;
                        next.phase = Phase::Idle;
                        next.gravity_timer = next.time;
                    }
                    // Topped out: the spawn did not install a piece.
                    None => next.phase = Phase::Finished,
                }
                next
            }
            Phase::Idle if next.time - self.gravity_timer >= self.gravity_delay() => {
                if self.tetrion.can_move_down() {
                    next.tetrion = self.tetrion.move_down().tetrion;
                    next.gravity_timer = next.time;
                } else {
                    next.phase = Phase::Locking;
                    next.lock_timer = next.time;
                }
                next
            }
            Phase::Locking if next.time - self.lock_timer >= LOCK_DELAY_MS => {
                let step = self.tetrion.lock(self.progress.level());
                next.tetrion = step.tetrion;
                next.progress = self.progress.add(&step.reward);
                next.reward = step.reward;
                next.phase = Phase::Spawning;
                next.spawn_timer = next.time;
                next
            }
            Phase::Idle | Phase::Locking => {
                let Some(command) = command else {
                    return next;
                };
                let step = self.tetrion.apply(command, self.progress.level());
                next.progress = self.progress.add(&step.reward);
                next.reward = step.reward;
                if step.tetrion.falling_piece().is_none() {
                    next.phase = Phase::Spawning;
                    next.spawn_timer = next.time;
                } else if self.phase == Phase::Locking && step.tetrion.can_move_down() {
                    // A kick freed the piece, so the lock delay restarts
                    // from a fresh gravity cycle.
                    next.phase = Phase::Idle;
                    next.gravity_timer = next.time;
                }
                next.tetrion = step.tetrion;
                next
            }
            // Spawning before the delay elapses, or finished: clock only.
            _ => next,
        }
    }
}
