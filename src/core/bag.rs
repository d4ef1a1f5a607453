//! Bag - 7-bag random shape generation
//!
//! A shuffled-without-replacement sequence over the seven shapes. When the
//! bag runs out it is refilled with a fresh random permutation, so a run of
//! any 7 consecutive draws from one bag contains every shape exactly once.
//!
//! Randomness comes from a small seeded LCG with a Fisher-Yates shuffle,
//! which keeps piece sequences fully deterministic per seed for testing.

use arrayvec::ArrayVec;

use crate::types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current RNG state (for restarting a session with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// The bag of upcoming shapes. Invariant: never empty.
#[derive(Debug, Clone)]
pub struct Bag {
    shapes: ArrayVec<Shape, 7>,
    rng: SimpleRng,
}

impl Bag {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let shapes = refill(&mut rng);
        Self { shapes, rng }
    }

    /// Peek the next shape without consuming it.
    pub fn next(&self) -> Shape {
        self.shapes[0]
    }

    /// Removes the next shape from the bag. If that empties the bag, the
    /// returned bag holds a fresh random permutation of all seven shapes.
    pub fn shift(&self) -> (Shape, Bag) {
        let mut bag = self.clone();
        let shape = bag.shapes.remove(0);
        if bag.shapes.is_empty() {
            bag.shapes = refill(&mut bag.rng);
        }
        (shape, bag)
    }

    /// Current RNG state, usable as a seed to replay this session.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Shapes remaining in the current permutation.
    pub fn remaining(&self) -> &[Shape] {
        &self.shapes
    }
}

fn refill(rng: &mut SimpleRng) -> ArrayVec<Shape, 7> {
    let mut shapes = ArrayVec::from(Shape::ALL);
    rng.shuffle(&mut shapes);
    shapes
}
