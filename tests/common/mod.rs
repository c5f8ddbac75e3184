#![allow(dead_code)]

use std::collections::VecDeque;

use spaceship_game::RandomSource;

/// Replays a fixed sequence of rolls; yields 1 (no spawn) once exhausted.
pub struct Scripted {
    rolls: VecDeque<u32>,
}

impl Scripted {
    pub fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }

    /// A source that never spawns anything.
    pub fn quiet() -> Self {
        Self::new(&[])
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for Scripted {
    fn next_below(&mut self, bound: u32) -> u32 {
        let roll = self.rolls.pop_front().unwrap_or(1);
        assert!(roll < bound, "scripted roll {roll} out of 0..{bound}");
        roll
    }
}
