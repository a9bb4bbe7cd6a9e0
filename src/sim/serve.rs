//! Serve randomness
//!
//! The only nondeterminism in a match is the direction of each serve. It is
//! drawn through `ServeSource` so replays and tests can pin it down.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::SERVE_SPEED_Y;

pub trait ServeSource {
    /// Either `1.0` or `-1.0`
    fn next_sign(&mut self) -> f32;

    /// Fresh vertical serve speed, `±SERVE_SPEED_Y`
    fn next_vertical_velocity(&mut self) -> f32 {
        SERVE_SPEED_Y * self.next_sign()
    }
}

impl<S: ServeSource + ?Sized> ServeSource for &mut S {
    fn next_sign(&mut self) -> f32 {
        (**self).next_sign()
    }

    fn next_vertical_velocity(&mut self) -> f32 {
        (**self).next_vertical_velocity()
    }
}

/// Seeded PCG source; same seed, same serves
#[derive(Debug, Clone)]
pub struct ServeRng {
    rng: Pcg32,
}

impl ServeRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl ServeSource for ServeRng {
    fn next_sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }
}

/// Replays a fixed cycle of signs
#[derive(Debug, Clone)]
pub struct ScriptedServe {
    signs: Vec<f32>,
    cursor: usize,
}

impl ScriptedServe {
    /// Non-negative entries map to `1.0`, negative entries to `-1.0`.
    /// An empty script always yields `1.0`.
    pub fn new(signs: impl IntoIterator<Item = f32>) -> Self {
        let signs = signs
            .into_iter()
            .map(|s| if s < 0.0 { -1.0 } else { 1.0 })
            .collect();
        Self { signs, cursor: 0 }
    }

    /// Every draw returns `sign`
    pub fn constant(sign: f32) -> Self {
        Self::new([sign])
    }
}

impl ServeSource for ScriptedServe {
    fn next_sign(&mut self) -> f32 {
        if self.signs.is_empty() {
            return 1.0;
        }
        let sign = self.signs[self.cursor % self.signs.len()];
        self.cursor = (self.cursor + 1) % self.signs.len();
        sign
    }
}
