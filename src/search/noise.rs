use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Source of the per-evaluation "clear thought" perturbation. `sample`
/// returns a value in [-1, 1].
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

pub struct RandomNoise {
    rng: SmallRng,
    dist: Uniform<f64>,
}

impl RandomNoise {
    pub fn seeded(seed: u64) -> Self { Self::from_rng(SmallRng::seed_from_u64(seed)) }

    pub fn from_entropy() -> Self { Self::from_rng(SmallRng::from_entropy()) }

    fn from_rng(rng: SmallRng) -> Self { Self { rng, dist: Uniform::new_inclusive(-1.0, 1.0) } }
}

impl NoiseSource for RandomNoise {
    fn sample(&mut self) -> f64 { self.dist.sample(&mut self.rng) }
}

/// Always returns the same draw. `PinnedNoise(0.0)` makes every factor 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinnedNoise(pub f64);

impl NoiseSource for PinnedNoise {
    fn sample(&mut self) -> f64 { self.0.clamp(-1.0, 1.0) }
}

/// Multiplier applied to a heuristic score: `1 + (1 - clear_thought) * u`.
pub fn clear_thought_factor<N: NoiseSource + ?Sized>(noise: &mut N, clear_thought: f64) -> f64 {
    1.0 + (1.0 - clear_thought) * noise.sample()
}
