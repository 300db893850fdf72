//! Seeded pseudo-random array generation.
//!
//! Provides [`JobRng`], a seeded PRNG wrapper offering reproducible
//! standard-normal sampling, and [`generate_raw`], which produces the job's
//! raw array. The same seed always yields the same array, which is what makes
//! the job usable as a scheduler smoke test: the first output artifact is
//! byte-for-byte reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::grid::Grid;

/// Seed used by the demo job.
pub const DEFAULT_SEED: u64 = 42;

/// Rows in the generated array.
pub const DEFAULT_ROWS: usize = 256;

/// Columns in the generated array.
pub const DEFAULT_COLS: usize = 256;

/// Seeded random number generator for the demo job.
///
/// Wraps `rand::StdRng` with the seed retained for logging. The same seed
/// always produces the same sequence of variates.
pub struct JobRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl JobRng {
    /// Creates a new RNG instance initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates narrowed to `f32`.
    ///
    /// Variates are drawn in `f64` and then narrowed, so the stream consumed
    /// from the PRNG is independent of the storage dtype.
    #[inline]
    pub fn fill_normal_f32(&mut self, buffer: &mut [f32]) {
        for value in buffer.iter_mut() {
            let draw: f64 = StandardNormal.sample(&mut self.inner);
            *value = draw as f32;
        }
    }
}

/// Generate the raw array: `rows × cols` standard-normal draws from the
/// given seed, stored as `f32` in row-major order.
pub fn generate_raw(seed: u64, rows: usize, cols: usize) -> Grid {
    let mut rng = JobRng::from_seed(seed);
    let mut grid = Grid::zeros(rows, cols);
    rng.fill_normal_f32(grid.as_mut_slice());
    tracing::debug!(seed, rows, cols, "generated raw array");
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_identical_sequences() {
        let mut a = JobRng::from_seed(12345);
        let mut b = JobRng::from_seed(12345);
        for _ in 0..100 {
            assert_eq!(a.gen_normal(), b.gen_normal());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = JobRng::from_seed(1);
        let mut b = JobRng::from_seed(2);
        let draws_a: Vec<f64> = (0..16).map(|_| a.gen_normal()).collect();
        let draws_b: Vec<f64> = (0..16).map(|_| b.gen_normal()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_seed_accessor() {
        let rng = JobRng::from_seed(DEFAULT_SEED);
        assert_eq!(rng.seed(), 42);
    }

    #[test]
    fn test_generate_raw_is_deterministic() {
        let first = generate_raw(DEFAULT_SEED, DEFAULT_ROWS, DEFAULT_COLS);
        let second = generate_raw(DEFAULT_SEED, DEFAULT_ROWS, DEFAULT_COLS);
        assert_eq!(first, second);
        assert_eq!(first.shape(), (256, 256));
    }

    #[test]
    fn test_generated_values_are_standard_normal_ish() {
        let grid = generate_raw(DEFAULT_SEED, DEFAULT_ROWS, DEFAULT_COLS);
        let n = grid.len() as f64;

        let mean: f64 = grid.as_slice().iter().map(|&x| f64::from(x)).sum::<f64>() / n;
        let var: f64 = grid
            .as_slice()
            .iter()
            .map(|&x| {
                let d = f64::from(x) - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        // 65536 samples: the sample mean has std error 1/256, the sample
        // std is similarly tight. Loose bounds catch gross distribution bugs.
        assert!(mean.abs() < 0.02, "mean {} too far from 0", mean);
        assert!((var.sqrt() - 1.0).abs() < 0.02, "std {} too far from 1", var.sqrt());
    }

    #[test]
    fn test_all_generated_values_finite() {
        let grid = generate_raw(DEFAULT_SEED, 32, 32);
        assert!(grid.as_slice().iter().all(|x| x.is_finite()));
    }
}
