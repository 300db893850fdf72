//! Summary statistics for the output arrays.
//!
//! Field order matters: `stats.json` is compared against golden files, so
//! both structs keep their serde field order fixed (`raw` before
//! `transformed`; within each, `mean`, `std`, `min`, `max`).

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Scalar summary of one array, all values in double precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrayStats {
    /// Arithmetic mean of all elements
    pub mean: f64,
    /// Population standard deviation (divide by N, not N-1)
    pub std: f64,
    /// Smallest element
    pub min: f64,
    /// Largest element
    pub max: f64,
}

impl ArrayStats {
    /// Compute statistics over every element of the grid.
    ///
    /// Accumulation is done in `f64` regardless of the `f32` storage dtype.
    /// Uses the two-pass formula for the standard deviation.
    pub fn compute(grid: &Grid) -> Self {
        let n = grid.len() as f64;
        let values = grid.as_slice();

        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in values {
            let x = f64::from(x);
            sum += x;
            min = min.min(x);
            max = max.max(x);
        }
        let mean = sum / n;

        let sum_sq_dev: f64 = values
            .iter()
            .map(|&x| {
                let d = f64::from(x) - mean;
                d * d
            })
            .sum();
        let std = (sum_sq_dev / n).sqrt();

        Self { mean, std, min, max }
    }
}

/// The two-array stats document written to `stats.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Statistics of the generated array
    pub raw: ArrayStats,
    /// Statistics of the transformed array
    pub transformed: ArrayStats,
}

impl StatsRecord {
    /// Build the record from the two arrays.
    pub fn from_grids(raw: &Grid, transformed: &Grid) -> Self {
        Self {
            raw: ArrayStats::compute(raw),
            transformed: ArrayStats::compute(transformed),
        }
    }
}
