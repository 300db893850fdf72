//! # Synthetic Array-Transform Demo Job
//!
//! A minimal synthetic payload for smoke-testing cluster job schedulers.
//! The job generates a deterministic pseudo-random 256×256 `f32` array,
//! applies a pointwise nonlinear transform, and writes three artifacts to
//! `./outputs`:
//!
//! - `array_raw.npy`: the generated array (NPY v1.0, `<f4`, C order)
//! - `array_transformed.npy`: `tanh(x) + 0.1 * sin(x)`, elementwise
//! - `stats.json`: mean / std / min / max summary for both arrays
//!
//! The scheduler invokes the `synth-job` binary as a subprocess with no
//! arguments and inspects the exit code and the `outputs/` directory. The
//! generator is seeded with a fixed literal, so `array_raw.npy` is
//! byte-identical across runs.

pub mod error;
pub mod generator;
pub mod grid;
pub mod job;
pub mod npy;
pub mod persist;
pub mod stats;
pub mod transform;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::JobError;
    pub use crate::generator::{generate_raw, JobRng};
    pub use crate::grid::Grid;
    pub use crate::job::{JobReport, SyntheticJob};
    pub use crate::persist::Artifacts;
    pub use crate::stats::{ArrayStats, StatsRecord};
    pub use crate::transform::transform;
}
