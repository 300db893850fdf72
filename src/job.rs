//! End-to-end job orchestration.
//!
//! One strictly sequential pass: generate → transform → stats → persist.
//! There is no branching, no recovery path, and no shared state; the first
//! error aborts the run.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::JobError;
use crate::generator::{self, generate_raw};
use crate::persist::{self, Artifacts};
use crate::stats::StatsRecord;
use crate::transform::transform;

/// Parameters of the demo job.
///
/// The defaults are the contract: seed 42, shape 256×256, output directory
/// `./outputs`. The binary always runs with the defaults; tests redirect the
/// output directory.
#[derive(Debug, Clone)]
pub struct SyntheticJob {
    /// PRNG seed
    pub seed: u64,
    /// Rows of the generated array
    pub rows: usize,
    /// Columns of the generated array
    pub cols: usize,
    /// Directory receiving the three artifacts
    pub output_dir: PathBuf,
}

impl Default for SyntheticJob {
    fn default() -> Self {
        Self {
            seed: generator::DEFAULT_SEED,
            rows: generator::DEFAULT_ROWS,
            cols: generator::DEFAULT_COLS,
            output_dir: PathBuf::from("outputs"),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct JobReport {
    /// Paths of the written artifacts
    pub artifacts: Artifacts,
    /// The statistics that were written to `stats.json`
    pub stats: StatsRecord,
}

impl JobReport {
    /// The single stdout confirmation line the scheduler contract expects.
    pub fn confirmation_line(&self) -> String {
        format!(
            "Wrote {}, {}, {}",
            self.artifacts.raw.display(),
            self.artifacts.transformed.display(),
            self.artifacts.stats.display()
        )
    }
}

impl SyntheticJob {
    /// Redirect the output directory (used by tests).
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Run the job to completion.
    pub fn run(&self) -> Result<JobReport, JobError> {
        info!(seed = self.seed, rows = self.rows, cols = self.cols, "generating raw array");
        let raw = generate_raw(self.seed, self.rows, self.cols);

        info!("applying pointwise transform");
        let transformed = transform(&raw);

        info!("computing summary statistics");
        let stats = StatsRecord::from_grids(&raw, &transformed);

        info!(output_dir = %self.output_dir.display(), "writing artifacts");
        let artifacts = persist::write_artifacts(&self.output_dir, &raw, &transformed, &stats)?;

        Ok(JobReport { artifacts, stats })
    }
}
