//! Artifact writing.
//!
//! One call writes everything the scheduler inspects: both NPY arrays and the
//! JSON stats document. Directory creation is idempotent; every write error
//! propagates to the caller unchanged, there is no retry or partial-failure
//! recovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::JobError;
use crate::grid::Grid;
use crate::npy;
use crate::stats::StatsRecord;

/// Filename of the raw array artifact.
pub const RAW_FILENAME: &str = "array_raw.npy";

/// Filename of the transformed array artifact.
pub const TRANSFORMED_FILENAME: &str = "array_transformed.npy";

/// Filename of the stats artifact.
pub const STATS_FILENAME: &str = "stats.json";

/// Paths of the three written artifacts.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Path of `array_raw.npy`
    pub raw: PathBuf,
    /// Path of `array_transformed.npy`
    pub transformed: PathBuf,
    /// Path of `stats.json`
    pub stats: PathBuf,
}

/// Write all three artifacts into `out_dir`, creating it (and any missing
/// parents) first. Existing files are overwritten.
pub fn write_artifacts(
    out_dir: &Path,
    raw: &Grid,
    transformed: &Grid,
    stats: &StatsRecord,
) -> Result<Artifacts, JobError> {
    fs::create_dir_all(out_dir)?;

    let artifacts = Artifacts {
        raw: out_dir.join(RAW_FILENAME),
        transformed: out_dir.join(TRANSFORMED_FILENAME),
        stats: out_dir.join(STATS_FILENAME),
    };

    npy::write_f32(&artifacts.raw, raw)?;
    info!(path = %artifacts.raw.display(), "raw array written");

    npy::write_f32(&artifacts.transformed, transformed)?;
    info!(path = %artifacts.transformed.display(), "transformed array written");

    // 2-space indentation, stable key order from the struct field order
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(&artifacts.stats, json)?;
    info!(path = %artifacts.stats.display(), "stats written");

    Ok(artifacts)
}
