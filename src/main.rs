//! Synthetic demo job CLI
//!
//! Entry point invoked by the cluster scheduler. Takes no arguments; writes
//! the three artifacts into `./outputs` and prints the confirmation line.

use anyhow::Result;
use synth_job::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the confirmation line the
    // scheduler parses.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("synth_job=info".parse()?))
        .init();

    let report = SyntheticJob::default().run()?;
    println!("{}", report.confirmation_line());

    Ok(())
}
