//! Cost comparison command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use breakeven::{Comparison, Inputs, Report};

pub fn run(inputs: Inputs, json: Option<PathBuf>) -> Result<()> {
    let comparison = Comparison::new(&inputs);
    let report = Report::new(&comparison);

    print!("{report}");

    if let Some(path) = json {
        report
            .write_json(&path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote JSON report");
    }

    Ok(())
}
