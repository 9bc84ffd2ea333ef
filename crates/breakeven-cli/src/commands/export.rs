//! Curve CSV export command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use breakeven::export::{write_curves, write_curves_file};
use breakeven::{Comparison, Inputs};

pub fn run(inputs: Inputs, output: Option<PathBuf>) -> Result<()> {
    let comparison = Comparison::new(&inputs);
    let (curve1, curve2) = (&comparison.curve1, &comparison.curve2);

    match output {
        Some(path) => {
            write_curves_file(&path, curve1, curve2)
                .with_context(|| format!("Failed to write curves to {}", path.display()))?;
            tracing::info!(path = %path.display(), rows = curve1.len(), "exported curves");
        }
        None => write_curves(io::stdout().lock(), curve1, curve2)
            .context("Failed to write curves to stdout")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven::Vehicle;

    #[test]
    fn test_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curves.csv");
        let inputs = Inputs {
            vehicle1: Vehicle::new(25_000.0, 30.0, 3.0),
            vehicle2: Vehicle::new(20_000.0, 20.0, 3.0),
            miles_driven: 2_000.0,
            miles_per_year: 15_000.0,
        };

        run(inputs, Some(path.clone())).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "miles,vehicle_1_total,vehicle_2_total");
        assert_eq!(lines.len(), 6);
    }
}
