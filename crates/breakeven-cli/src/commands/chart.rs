//! Cost chart command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use breakeven::{Chart, ChartConfig, Comparison, Inputs};

pub fn run(inputs: Inputs, output: PathBuf, width: u32, height: u32) -> Result<()> {
    let comparison = Comparison::new(&inputs);
    let config = ChartConfig::default().with_dimensions(width, height);
    let chart = Chart::from_comparison(&comparison, &config);

    tracing::debug!(commands = chart.commands.len(), "chart laid out");

    std::fs::write(&output, chart.to_svg())
        .with_context(|| format!("Failed to write chart to {}", output.display()))?;

    println!("Chart written to: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven::Vehicle;

    #[test]
    fn test_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let inputs = Inputs {
            vehicle1: Vehicle::new(30_000.0, 40.0, 3.5),
            vehicle2: Vehicle::new(35_000.0, 25.0, 3.5),
            miles_driven: 200_000.0,
            miles_per_year: 15_000.0,
        };

        run(inputs, path.clone(), 640, 400).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 640 400""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.svg");
        let inputs = Inputs {
            vehicle1: Vehicle::new(1.0, 1.0, 1.0),
            vehicle2: Vehicle::new(2.0, 1.0, 1.0),
            miles_driven: 1_000.0,
            miles_per_year: 15_000.0,
        };

        let err = run(inputs, path, 800, 500).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write chart"));
    }
}
