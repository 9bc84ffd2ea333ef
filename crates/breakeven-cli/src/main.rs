//! breakeven CLI - Vehicle cost comparison tool

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use breakeven::input::{Inputs, Scenario, parse_number};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Compare the total cost of owning two vehicles.
#[derive(Parser)]
#[command(name = "breakeven")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cost summary and break-even point
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Also write the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Draw the cost chart as SVG
    Chart {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output SVG file
        #[arg(short, long, default_value = "breakeven.svg")]
        output: PathBuf,

        /// Chart width in pixels
        #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },

    /// Export the sampled cost curves as CSV
    Export {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output CSV file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Vehicle and mileage parameters shared by every subcommand.
///
/// Values are taken as text and parsed leniently, the same way a form field
/// would be. Flags override values loaded from `--scenario`.
#[derive(Args, Debug, Default)]
struct ScenarioArgs {
    /// JSON scenario file with both vehicles and mileage settings
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Vehicle 1 purchase price ($)
    #[arg(long)]
    cost1: Option<String>,

    /// Vehicle 1 fuel economy (mpg)
    #[arg(long)]
    mpg1: Option<String>,

    /// Vehicle 1 gas price ($/gal)
    #[arg(long)]
    gas1: Option<String>,

    /// Vehicle 2 purchase price ($)
    #[arg(long)]
    cost2: Option<String>,

    /// Vehicle 2 fuel economy (mpg)
    #[arg(long)]
    mpg2: Option<String>,

    /// Vehicle 2 gas price ($/gal)
    #[arg(long)]
    gas2: Option<String>,

    /// Total miles to compare over
    #[arg(long, env = "BREAKEVEN_MILES")]
    miles: Option<String>,

    /// Miles driven per year
    #[arg(long, env = "BREAKEVEN_MILES_PER_YEAR")]
    miles_per_year: Option<String>,
}

impl ScenarioArgs {
    fn resolve(&self) -> Result<Inputs> {
        let mut scenario = match &self.scenario {
            Some(path) => Scenario::load(path)
                .with_context(|| format!("Failed to load scenario {}", path.display()))?,
            None => Scenario::default(),
        };

        let overrides = [
            (&self.cost1, &mut scenario.vehicle1.cost),
            (&self.mpg1, &mut scenario.vehicle1.mpg),
            (&self.gas1, &mut scenario.vehicle1.gas_price),
            (&self.cost2, &mut scenario.vehicle2.cost),
            (&self.mpg2, &mut scenario.vehicle2.mpg),
            (&self.gas2, &mut scenario.vehicle2.gas_price),
            (&self.miles, &mut scenario.miles_driven),
            (&self.miles_per_year, &mut scenario.miles_per_year),
        ];
        for (text, field) in overrides {
            if let Some(text) = text {
                *field = parse_number(text);
            }
        }

        let inputs = scenario.resolve().context("Invalid comparison inputs")?;
        tracing::debug!(?inputs, "resolved inputs");
        Ok(inputs)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compare { scenario, json } => commands::compare::run(scenario.resolve()?, json),
        Commands::Chart {
            scenario,
            output,
            width,
            height,
        } => commands::chart::run(scenario.resolve()?, output, width, height),
        Commands::Export { scenario, output } => {
            commands::export::run(scenario.resolve()?, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_args(args: &[&str]) -> ScenarioArgs {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Commands::Compare { scenario, .. }
            | Commands::Chart { scenario, .. }
            | Commands::Export { scenario, .. } => scenario,
        }
    }

    #[test]
    fn test_parse_chart_args() {
        let cli = Cli::try_parse_from([
            "breakeven", "-v", "chart", "--cost1", "25000", "--width", "1024", "-o", "out.svg",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Chart {
                scenario,
                output,
                width,
                height,
            } => {
                assert_eq!(scenario.cost1.as_deref(), Some("25000"));
                assert_eq!(output, PathBuf::from("out.svg"));
                assert_eq!(width, 1024);
                assert_eq!(height, 500);
            }
            _ => panic!("expected chart subcommand"),
        }
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(Cli::try_parse_from(["breakeven", "chart", "--width", "0"]).is_err());
    }

    #[test]
    fn test_flags_resolve_with_defaults() {
        let args = scenario_args(&[
            "breakeven", "compare", "--cost1", "25000", "--mpg1", "30", "--gas1", "3", "--cost2",
            "20,000", "--mpg2", "abc", "--miles", "100000", "--miles-per-year", "0",
        ]);
        let inputs = args.resolve().unwrap();

        assert_eq!(inputs.vehicle1.cost, 25_000.0);
        // Leading-number parsing stops at the comma.
        assert_eq!(inputs.vehicle2.cost, 20.0);
        assert_eq!(inputs.vehicle2.mpg, 1.0);
        assert_eq!(inputs.miles_driven, 100_000.0);
        assert_eq!(inputs.miles_per_year, 15_000.0);
    }

    #[test]
    fn test_flags_override_scenario_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        std::fs::write(
            &path,
            r#"{"vehicle1": {"cost": 30000, "mpg": 40, "gas_price": 3.5},
                "vehicle2": {"cost": 35000, "mpg": 25, "gas_price": 3.5},
                "miles_driven": 200000}"#,
        )
        .unwrap();

        let args = scenario_args(&[
            "breakeven",
            "export",
            "--scenario",
            path.to_str().unwrap(),
            "--mpg2",
            "50",
        ]);
        let inputs = args.resolve().unwrap();

        assert_eq!(inputs.vehicle1.mpg, 40.0);
        assert_eq!(inputs.vehicle2.cost, 35_000.0);
        assert_eq!(inputs.vehicle2.mpg, 50.0);
    }

    #[test]
    fn test_negative_input_is_an_error() {
        let args = scenario_args(&["breakeven", "compare", "--gas1=-3"]);
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_missing_scenario_file_is_an_error() {
        let args = ScenarioArgs {
            scenario: Some(PathBuf::from("/nonexistent/scenario.json")),
            ..ScenarioArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
