//! Presentation of comparison results.
//!
//! [`Report`] is the outward-facing view of a [`Comparison`]: it renders as
//! plain text through [`Display`](std::fmt::Display) and serializes to JSON.
//! Non-finite numbers (cost per mile at zero miles) print as
//! [`NOT_AVAILABLE`](crate::format::NOT_AVAILABLE) in text and as `null` in
//! JSON.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::compare::{Comparison, Verdict, VehicleSlot};
use crate::cost::{Summary, Vehicle};
use crate::error::Result;
use crate::format;

/// One vehicle's inputs and derived figures.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    /// Which vehicle this is.
    pub slot: VehicleSlot,
    /// Parameters the figures were computed from.
    pub vehicle: Vehicle,
    /// Cost figures at the mileage horizon.
    pub summary: Summary,
}

/// Break-even point, optionally expressed in years of driving.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreakEven {
    /// Break-even mileage.
    pub miles: f64,
    /// Total cost of either vehicle at that mileage.
    pub cost: f64,
    /// Years of driving to reach it.
    pub years: Option<f64>,
}

/// Results of one comparison, ready to show or save.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Mileage horizon.
    pub miles_driven: f64,
    /// Yearly mileage used for the years figures.
    pub miles_per_year: f64,
    /// Both vehicles, first then second.
    pub vehicles: [VehicleReport; 2],
    /// Where the cost lines cross, if they do within the horizon.
    pub break_even: Option<BreakEven>,
    /// Overall outcome.
    pub verdict: Verdict,
    /// When this report was generated.
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Builds the report for `comparison`, stamped with the current time.
    #[must_use]
    pub fn new(comparison: &Comparison) -> Self {
        let inputs = &comparison.inputs;
        let break_even = comparison.intersection.map(|point| BreakEven {
            miles: point.miles,
            cost: point.cost,
            years: comparison.break_even_years(),
        });

        Self {
            miles_driven: inputs.miles_driven,
            miles_per_year: inputs.miles_per_year,
            vehicles: [
                VehicleReport {
                    slot: VehicleSlot::First,
                    vehicle: inputs.vehicle1,
                    summary: comparison.summary1,
                },
                VehicleReport {
                    slot: VehicleSlot::Second,
                    vehicle: inputs.vehicle2,
                    summary: comparison.summary2,
                },
            ],
            break_even,
            verdict: comparison.verdict,
            generated_at: Utc::now(),
        }
    }

    /// One-line statement of the outcome.
    #[must_use]
    pub fn verdict_message(&self) -> String {
        match self.verdict {
            Verdict::BreakEven(point) => format!(
                "The vehicles break even at {} miles",
                format::miles(point.miles)
            ),
            Verdict::AlwaysCheaper(slot) => {
                format!("{slot} is always cheaper within the mileage range")
            }
            Verdict::Even => "Both vehicles cost the same within the mileage range".to_string(),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report as JSON to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn fmt_break_even(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.break_even {
            Some(point) => {
                writeln!(f, "Break-Even Point Found!")?;
                writeln!(f, "  {} miles", format::miles(point.miles))?;
                writeln!(f, "  At {} total cost", format::currency(point.cost))?;
                if let Some(years) = point.years {
                    writeln!(
                        f,
                        "  That's approximately {} years at {} miles per year",
                        format::years(years),
                        format::miles(self.miles_per_year)
                    )?;
                }
            }
            None => {
                writeln!(f, "No Intersection Found")?;
                writeln!(f, "  {}", self.verdict_message())?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_break_even(f)?;

        for entry in &self.vehicles {
            let s = &entry.summary;
            writeln!(f)?;
            writeln!(f, "{}", entry.slot)?;
            writeln!(f, "  {:<17}{:>16}", "Vehicle Cost:", format::currency(s.vehicle_cost))?;
            writeln!(f, "  {:<17}{:>16}", "Total Fuel Cost:", format::currency(s.total_fuel_cost))?;
            writeln!(f, "  {:<17}{:>16}", "Cost Per Mile:", format::cost_per_mile(s.cost_per_mile))?;
            writeln!(f, "  {:<17}{:>16}", "Total Cost:", format::currency(s.total_cost))?;
        }
        Ok(())
    }
}
