//! Two-vehicle comparison.
//!
//! [`Comparison::new`] runs the whole calculation for one set of inputs:
//! per-vehicle summaries at the mileage horizon, both sampled cost curves,
//! the break-even point, and which vehicle comes out ahead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cost::{
    CostCurve, DEFAULT_SAMPLE_INTERVAL, Intersection, Summary, find_intersection, generate_curve,
    summary,
};
use crate::input::Inputs;

/// Identifies one of the two compared vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleSlot {
    /// The first vehicle.
    First,
    /// The second vehicle.
    Second,
}

impl VehicleSlot {
    /// Display name of the slot.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "Vehicle 1",
            Self::Second => "Vehicle 2",
        }
    }
}

impl fmt::Display for VehicleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Verdict {
    /// The cost lines cross inside the mileage window.
    BreakEven(Intersection),
    /// No crossing; this vehicle costs less over the whole window.
    AlwaysCheaper(VehicleSlot),
    /// No crossing and both vehicles end at the same total.
    Even,
}

impl Verdict {
    /// Decides the verdict from the intersection and the totals at the
    /// mileage horizon.
    #[must_use]
    pub fn decide(intersection: Option<Intersection>, total1: f64, total2: f64) -> Self {
        match intersection {
            Some(point) => Self::BreakEven(point),
            None if total1 < total2 => Self::AlwaysCheaper(VehicleSlot::First),
            None if total2 < total1 => Self::AlwaysCheaper(VehicleSlot::Second),
            None => Self::Even,
        }
    }
}

/// Every derived result for one pair of vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Inputs the comparison was computed from.
    pub inputs: Inputs,
    /// Summary of the first vehicle at the mileage horizon.
    pub summary1: Summary,
    /// Summary of the second vehicle at the mileage horizon.
    pub summary2: Summary,
    /// Sampled cost curve of the first vehicle.
    pub curve1: CostCurve,
    /// Sampled cost curve of the second vehicle.
    pub curve2: CostCurve,
    /// Break-even point within the mileage horizon.
    pub intersection: Option<Intersection>,
    /// Which vehicle wins, or where they cross.
    pub verdict: Verdict,
}

impl Comparison {
    /// Runs the comparison with the default sampling interval.
    ///
    /// # Example
    ///
    /// ```
    /// use breakeven::compare::{Comparison, Verdict, VehicleSlot};
    /// use breakeven::cost::Vehicle;
    /// use breakeven::input::Inputs;
    ///
    /// let comparison = Comparison::new(&Inputs {
    ///     vehicle1: Vehicle::new(30_000.0, 40.0, 3.5),
    ///     vehicle2: Vehicle::new(35_000.0, 25.0, 3.5),
    ///     miles_driven: 200_000.0,
    ///     miles_per_year: 15_000.0,
    /// });
    ///
    /// assert_eq!(comparison.verdict, Verdict::AlwaysCheaper(VehicleSlot::First));
    /// ```
    #[must_use]
    pub fn new(inputs: &Inputs) -> Self {
        Self::with_interval(inputs, DEFAULT_SAMPLE_INTERVAL)
    }

    /// Runs the comparison, sampling the curves every `interval` miles.
    #[must_use]
    pub fn with_interval(inputs: &Inputs, interval: f64) -> Self {
        let miles = inputs.miles_driven;
        let summary1 = summary(&inputs.vehicle1, miles);
        let summary2 = summary(&inputs.vehicle2, miles);
        let curve1 = generate_curve(&inputs.vehicle1, miles, interval);
        let curve2 = generate_curve(&inputs.vehicle2, miles, interval);
        let intersection = find_intersection(&inputs.vehicle1, &inputs.vehicle2, miles);
        let verdict = Verdict::decide(intersection, summary1.total_cost, summary2.total_cost);

        tracing::debug!(
            miles,
            points = curve1.len(),
            ?verdict,
            "comparison computed"
        );

        Self {
            inputs: *inputs,
            summary1,
            summary2,
            curve1,
            curve2,
            intersection,
            verdict,
        }
    }

    /// Summary of the vehicle in `slot`.
    #[must_use]
    pub fn summary(&self, slot: VehicleSlot) -> &Summary {
        match slot {
            VehicleSlot::First => &self.summary1,
            VehicleSlot::Second => &self.summary2,
        }
    }

    /// Break-even distance expressed in years of driving, if there is a
    /// break-even point and a positive yearly mileage.
    #[must_use]
    pub fn break_even_years(&self) -> Option<f64> {
        let point = self.intersection?;
        (self.inputs.miles_per_year > 0.0).then(|| point.miles / self.inputs.miles_per_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Vehicle;

    fn inputs(v1: Vehicle, v2: Vehicle, miles_driven: f64) -> Inputs {
        Inputs {
            vehicle1: v1,
            vehicle2: v2,
            miles_driven,
            miles_per_year: 15_000.0,
        }
    }

    #[test]
    fn test_first_always_cheaper() {
        let comparison = Comparison::new(&inputs(
            Vehicle::new(30_000.0, 40.0, 3.5),
            Vehicle::new(35_000.0, 25.0, 3.5),
            200_000.0,
        ));

        assert_eq!(comparison.intersection, None);
        assert_eq!(comparison.verdict, Verdict::AlwaysCheaper(VehicleSlot::First));
        assert_eq!(comparison.curve1.len(), 401);
        assert_eq!(comparison.curve2.len(), 401);
        assert_eq!(comparison.break_even_years(), None);
    }

    #[test]
    fn test_break_even() {
        let comparison = Comparison::new(&inputs(
            Vehicle::new(25_000.0, 30.0, 3.0),
            Vehicle::new(20_000.0, 20.0, 3.0),
            100_000.0,
        ));

        let Verdict::BreakEven(point) = comparison.verdict else {
            panic!("expected a break-even verdict, got {:?}", comparison.verdict);
        };
        assert!((point.miles - 100_000.0).abs() < 1e-6);
        assert!((point.cost - 35_000.0).abs() < 1e-6);

        let years = comparison.break_even_years().unwrap();
        assert!((years - 100_000.0 / 15_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_second_cheaper_when_lines_parallel() {
        let comparison = Comparison::new(&inputs(
            Vehicle::new(30_000.0, 30.0, 3.0),
            Vehicle::new(29_000.0, 30.0, 3.0),
            50_000.0,
        ));
        assert_eq!(comparison.verdict, Verdict::AlwaysCheaper(VehicleSlot::Second));
    }

    #[test]
    fn test_identical_vehicles_are_even() {
        let v = Vehicle::new(30_000.0, 30.0, 3.0);
        let comparison = Comparison::new(&inputs(v, v, 50_000.0));
        assert_eq!(comparison.verdict, Verdict::Even);
    }

    #[test]
    fn test_zero_miles_keeps_non_finite_cost_per_mile() {
        let comparison = Comparison::new(&inputs(
            Vehicle::new(30_000.0, 30.0, 3.0),
            Vehicle::new(0.0, 30.0, 3.0),
            0.0,
        ));

        assert!(comparison.summary(VehicleSlot::First).cost_per_mile.is_infinite());
        assert!(comparison.summary(VehicleSlot::Second).cost_per_mile.is_nan());
        assert_eq!(comparison.curve1.len(), 1);
        assert_eq!(comparison.verdict, Verdict::AlwaysCheaper(VehicleSlot::Second));
    }

    #[test]
    fn test_custom_interval() {
        let comparison = Comparison::with_interval(
            &inputs(
                Vehicle::new(25_000.0, 30.0, 3.0),
                Vehicle::new(20_000.0, 20.0, 3.0),
                10_000.0,
            ),
            2_500.0,
        );
        assert_eq!(comparison.curve1.len(), 5);
    }
}
