//! Vehicle cost model.
//!
//! A vehicle's cumulative cost is affine in miles driven: the purchase price
//! plus the fuel burned so far. Everything here is a pure function of its
//! arguments.
//!
//! ## Zero-mile queries
//!
//! [`cost_per_mile`] and [`summary`] divide by the mileage. At zero miles the
//! result is `+inf` (or `NaN` for a free vehicle) and is returned as-is; the
//! presentation layer decides how to show it.

mod intersection;

pub use intersection::{
    DEFAULT_PARALLEL_TOLERANCE, Intersection, ParallelTolerance, find_intersection,
    find_intersection_with,
};

use serde::{Deserialize, Serialize};

/// Default mileage step between curve samples.
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 500.0;

/// Upper bound on the number of points in one sampled curve.
pub const MAX_CURVE_SAMPLES: usize = 100_000;

/// Purchase and running-cost parameters of one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Purchase price in dollars.
    pub cost: f64,
    /// Fuel economy in miles per gallon. Never zero.
    pub mpg: f64,
    /// Fuel price in dollars per gallon.
    pub gas_price: f64,
}

impl Vehicle {
    /// Creates a vehicle from already-sanitized values.
    #[must_use]
    pub fn new(cost: f64, mpg: f64, gas_price: f64) -> Self {
        Self {
            cost,
            mpg,
            gas_price,
        }
    }

    /// Marginal cost of driving one more mile (the slope of the cost line).
    #[must_use]
    pub fn fuel_cost_per_mile(&self) -> f64 {
        self.gas_price / self.mpg
    }
}

/// One sample of a cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Miles driven.
    pub miles: f64,
    /// Cumulative cost at that mileage.
    pub total: f64,
}

/// Cost samples in ascending mileage order.
pub type CostCurve = Vec<SamplePoint>;

/// Derived cost figures for one vehicle at a given mileage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Purchase price.
    pub vehicle_cost: f64,
    /// Fuel spend over the mileage.
    pub total_fuel_cost: f64,
    /// Total cost divided by mileage. Non-finite at zero miles.
    pub cost_per_mile: f64,
    /// Purchase price plus fuel spend.
    pub total_cost: f64,
}

/// Fuel spend after driving `miles`.
///
/// # Example
///
/// ```
/// use breakeven::cost::{Vehicle, fuel_cost};
///
/// let car = Vehicle::new(20_000.0, 25.0, 4.0);
/// assert!((fuel_cost(&car, 1_000.0) - 160.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn fuel_cost(vehicle: &Vehicle, miles: f64) -> f64 {
    let gallons = miles / vehicle.mpg;
    gallons * vehicle.gas_price
}

/// Cumulative cost (purchase plus fuel) after driving `miles`.
#[must_use]
pub fn total_cost(vehicle: &Vehicle, miles: f64) -> f64 {
    vehicle.cost + fuel_cost(vehicle, miles)
}

/// Total cost spread over every mile driven.
///
/// Not guarded against `miles == 0`: the result is then infinite or `NaN`.
#[must_use]
pub fn cost_per_mile(vehicle: &Vehicle, miles: f64) -> f64 {
    total_cost(vehicle, miles) / miles
}

/// Summary figures for `vehicle` at `miles`.
#[must_use]
pub fn summary(vehicle: &Vehicle, miles: f64) -> Summary {
    let total_fuel_cost = fuel_cost(vehicle, miles);
    let total_cost = vehicle.cost + total_fuel_cost;

    Summary {
        vehicle_cost: vehicle.cost,
        total_fuel_cost,
        cost_per_mile: total_cost / miles,
        total_cost,
    }
}

/// Lazily samples the cost curve of `vehicle` at `0, interval, 2*interval, …`
/// up to and including `max_miles`.
///
/// A non-positive or non-finite `interval`, or a negative `max_miles`,
/// yields no samples. When the horizon would need more than
/// [`MAX_CURVE_SAMPLES`] points, the interval is widened so that exactly
/// that many points span `0..=max_miles`.
#[must_use]
pub fn samples(vehicle: &Vehicle, max_miles: f64, interval: f64) -> CurveSamples {
    let empty = CurveSamples {
        vehicle: *vehicle,
        interval,
        max_miles,
        next: 0,
        len: 0,
    };
    let valid =
        interval > 0.0 && interval.is_finite() && max_miles >= 0.0 && max_miles.is_finite();
    if !valid {
        return empty;
    }

    let steps = (max_miles / interval).floor();
    let (interval, len) = if steps <= (MAX_CURVE_SAMPLES - 1) as f64 {
        (interval, steps as usize + 1)
    } else {
        let widened = max_miles / (MAX_CURVE_SAMPLES - 1) as f64;
        tracing::debug!(
            max_miles,
            interval,
            widened,
            "sample count capped, widening interval"
        );
        (widened, MAX_CURVE_SAMPLES)
    };

    CurveSamples {
        interval,
        len,
        ..empty
    }
}

/// Samples the cost curve of `vehicle` from zero to `max_miles`.
///
/// The curve has `floor(max_miles / interval) + 1` points, capped at
/// [`MAX_CURVE_SAMPLES`] (see [`samples`]).
///
/// # Example
///
/// ```
/// use breakeven::cost::{Vehicle, generate_curve};
///
/// let car = Vehicle::new(10_000.0, 20.0, 2.0);
/// let curve = generate_curve(&car, 1_200.0, 500.0);
///
/// let miles: Vec<f64> = curve.iter().map(|p| p.miles).collect();
/// assert_eq!(miles, vec![0.0, 500.0, 1_000.0]);
/// assert_eq!(curve[0].total, 10_000.0);
/// ```
#[must_use]
pub fn generate_curve(vehicle: &Vehicle, max_miles: f64, interval: f64) -> CostCurve {
    samples(vehicle, max_miles, interval).collect()
}

/// Iterator returned by [`samples`].
///
/// Sample `i` sits at exactly `i * interval` miles, so long curves do not
/// accumulate rounding drift.
#[derive(Debug, Clone)]
pub struct CurveSamples {
    vehicle: Vehicle,
    interval: f64,
    max_miles: f64,
    next: usize,
    len: usize,
}

impl Iterator for CurveSamples {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let miles = (self.next as f64 * self.interval).min(self.max_miles);
        self.next += 1;
        Some(SamplePoint {
            miles,
            total: total_cost(&self.vehicle, miles),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples {}
