//! Break-even mileage between two vehicles.

use serde::{Deserialize, Serialize};

use super::{Vehicle, total_cost};

/// Absolute slope difference below which two cost lines count as parallel.
pub const DEFAULT_PARALLEL_TOLERANCE: f64 = 1e-4;

/// Relative slack on the upper window bound. A crossing computed a few ulps
/// past `max_miles` is snapped onto it.
const WINDOW_SLACK: f64 = 1e-9;

/// Point where two cumulative-cost lines cross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Break-even mileage.
    pub miles: f64,
    /// Total cost of either vehicle at that mileage.
    pub cost: f64,
}

/// How close two fuel-cost slopes must be to be treated as parallel.
///
/// Coincident lines fall under the same rule, so identical vehicles never
/// report a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParallelTolerance {
    /// Fixed difference in dollars per mile.
    Absolute(f64),
    /// Fraction of the steeper slope.
    Relative(f64),
}

impl Default for ParallelTolerance {
    fn default() -> Self {
        Self::Absolute(DEFAULT_PARALLEL_TOLERANCE)
    }
}

impl ParallelTolerance {
    /// Whether slopes `a` and `b` are too close to intersect meaningfully.
    #[must_use]
    pub fn is_parallel(self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        match self {
            Self::Absolute(eps) => diff < eps,
            Self::Relative(ratio) => diff < ratio * a.abs().max(b.abs()),
        }
    }
}

/// Finds where the cost lines of `v1` and `v2` cross within `(0, max_miles]`.
///
/// Returns `None` when the lines are parallel, when they cross at or before
/// zero miles, or when they cross beyond `max_miles`. Uses the default
/// absolute tolerance of `1e-4` dollars per mile.
///
/// # Example
///
/// ```
/// use breakeven::cost::{Vehicle, find_intersection};
///
/// let efficient = Vehicle::new(25_000.0, 30.0, 3.0);
/// let cheap = Vehicle::new(20_000.0, 20.0, 3.0);
///
/// let hit = find_intersection(&efficient, &cheap, 100_000.0).unwrap();
/// assert!((hit.miles - 100_000.0).abs() < 1e-6);
/// assert!((hit.cost - 35_000.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn find_intersection(v1: &Vehicle, v2: &Vehicle, max_miles: f64) -> Option<Intersection> {
    find_intersection_with(v1, v2, max_miles, ParallelTolerance::default())
}

/// [`find_intersection`] with an explicit parallel-line tolerance.
#[must_use]
pub fn find_intersection_with(
    v1: &Vehicle,
    v2: &Vehicle,
    max_miles: f64,
    tolerance: ParallelTolerance,
) -> Option<Intersection> {
    let slope1 = v1.fuel_cost_per_mile();
    let slope2 = v2.fuel_cost_per_mile();

    if tolerance.is_parallel(slope1, slope2) {
        tracing::debug!(slope1, slope2, "cost lines are parallel, no break-even");
        return None;
    }

    let miles = (v2.cost - v1.cost) / (slope1 - slope2);

    if miles > 0.0 && miles <= max_miles + max_miles.abs() * WINDOW_SLACK {
        let miles = miles.min(max_miles);
        let cost = total_cost(v1, miles);
        tracing::debug!(miles, cost, "break-even found");
        Some(Intersection { miles, cost })
    } else {
        tracing::debug!(miles, max_miles, "crossing lies outside the mileage window");
        None
    }
}
