//! Axis ranges and the data-to-pixel projection.

use crate::cost::SamplePoint;

use super::draw::Pixel;

/// Fraction of the cost range added above and below the data.
pub const RANGE_PADDING: f64 = 0.1;

/// Data-space extent of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Right end of the mileage axis. The axis always starts at zero.
    pub max_miles: f64,
    /// Bottom of the cost axis, after padding.
    pub min_cost: f64,
    /// Top of the cost axis, after padding.
    pub max_cost: f64,
}

impl Scale {
    /// Derives the axis ranges from the plotted data.
    ///
    /// The mileage range comes from the points themselves, not from the
    /// horizon the curves were sampled for. The cost range is padded by
    /// [`RANGE_PADDING`] on both sides and never extends below zero.
    #[must_use]
    pub fn from_curves(curve1: &[SamplePoint], curve2: &[SamplePoint]) -> Self {
        let points = || curve1.iter().chain(curve2);

        let max_miles = points().map(|p| p.miles).fold(f64::NEG_INFINITY, f64::max);
        let (min_cost, max_cost) = bounds_with_padding(points().map(|p| p.total), RANGE_PADDING);

        Self {
            max_miles: if max_miles.is_finite() { max_miles } else { 0.0 },
            min_cost,
            max_cost,
        }
    }

    /// Height of the cost axis in dollars.
    #[must_use]
    pub fn cost_span(&self) -> f64 {
        self.max_cost - self.min_cost
    }

    /// Whether every plotted cost is the same.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        let span = self.cost_span();
        span.is_nan() || span <= 0.0
    }
}

/// Calculates min/max bounds with padding, clamping the lower bound at zero.
///
/// Returns `(0, 0)` for an empty input.
fn bounds_with_padding(values: impl Iterator<Item = f64>, padding: f64) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return (0.0, 0.0);
    }
    let range = max - min;
    ((min - range * padding).max(0.0), max + range * padding)
}

/// Pixel rectangle inside the insets where data is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PlotArea {
    /// The area left on a `width` x `height` surface after reserving
    /// `inset` pixels on every side.
    #[must_use]
    pub fn inset(width: u32, height: u32, inset: f64) -> Self {
        Self {
            left: inset,
            top: inset,
            width: (f64::from(width) - 2.0 * inset).max(0.0),
            height: (f64::from(height) - 2.0 * inset).max(0.0),
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Maps data coordinates into a plot area.
///
/// Pixel `y` grows downwards while cost grows upwards, so the cost axis is
/// inverted. A flat cost range maps every cost to the vertical center of the
/// area; a zero mileage range maps every mileage to its left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Data extent.
    pub scale: Scale,
    /// Target pixel area.
    pub area: PlotArea,
}

impl Projection {
    /// Creates a projection of `scale` onto `area`.
    #[must_use]
    pub fn new(scale: Scale, area: PlotArea) -> Self {
        Self { scale, area }
    }

    /// Horizontal pixel position of a mileage.
    #[must_use]
    pub fn x(&self, miles: f64) -> f64 {
        if self.scale.max_miles > 0.0 {
            self.area.left + (miles / self.scale.max_miles) * self.area.width
        } else {
            self.area.left
        }
    }

    /// Vertical pixel position of a cost.
    #[must_use]
    pub fn y(&self, total: f64) -> f64 {
        if self.scale.is_flat() {
            self.area.top + self.area.height / 2.0
        } else {
            let frac = (total - self.scale.min_cost) / self.scale.cost_span();
            self.area.bottom() - frac * self.area.height
        }
    }

    /// Pixel position of a data point.
    #[must_use]
    pub fn map(&self, miles: f64, total: f64) -> Pixel {
        Pixel::new(self.x(miles), self.y(total))
    }

    /// `steps + 1` evenly spaced mileage ticks from zero to the axis end.
    #[must_use]
    pub fn mile_ticks(&self, steps: u32) -> Vec<Tick> {
        let steps_f = f64::from(steps.max(1));
        (0..=steps.max(1))
            .map(|i| {
                let i = f64::from(i);
                Tick {
                    value: self.scale.max_miles / steps_f * i,
                    position: self.area.left + self.area.width / steps_f * i,
                }
            })
            .collect()
    }

    /// `steps + 1` evenly spaced cost ticks from the bottom of the axis up.
    #[must_use]
    pub fn cost_ticks(&self, steps: u32) -> Vec<Tick> {
        let steps_f = f64::from(steps.max(1));
        (0..=steps.max(1))
            .map(|i| {
                let i = f64::from(i);
                Tick {
                    value: self.scale.min_cost + self.scale.cost_span() / steps_f * i,
                    position: self.area.bottom() - self.area.height / steps_f * i,
                }
            })
            .collect()
    }
}

/// An axis tick: its data value and its pixel offset along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Data-space value.
    pub value: f64,
    /// Pixel coordinate (`x` for mileage ticks, `y` for cost ticks).
    pub position: f64,
}
