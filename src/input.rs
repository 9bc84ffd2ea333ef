//! Turning raw user input into vehicles and mileage parameters.
//!
//! Values arrive as free text (CLI flags, form fields) or as optional numbers
//! (scenario files). Both paths share one set of defaulting rules:
//!
//! - a missing, unparsable or zero value becomes `0`,
//! - except fuel economy, which becomes [`DEFAULT_MPG`] so the cost model
//!   never divides by zero,
//! - and the yearly mileage, which becomes [`DEFAULT_MILES_PER_YEAR`].
//!
//! Negative values are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compare::VehicleSlot;
use crate::cost::Vehicle;
use crate::error::{Error, Result};

/// Fuel economy used when none (or zero) is supplied.
pub const DEFAULT_MPG: f64 = 1.0;

/// Yearly mileage used when none (or zero) is supplied.
pub const DEFAULT_MILES_PER_YEAR: f64 = 15_000.0;

/// Parses the leading number of `text`, ignoring anything after it.
///
/// Leading whitespace is skipped, an optional sign, digits, a decimal point
/// and an exponent are accepted. Returns `None` when no digits are found or
/// the value is not finite.
///
/// # Example
///
/// ```
/// use breakeven::input::parse_number;
///
/// assert_eq!(parse_number("  42.5 mpg"), Some(42.5));
/// assert_eq!(parse_number("35,000"), Some(35.0));
/// assert_eq!(parse_number("abc"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Falls back to `default` for missing, zero or non-finite values.
fn or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => default,
    }
}

fn non_negative(field: String, value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(Error::InvalidParameter {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

/// Unresolved parameters of one vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleInput {
    /// Purchase price in dollars.
    pub cost: Option<f64>,
    /// Fuel economy in miles per gallon.
    pub mpg: Option<f64>,
    /// Fuel price in dollars per gallon.
    pub gas_price: Option<f64>,
}

impl VehicleInput {
    /// Parses the three raw text fields of a vehicle.
    #[must_use]
    pub fn parse(cost: &str, mpg: &str, gas_price: &str) -> Self {
        Self {
            cost: parse_number(cost),
            mpg: parse_number(mpg),
            gas_price: parse_number(gas_price),
        }
    }

    /// Applies the defaulting rules and validates the result.
    pub fn resolve(&self, slot: VehicleSlot) -> Result<Vehicle> {
        let field = |name: &str| format!("{} {}", slot.label().to_lowercase(), name);

        let cost = non_negative(field("cost"), or_default(self.cost, 0.0))?;
        let mpg = non_negative(field("fuel economy"), or_default(self.mpg, DEFAULT_MPG))?;
        let gas_price = non_negative(field("gas price"), or_default(self.gas_price, 0.0))?;

        Ok(Vehicle::new(cost, mpg, gas_price))
    }
}

/// Fully resolved inputs for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// First vehicle.
    pub vehicle1: Vehicle,
    /// Second vehicle.
    pub vehicle2: Vehicle,
    /// Mileage horizon of the comparison.
    pub miles_driven: f64,
    /// Yearly mileage, used to express distances in years.
    pub miles_per_year: f64,
}

/// A comparison as stored in a scenario file.
///
/// Every field is optional; missing values follow the module defaults.
///
/// ```
/// use breakeven::input::Scenario;
///
/// let scenario = Scenario::from_json(r#"{
///     "vehicle1": { "cost": 25000, "mpg": 30, "gas_price": 3 },
///     "vehicle2": { "cost": 20000, "mpg": 20, "gas_price": 3 },
///     "miles_driven": 100000
/// }"#).unwrap();
///
/// let inputs = scenario.resolve().unwrap();
/// assert_eq!(inputs.miles_per_year, 15_000.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// First vehicle.
    pub vehicle1: VehicleInput,
    /// Second vehicle.
    pub vehicle2: VehicleInput,
    /// Mileage horizon.
    pub miles_driven: Option<f64>,
    /// Yearly mileage.
    pub miles_per_year: Option<f64>,
}

impl Scenario {
    /// Parses a scenario from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Applies the defaulting rules to every field.
    pub fn resolve(&self) -> Result<Inputs> {
        let vehicle1 = self.vehicle1.resolve(VehicleSlot::First)?;
        let vehicle2 = self.vehicle2.resolve(VehicleSlot::Second)?;
        let miles_driven = non_negative("miles driven".into(), or_default(self.miles_driven, 0.0))?;
        let miles_per_year = non_negative(
            "miles per year".into(),
            or_default(self.miles_per_year, DEFAULT_MILES_PER_YEAR),
        )?;

        Ok(Inputs {
            vehicle1,
            vehicle2,
            miles_driven,
            miles_per_year,
        })
    }
}
