//! # breakeven
//!
//! Vehicle total-cost comparison library.
//!
//! Given two vehicles (purchase price, fuel economy, fuel price) this crate
//! computes cumulative cost over mileage, finds the mileage at which the two
//! cost lines cross, and lays out a cost chart that any drawing backend can
//! paint.
//!
//! ## Quick Start
//!
//! ```rust
//! use breakeven::{Chart, ChartConfig, Comparison, Inputs, Report, Vehicle};
//!
//! let inputs = Inputs {
//!     vehicle1: Vehicle::new(25_000.0, 30.0, 3.0),
//!     vehicle2: Vehicle::new(20_000.0, 20.0, 3.0),
//!     miles_driven: 100_000.0,
//!     miles_per_year: 15_000.0,
//! };
//!
//! let comparison = Comparison::new(&inputs);
//! let point = comparison.intersection.unwrap();
//! assert!((point.miles - 100_000.0).abs() < 1e-6);
//!
//! let report = Report::new(&comparison);
//! assert!(report.to_string().starts_with("Break-Even Point Found!"));
//!
//! let svg = Chart::from_comparison(&comparison, &ChartConfig::default()).to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! ## Modules
//!
//! - [`cost`]: Cost model, curve sampling and break-even search
//! - [`chart`]: Chart geometry, draw commands and the SVG backend
//! - [`compare`]: One full comparison of two vehicles
//! - [`input`]: Parsing and defaulting of raw inputs, scenario files
//! - [`format`]: Number formatting for display
//! - [`report`]: Text and JSON presentation of results
//! - [`export`]: CSV export of sampled curves
//! - [`error`]: Error types for the library

pub mod chart;
pub mod compare;
pub mod cost;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod report;

// Re-export commonly used types
pub use chart::{Chart, ChartConfig, DrawCommand, Surface, SvgSurface};
pub use compare::{Comparison, Verdict, VehicleSlot};
pub use cost::{Intersection, SamplePoint, Summary, Vehicle, find_intersection, generate_curve};
pub use error::{Error, Result};
pub use input::{Inputs, Scenario, VehicleInput};
pub use report::Report;
