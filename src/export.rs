//! CSV export of sampled cost curves.
//!
//! One row per sampled mileage, one column per vehicle:
//!
//! ```text
//! miles,vehicle_1_total,vehicle_2_total
//! 0.0,25000.0,20000.0
//! 500.0,25050.0,20075.0
//! ```

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cost::SamplePoint;
use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
struct CurveRow {
    miles: f64,
    vehicle_1_total: Option<f64>,
    vehicle_2_total: Option<f64>,
}

/// Writes both curves as a CSV table to `writer`.
///
/// The curves must share their sample mileages; a shorter curve leaves its
/// column empty in the trailing rows.
pub fn write_curves<W: Write>(
    writer: W,
    curve1: &[SamplePoint],
    curve2: &[SamplePoint],
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    for i in 0..curve1.len().max(curve2.len()) {
        let a = curve1.get(i);
        let b = curve2.get(i);
        if let (Some(a), Some(b)) = (a, b)
            && a.miles != b.miles
        {
            return Err(Error::Report(format!(
                "curves sampled at different mileages: {} and {} in row {}",
                a.miles, b.miles, i
            )));
        }
        let Some(miles) = a.or(b).map(|p| p.miles) else {
            continue;
        };

        csv.serialize(CurveRow {
            miles,
            vehicle_1_total: a.map(|p| p.total),
            vehicle_2_total: b.map(|p| p.total),
        })?;
    }

    csv.flush()?;
    Ok(())
}

/// Writes both curves as a CSV file at `path`.
pub fn write_curves_file(
    path: impl AsRef<Path>,
    curve1: &[SamplePoint],
    curve2: &[SamplePoint],
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_curves(file, curve1, curve2)
}
