//! Cost-versus-mileage chart layout.
//!
//! [`Chart::build`] lays out two cost curves and an optional break-even point
//! on a fixed-size surface: axes, labelled gridlines, one polyline per
//! vehicle, the break-even marker and a legend. The result is a flat list of
//! [`DrawCommand`]s in paint order, independent of any graphics API.
//!
//! ```rust
//! use breakeven::chart::{Chart, ChartConfig};
//! use breakeven::cost::{Vehicle, find_intersection, generate_curve};
//!
//! let v1 = Vehicle::new(25_000.0, 30.0, 3.0);
//! let v2 = Vehicle::new(20_000.0, 20.0, 3.0);
//! let curve1 = generate_curve(&v1, 100_000.0, 500.0);
//! let curve2 = generate_curve(&v2, 100_000.0, 500.0);
//! let hit = find_intersection(&v1, &v2, 100_000.0);
//!
//! let chart = Chart::build(&curve1, &curve2, hit, Some(15_000.0), &ChartConfig::default());
//! let svg = chart.to_svg();
//! assert!(svg.contains("Miles Driven (Years)"));
//! ```

pub mod draw;
pub mod scale;
pub mod svg;

pub use draw::{Anchor, DrawCommand, Pixel, Stroke, Surface, TextStyle};
pub use scale::{PlotArea, Projection, Scale, Tick};
pub use svg::SvgSurface;

use crate::compare::{Comparison, VehicleSlot};
use crate::cost::{Intersection, SamplePoint};
use crate::format;

/// Number of intervals along each axis.
pub const GRID_STEPS: u32 = 6;

/// Chart configuration.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Margin reserved on every side for labels.
    pub padding: f64,
    /// Legend names of the two series.
    pub names: [String; 2],
    /// CSS colors of the two series.
    pub colors: [String; 2],
    /// CSS color of the break-even marker.
    pub marker_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            padding: 70.0,
            names: [
                VehicleSlot::First.label().to_string(),
                VehicleSlot::Second.label().to_string(),
            ],
            colors: [colors::VEHICLE_1.to_string(), colors::VEHICLE_2.to_string()],
            marker_color: colors::BREAK_EVEN.to_string(),
        }
    }
}

impl ChartConfig {
    /// Sets the surface dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the label margin.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the legend name and color of one series.
    #[must_use]
    pub fn with_series(
        mut self,
        slot: VehicleSlot,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let index = slot_index(slot);
        self.names[index] = name.into();
        self.colors[index] = color.into();
        self
    }

    /// Sets the break-even marker color.
    #[must_use]
    pub fn with_marker_color(mut self, color: impl Into<String>) -> Self {
        self.marker_color = color.into();
        self
    }
}

fn slot_index(slot: VehicleSlot) -> usize {
    match slot {
        VehicleSlot::First => 0,
        VehicleSlot::Second => 1,
    }
}

/// A laid-out chart, ready to paint.
#[derive(Debug, Clone)]
pub struct Chart {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Data-to-pixel mapping used for the layout.
    pub projection: Projection,
    /// Paint operations, back to front.
    pub commands: Vec<DrawCommand>,
}

impl Chart {
    /// Lays out two cost curves and an optional break-even point.
    ///
    /// When `miles_per_year` is a positive rate, mileage ticks also show the
    /// elapsed time in years.
    #[must_use]
    pub fn build(
        curve1: &[SamplePoint],
        curve2: &[SamplePoint],
        intersection: Option<Intersection>,
        miles_per_year: Option<f64>,
        config: &ChartConfig,
    ) -> Self {
        let scale = Scale::from_curves(curve1, curve2);
        let area = PlotArea::inset(config.width, config.height, config.padding);
        let projection = Projection::new(scale, area);
        let miles_per_year = miles_per_year.filter(|rate| *rate > 0.0 && rate.is_finite());

        tracing::debug!(
            max_miles = scale.max_miles,
            min_cost = scale.min_cost,
            max_cost = scale.max_cost,
            "chart scale"
        );
        if scale.is_flat() {
            tracing::debug!("flat cost range, centering curves vertically");
        }

        let mut layout = Layout {
            config,
            projection,
            commands: Vec::new(),
        };
        layout.axes();
        layout.grid(miles_per_year);
        layout.curve(curve1, &config.colors[0]);
        layout.curve(curve2, &config.colors[1]);
        if let Some(point) = intersection {
            layout.marker(point);
        }
        layout.legend();

        Self {
            width: config.width,
            height: config.height,
            projection,
            commands: layout.commands,
        }
    }

    /// Lays out the curves and break-even point of a comparison.
    #[must_use]
    pub fn from_comparison(comparison: &Comparison, config: &ChartConfig) -> Self {
        Self::build(
            &comparison.curve1,
            &comparison.curve2,
            comparison.intersection,
            Some(comparison.inputs.miles_per_year),
            config,
        )
    }

    /// Clears `surface` and paints every command onto it.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for command in &self.commands {
            surface.draw(command);
        }
    }

    /// Renders the chart as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut surface = SvgSurface::new();
        self.paint(&mut surface);
        surface.finish()
    }
}

/// Accumulates commands while laying out one chart.
struct Layout<'a> {
    config: &'a ChartConfig,
    projection: Projection,
    commands: Vec<DrawCommand>,
}

impl Layout<'_> {
    fn text(&mut self, x: f64, y: f64, text: String, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            position: Pixel::new(x, y),
            text,
            style,
        });
    }

    fn grid(&mut self, miles_per_year: Option<f64>) {
        let area = self.projection.area;
        let grid = Stroke::new(colors::GRID, 1.0);

        for tick in self.projection.cost_ticks(GRID_STEPS) {
            self.commands.push(DrawCommand::Line {
                from: Pixel::new(area.left, tick.position),
                to: Pixel::new(area.right(), tick.position),
                stroke: grid.clone(),
            });
            self.text(
                area.left - 10.0,
                tick.position + 4.0,
                format::currency_whole(tick.value),
                TextStyle::new(12.0, colors::LABEL, Anchor::End),
            );
        }

        for tick in self.projection.mile_ticks(GRID_STEPS) {
            self.commands.push(DrawCommand::Line {
                from: Pixel::new(tick.position, area.top),
                to: Pixel::new(tick.position, area.bottom()),
                stroke: grid.clone(),
            });
            self.text(
                tick.position,
                area.bottom() + 20.0,
                format!("{} mi", format::miles(tick.value)),
                TextStyle::new(12.0, colors::LABEL, Anchor::Middle),
            );
            if let Some(rate) = miles_per_year {
                self.text(
                    tick.position,
                    area.bottom() + 35.0,
                    format!("({} yrs)", format::years(tick.value / rate)),
                    TextStyle::new(11.0, colors::MUTED, Anchor::Middle),
                );
            }
        }

        let width = f64::from(self.config.width);
        let height = f64::from(self.config.height);
        let (x_title, x_title_y) = match miles_per_year {
            Some(_) => ("Miles Driven (Years)", height - 5.0),
            None => ("Miles Driven", height - 10.0),
        };
        self.text(
            width / 2.0,
            x_title_y,
            x_title.to_string(),
            TextStyle::new(14.0, colors::AXIS, Anchor::Middle).bold(),
        );
        self.text(
            15.0,
            height / 2.0,
            "Total Cost ($)".to_string(),
            TextStyle::new(14.0, colors::AXIS, Anchor::Middle)
                .bold()
                .rotated(-90.0),
        );
    }

    fn axes(&mut self) {
        let area = self.projection.area;
        self.commands.push(DrawCommand::Polyline {
            points: vec![
                Pixel::new(area.left, area.top),
                Pixel::new(area.left, area.bottom()),
                Pixel::new(area.right(), area.bottom()),
            ],
            stroke: Stroke::new(colors::AXIS, 2.0),
        });
    }

    fn curve(&mut self, curve: &[SamplePoint], color: &str) {
        if curve.is_empty() {
            return;
        }
        let points = curve
            .iter()
            .map(|p| self.projection.map(p.miles, p.total))
            .collect();
        self.commands.push(DrawCommand::Polyline {
            points,
            stroke: Stroke::new(color, 3.0),
        });
    }

    fn marker(&mut self, point: Intersection) {
        self.commands.push(DrawCommand::Circle {
            center: self.projection.map(point.miles, point.cost),
            radius: 8.0,
            fill: self.config.marker_color.clone(),
            outline: Some(Stroke::new(colors::MARKER_OUTLINE, 2.0)),
        });
    }

    fn legend(&mut self) {
        let config = self.config;
        let x = f64::from(config.width) - config.padding - 120.0;
        let y = f64::from(config.height) - config.padding - 50.0;

        for (i, (name, color)) in config.names.iter().zip(&config.colors).enumerate() {
            let offset = i as f64 * 25.0;
            self.commands.push(DrawCommand::Rect {
                origin: Pixel::new(x, y + offset),
                width: 30.0,
                height: 4.0,
                fill: color.clone(),
            });
            self.text(
                x + 40.0,
                y + offset + 4.0,
                name.clone(),
                TextStyle::new(14.0, colors::AXIS, Anchor::Start),
            );
        }
    }
}

/// Default chart palette.
pub mod colors {
    /// First vehicle's curve.
    pub const VEHICLE_1: &str = "#003478";
    /// Second vehicle's curve.
    pub const VEHICLE_2: &str = "#EB0A1E";
    /// Break-even marker fill.
    pub const BREAK_EVEN: &str = "#4caf50";
    /// Break-even marker outline.
    pub const MARKER_OUTLINE: &str = "#ffffff";
    /// Axes, titles and legend text.
    pub const AXIS: &str = "#333333";
    /// Gridlines.
    pub const GRID: &str = "#e0e0e0";
    /// Tick labels.
    pub const LABEL: &str = "#666666";
    /// Secondary tick labels (years).
    pub const MUTED: &str = "#888888";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{Vehicle, find_intersection, generate_curve};

    fn curves(max_miles: f64) -> (Vec<SamplePoint>, Vec<SamplePoint>, Option<Intersection>) {
        let v1 = Vehicle::new(25_000.0, 30.0, 3.0);
        let v2 = Vehicle::new(20_000.0, 20.0, 3.0);
        (
            generate_curve(&v1, max_miles, 500.0),
            generate_curve(&v2, max_miles, 500.0),
            find_intersection(&v1, &v2, max_miles),
        )
    }

    fn texts(chart: &Chart) -> Vec<&str> {
        chart
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn all_pixels(chart: &Chart) -> Vec<Pixel> {
        chart
            .commands
            .iter()
            .flat_map(|c| match c {
                DrawCommand::Line { from, to, .. } => vec![*from, *to],
                DrawCommand::Polyline { points, .. } => points.clone(),
                DrawCommand::Circle { center, .. } => vec![*center],
                DrawCommand::Rect { origin, .. } => vec![*origin],
                DrawCommand::Text { position, .. } => vec![*position],
            })
            .collect()
    }

    #[test]
    fn test_layout_order() {
        let (c1, c2, hit) = curves(100_000.0);
        let chart = Chart::build(&c1, &c2, hit, None, &ChartConfig::default());

        let polylines: Vec<usize> = chart
            .commands
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DrawCommand::Polyline { .. }))
            .map(|(i, _)| i)
            .collect();
        let marker = chart
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Circle { .. }))
            .unwrap();

        // Axes, then one polyline per curve.
        assert_eq!(polylines.len(), 3);
        assert!(marker > polylines[2]);
    }

    #[test]
    fn test_axes_painted_before_grid() {
        let (c1, c2, hit) = curves(100_000.0);
        let chart = Chart::build(&c1, &c2, hit, None, &ChartConfig::default());

        assert!(matches!(
            &chart.commands[0],
            DrawCommand::Polyline { stroke, .. } if stroke.color == colors::AXIS
        ));
        let first_gridline = chart
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Line { .. }))
            .unwrap();
        assert_eq!(first_gridline, 1);
    }

    #[test]
    fn test_curve_endpoints_hit_plot_corners() {
        let (c1, c2, hit) = curves(100_000.0);
        let chart = Chart::build(&c1, &c2, hit, None, &ChartConfig::default());
        let area = chart.projection.area;

        let first_curve = chart
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline { points, stroke } if stroke.color == colors::VEHICLE_1 => {
                    Some(points)
                }
                _ => None,
            })
            .next()
            .unwrap();

        assert_eq!(first_curve.len(), c1.len());
        assert_eq!(first_curve[0].x, area.left);
        assert!((first_curve.last().unwrap().x - area.right()).abs() < 1e-9);
        for pair in first_curve.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn test_marker_sits_on_both_curves() {
        let (c1, c2, hit) = curves(100_000.0);
        let chart = Chart::build(&c1, &c2, hit, None, &ChartConfig::default());

        let center = chart
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .unwrap();
        let end1 = chart.projection.map(c1.last().unwrap().miles, c1.last().unwrap().total);
        let end2 = chart.projection.map(c2.last().unwrap().miles, c2.last().unwrap().total);

        assert!((center.x - end1.x).abs() < 1e-6);
        assert!((center.y - end1.y).abs() < 1e-6);
        assert!((center.y - end2.y).abs() < 1e-6);
    }

    #[test]
    fn test_no_marker_without_intersection() {
        let (c1, c2, _) = curves(50_000.0);
        let chart = Chart::build(&c1, &c2, None, None, &ChartConfig::default());
        assert!(!chart
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Circle { .. })));
    }

    #[test]
    fn test_grid_labels() {
        let (c1, c2, hit) = curves(60_000.0);
        let chart = Chart::build(&c1, &c2, hit, None, &ChartConfig::default());
        let labels = texts(&chart);

        for miles in ["0 mi", "10,000 mi", "30,000 mi", "60,000 mi"] {
            assert!(labels.contains(&miles), "missing {miles}");
        }
        assert!(labels.contains(&"Miles Driven"));
        assert!(labels.contains(&"Total Cost ($)"));
        assert!(!labels.iter().any(|l| l.ends_with("yrs)")));

        let dollar_labels = labels.iter().filter(|l| l.starts_with('$')).count();
        assert_eq!(dollar_labels, (GRID_STEPS + 1) as usize);

        let gridlines = chart
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(gridlines, 2 * (GRID_STEPS + 1) as usize);
    }

    #[test]
    fn test_year_labels() {
        let (c1, c2, hit) = curves(90_000.0);
        let chart = Chart::build(&c1, &c2, hit, Some(15_000.0), &ChartConfig::default());
        let labels = texts(&chart);

        assert!(labels.contains(&"(0.0 yrs)"));
        assert!(labels.contains(&"(1.0 yrs)"));
        assert!(labels.contains(&"(6.0 yrs)"));
        assert!(labels.contains(&"Miles Driven (Years)"));
    }

    #[test]
    fn test_non_positive_rate_hides_years() {
        let (c1, c2, hit) = curves(90_000.0);
        let chart = Chart::build(&c1, &c2, hit, Some(0.0), &ChartConfig::default());
        assert!(!texts(&chart).iter().any(|l| l.ends_with("yrs)")));
    }

    #[test]
    fn test_legend_is_anchored_to_corner() {
        let config = ChartConfig::default().with_series(VehicleSlot::Second, "Hybrid", "#00aa00");
        let (c1, c2, hit) = curves(100_000.0);
        let chart = Chart::build(&c1, &c2, hit, None, &config);

        let swatches: Vec<(Pixel, &str)> = chart
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { origin, fill, .. } => Some((*origin, fill.as_str())),
                _ => None,
            })
            .collect();

        assert_eq!(swatches, vec![
            (Pixel::new(610.0, 380.0), colors::VEHICLE_1),
            (Pixel::new(610.0, 405.0), "#00aa00"),
        ]);
        assert!(texts(&chart).contains(&"Hybrid"));
    }

    #[test]
    fn test_flat_data_produces_finite_pixels() {
        let flat = Vehicle::new(15_000.0, 30.0, 0.0);
        let curve = generate_curve(&flat, 10_000.0, 500.0);
        let chart = Chart::build(&curve, &curve, None, Some(15_000.0), &ChartConfig::default());

        for pixel in all_pixels(&chart) {
            assert!(pixel.x.is_finite() && pixel.y.is_finite());
        }
    }

    #[test]
    fn test_zero_mileage_produces_finite_pixels() {
        let (c1, c2, hit) = curves(0.0);
        assert_eq!(c1.len(), 1);
        let chart = Chart::build(&c1, &c2, hit, Some(15_000.0), &ChartConfig::default());

        for pixel in all_pixels(&chart) {
            assert!(pixel.x.is_finite() && pixel.y.is_finite());
        }
    }

    #[test]
    fn test_paint_clears_first() {
        #[derive(Default)]
        struct Recorder {
            cleared: Option<(u32, u32)>,
            drawn: usize,
        }

        impl Surface for Recorder {
            fn clear(&mut self, width: u32, height: u32) {
                assert_eq!(self.drawn, 0);
                self.cleared = Some((width, height));
            }

            fn draw(&mut self, _command: &DrawCommand) {
                assert!(self.cleared.is_some());
                self.drawn += 1;
            }
        }

        let (c1, c2, hit) = curves(20_000.0);
        let chart = Chart::build(
            &c1,
            &c2,
            hit,
            None,
            &ChartConfig::default().with_dimensions(640, 480),
        );
        let mut recorder = Recorder::default();
        chart.paint(&mut recorder);

        assert_eq!(recorder.cleared, Some((640, 480)));
        assert_eq!(recorder.drawn, chart.commands.len());
    }

    #[test]
    fn test_to_svg() {
        let (c1, c2, hit) = curves(100_000.0);
        let svg = Chart::build(&c1, &c2, hit, None, &ChartConfig::default()).to_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(colors::VEHICLE_1));
        assert!(svg.contains(colors::VEHICLE_2));
        assert!(svg.contains(colors::BREAK_EVEN));
        assert!(svg.contains("Vehicle 1"));
    }
}
