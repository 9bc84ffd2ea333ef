//! Backend-neutral drawing instructions.
//!
//! A [`Chart`](super::Chart) is a list of [`DrawCommand`]s in paint order.
//! Any raster or vector backend can replay it by implementing [`Surface`].

use serde::{Deserialize, Serialize};

/// A position in pixel space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl Pixel {
    /// Creates a pixel position.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Outline style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// CSS color.
    pub color: String,
    /// Line width in pixels.
    pub width: f64,
}

impl Stroke {
    /// Creates a stroke style.
    #[must_use]
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Text appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    /// Bold weight.
    pub bold: bool,
    /// CSS color.
    pub color: String,
    /// Alignment.
    pub anchor: Anchor,
    /// Rotation in degrees around the anchor point, clockwise.
    pub rotation: f64,
}

impl TextStyle {
    /// Regular-weight, unrotated text.
    #[must_use]
    pub fn new(size: f64, color: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            size,
            bold: false,
            color: color.into(),
            anchor,
            rotation: 0.0,
        }
    }

    /// Switches to bold weight.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Rotates the text by `degrees`.
    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// A single paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Straight segment.
    Line {
        /// Start point.
        from: Pixel,
        /// End point.
        to: Pixel,
        /// Line style.
        stroke: Stroke,
    },
    /// Connected open path through `points` in order.
    Polyline {
        /// Vertices.
        points: Vec<Pixel>,
        /// Line style.
        stroke: Stroke,
    },
    /// Filled circle.
    Circle {
        /// Center point.
        center: Pixel,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        fill: String,
        /// Optional outline.
        outline: Option<Stroke>,
    },
    /// Filled axis-aligned rectangle.
    Rect {
        /// Top-left corner.
        origin: Pixel,
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
        /// Fill color.
        fill: String,
    },
    /// A text label.
    Text {
        /// Anchor point (baseline).
        position: Pixel,
        /// Label content.
        text: String,
        /// Appearance.
        style: TextStyle,
    },
}

/// A drawing target.
///
/// [`Chart::paint`](super::Chart::paint) calls [`clear`](Surface::clear)
/// once and then [`draw`](Surface::draw) for every command in order.
pub trait Surface {
    /// Discards previous content and resizes to `width` x `height`.
    fn clear(&mut self, width: u32, height: u32);

    /// Paints one command on top of everything drawn so far.
    fn draw(&mut self, command: &DrawCommand);
}
