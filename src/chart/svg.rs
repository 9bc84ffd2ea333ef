//! SVG rendering of charts.
//!
//! [`SvgSurface`] turns draw commands into a standalone SVG document.

use std::fmt::Write as _;

use super::draw::{Anchor, DrawCommand, Pixel, Stroke, Surface};

const FONT_FAMILY: &str = "Arial, sans-serif";

/// A [`Surface`] that accumulates an SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    svg: String,
}

impl SvgSurface {
    /// Creates an empty surface. Call [`Surface::clear`] before drawing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the document and returns it.
    #[must_use]
    pub fn finish(mut self) -> String {
        if !self.svg.is_empty() {
            self.svg.push_str("</svg>\n");
        }
        self.svg
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, width: u32, height: u32) {
        self.svg.clear();
        let _ = writeln!(
            self.svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        );
        let _ = writeln!(
            self.svg,
            r##"<rect width="{}" height="{}" fill="#ffffff"/>"##,
            width, height
        );
    }

    fn draw(&mut self, command: &DrawCommand) {
        let svg = &mut self.svg;
        match command {
            DrawCommand::Line { from, to, stroke } => {
                let _ = writeln!(
                    svg,
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    stroke_attrs(stroke)
                );
            }
            DrawCommand::Polyline { points, stroke } => {
                if points.is_empty() {
                    return;
                }
                let _ = writeln!(
                    svg,
                    r#"<path d="{}" fill="none" stroke-linejoin="round" {}/>"#,
                    path_data(points),
                    stroke_attrs(stroke)
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                outline,
            } => {
                let outline = outline
                    .as_ref()
                    .map(|s| format!(" {}", stroke_attrs(s)))
                    .unwrap_or_default();
                let _ = writeln!(
                    svg,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"{}/>"#,
                    center.x, center.y, radius, fill, outline
                );
            }
            DrawCommand::Rect {
                origin,
                width,
                height,
                fill,
            } => {
                let _ = writeln!(
                    svg,
                    r#"<rect x="{:.2}" y="{:.2}" width="{}" height="{}" fill="{}"/>"#,
                    origin.x, origin.y, width, height, fill
                );
            }
            DrawCommand::Text {
                position,
                text,
                style,
            } => {
                let anchor = match style.anchor {
                    Anchor::Start => "start",
                    Anchor::Middle => "middle",
                    Anchor::End => "end",
                };
                let weight = if style.bold { r#" font-weight="bold""# } else { "" };
                let transform = if style.rotation == 0.0 {
                    String::new()
                } else {
                    format!(
                        r#" transform="rotate({} {:.2} {:.2})""#,
                        style.rotation, position.x, position.y
                    )
                };
                let _ = writeln!(
                    svg,
                    r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" font-family="{}" font-size="{}"{} fill="{}"{}>{}</text>"#,
                    position.x,
                    position.y,
                    anchor,
                    FONT_FAMILY,
                    style.size,
                    weight,
                    style.color,
                    transform,
                    escape(text)
                );
            }
        }
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    format!(r#"stroke="{}" stroke-width="{}""#, stroke.color, stroke.width)
}

fn path_data(points: &[Pixel]) -> String {
    let mut path = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        let prefix = if i == 0 { "M" } else { " L" };
        let _ = write!(path, "{} {:.2},{:.2}", prefix, p.x, p.y);
    }
    path
}

/// Escapes the characters that are special in SVG text content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
