// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording drawing surface and its layout for export.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::{Color, Point, Rect, Style, Surface};

/// One recorded fill-and-stroke call.
#[derive(Clone, Debug, PartialEq)]
pub struct FillCommand {
    /// X coordinates of the closed ring.
    pub x: Vec<f64>,
    /// Y coordinates of the closed ring, parallel to `x`.
    pub y: Vec<f64>,
    /// The style the ring is drawn with.
    pub style: Style,
}

impl FillCommand {
    /// The ring as points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }

    /// Data bounds of the ring, ignoring the stroke.
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points_iter(self.points())
    }
}

/// Layout and resolution used when exporting a [`Canvas`].
///
/// Data units are mapped to points with `pt_per_unit` on both axes, so the
/// aspect ratio is always equal. Line widths and padding are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExportOptions {
    /// Raster resolution in dots per inch. Ignored by SVG export.
    pub dpi: f64,
    /// Points per data unit.
    pub pt_per_unit: f64,
    /// White space around the drawing, in points.
    pub padding: f64,
    /// Background color, or `None` for a transparent background.
    pub background: Option<Color>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            dpi: 100.0,
            pt_per_unit: 36.0,
            padding: 7.2,
            background: Some(Color::WHITE),
        }
    }
}

impl ExportOptions {
    /// Set the raster resolution.
    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the number of points per data unit.
    #[must_use]
    pub fn with_pt_per_unit(mut self, pt_per_unit: f64) -> Self {
        self.pt_per_unit = pt_per_unit;
        self
    }

    /// Set the padding in points.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<Option<Color>>) -> Self {
        self.background = background.into();
        self
    }

    /// Pixels per data unit at the configured resolution.
    #[inline]
    pub fn px_per_unit(&self) -> f64 {
        self.pt_per_unit * self.dpi / 72.0
    }
}

/// A [`Surface`] that records every draw call, in order.
///
/// Later commands are painted over earlier ones on export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    commands: Vec<FillCommand>,
}

impl Canvas {
    /// An empty canvas.
    #[inline]
    pub const fn new() -> Canvas {
        Canvas {
            commands: Vec::new(),
        }
    }

    /// The recorded commands, in draw order.
    #[inline]
    pub fn commands(&self) -> &[FillCommand] {
        &self.commands
    }

    /// The number of recorded commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Data bounds of every recorded ring, ignoring strokes.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.commands
            .iter()
            .filter_map(FillCommand::bounding_box)
            .reduce(|a, b| a.union(b))
    }

    /// The data rectangle an export covers.
    ///
    /// Each ring's bounds are grown by half its stroke width, then the union
    /// is grown by the padding. Returns `None` for an empty canvas.
    pub fn tight_bounds(&self, options: &ExportOptions) -> Option<Rect> {
        let unit = options.pt_per_unit;
        let bounds = self
            .commands
            .iter()
            .filter_map(|cmd| {
                let extent = cmd.style.stroke_extent() / unit;
                cmd.bounding_box().map(|rect| rect.inflate(extent, extent))
            })
            .reduce(|a, b| a.union(b))?;
        let pad = options.padding / unit;
        Some(bounds.inflate(pad, pad))
    }

    /// Write the drawing as an SVG document.
    ///
    /// The document covers [`Canvas::tight_bounds`]; its size is given in
    /// points. Data y grows upward, so it is negated in the output.
    pub fn write_svg<W: Write>(&self, out: &mut W, options: &ExportOptions) -> fmt::Result {
        let bounds = self.tight_bounds(options).unwrap_or(Rect::ZERO);
        let unit = options.pt_per_unit;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}pt" height="{}pt" viewBox="{} {} {} {}">"#,
            bounds.width() * unit,
            bounds.height() * unit,
            bounds.x0,
            -bounds.y1 + 0.0,
            bounds.width(),
            bounds.height(),
        )?;
        if let Some(background) = options.background {
            write!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}""#,
                bounds.x0,
                -bounds.y1 + 0.0,
                bounds.width(),
                bounds.height(),
            )?;
            write_paint(out, "fill", background)?;
            writeln!(out, "/>")?;
        }
        for cmd in &self.commands {
            write!(out, r#"  <path d=""#)?;
            for (ix, pt) in cmd.points().enumerate() {
                let op = if ix == 0 { 'M' } else { 'L' };
                // Adding zero turns `-0` into `0`.
                write!(out, "{op}{} {}", pt.x, -pt.y + 0.0)?;
            }
            write!(out, "Z\"")?;
            match cmd.style.fill_color() {
                Some(color) => write_paint(out, "fill", color)?,
                None => write!(out, r#" fill="none""#)?,
            }
            if let Some(color) = cmd.style.stroke_color() {
                write_paint(out, "stroke", color)?;
                write!(
                    out,
                    r#" stroke-width="{}" stroke-linejoin="round""#,
                    cmd.style.linewidth / unit
                )?;
            }
            writeln!(out, "/>")?;
        }
        writeln!(out, "</svg>")
    }

    /// Convert the drawing to an SVG document string.
    pub fn to_svg(&self, options: &ExportOptions) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_svg(&mut out, options);
        out
    }
}

fn write_paint<W: Write>(out: &mut W, attr: &str, color: Color) -> fmt::Result {
    write!(
        out,
        r##" {attr}="#{:02x}{:02x}{:02x}""##,
        color.r, color.g, color.b
    )?;
    if color.a != 255 {
        write!(out, r#" {attr}-opacity="{}""#, color.opacity())?;
    }
    Ok(())
}

impl Surface for Canvas {
    fn fill(&mut self, x: &[f64], y: &[f64], style: &Style) {
        self.commands.push(FillCommand {
            x: x.to_vec(),
            y: y.to_vec(),
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::{render, Canvas, Color, ExportOptions, Polygon, Rect, Style, Surface};

    fn assert_rect_approx_eq(a: Rect, b: Rect) {
        let close = |x: f64, y: f64| (x - y).abs() < 1e-9;
        assert!(
            close(a.x0, b.x0) && close(a.y0, b.y0) && close(a.x1, b.x1) && close(a.y1, b.y1),
            "{a:?} != {b:?}"
        );
    }

    fn two_squares() -> Canvas {
        let mut canvas = Canvas::new();
        let first = Polygon::new([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
        let second = Polygon::new([(1.0, 1.0), (4.0, 1.0), (4.0, 3.0), (1.0, 3.0)]).unwrap();
        let fill = Style::new().with_facecolor(Color::BLUE).with_alpha(0.4).with_edgecolor(None);
        render(&mut canvas, &first.into(), &fill).unwrap();
        render(&mut canvas, &second.into(), &Style::new().with_linewidth(3.6)).unwrap();
        canvas
    }

    #[test]
    fn records_in_order() {
        let mut canvas = Canvas::new();
        canvas.fill(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0], &Style::new());
        canvas.fill(&[5.0, 6.0, 6.0], &[5.0, 5.0, 6.0], &Style::new().with_alpha(0.5));
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.commands()[0].x, vec![0.0, 1.0, 1.0]);
        assert_eq!(canvas.commands()[1].style.alpha, 0.5);

        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.bounding_box(), None);
        assert_eq!(canvas.tight_bounds(&ExportOptions::default()), None);
    }

    #[test]
    fn bounds() {
        let canvas = two_squares();
        assert_eq!(canvas.bounding_box(), Some(Rect::new(0.0, 0.0, 4.0, 3.0)));

        // The second square has a 3.6pt stroke: 0.05 units each side at 36pt per unit.
        let options = ExportOptions::default().with_padding(0.0);
        assert_rect_approx_eq(
            canvas.tight_bounds(&options).unwrap(),
            Rect::new(0.0, 0.0, 4.05, 3.05),
        );

        let options = ExportOptions::default().with_padding(36.0);
        assert_rect_approx_eq(
            canvas.tight_bounds(&options).unwrap(),
            Rect::new(-1.0, -1.0, 5.05, 4.05),
        );
    }

    #[test]
    fn px_per_unit() {
        let options = ExportOptions::default().with_dpi(200.0).with_pt_per_unit(36.0);
        assert_eq!(options.px_per_unit(), 100.0);
    }

    #[test]
    fn svg_export() {
        let canvas = two_squares();
        let options = ExportOptions::default()
            .with_padding(0.0)
            .with_background(None);
        let svg = canvas.to_svg(&options);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""), "{svg}");
        assert!(svg.trim_end().ends_with("</svg>"), "{svg}");
        assert!(!svg.contains("<rect"), "{svg}");
        assert!(!svg.contains("-0 ") && !svg.contains("-0L"), "{svg}");
        assert_eq!(svg.matches("<path").count(), 2);

        let first = svg.find("M0 0L2 0L2 -2L0 -2Z").expect("first ring");
        let second = svg.find("M1 -1L4 -1L4 -3L1 -3Z").expect("second ring");
        assert!(first < second, "draw order must be preserved");

        assert!(svg.contains(r##"fill="#0000ff" fill-opacity="0.4""##), "{svg}");
        assert!(svg.contains(r#"fill="none""#), "{svg}");
        assert!(svg.contains(r##"stroke="#000000" stroke-width="0.1""##), "{svg}");
    }

    #[test]
    fn svg_background() {
        let svg = two_squares().to_svg(&ExportOptions::default());
        assert!(svg.contains(r##"<rect"##), "{svg}");
        assert!(svg.contains(r##"fill="#ffffff"/>"##), "{svg}");
    }
}
