// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering of a [`Canvas`] into raster images.

use std::fmt;
use std::io;
use std::path::Path;

use tiny_skia as sk;

use crate::{Canvas, Color, ExportOptions, FillCommand};

/// An error which can be returned when exporting a [`Canvas`] to a raster image.
#[derive(Debug)]
pub enum ExportError {
    /// There is nothing to draw.
    EmptyCanvas,
    /// The requested pixel size is empty, not finite, or too large.
    InvalidSize {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },
    /// PNG encoding failed.
    Encode(png::EncodingError),
    /// Writing the file failed.
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptyCanvas => write!(f, "the canvas is empty"),
            ExportError::InvalidSize { width, height } => {
                write!(f, "cannot allocate a {width}x{height} pixel image")
            }
            ExportError::Encode(_) => write!(f, "failed to encode PNG"),
            ExportError::Io(_) => write!(f, "failed to write image file"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Encode(err) => Some(err),
            ExportError::Io(err) => Some(err),
            ExportError::EmptyCanvas | ExportError::InvalidSize { .. } => None,
        }
    }
}

impl From<png::EncodingError> for ExportError {
    fn from(err: png::EncodingError) -> Self {
        ExportError::Encode(err)
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl Canvas {
    /// Render the drawing into a `tiny-skia` pixel buffer.
    ///
    /// The image covers exactly [`Canvas::tight_bounds`], at
    /// [`ExportOptions::px_per_unit`] pixels per data unit. Commands are
    /// painted in order, each filled then stroked.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyCanvas`] if nothing was drawn, and
    /// [`ExportError::InvalidSize`] if the pixel buffer cannot be allocated.
    pub fn rasterize(&self, options: &ExportOptions) -> Result<sk::Pixmap, ExportError> {
        let bounds = self.tight_bounds(options).ok_or(ExportError::EmptyCanvas)?;
        let scale = options.px_per_unit();
        let width = (bounds.width() * scale).ceil();
        let height = (bounds.height() * scale).ceil();
        let invalid = ExportError::InvalidSize { width, height };
        if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0)
            || width > f64::from(u32::MAX)
            || height > f64::from(u32::MAX)
        {
            return Err(invalid);
        }
        let mut pixmap = sk::Pixmap::new(width as u32, height as u32).ok_or(invalid)?;
        log::debug!(
            "rasterizing {} commands into {}x{} pixels",
            self.len(),
            pixmap.width(),
            pixmap.height()
        );

        if let Some(background) = options.background {
            pixmap.fill(to_sk_color(background));
        }

        // Data space is y-up; pixel rows grow downward.
        let ts = sk::Transform::from_row(
            scale as f32,
            0.0,
            0.0,
            -scale as f32,
            (-bounds.x0 * scale) as f32,
            (bounds.y1 * scale) as f32,
        );
        for cmd in self.commands() {
            render_command(&mut pixmap, ts, cmd, options.pt_per_unit);
        }
        Ok(pixmap)
    }

    /// Render the drawing and write it to `path` as a PNG file.
    ///
    /// # Errors
    ///
    /// Fails like [`Canvas::rasterize`], or when encoding or writing fails.
    pub fn save_png(&self, path: impl AsRef<Path>, options: &ExportOptions) -> Result<(), ExportError> {
        let path = path.as_ref();
        let pixmap = self.rasterize(options)?;
        let data = pixmap.encode_png()?;
        std::fs::write(path, data)?;
        log::info!(
            "wrote {}x{} image to {}",
            pixmap.width(),
            pixmap.height(),
            path.display()
        );
        Ok(())
    }
}

fn render_command(canvas: &mut sk::Pixmap, ts: sk::Transform, cmd: &FillCommand, pt_per_unit: f64) {
    let Some(path) = convert_ring(cmd) else {
        log::debug!("skipping ring with {} vertices", cmd.x.len());
        return;
    };

    if let Some(color) = cmd.style.fill_color() {
        let paint = to_sk_paint(color);
        canvas.fill_path(&path, &paint, sk::FillRule::Winding, ts, None);
    }

    if let Some(color) = cmd.style.stroke_color() {
        let paint = to_sk_paint(color);
        let stroke = sk::Stroke {
            width: (cmd.style.linewidth / pt_per_unit) as f32,
            line_join: sk::LineJoin::Round,
            ..sk::Stroke::default()
        };
        canvas.stroke_path(&path, &paint, &stroke, ts, None);
    }
}

/// Convert a recorded ring into a closed tiny-skia path.
fn convert_ring(cmd: &FillCommand) -> Option<sk::Path> {
    let mut builder = sk::PathBuilder::new();
    for (ix, pt) in cmd.points().enumerate() {
        if ix == 0 {
            builder.move_to(pt.x as f32, pt.y as f32);
        } else {
            builder.line_to(pt.x as f32, pt.y as f32);
        }
    }
    builder.close();
    builder.finish()
}

fn to_sk_color(color: Color) -> sk::Color {
    sk::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn to_sk_paint(color: Color) -> sk::Paint<'static> {
    let mut paint = sk::Paint::default();
    paint.set_color(to_sk_color(color));
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use crate::{render, Canvas, Circle, Color, ExportError, ExportOptions, Polygon, Style};

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new([(x0, y0), (x1, y0), (x1, y1), (x0, y1)]).unwrap()
    }

    fn solid(color: Color) -> Style {
        Style::new().with_facecolor(color).with_edgecolor(None)
    }

    /// One data unit is ten pixels.
    fn options() -> ExportOptions {
        ExportOptions::default()
            .with_dpi(72.0)
            .with_pt_per_unit(10.0)
            .with_padding(0.0)
    }

    fn rgba(pixmap: &tiny_skia::Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let px = pixmap.pixel(x, y).unwrap().demultiply();
        (px.red(), px.green(), px.blue(), px.alpha())
    }

    #[test]
    fn empty_canvas() {
        let err = Canvas::new().rasterize(&options()).unwrap_err();
        assert!(matches!(err, ExportError::EmptyCanvas), "{err}");
    }

    #[test]
    fn tight_size_and_fill() {
        let mut canvas = Canvas::new();
        render(&mut canvas, &rect(0.0, 0.0, 4.0, 3.0).into(), &solid(Color::BLUE)).unwrap();

        let pixmap = canvas.rasterize(&options()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 30));
        assert_eq!(rgba(&pixmap, 20, 15), (0, 0, 255, 255));

        let padded = canvas.rasterize(&options().with_padding(10.0)).unwrap();
        assert_eq!((padded.width(), padded.height()), (60, 50));
        assert_eq!(rgba(&padded, 2, 2), (255, 255, 255, 255));
        assert_eq!(rgba(&padded, 30, 25), (0, 0, 255, 255));
    }

    #[test]
    fn y_axis_points_up() {
        let mut canvas = Canvas::new();
        render(&mut canvas, &rect(0.0, 0.0, 4.0, 1.0).into(), &solid(Color::RED)).unwrap();
        render(&mut canvas, &rect(0.0, 3.0, 4.0, 4.0).into(), &solid(Color::BLUE)).unwrap();

        let pixmap = canvas.rasterize(&options()).unwrap();
        assert_eq!(rgba(&pixmap, 20, 5), (0, 0, 255, 255));
        assert_eq!(rgba(&pixmap, 20, 20), (255, 255, 255, 255));
        assert_eq!(rgba(&pixmap, 20, 35), (255, 0, 0, 255));
    }

    #[test]
    fn later_commands_paint_over() {
        let mut canvas = Canvas::new();
        render(&mut canvas, &rect(0.0, 0.0, 4.0, 4.0).into(), &solid(Color::RED)).unwrap();
        render(&mut canvas, &rect(1.0, 1.0, 3.0, 3.0).into(), &solid(Color::GREEN)).unwrap();

        let pixmap = canvas.rasterize(&options()).unwrap();
        assert_eq!(rgba(&pixmap, 20, 20), (0, 128, 0, 255));
        assert_eq!(rgba(&pixmap, 5, 5), (255, 0, 0, 255));
    }

    #[test]
    fn outline_only_circle() {
        let mut canvas = Canvas::new();
        let circle = Circle::new((0.0, 0.0), 3.0).to_polygon(200).unwrap();
        let style = Style::new().with_edgecolor(Color::RED).with_linewidth(10.0);
        render(&mut canvas, &circle.into(), &style).unwrap();

        let pixmap = canvas.rasterize(&options()).unwrap();
        // 6 units across plus half of a one-unit stroke on each side.
        assert_eq!((pixmap.width(), pixmap.height()), (70, 70));
        assert_eq!(rgba(&pixmap, 35, 35), (255, 255, 255, 255));
        assert_eq!(rgba(&pixmap, 65, 35), (255, 0, 0, 255));
    }

    #[test]
    fn transparent_background() {
        let mut canvas = Canvas::new();
        render(&mut canvas, &rect(0.0, 0.0, 2.0, 2.0).into(), &Style::new()).unwrap();
        let pixmap = canvas
            .rasterize(&options().with_background(None).with_padding(5.0))
            .unwrap();
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn save_png() {
        let mut canvas = Canvas::new();
        render(&mut canvas, &rect(0.0, 0.0, 1.0, 1.0).into(), &Style::new()).unwrap();

        let path = std::env::temp_dir().join(format!("shapeplot-{}.png", std::process::id()));
        canvas.save_png(&path, &options()).unwrap();
        let data = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn missing_directory() {
        let mut canvas = Canvas::new();
        render(&mut canvas, &rect(0.0, 0.0, 1.0, 1.0).into(), &Style::new()).unwrap();
        let path = std::env::temp_dir()
            .join("shapeplot-no-such-dir")
            .join("out.png");
        let err = canvas.save_png(path, &options()).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)), "{err}");
    }
}
