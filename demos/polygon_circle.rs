// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw a translucent rectangle and a red circle outline, and save them as a PNG.
//!
//! Run with `cargo run --example polygon_circle`; set `RUST_LOG=debug` for
//! layout details.

use std::error::Error;
use std::fs;
use std::path::Path;

use shapeplot::{render, Canvas, Circle, Color, ExportOptions, Polygon, Style};

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let polygon = Polygon::new([(1.0, 1.0), (5.0, 1.0), (5.0, 4.0), (1.0, 4.0)])?;
    let circle = Circle::new((3.0, 2.0), 6.0).to_polygon(200)?;

    let mut canvas = Canvas::new();
    render(
        &mut canvas,
        &polygon.into(),
        &Style::new().with_facecolor(Color::BLUE).with_alpha(0.4),
    )?;
    render(
        &mut canvas,
        &circle.into(),
        &Style::new().with_edgecolor(Color::RED).with_linewidth(2.0),
    )?;

    let out = Path::new("figs/circle_polygon.png");
    if let Some(dir) = out.parent() {
        fs::create_dir_all(dir)?;
    }
    canvas.save_png(out, &ExportOptions::default().with_dpi(200.0))?;
    Ok(())
}
