// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon and circle shapes, rendered onto a shared plotting canvas.
//!
//! The shapeplot library builds simple 2D shapes (a [`Polygon`] from explicit
//! vertices, a [`Circle`] approximated by a regular polygon) and renders them
//! with a [`Style`] onto any [`Surface`]. The built-in [`Canvas`] surface
//! records every draw call in order and can export the accumulated drawing
//! as SVG, or as a PNG raster when the `raster` feature is enabled.
//!
//! # Examples
//!
//! Drawing a filled square and a stroked circle onto one canvas:
//! ```
//! use shapeplot::{render, Canvas, Circle, Color, Geometry, Polygon, Style};
//!
//! let square = Polygon::new([(1.0, 1.0), (5.0, 1.0), (5.0, 4.0), (1.0, 4.0)])?;
//! let circle = Circle::new((3.0, 2.0), 6.0).to_polygon(200)?;
//!
//! let mut canvas = Canvas::new();
//! render(
//!     &mut canvas,
//!     &Geometry::from(square),
//!     &Style::new().with_facecolor(Color::BLUE).with_alpha(0.4),
//! )?;
//! render(
//!     &mut canvas,
//!     &Geometry::from(circle),
//!     &Style::new().with_edgecolor(Color::RED).with_linewidth(2.0),
//! )?;
//!
//! assert_eq!(canvas.len(), 2);
//! assert_eq!(canvas.commands()[1].x.len(), 200);
//! # Ok::<(), shapeplot::ShapeError>(())
//! ```
//!
//! Geometry that does not enclose an area is rejected by the renderer:
//! ```
//! use shapeplot::{render, Canvas, Geometry, GeometryKind, Point, ShapeError, Style};
//!
//! let mut canvas = Canvas::new();
//! let err = render(&mut canvas, &Geometry::Point(Point::new(1.0, 2.0)), &Style::default());
//! assert_eq!(err, Err(ShapeError::UnsupportedGeometryKind(GeometryKind::Point)));
//! assert!(canvas.is_empty());
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `raster` feature
//! (enabled by default) adds PNG export through [`tiny-skia`] and requires
//! `std`. The `serde`, `schemars` and `mint` features add the usual
//! interoperability derives and conversions.
//!
//! [`libm`]: https://docs.rs/libm
//! [`tiny-skia`]: https://docs.rs/tiny-skia

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("shapeplot requires either the `std` or `libm` feature");

extern crate alloc;

mod canvas;
mod circle;
pub(crate) mod common;
mod error;
mod geometry;
mod multi_polygon;
mod point;
mod polygon;
#[cfg(feature = "raster")]
mod raster;
mod rect;
mod render;
mod shape;
mod style;

pub use crate::canvas::*;
pub use crate::circle::*;
pub use crate::error::*;
pub use crate::geometry::*;
pub use crate::multi_polygon::*;
pub use crate::point::*;
pub use crate::polygon::*;
#[cfg(feature = "raster")]
pub use crate::raster::*;
pub use crate::rect::*;
pub use crate::render::*;
pub use crate::shape::*;
pub use crate::style::*;
