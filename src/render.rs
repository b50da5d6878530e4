// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing geometry onto a surface.

use crate::{Geometry, Polygon, ShapeError, Style};

/// Something shapes can be drawn onto.
pub trait Surface {
    /// Fill and stroke one closed ring.
    ///
    /// `x` and `y` are parallel coordinate arrays of the same length; the
    /// last point is implicitly connected to the first. The interior is
    /// filled with `style.facecolor`, the boundary stroked with
    /// `style.edgecolor` at `style.linewidth`, both at `style.alpha`.
    fn fill(&mut self, x: &[f64], y: &[f64], style: &Style);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill(&mut self, x: &[f64], y: &[f64], style: &Style) {
        (**self).fill(x, y, style);
    }
}

/// Draw `geometry` onto `surface` with `style`.
///
/// A [`Geometry::Polygon`] produces exactly one [`Surface::fill`] call. A
/// [`Geometry::MultiPolygon`] renders each of its polygons in order with the
/// same style, so later polygons overlay earlier ones.
///
/// # Errors
///
/// Returns [`ShapeError::UnsupportedGeometryKind`] for any geometry that
/// does not enclose an area; nothing is drawn in that case.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &Geometry,
    style: &Style,
) -> Result<(), ShapeError> {
    match geometry {
        Geometry::Polygon(polygon) => {
            render_polygon(surface, polygon, style);
            Ok(())
        }
        Geometry::MultiPolygon(polygons) => {
            for polygon in polygons {
                render_polygon(surface, polygon, style);
            }
            Ok(())
        }
        Geometry::Point(_) | Geometry::LineString(_) => {
            let kind = geometry.kind();
            log::debug!("refusing to render {kind} geometry");
            Err(ShapeError::UnsupportedGeometryKind(kind))
        }
    }
}

fn render_polygon<S: Surface + ?Sized>(surface: &mut S, polygon: &Polygon, style: &Style) {
    let (x, y) = polygon.xy();
    log::trace!("fill {} vertices with {:?}", x.len(), style);
    surface.fill(&x, &y, style);
}
