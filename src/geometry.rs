// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of geometry values the crate knows about.

use alloc::vec::Vec;
use core::fmt;

use crate::{MultiPolygon, Point, Polygon, Rect, Shape};

/// A geometry value.
///
/// Only [`Geometry::Polygon`] and [`Geometry::MultiPolygon`] enclose an area
/// and can be rendered as filled regions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// A single closed polygon.
    Polygon(Polygon),
    /// An ordered collection of polygons.
    MultiPolygon(MultiPolygon),
    /// A single point.
    Point(Point),
    /// An open polyline.
    LineString(Vec<Point>),
}

/// The variant tag of a [`Geometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryKind {
    /// See [`Geometry::Polygon`].
    Polygon,
    /// See [`Geometry::MultiPolygon`].
    MultiPolygon,
    /// See [`Geometry::Point`].
    Point,
    /// See [`Geometry::LineString`].
    LineString,
}

impl Geometry {
    /// The variant tag of this geometry.
    #[inline]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
        }
    }

    /// The smallest rectangle enclosing the geometry.
    ///
    /// Returns `None` for an empty collection or an empty line string.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Geometry::Polygon(polygon) => Some(polygon.bounding_box()),
            Geometry::MultiPolygon(polygons) if polygons.is_empty() => None,
            Geometry::MultiPolygon(polygons) => Some(polygons.bounding_box()),
            Geometry::Point(pt) => Some(Rect::new(pt.x, pt.y, pt.x, pt.y)),
            Geometry::LineString(points) => Rect::from_points_iter(points.iter().copied()),
        }
    }
}

impl GeometryKind {
    /// The name of the geometry kind.
    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Geometry {
        Geometry::Polygon(polygon)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(polygons: MultiPolygon) -> Geometry {
        Geometry::MultiPolygon(polygons)
    }
}

impl From<Point> for Geometry {
    fn from(pt: Point) -> Geometry {
        Geometry::Point(pt)
    }
}
