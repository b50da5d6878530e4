// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simple polygons defined by a single closed ring.

use alloc::vec::Vec;
use core::iter;

use smallvec::SmallVec;

use crate::{Point, Rect, Shape, ShapeError};

/// A simple polygon: one closed ring of vertices, without holes.
///
/// The last vertex is implicitly connected back to the first; no closing
/// duplicate is stored. Either winding order is accepted, and the ring is
/// not checked for self-intersection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "schemars", schemars(transparent))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SmallVec<[Point; 4]>", into = "SmallVec<[Point; 4]>")
)]
pub struct Polygon {
    ring: SmallVec<[Point; 4]>,
}

impl Polygon {
    /// The minimum number of vertices of a ring.
    pub const MIN_VERTICES: usize = 3;

    /// Create a polygon whose ring is exactly the given vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidVertexCount`] if fewer than
    /// [`Polygon::MIN_VERTICES`] vertices are supplied. Collinear or
    /// repeated vertices are passed through.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeplot::{Point, Polygon};
    ///
    /// let square = Polygon::new([(1.0, 1.0), (5.0, 1.0), (5.0, 4.0), (1.0, 4.0)]).unwrap();
    /// assert_eq!(square.num_vertices(), 4);
    /// assert_eq!(square.exterior()[2], Point::new(5.0, 4.0));
    /// assert!(Polygon::new([(0.0, 0.0), (1.0, 1.0)]).is_err());
    /// ```
    pub fn new<P: Into<Point>>(vertices: impl IntoIterator<Item = P>) -> Result<Polygon, ShapeError> {
        let ring: SmallVec<[Point; 4]> = vertices.into_iter().map(Into::into).collect();
        Polygon::from_ring(ring)
    }

    fn from_ring(ring: SmallVec<[Point; 4]>) -> Result<Polygon, ShapeError> {
        if ring.len() < Self::MIN_VERTICES {
            return Err(ShapeError::InvalidVertexCount { count: ring.len() });
        }
        Ok(Polygon { ring })
    }

    /// The exterior ring, in construction order.
    #[inline]
    pub fn exterior(&self) -> &[Point] {
        &self.ring
    }

    /// The exterior ring as parallel x and y coordinate arrays.
    pub fn xy(&self) -> (Vec<f64>, Vec<f64>) {
        self.ring.iter().map(|pt| (pt.x, pt.y)).unzip()
    }

    /// The number of vertices in the ring.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.ring.len()
    }

    /// Iterate over the edges of the ring, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let next = self.ring.iter().copied().cycle().skip(1);
        self.ring.iter().copied().zip(next)
    }

    /// Whether the ring winds counter-clockwise in a y-up coordinate system.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.area() > 0.0
    }

    /// The same ring with the opposite winding order.
    ///
    /// The first vertex is kept in place.
    #[must_use]
    pub fn reversed(&self) -> Polygon {
        let ring = iter::once(self.ring[0])
            .chain(self.ring[1..].iter().rev().copied())
            .collect();
        Polygon { ring }
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
    }

    fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    fn winding(&self, pt: Point) -> i32 {
        let mut winding = 0;
        for (a, b) in self.edges() {
            let side = (b.x - a.x) * (pt.y - a.y) - (pt.x - a.x) * (b.y - a.y);
            if a.y <= pt.y {
                if b.y > pt.y && side > 0.0 {
                    winding += 1;
                }
            } else if b.y <= pt.y && side < 0.0 {
                winding -= 1;
            }
        }
        winding
    }

    fn bounding_box(&self) -> Rect {
        let first = self.ring[0];
        self.ring[1..]
            .iter()
            .fold(Rect::new(first.x, first.y, first.x, first.y), |rect, &pt| {
                rect.union_pt(pt)
            })
    }
}

impl TryFrom<SmallVec<[Point; 4]>> for Polygon {
    type Error = ShapeError;

    fn try_from(ring: SmallVec<[Point; 4]>) -> Result<Polygon, ShapeError> {
        Polygon::from_ring(ring)
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = ShapeError;

    fn try_from(ring: Vec<Point>) -> Result<Polygon, ShapeError> {
        Polygon::from_ring(SmallVec::from_vec(ring))
    }
}

impl From<Polygon> for SmallVec<[Point; 4]> {
    fn from(polygon: Polygon) -> SmallVec<[Point; 4]> {
        polygon.ring
    }
}
