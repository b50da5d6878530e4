// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collections of simple polygons drawn as one logical shape.

use alloc::vec::Vec;
use core::slice;

use crate::{Point, Polygon, Rect, Shape};

/// An ordered collection of [`Polygon`]s.
///
/// The order is the drawing order: when rendered, later polygons overlay
/// earlier ones where they overlap.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "schemars", schemars(transparent))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Create a new, empty collection.
    #[inline]
    pub const fn new() -> MultiPolygon {
        MultiPolygon {
            polygons: Vec::new(),
        }
    }

    /// Append a polygon; it will be drawn after the existing ones.
    #[inline]
    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// The constituent polygons, in drawing order.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Iterate over the constituent polygons, in drawing order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// The number of polygons.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the collection holds no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl Shape for MultiPolygon {
    fn area(&self) -> f64 {
        self.iter().map(Shape::area).sum()
    }

    fn perimeter(&self) -> f64 {
        self.iter().map(Shape::perimeter).sum()
    }

    fn winding(&self, pt: Point) -> i32 {
        self.iter().map(|polygon| polygon.winding(pt)).sum()
    }

    /// The union of the polygons' bounding boxes, or [`Rect::ZERO`] when empty.
    fn bounding_box(&self) -> Rect {
        self.iter()
            .map(Shape::bounding_box)
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon { polygons }
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> MultiPolygon {
        MultiPolygon {
            polygons: alloc::vec![polygon],
        }
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> MultiPolygon {
        MultiPolygon {
            polygons: iter.into_iter().collect(),
        }
    }
}

impl Extend<Polygon> for MultiPolygon {
    fn extend<T: IntoIterator<Item = Polygon>>(&mut self, iter: T) {
        self.polygons.extend(iter);
    }
}

impl IntoIterator for MultiPolygon {
    type Item = Polygon;
    type IntoIter = alloc::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiPolygon {
    type Item = &'a Polygon;
    type IntoIter = slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
