// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for shapes.

use crate::{Point, Rect};

/// A generic trait for closed, area-enclosing shapes.
pub trait Shape {
    /// Signed area.
    ///
    /// Positive for counter-clockwise rings in a y-up coordinate system.
    fn area(&self) -> f64;

    /// Total length of perimeter.
    fn perimeter(&self) -> f64;

    /// Winding number of point.
    ///
    /// This uses the nonzero convention: counter-clockwise rings wind +1
    /// around interior points, clockwise rings wind -1.
    fn winding(&self, pt: Point) -> i32;

    /// The smallest rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect;

    /// Returns `true` if the [`Point`] is inside this shape.
    ///
    /// This is only meaningful for closed shapes.
    fn contains(&self, pt: Point) -> bool {
        self.winding(pt) != 0
    }
}
