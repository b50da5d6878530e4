// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::f64::consts::PI;

use smallvec::SmallVec;

use crate::{Point, Polygon, Rect, Shape, ShapeError};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// The number of samples used by [`Circle::to_polygon_default`].
    pub const DEFAULT_NUM_POINTS: usize = 100;

    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Approximate the circle by a regular polygon with `num_points` vertices.
    ///
    /// Vertex `i` sits at angle `2π·i/num_points`, so the ring starts at
    /// `(center.x + radius, center.y)` and runs counter-clockwise. The first
    /// vertex is not repeated at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidCircleParameters`] if the center is not
    /// finite, if the radius is not a finite positive number, or if
    /// `num_points` is less than 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeplot::{Circle, Point};
    ///
    /// let ring = Circle::new((3.0, 2.0), 6.0).to_polygon(200).unwrap();
    /// assert_eq!(ring.num_vertices(), 200);
    /// assert_eq!(ring.exterior()[0], Point::new(9.0, 2.0));
    /// ```
    pub fn to_polygon(&self, num_points: usize) -> Result<Polygon, ShapeError> {
        if !self.center.is_finite()
            || !self.radius.is_finite()
            || self.radius <= 0.0
            || num_points < Polygon::MIN_VERTICES
        {
            return Err(ShapeError::InvalidCircleParameters {
                radius: self.radius,
                num_points,
            });
        }
        let ring: SmallVec<[Point; 4]> = (0..num_points)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / num_points as f64;
                let (sin, cos) = angle.sin_cos();
                Point::new(
                    self.center.x + self.radius * cos,
                    self.center.y + self.radius * sin,
                )
            })
            .collect();
        Polygon::try_from(ring)
    }

    /// Approximate the circle with [`Circle::DEFAULT_NUM_POINTS`] vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidCircleParameters`] if the radius is not a
    /// finite positive number.
    #[inline]
    pub fn to_polygon_default(&self) -> Result<Polygon, ShapeError> {
        self.to_polygon(Self::DEFAULT_NUM_POINTS)
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        (2.0 * PI * self.radius).abs()
    }

    fn winding(&self, pt: Point) -> i32 {
        if self.center.distance_squared(pt) < self.radius * self.radius {
            1
        } else {
            0
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        let Point { x, y } = self.center;
        Rect::new(x - r, y - r, x + r, y + r)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Circle, Point, Polygon, Shape, ShapeError};

    fn assert_approx_eq(x: f64, y: f64, tolerance: f64) {
        assert!((x - y).abs() <= tolerance, "{x} != {y}");
    }

    /// Largest gap between the ring and the true circle, reached at edge midpoints.
    fn max_deviation(circle: &Circle, ring: &Polygon) -> f64 {
        ring.edges()
            .map(|(a, b)| circle.radius - circle.center.distance(a.midpoint(b)))
            .fold(0.0, f64::max)
    }

    #[test]
    fn samples_lie_on_the_circle() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let center = Point::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            let radius = rng.random_range(0.01..100.0);
            let n = rng.random_range(3..500);
            let circle = Circle::new(center, radius);
            let ring = circle.to_polygon(n).unwrap();

            assert_eq!(ring.num_vertices(), n);
            for &pt in ring.exterior() {
                assert_approx_eq(pt.distance(center), radius, 1e-9 * radius.max(1.0));
            }
            assert_eq!(ring.exterior()[0], Point::new(center.x + radius, center.y));
            assert!(ring.is_ccw());
        }
    }

    #[test]
    fn quarter_turns() {
        let ring = Circle::new((0.0, 0.0), 1.0).to_polygon(4).unwrap();
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (pt, (x, y)) in ring.exterior().iter().zip(expected) {
            assert_approx_eq(pt.x, x, 1e-12);
            assert_approx_eq(pt.y, y, 1e-12);
        }
    }

    #[test]
    fn vertices_follow_the_sample_angle() {
        let circle = Circle::new((3.0, 2.0), 6.0);
        for n in [3, 7, 100, 200, 999] {
            let ring = circle.to_polygon(n).unwrap();
            for (i, pt) in ring.exterior().iter().enumerate() {
                let (sin, cos) = (2.0 * PI * i as f64 / n as f64).sin_cos();
                assert_eq!(*pt, Point::new(3.0 + 6.0 * cos, 2.0 + 6.0 * sin), "i = {i}, n = {n}");
            }
        }
    }

    #[test]
    fn default_sample_count() {
        let ring = Circle::new((0.0, 0.0), 2.0).to_polygon_default().unwrap();
        assert_eq!(ring.num_vertices(), Circle::DEFAULT_NUM_POINTS);
        assert_eq!(Circle::DEFAULT_NUM_POINTS, 100);
    }

    #[test]
    fn approximation_converges() {
        let circle = Circle::new((3.0, 2.0), 6.0);
        let mut last_area = 0.0;
        let mut last_deviation = f64::INFINITY;
        for n in [3, 4, 6, 10, 25, 100, 200, 1000] {
            let ring = circle.to_polygon(n).unwrap();
            let area = ring.area();
            let deviation = max_deviation(&circle, &ring);
            assert!(area > last_area, "area did not grow at n = {n}");
            assert!(area < circle.area(), "area overshot at n = {n}");
            assert!(deviation < last_deviation, "deviation did not shrink at n = {n}");
            last_area = area;
            last_deviation = deviation;
        }
        assert_approx_eq(last_area, PI * 36.0, 1e-2);
    }

    #[test]
    fn invalid_parameters() {
        for (radius, n) in [(0.0, 100), (-1.0, 100), (f64::INFINITY, 100), (1.0, 0), (1.0, 2)] {
            assert_eq!(
                Circle::new((0.0, 0.0), radius).to_polygon(n),
                Err(ShapeError::InvalidCircleParameters {
                    radius,
                    num_points: n
                })
            );
        }
        assert!(Circle::new((0.0, 0.0), f64::NAN).to_polygon(10).is_err());
        for center in [(f64::NAN, 0.0), (0.0, f64::INFINITY)] {
            assert_eq!(
                Circle::new(center, 1.0).to_polygon(10),
                Err(ShapeError::InvalidCircleParameters {
                    radius: 1.0,
                    num_points: 10
                })
            );
        }
    }

    #[test]
    fn analytic_shape() {
        let circle = Circle::new((1.0, 1.0), 2.0);
        assert_approx_eq(circle.area(), 4.0 * PI, 1e-12);
        assert_approx_eq(circle.perimeter(), 4.0 * PI, 1e-12);
        assert_eq!(circle.winding(Point::new(2.0, 2.0)), 1);
        assert_eq!(circle.winding(Point::new(3.5, 1.0)), 0);
        assert_eq!(circle.bounding_box().center(), Point::new(1.0, 1.0));
    }
}
