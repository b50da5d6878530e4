// Copyright 2026 the Shapeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building or rendering shapes.

use core::fmt;

use crate::GeometryKind;

/// An error which can be returned when building or rendering a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeError {
    /// A polygon ring needs at least three vertices.
    InvalidVertexCount {
        /// The number of vertices that was supplied.
        count: usize,
    },
    /// A circle needs a finite center, a finite positive radius and at least
    /// three samples.
    InvalidCircleParameters {
        /// The requested radius.
        radius: f64,
        /// The requested number of samples.
        num_points: usize,
    },
    /// The geometry cannot be drawn as a filled region.
    UnsupportedGeometryKind(GeometryKind),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidVertexCount { count } => {
                write!(f, "a polygon needs at least 3 vertices, got {count}")
            }
            ShapeError::InvalidCircleParameters { radius, num_points } => write!(
                f,
                "invalid circle: needs a finite center, radius {radius} must be positive and num_points {num_points} at least 3"
            ),
            ShapeError::UnsupportedGeometryKind(kind) => {
                write!(f, "unsupported geometry: {kind}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}
