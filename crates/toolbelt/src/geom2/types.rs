//! Basic 2D value types: `Point`, `Edge`, `Polygon`, `Side`, and the input error.
//!
//! - `Point`: an `(x, y)` pair, `nalgebra::Vector2<f64>`.
//! - `Edge`: derived pair of consecutive vertices; produced on demand, never stored.
//! - `Polygon`: ordered closed cycle of at least three finite vertices.
//!
//! Code cross-refs: `predicates::{orient, segments_intersect, point_in_polygon}`,
//! `collide::{detect, Contact}`

use super::predicates::scale_pow2;
use nalgebra::Vector2;
use thiserror::Error;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Minimum vertex count of a polygon.
pub const MIN_VERTICES: usize = 3;

/// Which input polygon a witness index or an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Why a vertex list was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("{count} vertices, at least {} required", MIN_VERTICES)]
    TooFewVertices { count: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Errors raised by the 2D geometry module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeomError {
    /// `side` is set when the list was checked as one of a pair (`detect`).
    #[error("invalid input{}: {}", side_label(.side), .reason)]
    InvalidInput {
        side: Option<Side>,
        reason: InvalidInput,
    },
}

impl GeomError {
    /// Tag the error with the polygon it came from.
    pub fn with_side(self, side: Side) -> Self {
        match self {
            GeomError::InvalidInput { reason, .. } => GeomError::InvalidInput {
                side: Some(side),
                reason,
            },
        }
    }
}

fn side_label(side: &Option<Side>) -> &'static str {
    match side {
        Some(Side::A) => " in polygon a",
        Some(Side::B) => " in polygon b",
        None => "",
    }
}

/// Segment between two consecutive polygon vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Closed polygon given by its vertex cycle.
///
/// Invariants (checked by every constructor):
/// - At least `MIN_VERTICES` vertices.
/// - All coordinates finite.
///
/// Self-intersecting and repeated vertices are accepted; the predicates stay
/// deterministic on them.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Point>,
}

impl Polygon {
    /// Validate and wrap a vertex list. Order defines the edge cycle.
    pub fn new(verts: Vec<Point>) -> Result<Self, GeomError> {
        validate(&verts)?;
        Ok(Self { verts })
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self, GeomError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Never true for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1` (mod n).
    #[inline]
    pub fn edge(&self, i: usize) -> Edge {
        let n = self.verts.len();
        Edge::new(self.verts[i % n], self.verts[(i + 1) % n])
    }

    /// All edges in cycle order, including the closing edge last → first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.verts.len()).map(move |i| self.edge(i))
    }

    /// Same polygon moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Result<Self, GeomError> {
        let t = Point::new(dx, dy);
        Self::new(self.verts.iter().map(|p| p + t).collect())
    }

    /// Every coordinate times `2^k`; see `predicates::rescale_exponent`.
    pub(crate) fn scaled_pow2(&self, k: i32) -> Self {
        Self {
            verts: self.verts.iter().map(|&p| scale_pow2(p, k)).collect(),
        }
    }

    /// Same cycle, starting at vertex `k` (mod n).
    pub fn rotated_start(&self, k: usize) -> Self {
        let mut verts = self.verts.clone();
        let n = verts.len();
        verts.rotate_left(k % n);
        Self { verts }
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeomError;

    fn try_from(verts: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(verts)
    }
}

fn validate(verts: &[Point]) -> Result<(), GeomError> {
    let reason = if verts.len() < MIN_VERTICES {
        InvalidInput::TooFewVertices { count: verts.len() }
    } else if let Some(index) = verts
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        InvalidInput::NonFinite { index }
    } else {
        return Ok(());
    };
    Err(GeomError::InvalidInput { side: None, reason })
}
