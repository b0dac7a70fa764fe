//! Polygon collision: boundary crossing or vertex containment.
//!
//! Two polygons collide when
//! - some edge of one intersects some edge of the other (closed segments, so
//!   touching counts), or
//! - some vertex of one lies inside the other (crossing-number test).
//!
//! Checks run A-vertices-in-B, then B-vertices-in-A, then the O(n·m) edge
//! sweep, stopping at the first hit. Order only changes which `Contact` is
//! reported, never the verdict.

use super::predicates::{
    point_in_polygon_unscaled, rescale_exponent, segments_intersect_unscaled,
};
use super::types::{GeomError, Point, Polygon, Side};

/// Witness for a positive collision verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Vertex `vertex` of polygon `of` lies inside the other polygon.
    VertexInside { of: Side, vertex: usize },
    /// Edge `edge_a` of A intersects edge `edge_b` of B.
    EdgeCrossing { edge_a: usize, edge_b: usize },
}

impl Polygon {
    /// First collision witness between `self` (A) and `other` (B), if any.
    ///
    /// Both polygons share one power-of-two rescale when their coordinates
    /// leave the safe range (see `predicates`), so witnesses are unaffected.
    pub fn contact(&self, other: &Polygon) -> Option<Contact> {
        let all = self.vertices().iter().chain(other.vertices()).copied();
        match rescale_exponent(all) {
            Some(k) => contact_unscaled(&self.scaled_pow2(k), &other.scaled_pow2(k)),
            None => contact_unscaled(self, other),
        }
    }

    /// Boundaries intersect or one polygon holds a vertex of the other.
    #[inline]
    pub fn collides(&self, other: &Polygon) -> bool {
        self.contact(other).is_some()
    }
}

fn contact_unscaled(a: &Polygon, b: &Polygon) -> Option<Contact> {
    if let Some(vertex) = first_vertex_inside(a, b) {
        return Some(Contact::VertexInside { of: Side::A, vertex });
    }
    if let Some(vertex) = first_vertex_inside(b, a) {
        return Some(Contact::VertexInside { of: Side::B, vertex });
    }
    for (edge_a, ea) in a.edges().enumerate() {
        if let Some(edge_b) = b
            .edges()
            .position(|eb| segments_intersect_unscaled(ea, eb))
        {
            return Some(Contact::EdgeCrossing { edge_a, edge_b });
        }
    }
    None
}

fn first_vertex_inside(from: &Polygon, target: &Polygon) -> Option<usize> {
    from.vertices()
        .iter()
        .position(|&p| point_in_polygon_unscaled(p, target))
}

/// Validate two vertex cycles and report whether they collide.
///
/// Errors with `GeomError::InvalidInput` if either list has fewer than three
/// vertices or a non-finite coordinate; the error names the offending side,
/// A first.
pub fn detect(a: &[Point], b: &[Point]) -> Result<bool, GeomError> {
    let pa = Polygon::new(a.to_vec()).map_err(|e| e.with_side(Side::A))?;
    let pb = Polygon::new(b.to_vec()).map_err(|e| e.with_side(Side::B))?;
    Ok(pa.collides(&pb))
}
