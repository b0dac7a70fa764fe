//! 2D polygon collision detection.
//!
//! Purpose
//! - Decide whether two polygons overlap: boundary crossing (touching included)
//!   or one polygon holding a vertex of the other.
//! - Keep the API minimal and numerically explicit: exact-sign predicates, no
//!   hidden tolerances.
//!
//! Conventions
//! - `Polygon` values are validated on construction (≥3 vertices, finite
//!   coordinates); everything downstream is infallible.
//! - Edges are derived on demand from consecutive vertices plus the closing
//!   edge; they are never stored.
//!
//! Code cross-refs: `Polygon`, `Contact`, `detect`, `point_in_polygon`, `segments_intersect`

mod collide;
mod predicates;
pub mod rand;
mod types;

pub use collide::{detect, Contact};
pub use predicates::{on_segment, orient, point_in_polygon, segments_intersect, Orientation};
pub use types::{Edge, GeomError, InvalidInput, Point, Polygon, Side, MIN_VERTICES};
