//! Exact-sign geometric predicates.
//!
//! Numerics
//! - No epsilon anywhere: orientation is the raw sign of a cross product.
//!   Near-parallel or near-collinear inputs carrying float representation
//!   error can therefore flip between "touching" and "disjoint". Callers that
//!   need tolerance should snap their inputs first.
//! - Range: when the largest coordinate magnitude is above `2^500` or below
//!   `2^-500`, every point is first multiplied by a common power of two that
//!   brings it near 1. That multiplication is exact, so signs match the
//!   unscaled arithmetic, but products and differences can no longer overflow
//!   to `inf`/`NaN` or underflow to zero.

use super::types::{Edge, Point, Polygon};

/// Magnitude exponent beyond which inputs are rescaled.
const SAFE_EXP: i32 = 500;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Exponent `k` such that the largest magnitude times `2^k` lies in `[1, 2)`,
/// or `None` when the points are already in the safe range.
pub(crate) fn rescale_exponent<I: IntoIterator<Item = Point>>(points: I) -> Option<i32> {
    let max_abs = points
        .into_iter()
        .fold(0.0_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
    if max_abs == 0.0 || !max_abs.is_finite() {
        return None;
    }
    let e = max_abs.log2().floor() as i32;
    (e.abs() > SAFE_EXP).then_some(-e)
}

/// `p * 2^k`. Exact unless a coordinate falls into the subnormal range.
pub(crate) fn scale_pow2(p: Point, k: i32) -> Point {
    Point::new(ldexp(p.x, k), ldexp(p.y, k))
}

fn ldexp(mut x: f64, mut k: i32) -> f64 {
    // 2^±1000 are both normal, so each step is a single exact multiply.
    const STEP: i32 = 1000;
    while k > STEP {
        x *= 2f64.powi(STEP);
        k -= STEP;
    }
    while k < -STEP {
        x *= 2f64.powi(-STEP);
        k += STEP;
    }
    x * 2f64.powi(k)
}

#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Orientation of `(p, q, r)`: sign of `(q - p) × (r - p)`.
pub fn orient(p: Point, q: Point, r: Point) -> Orientation {
    match rescale_exponent([p, q, r]) {
        Some(k) => orient_unscaled(scale_pow2(p, k), scale_pow2(q, k), scale_pow2(r, k)),
        None => orient_unscaled(p, q, r),
    }
}

/// `orient` for points already in the safe range.
#[inline]
pub(crate) fn orient_unscaled(p: Point, q: Point, r: Point) -> Orientation {
    let v = cross(p, q, r);
    if v > 0.0 {
        Orientation::CounterClockwise
    } else if v < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// `r` lies in the closed bounding box of `p`,`q`.
///
/// Only meaningful when `orient(p, q, r)` is collinear; then it is exactly
/// "r is on segment pq".
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

/// Closed segment intersection; touching endpoints and collinear overlap count.
pub fn segments_intersect(e1: Edge, e2: Edge) -> bool {
    match rescale_exponent([e1.start, e1.end, e2.start, e2.end]) {
        Some(k) => segments_intersect_unscaled(
            Edge::new(scale_pow2(e1.start, k), scale_pow2(e1.end, k)),
            Edge::new(scale_pow2(e2.start, k), scale_pow2(e2.end, k)),
        ),
        None => segments_intersect_unscaled(e1, e2),
    }
}

/// `segments_intersect` for edges already in the safe range.
pub(crate) fn segments_intersect_unscaled(e1: Edge, e2: Edge) -> bool {
    let (p1, p2) = (e1.start, e1.end);
    let (p3, p4) = (e2.start, e2.end);
    let o1 = orient_unscaled(p1, p2, p3);
    let o2 = orient_unscaled(p1, p2, p4);
    let o3 = orient_unscaled(p3, p4, p1);
    let o4 = orient_unscaled(p3, p4, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    use Orientation::Collinear;
    (o1 == Collinear && on_segment(p1, p2, p3))
        || (o2 == Collinear && on_segment(p1, p2, p4))
        || (o3 == Collinear && on_segment(p3, p4, p1))
        || (o4 == Collinear && on_segment(p3, p4, p2))
}

/// Crossing-number test with a ray towards +x.
///
/// Edge `(v_i, v_j)` is counted when `point.y` is in the half-open span
/// between the endpoint ys (`(v_i.y > y) != (v_j.y > y)`) and the edge's
/// x-intercept at `y` is strictly right of `point.x`. Odd count means inside.
///
/// Boundary convention: points exactly on an edge get whatever the parity
/// says (typically inside on left/bottom edges, outside on right/top edges).
/// `Polygon::collides` does not depend on this because touching is already
/// caught by the edge test.
pub fn point_in_polygon(point: Point, poly: &Polygon) -> bool {
    let all = poly.vertices().iter().copied().chain([point]);
    match rescale_exponent(all) {
        Some(k) => point_in_polygon_unscaled(scale_pow2(point, k), &poly.scaled_pow2(k)),
        None => point_in_polygon_unscaled(point, poly),
    }
}

/// `point_in_polygon` for inputs already in the safe range.
pub(crate) fn point_in_polygon_unscaled(point: Point, poly: &Polygon) -> bool {
    let verts = poly.vertices();
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut j = verts.len() - 1;
    for i in 0..verts.len() {
        let vi = verts[i];
        let vj = verts[j];
        // vi.y != vj.y whenever the first clause holds, so the division is safe;
        // |y - vi.y| <= |vj.y - vi.y| keeps the intercept within the edge's x-span.
        if (vi.y > y) != (vj.y > y) && x < (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orient_sign() {
        let a = vector![0.0, 0.0];
        let b = vector![10.0, 0.0];
        assert_eq!(orient(a, b, vector![0.0, 10.0]), Orientation::CounterClockwise);
        assert_eq!(orient(a, b, vector![0.0, -10.0]), Orientation::Clockwise);
        assert_eq!(orient(a, b, vector![20.0, 0.0]), Orientation::Collinear);
    }

    #[test]
    fn on_segment_inclusive() {
        let a = vector![0.0, 0.0];
        let b = vector![10.0, 0.0];
        assert!(on_segment(a, b, vector![0.0, 0.0]));
        assert!(on_segment(a, b, vector![5.0, 0.0]));
        assert!(on_segment(a, b, vector![10.0, 0.0]));
        assert!(!on_segment(a, b, vector![11.0, 0.0]));
    }

    #[test]
    fn crossing_and_touching_segments() {
        let e = |ax: f64, ay: f64, bx: f64, by: f64| Edge::new(vector![ax, ay], vector![bx, by]);
        // X shape
        assert!(segments_intersect(e(0.0, 0.0, 2.0, 2.0), e(0.0, 2.0, 2.0, 0.0)));
        // T: endpoint on the interior of the other segment
        assert!(segments_intersect(e(0.0, 0.0, 2.0, 0.0), e(1.0, 0.0, 1.0, 3.0)));
        // shared endpoint
        assert!(segments_intersect(e(0.0, 0.0, 1.0, 1.0), e(1.0, 1.0, 2.0, 0.0)));
        // collinear overlap
        assert!(segments_intersect(e(0.0, 0.0, 2.0, 0.0), e(1.0, 0.0, 3.0, 0.0)));
        // collinear, separated
        assert!(!segments_intersect(e(0.0, 0.0, 1.0, 0.0), e(2.0, 0.0, 3.0, 0.0)));
        // parallel
        assert!(!segments_intersect(e(0.0, 0.0, 1.0, 0.0), e(0.0, 1.0, 1.0, 1.0)));
        // lines cross but segments stop short
        assert!(!segments_intersect(e(0.0, 0.0, 1.0, 1.0), e(3.0, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn ray_casting_square() {
        let sq = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
        assert!(point_in_polygon(vector![2.0, 2.0], &sq));
        assert!(!point_in_polygon(vector![5.0, 2.0], &sq));
        assert!(!point_in_polygon(vector![-1.0, 2.0], &sq));
        assert!(!point_in_polygon(vector![2.0, 5.0], &sq));
        // ray passes exactly through a vertex height: half-open rule counts once
        let diamond = Polygon::from_xy(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]).unwrap();
        assert!(point_in_polygon(vector![0.0, 0.0], &diamond));
        assert!(!point_in_polygon(vector![-2.0, 0.0], &diamond));
    }

    #[test]
    fn ray_casting_concave() {
        // U shape opening upward; the notch is outside.
        let u = Polygon::from_xy(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ])
        .unwrap();
        assert!(!point_in_polygon(vector![1.5, 2.0], &u));
        assert!(point_in_polygon(vector![0.5, 2.0], &u));
        assert!(point_in_polygon(vector![2.5, 2.0], &u));
        assert!(point_in_polygon(vector![1.5, 0.5], &u));
    }

    #[test]
    fn orient_near_f64_max() {
        // Raw differences would overflow: 1.5e308 - (-1.5e308) is inf.
        let m = 1.5e308;
        assert_eq!(
            orient(vector![-m, -m], vector![m, -m], vector![0.0, m]),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orient(vector![-m, -m], vector![m, m], vector![m / 2.0, m / 2.0]),
            Orientation::Collinear
        );
        let e = |ax: f64, ay: f64, bx: f64, by: f64| Edge::new(vector![ax, ay], vector![bx, by]);
        assert!(segments_intersect(e(-m, -m, m, m), e(-m, m, m, -m)));
        assert!(!segments_intersect(e(-m, -m, m, -m), e(-m, m, m, m)));
    }

    #[test]
    fn ray_casting_at_extreme_scales() {
        for s in [1e300, 1e-300] {
            let tri = Polygon::from_xy(&[(0.0, 0.0), (10.0 * s, 10.0 * s), (10.0 * s, 0.0)]).unwrap();
            assert!(point_in_polygon(vector![5.0 * s, 1.0 * s], &tri));
            assert!(!point_in_polygon(vector![5.0 * s, 9.0 * s], &tri));
        }
    }

    #[test]
    fn rescale_only_outside_safe_range() {
        assert_eq!(rescale_exponent([vector![3.0, -4.0]]), None);
        assert_eq!(rescale_exponent([vector![0.0, 0.0]]), None);
        let k = rescale_exponent([vector![1e300, 0.0], vector![0.0, -2.0]]).unwrap();
        let p = scale_pow2(vector![1e300, -2.0], k);
        assert!((1.0..2.0).contains(&p.x));
        assert_eq!(scale_pow2(p, -k), vector![1e300, -2.0]);
        let k = rescale_exponent([vector![1e-310, 0.0]]).unwrap();
        assert!((1.0..2.0).contains(&scale_pow2(vector![1e-310, 0.0], k).x));
    }
}
