use nalgebra::Vector2;

use super::types::{GeometryError, Rect};

/// Rescale `v` to exactly `length`, keeping its direction.
///
/// The zero vector has no direction and is returned unchanged for any valid
/// `length`. Negative (or NaN) lengths are rejected before computing.
pub fn scale_to_length(v: Vector2<f64>, length: f64) -> Result<Vector2<f64>, GeometryError> {
    if !(length >= 0.0) {
        return Err(GeometryError::invalid(format!(
            "length must be non-negative, got {length}"
        )));
    }
    let norm = v.norm();
    if norm == 0.0 {
        return Ok(v);
    }
    Ok(v * (length / norm))
}

/// Area of the axis-aligned intersection of `a` and `b` (0 if disjoint).
#[inline]
pub fn overlap_area(a: &Rect, b: &Rect) -> f64 {
    let w = (a.right().min(b.right()) - a.x.max(b.x)).max(0.0);
    let h = (a.bottom().min(b.bottom()) - a.y.max(b.y)).max(0.0);
    w * h
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Orientation value of the triple `(p, q, r)`: zero when collinear, the sign
/// tells the rotational sense. The y/x terms are intentionally asymmetric.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Does `q` lie inside the bounding box of segment `p r`?
/// Only meaningful for collinear triples.
#[inline]
pub fn on_segment(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Do segments `p1 q1` and `p2 q2` intersect (touching and collinear overlap included)?
pub fn intersect(p1: Vector2<f64>, q1: Vector2<f64>, p2: Vector2<f64>, q2: Vector2<f64>) -> bool {
    let o1 = sign(orientation(p1, q1, p2));
    let o2 = sign(orientation(p1, q1, q2));
    let o3 = sign(orientation(p2, q2, p1));
    let o4 = sign(orientation(p2, q2, q1));

    if o1 != o2 && o3 != o4 {
        return true;
    }
    // collinear cases
    (o1 == 0 && on_segment(p1, p2, q1))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
}

// f64::signum maps 0.0 to 1.0, which would hide the collinear case.
#[inline]
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
