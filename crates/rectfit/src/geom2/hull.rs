use std::cmp::Ordering;

use super::types::Point;

/// Orientation of `(b - a, c - a)`: positive for a left turn.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Lower half of Andrew's monotone chain, left to right.
///
/// Points are sorted by `(x, y)`; the last hull point is popped while the turn
/// is not strictly left (`cross <= 0`), so exactly collinear points never stay
/// on the hull. Works on a copy; empty input gives an empty hull.
pub fn lower_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    lower
}
