use crate::geom2::{bounding_box, Point, Rect2};

/// Bounding-box area `(max_x - min_x) * (max_y - min_y)`.
///
/// This is the rectangle's area exactly when its sides are axis-parallel.
pub fn axis_aligned_area(points: &[Point]) -> Option<f64> {
    bounding_box(points).map(|bb| bb.area())
}

/// Bounding box as a rectangle, provided every point sits on its boundary
/// within `tol` and the box is not flat.
pub(crate) fn fit_axis_aligned(points: &[Point], tol: f64) -> Option<Rect2> {
    let bb = bounding_box(points)?;
    if bb.width() <= tol || bb.height() <= tol {
        return None;
    }
    points
        .iter()
        .all(|&p| bb.boundary_distance(p) <= tol)
        .then(|| Rect2::from_cycle(bb.corners()))
}
