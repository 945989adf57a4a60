//! Candidate-edge reconstruction and verification.
//!
//! A lower-hull edge `p→q` is assumed to lie on one full side `l1`. The other
//! three sides follow from the input: the perpendiculars through the points
//! with extreme projection along `l1` (`l2`, `l3`) and the parallel through the
//! point with the largest intercept (`l4`). The candidate stands only if every
//! input point lies on one of the four lines.

use tracing::trace;

use crate::geom2::{Line, Point, Rect2};

pub(crate) enum EdgeFit {
    Fit(Rect2),
    Rejected,
    /// Slope is (numerically) zero or infinite; slope–intercept arithmetic
    /// would be meaningless.
    Degenerate,
}

/// True if `p→q` is within `eps_slope` of horizontal or vertical.
#[inline]
pub(crate) fn is_axis_parallel(p: Point, q: Point, eps_slope: f64) -> bool {
    let d = q - p;
    d.y.abs() <= eps_slope * d.x.abs() || d.x.abs() <= eps_slope * d.y.abs()
}

pub(crate) fn fit_edge(points: &[Point], p: Point, q: Point, tol: f64, eps_slope: f64) -> EdgeFit {
    if is_axis_parallel(p, q, eps_slope) {
        return EdgeFit::Degenerate;
    }
    let Some(l1) = Line::from_points(p, q) else {
        return EdgeFit::Degenerate;
    };
    let m2 = l1.perpendicular_slope();
    if !m2.is_finite() {
        return EdgeFit::Degenerate;
    }

    // Projection of each point onto l1, measured by the x of the foot point.
    let mut lo = (f64::INFINITY, p);
    let mut hi = (f64::NEG_INFINITY, p);
    let mut b_far = l1.b;
    for &r in points {
        let Some(foot) = Line::through(r, m2).intersect(&l1) else {
            return EdgeFit::Degenerate;
        };
        if foot.x < lo.0 {
            lo = (foot.x, r);
        }
        if foot.x > hi.0 {
            hi = (foot.x, r);
        }
        b_far = b_far.max(l1.intercept_of(r));
    }
    let l2 = Line::through(lo.1, m2);
    let l3 = Line::through(hi.1, m2);
    let l4 = Line::new(l1.m, b_far);

    if l3.distance(lo.1) <= tol || l4.distance(p) <= tol {
        trace!("candidate collapses to a segment");
        return EdgeFit::Rejected;
    }

    let sides = [l1, l2, l3, l4];
    if let Some(bad) = points
        .iter()
        .position(|&r| !sides.iter().any(|l| l.distance(r) <= tol))
    {
        trace!(point = bad, "candidate leaves a point off all sides");
        return EdgeFit::Rejected;
    }

    let corners = [
        l1.intersect(&l2),
        l1.intersect(&l3),
        l3.intersect(&l4),
        l4.intersect(&l2),
    ];
    let [Some(c0), Some(c1), Some(c2), Some(c3)] = corners else {
        return EdgeFit::Degenerate;
    };
    let rect = Rect2::from_cycle([c0, c1, c2, c3]);
    if !rect.area().is_finite() {
        return EdgeFit::Degenerate;
    }
    EdgeFit::Fit(rect)
}
