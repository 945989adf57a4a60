//! Rectangle recovery from perimeter samples.
//!
//! Purpose
//! - Given points on the boundary of an arbitrarily rotated rectangle, find
//!   the rectangle and its area.
//!
//! Search
//! - Walk the lower hull left to right; each edge is a candidate side
//!   (`candidate::fit_edge`). The first candidate that explains every point wins.
//! - If none does, reflect the input through the origin and walk again, which
//!   covers sides that only appear on the upper hull.
//! - The search runs on points re-centred at their bounding-box centre;
//!   corners are shifted back before returning.
//! - Axis-parallel candidate edges cannot be handled in slope–intercept form;
//!   the first one seen triggers the bounding-box check (`fallback`).
//!
//! Guarantees
//! - With at least two samples on some side and one on each other side, one
//!   of the two passes meets a hull edge on a true side.
//! - Anything else ends in `RecoverError::NoRectangle`, never a silent area.

mod candidate;
mod fallback;
mod types;

pub use fallback::axis_aligned_area;
pub use types::{RecoverError, Recovery, RecoveryPath};

use tracing::debug;

use crate::geom2::{bounding_box, lower_hull, FitCfg, Point};
use candidate::{fit_edge, EdgeFit};
use fallback::fit_axis_aligned;

/// Recover the rectangle whose perimeter carries all of `points`.
pub fn recover(points: &[Point], cfg: &FitCfg) -> Result<Recovery, RecoverError> {
    if points.len() < cfg.min_points {
        return Err(RecoverError::TooFewPoints {
            got: points.len(),
            min: cfg.min_points,
        });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(RecoverError::NonFinite { index });
    }
    let Some(bb) = bounding_box(points) else {
        return Err(RecoverError::TooFewPoints {
            got: 0,
            min: cfg.min_points,
        });
    };
    let tol = cfg.tolerance(points);

    // Search in a frame centred on the bounding box so intercepts and
    // intersections stay small for inputs far from the origin.
    let anchor = (bb.min + bb.max) * 0.5;
    let local: Vec<Point> = points.iter().map(|p| p - anchor).collect();
    let to_input = |mut found: Recovery| {
        found.rect = found.rect.map(|p| p + anchor);
        found
    };

    let mut search = Search {
        cfg,
        tol,
        axis_checked: false,
    };
    if let Some(found) = search.pass(&local, false) {
        return Ok(to_input(found));
    }
    debug!(n = points.len(), "lower hull gave no rectangle; trying reflected input");
    let reflected: Vec<Point> = local.iter().map(|p| -*p).collect();
    if let Some(found) = search.pass(&reflected, true) {
        return Ok(to_input(found));
    }
    Err(RecoverError::NoRectangle {
        points: points.len(),
        tol,
    })
}

struct Search<'a> {
    cfg: &'a FitCfg,
    tol: f64,
    /// The bounding-box check is reflection invariant; run it at most once.
    axis_checked: bool,
}

impl Search<'_> {
    fn pass(&mut self, points: &[Point], reflected: bool) -> Option<Recovery> {
        let hull = lower_hull(points);
        for (edge, w) in hull.windows(2).enumerate() {
            match fit_edge(points, w[0], w[1], self.tol, self.cfg.eps_slope) {
                EdgeFit::Fit(rect) => {
                    debug!(edge, reflected, "candidate edge verified");
                    let (rect, path) = if reflected {
                        (rect.map(|p| -p), RecoveryPath::Reflected)
                    } else {
                        (rect, RecoveryPath::Lower)
                    };
                    return Some(Recovery {
                        area: rect.area(),
                        rect,
                        path,
                        edge,
                    });
                }
                EdgeFit::Rejected => {}
                EdgeFit::Degenerate => {
                    if self.axis_checked {
                        continue;
                    }
                    self.axis_checked = true;
                    if let Some(rect) = fit_axis_aligned(points, self.tol) {
                        debug!(edge, reflected, "axis-parallel edge; bounding box fits");
                        let rect = if reflected { rect.map(|p| -p) } else { rect };
                        return Some(Recovery {
                            area: axis_aligned_area(points)?,
                            rect,
                            path: RecoveryPath::AxisAligned,
                            edge,
                        });
                    }
                    debug!(edge, "axis-parallel edge but bounding box does not fit");
                }
            }
        }
        None
    }
}
