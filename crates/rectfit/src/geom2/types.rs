//! Basic 2D types and tolerances used by the recoverer.
//!
//! - `FitCfg`: centralizes the verification and slope-degeneracy epsilons.
//! - `Line`: slope–intercept line `y = m x + b` with distance and intersection.
//! - `Rect2`: four corners in counter-clockwise order.

use nalgebra::Vector2;

use super::util::{bounding_box, coordinate_scale, shoelace_area};

/// Lower bound on the tolerance, in units of `f64::EPSILON * max|coordinate|`.
/// Inputs far from the origin cannot be located more precisely than that.
const TOL_FLOOR_ULPS: f64 = 64.0;

/// A 2D point (also used for difference vectors).
pub type Point = Vector2<f64>;

/// Fit configuration (tolerances).
///
/// The absolute verification tolerance (`tolerance`) is
/// `eps_rel * max(bbox width, bbox height)`, floored at
/// `64 * f64::EPSILON * max(1, max|coordinate|)`. It follows the size of the
/// point set, not its distance from the origin.
#[derive(Clone, Copy, Debug)]
pub struct FitCfg {
    /// Relative tolerance for "point lies on a side".
    pub eps_rel: f64,
    /// A candidate edge with `|dy| <= eps_slope * |dx|` (or the reverse) is
    /// treated as axis-parallel.
    pub eps_slope: f64,
    /// Fewer points than this cannot pin down a rectangle.
    pub min_points: usize,
}

impl Default for FitCfg {
    fn default() -> Self {
        Self {
            eps_rel: 1e-7,
            eps_slope: 1e-9,
            min_points: 4,
        }
    }
}

impl FitCfg {
    /// Absolute "lies on a side" tolerance for this point set.
    pub fn tolerance(&self, points: &[Point]) -> f64 {
        let extent = bounding_box(points).map_or(0.0, |bb| bb.width().max(bb.height()));
        let floor = TOL_FLOOR_ULPS * f64::EPSILON * coordinate_scale(points);
        (self.eps_rel * extent).max(floor)
    }
}

/// Line `y = m x + b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub m: f64,
    pub b: f64,
}

impl Line {
    #[inline]
    pub fn new(m: f64, b: f64) -> Self {
        Self { m, b }
    }

    /// Line with slope `m` through `p`.
    #[inline]
    pub fn through(p: Point, m: f64) -> Self {
        Self { m, b: p.y - m * p.x }
    }

    /// Line through `p` and `q`; `None` if the segment is vertical.
    pub fn from_points(p: Point, q: Point) -> Option<Self> {
        let dx = q.x - p.x;
        if dx == 0.0 {
            return None;
        }
        let m = (q.y - p.y) / dx;
        m.is_finite().then(|| Self::through(p, m))
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.m * x + self.b
    }

    /// Intercept of the line with this slope passing through `p`.
    #[inline]
    pub fn intercept_of(&self, p: Point) -> f64 {
        p.y - self.m * p.x
    }

    /// Perpendicular slope `-1/m`. Infinite for horizontal lines.
    #[inline]
    pub fn perpendicular_slope(&self) -> f64 {
        -1.0 / self.m
    }

    /// Perpendicular (Euclidean) distance from `p`.
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        (p.y - self.eval(p.x)).abs() / (1.0 + self.m * self.m).sqrt()
    }

    /// Intersection point; `None` for parallel lines or non-finite results.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        let dm = self.m - other.m;
        if dm == 0.0 {
            return None;
        }
        let x = (other.b - self.b) / dm;
        let y = self.eval(x);
        (x.is_finite() && y.is_finite()).then(|| Vector2::new(x, y))
    }
}

/// Rectangle as four corners, counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub corners: [Point; 4],
}

impl Rect2 {
    /// Build from corners in cyclic order; reorients to counter-clockwise.
    pub fn from_cycle(mut corners: [Point; 4]) -> Self {
        let a = corners[1] - corners[0];
        let b = corners[2] - corners[0];
        let c = corners[3] - corners[0];
        let signed = (a.x * b.y - a.y * b.x) + (b.x * c.y - b.y * c.x);
        if signed < 0.0 {
            corners.reverse();
        }
        Self { corners }
    }

    /// Shoelace area.
    #[inline]
    pub fn area(&self) -> f64 {
        shoelace_area(&self.corners)
    }

    /// Lengths of sides `c0→c1` and `c1→c2`.
    pub fn side_lengths(&self) -> (f64, f64) {
        let [c0, c1, c2, _] = self.corners;
        ((c1 - c0).norm(), (c2 - c1).norm())
    }

    /// Map every corner through `f` (keeps counter-clockwise order for
    /// orientation-preserving maps such as the point reflection `p ↦ -p`).
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::from_cycle(self.corners.map(f))
    }
}
