use super::types::Point;

/// Polygon area from ordered vertices (absolute value, any orientation).
///
/// Cross terms are taken relative to the first vertex, so the result does not
/// lose digits when the polygon sits far from the origin.
pub fn shoelace_area(vertices: &[Point]) -> f64 {
    let k = vertices.len();
    if k < 3 {
        return 0.0;
    }
    let v0 = vertices[0];
    let twice: f64 = (1..k - 1)
        .map(|i| {
            let a = vertices[i] - v0;
            let b = vertices[i + 1] - v0;
            a.x * b.y - a.y * b.x
        })
        .sum();
    twice.abs() * 0.5
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox2 {
    pub min: Point,
    pub max: Point,
}

impl Bbox2 {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    /// Distance from `p` to the nearest of the four box sides (as lines).
    pub fn boundary_distance(&self, p: Point) -> f64 {
        (p.x - self.min.x)
            .abs()
            .min((p.x - self.max.x).abs())
            .min((p.y - self.min.y).abs())
            .min((p.y - self.max.y).abs())
    }
    /// Corners counter-clockwise from `min`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }
}

/// Bounding box of `points`; `None` for an empty slice.
pub fn bounding_box(points: &[Point]) -> Option<Bbox2> {
    let first = *points.first()?;
    let (min, max) = points
        .iter()
        .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
    Some(Bbox2 { min, max })
}

/// Coordinate magnitude `max(1, max |coordinate|)`; bounds the rounding floor of the tolerance.
pub fn coordinate_scale(points: &[Point]) -> f64 {
    points.iter().map(|p| p.amax()).fold(1.0, f64::max)
}
