//! Plain 2D geometry for rectangle recovery.
//!
//! Purpose
//! - Points are nalgebra `Vector2<f64>`; lines use slope–intercept form
//!   `y = m x + b` and never represent vertical lines (callers route those to
//!   the axis-aligned path instead).
//! - Keep the API minimal and numerically explicit (eps-aware).
//!
//! Code cross-refs: `Line`, `FitCfg`, `lower_hull`, `shoelace_area`, `Rect2`

mod hull;
mod types;
mod util;

pub use hull::{cross, lower_hull};
pub use types::{FitCfg, Line, Point, Rect2};
pub use util::{bounding_box, coordinate_scale, shoelace_area, Bbox2};

#[cfg(test)]
mod tests;
