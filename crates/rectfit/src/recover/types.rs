//! Result and error types for rectangle recovery.

use thiserror::Error;

use crate::geom2::Rect2;

/// Which search produced the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryPath {
    /// A lower-hull edge of the input carried a full side.
    Lower,
    /// A lower-hull edge of the point-reflected input (i.e. an upper-hull edge).
    Reflected,
    /// Sides parallel to the axes; answered by the bounding box.
    AxisAligned,
}

impl RecoveryPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryPath::Lower => "lower",
            RecoveryPath::Reflected => "reflected",
            RecoveryPath::AxisAligned => "axis_aligned",
        }
    }
}

/// A recovered rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Recovery {
    pub area: f64,
    /// Corners in input coordinates, counter-clockwise.
    pub rect: Rect2,
    pub path: RecoveryPath,
    /// Index of the accepted hull edge within its pass.
    pub edge: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum RecoverError {
    #[error("need at least {min} points, got {got}")]
    TooFewPoints { got: usize, min: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Neither pass (nor the axis-aligned check) explained every point.
    #[error("no rectangle explains all {points} points (tolerance {tol:e})")]
    NoRectangle { points: usize, tol: f64 },
}
