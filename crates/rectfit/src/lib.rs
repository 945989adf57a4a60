//! Rectangle recovery from boundary samples.
//!
//! Given points known to lie on the perimeter of a (possibly rotated)
//! rectangle, reconstruct that rectangle and report its area.
//!
//! Layout
//! - `geom2`: points, slope–intercept lines, lower hull, shoelace area.
//! - `recover`: candidate-edge search, reflected pass, axis-aligned fallback.
//! - `io`: the batched text format (`T`, then `n` and `n` coordinate pairs per case).
//! - `rand`: deterministic perimeter samplers for tests, benches and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   clearer design over compatibility.

pub mod geom2;
pub mod io;
pub mod rand;
pub mod recover;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{FitCfg, Line, Point, Rect2};
pub use recover::{recover, RecoverError, Recovery, RecoveryPath};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        bounding_box, coordinate_scale, cross, lower_hull, shoelace_area, Bbox2, FitCfg, Line,
        Point, Rect2,
    };
    pub use crate::io::{format_area, parse_batch, Case, ParseError};
    pub use crate::rand::{rotate_points, sample_perimeter, RectSpec, ReplayToken};
    pub use crate::recover::{recover, RecoverError, Recovery, RecoveryPath};
    pub use nalgebra::Vector2 as Vec2;
}
