//! Print recovered areas for a few hand-picked rectangles.
//!
//! Usage:
//!   cargo run -p rectfit --example scenarios
//!   cargo run -p rectfit --example scenarios -- 0.25   # extra rotation (radians)

use rectfit::rand::{rotate_points, sample_evenly, RectSpec};
use rectfit::{recover, FitCfg};

fn main() {
    let extra: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);
    let specs = [
        ("4x3 axis", RectSpec::axis(4.0, 3.0)),
        (
            "5x2 at 30deg",
            RectSpec::new(nalgebra::Vector2::zeros(), 5.0, 2.0, std::f64::consts::FRAC_PI_6),
        ),
        (
            "5x2 tilted 1e-6",
            RectSpec::new(nalgebra::Vector2::zeros(), 5.0, 2.0, 1e-6),
        ),
    ];
    let cfg = FitCfg::default();
    for (name, spec) in specs {
        let pts = rotate_points(&sample_evenly(&spec, 5), extra);
        match recover(&pts, &cfg) {
            Ok(r) => println!(
                "{name:>16}: area={:.9} expected={:.9} path={}",
                r.area,
                spec.area(),
                r.path.as_str()
            ),
            Err(e) => println!("{name:>16}: error: {e}"),
        }
    }
}
