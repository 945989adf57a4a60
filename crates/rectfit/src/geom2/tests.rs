use super::*;
use nalgebra::vector;
use proptest::prelude::*;

#[test]
fn line_through_and_intersect() {
    let l1 = Line::through(vector![1.0, 1.0], 2.0); // y = 2x - 1
    assert!((l1.b + 1.0).abs() < 1e-12);
    let l2 = Line::through(vector![0.0, 3.0], -1.0); // y = -x + 3
    let p = l1.intersect(&l2).unwrap();
    assert!((p - vector![4.0 / 3.0, 5.0 / 3.0]).norm() < 1e-12);
    // parallel
    assert!(l1.intersect(&Line::new(2.0, 5.0)).is_none());
}

#[test]
fn line_distance_is_perpendicular() {
    // y = x; point (0, 2) is sqrt(2) away.
    let l = Line::new(1.0, 0.0);
    assert!((l.distance(vector![0.0, 2.0]) - 2f64.sqrt()).abs() < 1e-12);
    // steep line keeps distances in Euclidean units
    let steep = Line::through(vector![0.0, 0.0], -1e6);
    let p = vector![1e-6, 0.0];
    assert!(steep.distance(p) < 2e-6);
}

#[test]
fn line_from_points_rejects_vertical() {
    assert!(Line::from_points(vector![1.0, 0.0], vector![1.0, 5.0]).is_none());
    let l = Line::from_points(vector![0.0, 1.0], vector![2.0, 5.0]).unwrap();
    assert!((l.m - 2.0).abs() < 1e-12 && (l.b - 1.0).abs() < 1e-12);
}

#[test]
fn shoelace_unit_square_and_triangle() {
    let sq = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!((shoelace_area(&sq) - 1.0).abs() < 1e-12);
    let mut cw = sq;
    cw.reverse();
    assert!((shoelace_area(&cw) - 1.0).abs() < 1e-12);
    assert_eq!(shoelace_area(&sq[..2]), 0.0);
}

#[test]
fn rect_from_cycle_is_ccw() {
    let r = Rect2::from_cycle([
        vector![0.0, 3.0],
        vector![4.0, 3.0],
        vector![4.0, 0.0],
        vector![0.0, 0.0],
    ]);
    let [a, b, c, _] = r.corners;
    assert!(cross(a, b, c) > 0.0);
    assert!((r.area() - 12.0).abs() < 1e-12);
    let (w, h) = r.side_lengths();
    assert!((w * h - 12.0).abs() < 1e-12);
}

#[test]
fn bbox_and_scale() {
    let pts = vec![vector![-2.0, 1.0], vector![3.0, -4.0], vector![0.5, 0.5]];
    let bb = bounding_box(&pts).unwrap();
    assert_eq!(bb.min, vector![-2.0, -4.0]);
    assert_eq!(bb.max, vector![3.0, 1.0]);
    assert!((bb.area() - 25.0).abs() < 1e-12);
    assert_eq!(bb.boundary_distance(vector![0.0, 1.0]), 0.0);
    assert!(bounding_box(&[]).is_none());
    assert_eq!(coordinate_scale(&pts), 4.0);
    assert_eq!(coordinate_scale(&[vector![0.1, -0.2]]), 1.0);
}

#[test]
fn shoelace_keeps_digits_far_from_origin() {
    use crate::rand::RectSpec;
    for off in [1e6, 1e7] {
        let spec = RectSpec::new(vector![off, -off], 1.0, 2.0, 0.4);
        let area = shoelace_area(&spec.corners());
        assert!((area - 2.0).abs() < 1e-7, "off={off}: {area}");
        assert!((Rect2::from_cycle(spec.corners()).area() - 2.0).abs() < 1e-7);
    }
}

#[test]
fn tolerance_follows_extent_not_offset() {
    use crate::rand::{sample_evenly, RectSpec};
    let cfg = FitCfg::default();
    let near = sample_evenly(&RectSpec::new(vector![0.0, 0.0], 1.0, 2.0, 0.4), 5);
    let far = sample_evenly(&RectSpec::new(vector![1e7, -1e7], 1.0, 2.0, 0.4), 5);
    let (t_near, t_far) = (cfg.tolerance(&near), cfg.tolerance(&far));
    assert!(t_far < 1e-6, "{t_far}");
    assert!((t_far - t_near).abs() < 1e-12);
    // A single point has no extent; only the rounding floor remains.
    let lone = [vector![1e8, 0.0]];
    assert_eq!(cfg.tolerance(&lone), 64.0 * f64::EPSILON * 1e8);
}

#[test]
fn lower_hull_square_boundary() {
    // 3x3 grid boundary: lower hull is bottom edge then right edge corner.
    let pts: Vec<Point> = [
        (0, 0),
        (1, 0),
        (2, 0),
        (2, 1),
        (2, 2),
        (1, 2),
        (0, 2),
        (0, 1),
    ]
    .into_iter()
    .map(|(x, y)| vector![x as f64, y as f64])
    .collect();
    let h = lower_hull(&pts);
    assert_eq!(h, vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 2.0]]);
}

#[test]
fn lower_hull_small_inputs() {
    assert!(lower_hull(&[]).is_empty());
    let one = [vector![1.0, 2.0]];
    assert_eq!(lower_hull(&one), vec![vector![1.0, 2.0]]);
    // duplicates collapse
    let dup = [vector![1.0, 2.0], vector![1.0, 2.0], vector![3.0, 2.0]];
    assert_eq!(lower_hull(&dup).len(), 2);
}

#[test]
fn lower_hull_leaves_input_untouched() {
    let pts = vec![vector![3.0, 0.0], vector![0.0, 0.0], vector![1.0, -1.0]];
    let before = pts.clone();
    let h = lower_hull(&pts);
    assert_eq!(pts, before);
    assert_eq!(h, vec![vector![0.0, 0.0], vector![1.0, -1.0], vector![3.0, 0.0]]);
}

proptest! {
    // Integer coordinates keep the orientation test exact.
    #[test]
    fn lower_hull_has_strict_turns(raw in prop::collection::vec((-20i32..20, -20i32..20), 1..60)) {
        let pts: Vec<Point> = raw.iter().map(|&(x, y)| vector![x as f64, y as f64]).collect();
        let h = lower_hull(&pts);
        for w in h.windows(3) {
            prop_assert!(cross(w[0], w[1], w[2]) > 0.0);
        }
        for w in h.windows(2) {
            prop_assert!((w[0].x, w[0].y) < (w[1].x, w[1].y));
        }
        // every input point is on or above each hull edge
        for w in h.windows(2) {
            for p in &pts {
                if p.x >= w[0].x && p.x <= w[1].x {
                    prop_assert!(cross(w[0], w[1], *p) >= 0.0);
                }
            }
        }
    }
}
