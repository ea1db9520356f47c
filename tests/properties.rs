#![allow(clippy::unwrap_used)]

use arcmath::error::FitError;
use arcmath::geometry::{Arc, Curve, Segment};
use arcmath::math::poly::solve_polynomial;
use arcmath::math::{Point2, Vector2};
use arcmath::operations::creation::FitEllipse;
use arcmath::operations::query::{ArcLineIntersect, BoundingBox, ClosestPointOnArc, Length};
use arcmath::ArcMathError;
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point2> {
    (-50.0..50.0_f64, -50.0..50.0_f64).prop_map(|(x, y)| Point2::new(x, y))
}

/// Non-degenerate arcs with any span, including negative and full ones.
fn arc() -> impl Strategy<Value = Arc> {
    (point(), 0.1..10.0_f64, 0.1..10.0_f64, -720.0..720.0_f64, -360.0..360.0_f64).prop_map(
        |(c, rx, ry, start, extent)| Arc::from_center(c, rx, ry, start, extent).unwrap(),
    )
}

/// Arcs that may have collapsed onto a segment or a point.
fn any_arc() -> impl Strategy<Value = Arc> {
    let radius = prop_oneof![1 => Just(0.0), 4 => 0.1..10.0_f64];
    (point(), radius.clone(), radius, -720.0..720.0_f64, -360.0..360.0_f64).prop_map(
        |(c, rx, ry, start, extent)| Arc::from_center(c, rx, ry, start, extent).unwrap(),
    )
}

fn samples(arc: &Arc, n: u32) -> impl Iterator<Item = (f64, Point2)> + '_ {
    (0..=n).map(move |i| {
        let t = arc.start_angle() + arc.extent() * f64::from(i) / f64::from(n);
        (t, arc.location(t))
    })
}

fn scale_of(arc: &Arc) -> f64 {
    1.0 + arc.center().coords.amax() + arc.radius_x().max(arc.radius_y())
}

fn off_fit(arc: &Arc, points: &[Point2]) -> f64 {
    points
        .iter()
        .map(|q| ClosestPointOnArc::new(arc, *q).execute().distance)
        .fold(0.0, f64::max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fit_passes_through_one_or_two_points(a in point(), b in point()) {
        let single = FitEllipse::new(vec![a]).execute().unwrap();
        prop_assert!(off_fit(&single, &[a]) < 1e-12);

        let pair = FitEllipse::new(vec![a, b]).execute().unwrap();
        prop_assert!(pair.is_circle());
        prop_assert!(off_fit(&pair, &[a, b]) < 1e-9 * scale_of(&pair));
    }

    #[test]
    fn fit_passes_through_three_points(
        c in point(),
        r in 0.5..20.0_f64,
        base in 0.0..360.0_f64,
        jitter in prop::array::uniform3(-40.0..40.0_f64),
    ) {
        let circle = Arc::circle(c, r).unwrap();
        let pts: Vec<Point2> = (0_u8..3)
            .map(|i| circle.location(base + 120.0 * f64::from(i) + jitter[usize::from(i)]))
            .collect();
        let fitted = FitEllipse::new(pts.clone()).execute().unwrap();
        prop_assert!(fitted.is_circle());
        prop_assert!(off_fit(&fitted, &pts) < 1e-9 * scale_of(&fitted), "fitted={fitted:?}");
    }

    #[test]
    fn fit_passes_through_four_points(
        c in point(),
        rx in 0.5..20.0_f64,
        ry in 0.5..20.0_f64,
        base in 0.0..360.0_f64,
        jitter in prop::array::uniform4(-20.0..20.0_f64),
    ) {
        let truth = Arc::from_center(c, rx, ry, 0.0, 360.0).unwrap();
        let pts: Vec<Point2> = (0_u8..4)
            .map(|i| truth.location(base + 90.0 * f64::from(i) + jitter[usize::from(i)]))
            .collect();
        let fitted = FitEllipse::new(pts.clone()).execute().unwrap();
        prop_assert!(off_fit(&fitted, &pts) < 1e-8 * scale_of(&fitted), "fitted={fitted:?}");
    }

    #[test]
    fn collinear_points_never_fit(
        origin in point(),
        angle in 0.0..360.0_f64,
        length in 0.5..10.0_f64,
        offsets in prop::array::uniform4(0.0..0.5_f64),
        four in any::<bool>(),
    ) {
        let dir = Vector2::new(angle.to_radians().cos(), angle.to_radians().sin()) * length;
        let count = if four { 4 } else { 3 };
        let pts: Vec<Point2> = (0_u8..count)
            .map(|i| origin + dir * (f64::from(i) + offsets[usize::from(i)]))
            .collect();
        let err = FitEllipse::new(pts).execute().unwrap_err();
        prop_assert!(matches!(err, ArcMathError::Fit(FitError::Unsolvable)), "err={err}");
    }

    #[test]
    fn distance_brackets_sampled_minimum(arc in arc(), q in point()) {
        let r = ClosestPointOnArc::new(&arc, q).execute();
        let n = 4000;
        let step = arc.radius_x().max(arc.radius_y()) * arc.extent().abs().to_radians() / f64::from(n);
        let sampled = samples(&arc, n)
            .map(|(_, s)| (q - s).norm())
            .fold(f64::INFINITY, f64::min);
        let eps = 1e-9 * scale_of(&arc);

        prop_assert!(r.lower_bound <= sampled + eps, "lower={} sampled={sampled}", r.lower_bound);
        prop_assert!(r.upper_bound + step >= sampled, "upper={} sampled={sampled}", r.upper_bound);
        prop_assert!(r.lower_bound <= r.distance && r.distance == r.upper_bound);
        prop_assert!(arc.contains_angle(r.t), "t={} arc={arc:?}", r.t);
        prop_assert!((arc.location(r.t) - r.point).norm() < eps);
        prop_assert!(((q - r.point).norm() - r.distance).abs() < eps);
    }

    #[test]
    fn circle_distance_is_exact(c in point(), radius in 0.1..10.0_f64, q in point()) {
        let circle = Arc::circle(c, radius).unwrap();
        let r = ClosestPointOnArc::new(&circle, q).execute();
        prop_assert!(r.is_exact());
        prop_assert!((r.distance - ((q - c).norm() - radius).abs()).abs() < 1e-9 * scale_of(&circle));
    }

    #[test]
    fn intersections_lie_on_line_and_span(arc in arc(), a in point(), b in point(), bounded in any::<bool>()) {
        prop_assume!((b - a).norm() > 0.1);
        let query = if bounded {
            ArcLineIntersect::segment(&arc, Segment::new(a, b))
        } else {
            ArcLineIntersect::line(&arc, a, b)
        };
        let d = b - a;
        let eps = 1e-6 * scale_of(&arc);
        for (t, p) in query.points() {
            prop_assert!(arc.contains_angle(t), "t={t} arc={arc:?}");
            let off_line = d.perp(&(p - a)).abs() / d.norm();
            prop_assert!(off_line < eps, "t={t}: off by {off_line}");
            if bounded {
                let s = d.dot(&(p - a)) / d.norm_squared();
                prop_assert!((-1e-6..=1.0 + 1e-6).contains(&s), "t={t}: s={s}");
            }
        }
    }

    #[test]
    fn bounding_box_contains_arc(arc in any_arc()) {
        let bbox = BoundingBox::new(&arc).execute();
        let eps = 1e-9 * scale_of(&arc);
        for (t, p) in samples(&arc, 500) {
            prop_assert!(bbox.contains(&p, eps), "t={t} p={p} box={bbox:?}");
        }
    }

    #[test]
    fn length_bracket_is_ordered(arc in any_arc()) {
        let len = Length::new(&arc).execute();
        prop_assert!(len.lower_bound <= len.value && len.value <= len.upper_bound);
        if arc.is_circle() {
            let exact = arc.radius_x() * arc.extent().abs().to_radians();
            prop_assert!((len.value - exact).abs() <= 1e-9 * exact.max(1.0));
            prop_assert!((len.upper_bound - len.lower_bound).abs() <= 1e-9 * exact.max(1.0));
        }
    }

    #[test]
    fn quadratic_roots_are_recovered(r1 in -100.0..100.0_f64, gap in 1e-3..50.0_f64, lead in 0.1..10.0_f64) {
        let r2 = r1 + gap;
        let roots = solve_polynomial(&[lead * r1 * r2, -lead * (r1 + r2), lead]).unwrap();
        prop_assert_eq!(roots.len(), 2);
        prop_assert!((roots[0] - r1).abs() < 1e-8 * (1.0 + r1.abs()));
        prop_assert!((roots[1] - r2).abs() < 1e-8 * (1.0 + r2.abs()));
    }
}
