use crate::geometry::{Arc, Curve};
use crate::math::arc_2d::{angular_distance, nearest_span_end, wrap_into_span};
use crate::math::distance_2d::closest_point_on_segment;
use crate::math::{Point2, Vector2};

use super::bounding_box::BoundingBox;
use super::support::support_range;

/// A candidate nearest point on a curve.
///
/// Not necessarily the globally nearest point; see [`CurveDistanceRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDistance {
    /// Parametric angle of the candidate, in degrees.
    pub t: f64,
    /// The candidate point on the curve.
    pub point: Point2,
    /// Distance from the query point to the candidate.
    pub distance: f64,
}

/// Result of a distance query: a candidate plus a bracket on the true distance.
///
/// `lower_bound <= distance == upper_bound` always holds, and the true
/// minimum distance lies within `[lower_bound, upper_bound]`. Circles and
/// collapsed arcs are exact (`lower_bound == upper_bound`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDistanceRange {
    /// Parametric angle of the candidate, in degrees.
    pub t: f64,
    /// The candidate point on the curve.
    pub point: Point2,
    /// Distance from the query point to the candidate.
    pub distance: f64,
    /// Guaranteed lower bound on the true distance.
    pub lower_bound: f64,
    /// Guaranteed upper bound on the true distance.
    pub upper_bound: f64,
}

impl CurveDistanceRange {
    fn exact(candidate: CurveDistance) -> Self {
        Self::bounded(candidate, candidate.distance)
    }

    fn bounded(candidate: CurveDistance, lower_bound: f64) -> Self {
        Self {
            t: candidate.t,
            point: candidate.point,
            distance: candidate.distance,
            // Rounding can push an otherwise tight bound past the candidate.
            lower_bound: lower_bound.clamp(0.0, candidate.distance),
            upper_bound: candidate.distance,
        }
    }

    /// Returns the candidate without its bounds.
    #[must_use]
    pub fn candidate(&self) -> CurveDistance {
        CurveDistance {
            t: self.t,
            point: self.point,
            distance: self.distance,
        }
    }

    /// Returns whether the bracket has collapsed to a single value.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    /// Width of the bracket.
    #[must_use]
    pub fn uncertainty(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Tuning for [`ClosestPointOnArc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistanceParams {
    /// Newton steps spent improving the candidate on non-circular ellipses.
    ///
    /// Zero keeps the closed-form candidate. Steps only ever shorten the
    /// candidate distance; the lower bound is unaffected.
    pub refine_steps: u32,
}

/// Finds a near point on an arc, bracketing the true distance.
///
/// Distance to a general ellipse has no closed form. The query point is
/// rescaled into the frame where the ellipse is the unit circle; the exact
/// distance there, times the smaller radius, is a lower bound, and the point
/// of the ellipse at the same parametric angle is a valid candidate (upper
/// bound). Bounded arcs also consider their endpoints and tighten the lower
/// bound with the distance to their bounding box.
pub struct ClosestPointOnArc {
    arc: Arc,
    point: Point2,
    params: DistanceParams,
}

impl ClosestPointOnArc {
    /// Creates a new `ClosestPointOnArc` query.
    #[must_use]
    pub fn new(arc: &Arc, point: Point2) -> Self {
        Self {
            arc: *arc,
            point,
            params: DistanceParams::default(),
        }
    }

    /// Sets custom refinement parameters.
    #[must_use]
    pub fn with_params(mut self, params: DistanceParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> CurveDistanceRange {
        if self.arc.is_degenerate() {
            self.collapsed()
        } else if self.arc.is_full() {
            self.full_ellipse()
        } else {
            self.partial_arc()
        }
    }

    fn candidate_at(&self, t: f64) -> CurveDistance {
        let point = self.arc.location(t);
        CurveDistance {
            t,
            point,
            distance: (self.point - point).norm(),
        }
    }

    /// Candidate from the unit-circle frame, with the matching lower bound.
    fn ellipse_candidate(&self) -> (CurveDistance, f64) {
        let c = self.arc.center();
        let (a, b) = (self.arc.radius_x(), self.arc.radius_y());
        let q = Vector2::new((self.point.x - c.x) / a, (self.point.y - c.y) / b);

        let t = q.y.atan2(q.x).to_degrees();
        let lower = (q.norm() - 1.0).abs() * a.min(b);
        (self.candidate_at(t), lower)
    }

    fn full_ellipse(&self) -> CurveDistanceRange {
        let (candidate, lower) = self.ellipse_candidate();
        let t = wrap_into_span(candidate.t, self.arc.start_angle(), self.arc.extent())
            .unwrap_or(candidate.t);
        let candidate = CurveDistance { t, ..candidate };

        if self.arc.is_circle() {
            return CurveDistanceRange::exact(candidate);
        }
        CurveDistanceRange::bounded(self.refine(candidate), lower)
    }

    fn partial_arc(&self) -> CurveDistanceRange {
        let (full, ellipse_lower) = self.ellipse_candidate();
        let from_start = self.candidate_at(self.arc.start_angle());
        let from_end = self.candidate_at(self.arc.end_angle());

        // Ties favor the start point.
        let mut best = if from_end.distance < from_start.distance {
            from_end
        } else {
            from_start
        };
        if let Some(t) = wrap_into_span(full.t, self.arc.start_angle(), self.arc.extent()) {
            if full.distance < best.distance {
                best = CurveDistance { t, ..full };
            }
        }

        // On a circle the radial projection, or failing that an endpoint, is exact.
        if self.arc.is_circle() {
            return CurveDistanceRange::exact(best);
        }

        let box_lower = BoundingBox::new(&self.arc).execute().distance_to(&self.point);
        CurveDistanceRange::bounded(self.refine(best), ellipse_lower.max(box_lower))
    }

    /// Exact distance to an arc collapsed onto a segment or a point.
    fn collapsed(&self) -> CurveDistanceRange {
        let arc = &self.arc;
        let c = arc.center();
        if arc.is_point() {
            return CurveDistanceRange::exact(CurveDistance {
                t: arc.start_angle(),
                point: c,
                distance: (self.point - c).norm(),
            });
        }

        // The part of the segment the span actually covers.
        let (from, to) = if arc.width() == 0.0 {
            let (lo, hi) = support_range(arc, &Vector2::y());
            (Point2::new(c.x, lo), Point2::new(c.x, hi))
        } else {
            let (lo, hi) = support_range(arc, &Vector2::x());
            (Point2::new(lo, c.y), Point2::new(hi, c.y))
        };
        let (_, closest) = closest_point_on_segment(&self.point, &from, &to);

        let (start, extent) = (arc.start_angle(), arc.extent());
        let angles = arc.collapsed_angles(&closest);
        let t = angles
            .iter()
            .filter_map(|&t| wrap_into_span(t, start, extent))
            .min_by(|a, b| angular_distance(*a, start).total_cmp(&angular_distance(*b, start)))
            .unwrap_or_else(|| nearest_span_end(angles[0], start, extent));

        CurveDistanceRange::exact(CurveDistance {
            t,
            point: closest,
            distance: (self.point - closest).norm(),
        })
    }

    /// Guarded Newton iteration on `(E(θ) − p) · E′(θ) = 0`.
    fn refine(&self, mut best: CurveDistance) -> CurveDistance {
        let c = self.arc.center();
        let (a, b) = (self.arc.radius_x(), self.arc.radius_y());

        for _ in 0..self.params.refine_steps {
            let theta = best.t.to_radians();
            let (sin, cos) = theta.sin_cos();
            let offset = Vector2::new(c.x + a * cos - self.point.x, c.y + b * sin - self.point.y);
            let d1 = Vector2::new(-a * sin, b * cos);
            let d2 = Vector2::new(-a * cos, -b * sin);

            let g = offset.dot(&d1);
            let dg = d1.dot(&d1) + offset.dot(&d2);
            // Only step where the squared distance is locally convex.
            if dg.is_nan() || dg <= 0.0 {
                break;
            }
            let next = (theta - g / dg).to_degrees();
            let Some(t) = wrap_into_span(next, self.arc.start_angle(), self.arc.extent()) else {
                break;
            };
            let candidate = self.candidate_at(t);
            if candidate.distance.is_nan() || candidate.distance >= best.distance {
                break;
            }
            best = candidate;
        }
        best
    }
}
