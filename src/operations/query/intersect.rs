use tracing::trace;

use crate::geometry::{Arc, Conic, Curve, Segment};
use crate::math::arc_2d::wrap_into_half_open_span;
use crate::math::intersect_2d::line_segment_intersect_2d;
use crate::math::poly::solve_polynomial;
use crate::math::{Point2, Vector2, ANGLE_TOLERANCE, TOLERANCE};

/// Intersects an arc with a line or a bounded segment.
///
/// Returns the parametric angles (degrees) at which the arc meets the
/// line, re-expressed inside the arc's span and sorted ascending. A tangent
/// contact is reported once.
pub struct ArcLineIntersect {
    arc: Arc,
    segment: Segment,
    bounded: bool,
}

impl ArcLineIntersect {
    /// Intersects with the infinite line through `p0` and `p1`.
    #[must_use]
    pub fn line(arc: &Arc, p0: Point2, p1: Point2) -> Self {
        Self {
            arc: *arc,
            segment: Segment::new(p0, p1),
            bounded: false,
        }
    }

    /// Intersects with a bounded segment.
    #[must_use]
    pub fn segment(arc: &Arc, segment: Segment) -> Self {
        Self {
            arc: *arc,
            segment,
            bounded: true,
        }
    }

    /// Executes the query, returning the intersection angles.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        if self.segment.is_degenerate() || self.arc.is_point() {
            return Vec::new();
        }

        let mut angles = if self.arc.is_degenerate() {
            self.collapsed()
        } else {
            self.ellipse()
        };
        angles.sort_by(f64::total_cmp);
        angles.dedup_by(|a, b| (*a - *b).abs() <= ANGLE_TOLERANCE);
        angles
    }

    /// Executes the query, pairing each angle with its point on the arc.
    #[must_use]
    pub fn points(&self) -> Vec<(f64, Point2)> {
        self.execute()
            .into_iter()
            .map(|t| (t, self.arc.location(t)))
            .collect()
    }

    fn ellipse(&self) -> Vec<f64> {
        // Centered and scaled to the larger radius, so roots are of unit size.
        let c = self.arc.center();
        let scale = self.arc.radius_x().max(self.arc.radius_y());
        let (rx, ry) = (self.arc.radius_x() / scale, self.arc.radius_y() / scale);
        let mut p0 = (self.segment.start() - c) / scale;
        let mut p1 = (self.segment.end() - c) / scale;
        let mut conic = Conic::of_ellipse(&Point2::origin(), rx, ry);

        // Keep |slope| <= 1 by exchanging the axes for steep lines.
        let swap = (p1.y - p0.y).abs() > (p1.x - p0.x).abs();
        if swap {
            trace!("steep line, solving with axes swapped");
            p0 = Vector2::new(p0.y, p0.x);
            p1 = Vector2::new(p1.y, p1.x);
            conic = conic.swapped();
        }

        let m = (p1.y - p0.y) / (p1.x - p0.x);
        let k = p0.y - m * p0.x;
        let coefficients = [
            conic.constant + conic.y * k + conic.yy * k * k,
            conic.x + conic.y * m + 2.0 * conic.yy * m * k,
            conic.xx + conic.yy * m * m,
        ];
        let roots = solve_polynomial(&coefficients).unwrap_or_default();

        let (x_min, x_max) = (p0.x.min(p1.x), p0.x.max(p1.x));
        let eps = TOLERANCE * (x_max - x_min).max(1.0);

        roots
            .into_iter()
            .filter(|&x| !self.bounded || (x >= x_min - eps && x <= x_max + eps))
            .filter_map(|x| {
                let y = m * x + k;
                let (x, y) = if swap { (y, x) } else { (x, y) };
                self.in_span((y / ry).atan2(x / rx).to_degrees())
            })
            .collect()
    }

    /// Arcs with one zero radius run back and forth along a segment.
    fn collapsed(&self) -> Vec<f64> {
        let c = self.arc.center();
        let half = Vector2::new(self.arc.radius_x(), self.arc.radius_y());
        let Some((hit, _, _)) = line_segment_intersect_2d(
            self.segment.start(),
            self.segment.end(),
            &(c - half),
            &(c + half),
            self.bounded,
        ) else {
            return Vec::new();
        };

        self.arc
            .collapsed_angles(&hit)
            .into_iter()
            .filter_map(|t| self.in_span(t))
            .collect()
    }

    fn in_span(&self, t: f64) -> Option<f64> {
        wrap_into_half_open_span(t, self.arc.start_angle(), self.arc.extent())
    }
}
