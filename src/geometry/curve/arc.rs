use crate::error::{GeometryError, Result};
use crate::geometry::Conic;
use crate::math::arc_2d::{angle_in_span, is_full_span};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// An elliptical arc whose ellipse has axes parallel to the coordinate axes.
///
/// The ellipse is inscribed in the rectangle with corner `origin` and size
/// `width × height`. The arc covers the parametric angles from `start` to
/// `start + extent`, in degrees, where
///
/// `P(t) = (x + w/2·(1 + cos t), y + h/2·(1 + sin t))`.
///
/// The parametric angle equals the geometric angle around the center only
/// when `width == height`. A zero width or height collapses the arc onto a
/// segment; both zero collapse it onto a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    origin: Point2,
    width: f64,
    height: f64,
    start: f64,
    extent: f64,
}

impl Arc {
    /// Creates a new arc from its bounding rectangle and angular span.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Corner of the bounding rectangle
    /// * `width`, `height` - Size of the bounding rectangle (must not be negative)
    /// * `start` - Start angle in degrees
    /// * `extent` - Signed angular extent in degrees
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not finite or a size is negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64, start: f64, extent: f64) -> Result<Self> {
        for (parameter, value) in [
            ("x", x),
            ("y", y),
            ("width", width),
            ("height", height),
            ("start", start),
            ("extent", extent),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { parameter, value }.into());
            }
        }
        for (parameter, value) in [("width", width), ("height", height)] {
            if value < 0.0 {
                return Err(GeometryError::NegativeSize { parameter, value }.into());
            }
        }

        Ok(Self {
            origin: Point2::new(x, y),
            width,
            height,
            start,
            extent,
        })
    }

    /// Creates a full ellipse (extent 360°) inscribed in the given rectangle.
    ///
    /// # Errors
    ///
    /// See [`Arc::new`].
    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Self::new(x, y, width, height, 0.0, 360.0)
    }

    /// Creates a full circle.
    ///
    /// # Errors
    ///
    /// See [`Arc::new`].
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        Self::from_center(center, radius, radius, 0.0, 360.0)
    }

    /// Creates an arc from its center and radii instead of its bounding rectangle.
    ///
    /// # Errors
    ///
    /// See [`Arc::new`].
    pub fn from_center(
        center: Point2,
        radius_x: f64,
        radius_y: f64,
        start: f64,
        extent: f64,
    ) -> Result<Self> {
        Self::new(
            center.x - radius_x,
            center.y - radius_y,
            2.0 * radius_x,
            2.0 * radius_y,
            start,
            extent,
        )
    }

    /// Returns the same ellipse restricted to another span.
    ///
    /// # Errors
    ///
    /// Returns an error if the span is not finite.
    pub fn with_span(&self, start: f64, extent: f64) -> Result<Self> {
        Self::new(self.origin.x, self.origin.y, self.width, self.height, start, extent)
    }

    /// Returns the corner of the bounding rectangle.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the width of the bounding rectangle.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height of the bounding rectangle.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the start angle in degrees.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start
    }

    /// Returns the signed extent in degrees.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Returns `start + extent`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start + self.extent
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Returns the horizontal radius.
    #[must_use]
    pub fn radius_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Returns the vertical radius.
    #[must_use]
    pub fn radius_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Returns whether both radii agree within [`TOLERANCE`] (relative).
    #[must_use]
    pub fn is_circle(&self) -> bool {
        (self.width - self.height).abs() <= TOLERANCE * self.width.max(self.height)
    }

    /// Returns whether the ellipse has collapsed onto a segment or a point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns whether the ellipse has collapsed onto a single point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns whether the span covers the whole ellipse.
    #[must_use]
    pub fn is_full(&self) -> bool {
        is_full_span(self.extent)
    }

    /// Checks if a parametric angle (degrees) lies within the span, modulo 360.
    #[must_use]
    pub fn contains_angle(&self, t: f64) -> bool {
        angle_in_span(t, self.start, self.extent)
    }

    /// Maps a point back to its parametric angle in degrees, in `(-180, 180]`.
    ///
    /// The inverse of [`Curve::location`] for non-degenerate arcs, modulo 360.
    /// Returns `0` when either radius is zero.
    #[must_use]
    pub fn angle_of(&self, point: &Point2) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let c = self.center();
        ((point.y - c.y) / self.height)
            .atan2((point.x - c.x) / self.width)
            .to_degrees()
    }

    /// Returns the point at the start angle.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.location(self.start)
    }

    /// Returns the point at the end angle.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.location(self.end_angle())
    }

    /// Returns the same arc traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end_angle(),
            extent: -self.extent,
            ..*self
        }
    }

    /// Both parametric angles at which a collapsed arc reaches `point`.
    ///
    /// Only meaningful for arcs with exactly one zero radius: such an arc runs
    /// along a segment through its center and passes each interior point twice
    /// per turn. `point` is assumed to lie on that segment; its coordinate along
    /// the segment is clamped to the reachable range.
    pub(crate) fn collapsed_angles(&self, point: &Point2) -> [f64; 2] {
        let c = self.center();
        if self.width == 0.0 {
            let s = ((point.y - c.y) / self.radius_y()).clamp(-1.0, 1.0);
            let t = s.asin().to_degrees();
            [t, 180.0 - t]
        } else {
            let s = ((point.x - c.x) / self.radius_x()).clamp(-1.0, 1.0);
            let t = s.acos().to_degrees();
            [t, -t]
        }
    }

    /// Returns the implicit equation of the full ellipse in absolute coordinates.
    #[must_use]
    pub fn conic(&self) -> Conic {
        Conic::of_ellipse(&self.center(), self.radius_x(), self.radius_y())
    }
}

impl Curve for Arc {
    fn location(&self, t: f64) -> Point2 {
        let (sin, cos) = t.to_radians().sin_cos();
        Point2::new(
            self.origin.x + self.width / 2.0 * (1.0 + cos),
            self.origin.y + self.height / 2.0 * (1.0 + sin),
        )
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let (sin, cos) = t.to_radians().sin_cos();
        let k = std::f64::consts::PI / 180.0;
        Vector2::new(-self.radius_x() * sin * k, self.radius_y() * cos * k)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start, self.end_angle())
    }

    fn is_closed(&self) -> bool {
        self.is_full()
    }
}
