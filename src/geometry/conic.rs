use crate::error::FitError;
use crate::math::Point2;

use super::Arc;

/// Implicit equation of an axis-aligned conic:
///
/// `constant + x·X + y·Y + xx·X² + yy·Y² = 0`.
///
/// There is no `X·Y` term; conics that need one are rotated and cannot be
/// represented here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Conic {
    /// Constant term.
    pub constant: f64,
    /// Coefficient of `X`.
    pub x: f64,
    /// Coefficient of `Y`.
    pub y: f64,
    /// Coefficient of `X²`.
    pub xx: f64,
    /// Coefficient of `Y²`.
    pub yy: f64,
}

impl Conic {
    /// Creates a conic from its coefficients.
    #[must_use]
    pub fn new(constant: f64, x: f64, y: f64, xx: f64, yy: f64) -> Self {
        Self {
            constant,
            x,
            y,
            xx,
            yy,
        }
    }

    /// Equation of the ellipse with the given center and radii, scaled so that
    /// no division by a radius is needed:
    ///
    /// `ry²·(X − cx)² + rx²·(Y − cy)² − rx²·ry² = 0`.
    #[must_use]
    pub fn of_ellipse(center: &Point2, radius_x: f64, radius_y: f64) -> Self {
        let a2 = radius_x * radius_x;
        let b2 = radius_y * radius_y;
        Self {
            constant: b2 * center.x * center.x + a2 * center.y * center.y - a2 * b2,
            x: -2.0 * b2 * center.x,
            y: -2.0 * a2 * center.y,
            xx: b2,
            yy: a2,
        }
    }

    /// Evaluates the left-hand side at `p`. Zero on the curve.
    #[must_use]
    pub fn evaluate(&self, p: &Point2) -> f64 {
        self.constant + self.x * p.x + self.y * p.y + self.xx * p.x * p.x + self.yy * p.y * p.y
    }

    /// Returns the same conic with the roles of X and Y exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            constant: self.constant,
            x: self.y,
            y: self.x,
            xx: self.yy,
            yy: self.xx,
        }
    }

    /// Recovers the full ellipse described by this conic.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::NotAnEllipse`] if the quadratic coefficients do
    /// not share a sign (hyperbola) or one vanishes (parabola), and
    /// [`FitError::Unsolvable`] if the ellipse is imaginary or collapses to a
    /// point.
    pub fn to_ellipse(&self) -> std::result::Result<Arc, FitError> {
        if (self.xx * self.yy).is_nan() || self.xx * self.yy <= 0.0 {
            return Err(FitError::NotAnEllipse);
        }
        let c = if self.xx < 0.0 { self.negated() } else { *self };

        let cx = -c.x / (2.0 * c.xx);
        let cy = -c.y / (2.0 * c.yy);
        let k = c.x * c.x / (4.0 * c.xx) + c.y * c.y / (4.0 * c.yy) - c.constant;
        if k.is_nan() || k <= 0.0 {
            return Err(FitError::Unsolvable);
        }

        let rx = (k / c.xx).sqrt();
        let ry = (k / c.yy).sqrt();
        Arc::from_center(Point2::new(cx, cy), rx, ry, 0.0, 360.0)
            .map_err(|_| FitError::Unsolvable)
    }

    fn negated(&self) -> Self {
        Self {
            constant: -self.constant,
            x: -self.x,
            y: -self.y,
            xx: -self.xx,
            yy: -self.yy,
        }
    }
}
