use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::{FitError, GeometryError, Result};
use crate::geometry::{Arc, Conic};
use crate::math::linear::solve_linear_system;
use crate::math::{Point2, Vector2};

/// Default singular-value ratio below which a fit is considered unsolvable.
pub const DEFAULT_FIT_TOLERANCE: f64 = 1e-10;

/// Fits an axis-aligned ellipse or circle through 1 to 4 points.
///
/// - 1 point: a zero-size ellipse at that point.
/// - 2 points: the circle having the two points as a diameter.
/// - 3 points: the circle through all three.
/// - 4 points: the axis-aligned ellipse through all four.
/// - 5 points: recognized, but rotated ellipses are not supported, so this
///   always fails with [`FitError::NotAnEllipse`] or [`FitError::MissingFeature`].
///
/// Points are centered and rescaled before solving, so the outcome does not
/// depend on the magnitude of the coordinates.
pub struct FitEllipse {
    points: Vec<Point2>,
    tolerance: f64,
}

/// Centroid-and-scale normalization of the input points.
struct Frame {
    origin: Point2,
    scale: f64,
}

impl Frame {
    fn of(points: &[Point2]) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let sum = points
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords);
        let origin = Point2::from(sum / n);
        let scale = points
            .iter()
            .map(|p| (p - origin).amax())
            .fold(0.0, f64::max);
        Self { origin, scale }
    }

    fn to_local(&self, p: &Point2) -> Point2 {
        Point2::from((p - self.origin) / self.scale)
    }

    fn to_world(&self, ellipse: &Arc) -> Result<Arc> {
        let c = ellipse.center();
        Arc::from_center(
            self.origin + c.coords * self.scale,
            ellipse.radius_x() * self.scale,
            ellipse.radius_y() * self.scale,
            0.0,
            360.0,
        )
    }
}

impl FitEllipse {
    /// Creates a new `FitEllipse` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            tolerance: DEFAULT_FIT_TOLERANCE,
        }
    }

    /// Sets the singular-value ratio used to reject near-singular systems.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the fit, returning a full ellipse (extent 360°).
    ///
    /// # Errors
    ///
    /// - [`FitError::InvalidArity`] for an empty input or more than 5 points.
    /// - [`FitError::Unsolvable`] when the points are collinear, coincide, or
    ///   otherwise leave the system singular.
    /// - [`FitError::NotAnEllipse`] when the points lie on a hyperbola or parabola.
    /// - [`FitError::MissingFeature`] when 5 points describe an ellipse.
    /// - [`GeometryError::NonFinite`] for NaN or infinite coordinates.
    pub fn execute(&self) -> Result<Arc> {
        let n = self.points.len();
        if let Some(p) = self.points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            let value = if p.x.is_finite() { p.y } else { p.x };
            return Err(GeometryError::NonFinite {
                parameter: "point",
                value,
            }
            .into());
        }

        let result = match n {
            1 => Arc::from_center(self.points[0], 0.0, 0.0, 0.0, 360.0),
            2 => {
                let (a, b) = (self.points[0], self.points[1]);
                Arc::circle(Point2::from((a.coords + b.coords) / 2.0), (b - a).norm() / 2.0)
            }
            3 => self.fit_circle(),
            4 => self.fit_axis_aligned(),
            5 => self.fit_general(),
            _ => Err(FitError::InvalidArity(n).into()),
        };

        match &result {
            Ok(arc) => debug!(
                points = n,
                cx = arc.center().x,
                cy = arc.center().y,
                rx = arc.radius_x(),
                ry = arc.radius_y(),
                "ellipse fitted"
            ),
            Err(err) => debug!(points = n, %err, "ellipse fit failed"),
        }
        result
    }

    /// Circle through three points: `c + x·X + y·Y + X² + Y² = 0`.
    fn fit_circle(&self) -> Result<Arc> {
        let solution = self.solve(3, |q| ([1.0, q.x, q.y, 0.0, 0.0], -(q.x * q.x + q.y * q.y)))?;
        self.finish(Conic::new(solution[0], solution[1], solution[2], 1.0, 1.0))
    }

    /// Axis-aligned ellipse through four points: `c + x·X + y·Y + X² + yy·Y² = 0`.
    fn fit_axis_aligned(&self) -> Result<Arc> {
        let solution = self.solve(4, |q| ([1.0, q.x, q.y, q.y * q.y, 0.0], -q.x * q.x))?;
        self.finish(Conic::new(
            solution[0],
            solution[1],
            solution[2],
            1.0,
            solution[3],
        ))
    }

    /// General conic through five points: `c + x·X + y·Y + X² + xy·X·Y + yy·Y² = 0`.
    ///
    /// Only the classification is used; a genuine ellipse here is rotated.
    fn fit_general(&self) -> Result<Arc> {
        let solution = self.solve(5, |q| ([1.0, q.x, q.y, q.x * q.y, q.y * q.y], -q.x * q.x))?;
        let xy = solution[3];
        let yy = solution[4];
        if xy * xy - 4.0 * yy >= 0.0 {
            return Err(FitError::NotAnEllipse.into());
        }
        Err(FitError::MissingFeature("ellipse fit through 5 points requires an xy term").into())
    }

    /// Builds and solves the `size × size` system in the normalized frame.
    ///
    /// `row` maps a normalized point to its coefficient row (first `size`
    /// entries used) and right-hand side.
    fn solve<F>(&self, size: usize, row: F) -> Result<DVector<f64>>
    where
        F: Fn(&Point2) -> ([f64; 5], f64),
    {
        let frame = Frame::of(&self.points);
        if frame.scale <= 0.0 {
            return Err(FitError::Unsolvable.into());
        }

        let mut matrix = DMatrix::zeros(size, size);
        let mut rhs = DVector::zeros(size);
        for (i, p) in self.points.iter().enumerate() {
            let (coefs, b) = row(&frame.to_local(p));
            for (j, &c) in coefs.iter().take(size).enumerate() {
                matrix[(i, j)] = c;
            }
            rhs[i] = b;
        }

        solve_linear_system(matrix, &rhs, self.tolerance).ok_or_else(|| FitError::Unsolvable.into())
    }

    /// Converts a conic found in the normalized frame back to world coordinates.
    fn finish(&self, conic: Conic) -> Result<Arc> {
        let local = conic.to_ellipse()?;
        Frame::of(&self.points).to_world(&local)
    }
}
