use crate::geometry::Arc;

/// Computes the signed area term of an arc, `∫ y(t)·x′(t) dt` over its span.
///
/// Summing this over the curves of a closed outline gives the area it
/// encloses, negative when the outline runs counter-clockwise in y-up
/// coordinates. A full counter-clockwise ellipse gives `−π·a·b`.
pub struct Area {
    arc: Arc,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(arc: &Arc) -> Self {
        Self { arc: *arc }
    }

    /// Executes the query, returning the signed area term.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let t0 = self.arc.start_angle().to_radians();
        let t1 = self.arc.end_angle().to_radians();
        self.antiderivative(t1) - self.antiderivative(t0)
    }

    /// With `x = cx + a·cos t` and `y = cy + b·sin t`:
    /// `∫ y·x′ dt = a·cy·cos t − a·b·(t/2 − sin 2t / 4)`.
    fn antiderivative(&self, t: f64) -> f64 {
        let a = self.arc.radius_x();
        let b = self.arc.radius_y();
        let cy = self.arc.center().y;
        a * cy * t.cos() - a * b * (t / 2.0 - (2.0 * t).sin() / 4.0)
    }
}
