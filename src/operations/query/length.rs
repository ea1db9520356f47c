use crate::geometry::Arc;

/// A value with guaranteed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Representative value, inside the bounds.
    pub value: f64,
    /// Guaranteed lower bound.
    pub lower_bound: f64,
    /// Guaranteed upper bound.
    pub upper_bound: f64,
}

impl Estimate {
    /// Returns whether the bounds coincide.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.lower_bound == self.upper_bound
    }
}

/// Estimates the length of an arc.
///
/// An elliptic arc is never shorter than the same span of the circle on its
/// smaller radius, nor longer than the one on its larger radius. The estimate
/// is the mean of the two.
pub struct Length {
    arc: Arc,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(arc: &Arc) -> Self {
        Self { arc: *arc }
    }

    /// Executes the query, returning the length bracket.
    #[must_use]
    pub fn execute(&self) -> Estimate {
        let sweep = self.arc.extent().abs().to_radians();
        let along_x = self.arc.radius_x() * sweep;
        let along_y = self.arc.radius_y() * sweep;

        Estimate {
            value: (along_x + along_y) / 2.0,
            lower_bound: along_x.min(along_y),
            upper_bound: along_x.max(along_y),
        }
    }
}
