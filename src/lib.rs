//! Geometry kernel for axis-aligned elliptical arcs.
//!
//! Arcs are described by the rectangle their ellipse is inscribed in plus a
//! span of parametric angles in degrees. The kernel fits ellipses through
//! points, intersects arcs with lines, bounds their extent, measures point
//! distances with honest error brackets, and estimates length and area.
//! Every operation is a pure function of its inputs.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ArcMathError, Result};
