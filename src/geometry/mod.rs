pub mod aabb;
pub mod conic;
pub mod curve;

pub use aabb::Aabb;
pub use conic::Conic;
pub use curve::{Arc, Curve, CurveDomain, Segment};
