//! Read-only queries on arcs.

mod area;
mod bounding_box;
mod closest_point;
mod intersect;
mod length;
mod support;

pub use area::Area;
pub use bounding_box::BoundingBox;
pub use closest_point::{ClosestPointOnArc, CurveDistance, CurveDistanceRange, DistanceParams};
pub use hit_test::{NearestCurve, NearestHit};
pub use intersect::ArcLineIntersect;
pub use length::{Estimate, Length};
pub use support::{support_max, support_range};
