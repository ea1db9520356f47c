pub mod arc_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod linear;
pub mod poly;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance for comparisons between angles expressed in degrees.
pub const ANGLE_TOLERANCE: f64 = 1e-9;
