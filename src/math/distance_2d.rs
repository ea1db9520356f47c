use super::Point2;

/// Projects `p` onto the segment `a`→`b`.
///
/// Returns `(s, closest)` where `s` in `[0, 1]` is the clamped position of the
/// projection along the segment. A zero-length segment returns `(0, a)`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> (f64, Point2) {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        return (0.0, *a);
    }

    let s = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (s, a + d * s)
}
