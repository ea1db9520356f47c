//! Angle bookkeeping for arcs whose span is given in degrees.
//!
//! A span is `start` plus a signed `extent`. It covers the closed interval
//! between `start` and `start + extent`, taken modulo 360. Any extent whose
//! magnitude reaches 360 covers every angle.

use super::ANGLE_TOLERANCE;

/// Maps an angle in degrees onto `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Returns the span as `(lo, hi)` with `lo <= hi`, independent of the extent's sign.
#[must_use]
pub fn span_bounds(start: f64, extent: f64) -> (f64, f64) {
    let end = start + extent;
    if extent < 0.0 {
        (end, start)
    } else {
        (start, end)
    }
}

/// Returns whether a span covers the whole turn.
#[must_use]
pub fn is_full_span(extent: f64) -> bool {
    extent.abs() >= 360.0 - ANGLE_TOLERANCE
}

/// Checks if an angle falls within a span, modulo 360.
#[must_use]
pub fn angle_in_span(angle: f64, start: f64, extent: f64) -> bool {
    wrap_into_span(angle, start, extent).is_some()
}

/// Re-expresses `angle` as the equivalent angle inside the span.
///
/// The result lies in `[lo, lo + 360)` for full spans and in `[lo, hi]` for
/// partial ones. Angles that miss the span only by rounding snap onto its
/// boundary. Returns `None` if the angle is outside the span.
#[must_use]
pub fn wrap_into_span(angle: f64, start: f64, extent: f64) -> Option<f64> {
    let (lo, hi) = span_bounds(start, extent);
    let width = hi - lo;
    let delta = normalize_degrees(angle - lo);

    // An angle a hair below `lo` wraps to almost a full turn.
    if delta >= 360.0 - ANGLE_TOLERANCE {
        return Some(lo);
    }
    if is_full_span(extent) {
        return Some(lo + delta);
    }
    if delta <= width + ANGLE_TOLERANCE {
        return Some(lo + delta.min(width));
    }
    None
}

/// Like [`wrap_into_span`], but the end of a partial span is excluded.
///
/// The span is walked from `start` in the direction of `extent`: `start`
/// belongs to it, `start + extent` does not. Angles within
/// [`ANGLE_TOLERANCE`] of the end are rejected and angles just before the
/// start snap onto it. Full spans behave as in [`wrap_into_span`].
#[must_use]
pub fn wrap_into_half_open_span(angle: f64, start: f64, extent: f64) -> Option<f64> {
    if is_full_span(extent) {
        return wrap_into_span(angle, start, extent);
    }

    let width = extent.abs();
    let mut offset = if extent < 0.0 {
        normalize_degrees(start - angle)
    } else {
        normalize_degrees(angle - start)
    };
    if offset >= 360.0 - ANGLE_TOLERANCE {
        offset = 0.0;
    }
    if offset > width - ANGLE_TOLERANCE {
        return None;
    }
    Some(if extent < 0.0 { start - offset } else { start + offset })
}

/// Unsigned angular distance between two angles, in `[0, 180]`.
#[must_use]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    d.min(360.0 - d)
}

/// Returns whichever span endpoint is angularly closer to `angle`.
///
/// Ties favor the start of the span.
#[must_use]
pub fn nearest_span_end(angle: f64, start: f64, extent: f64) -> f64 {
    let end = start + extent;
    if angular_distance(angle, end) < angular_distance(angle, start) {
        end
    } else {
        start
    }
}
