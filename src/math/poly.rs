//! Real roots of polynomials up to degree four.

use std::f64::consts::TAU;

use crate::error::{Result, SolverError};

/// Relative size below which a discriminant is treated as zero.
const DISCRIMINANT_EPS: f64 = 1e-13;

/// Roots closer than this (relative) are reported once.
const ROOT_MERGE_EPS: f64 = 1e-9;

const NEWTON_STEPS: usize = 8;

/// Finds the distinct real roots of a polynomial.
///
/// Coefficients are ordered lowest degree first, so `[c0, c1, c2]` is
/// `c0 + c1·x + c2·x²`. Leading coefficients that are exactly zero are
/// dropped before the degree is decided. Roots come back sorted ascending;
/// a repeated root appears once. A constant (or all-zero) polynomial has
/// no roots.
///
/// # Errors
///
/// Returns [`SolverError::NonFinite`] if any coefficient is NaN or infinite,
/// and [`SolverError::UnsupportedDegree`] for degrees above four.
pub fn solve_polynomial(coefficients: &[f64]) -> Result<Vec<f64>> {
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(SolverError::NonFinite.into());
    }

    let len = coefficients
        .iter()
        .rposition(|&c| c != 0.0)
        .map_or(0, |i| i + 1);
    let c = &coefficients[..len];

    let mut roots = match len {
        0 | 1 => Vec::new(),
        2 => vec![-c[0] / c[1]],
        3 => quadratic(c[2], c[1], c[0]),
        4 => cubic(c[3], c[2], c[1], c[0]),
        5 => quartic(c[4], c[3], c[2], c[1], c[0]),
        n => return Err(SolverError::UnsupportedDegree(n - 1).into()),
    };

    if len > 3 {
        for root in &mut roots {
            *root = polish(c, *root);
        }
    }

    roots.retain(|r| r.is_finite());
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|a, b| (*a - *b).abs() <= ROOT_MERGE_EPS * a.abs().max(b.abs()).max(1.0));
    Ok(roots)
}

/// Evaluates the polynomial and its derivative at `x` (Horner).
fn eval_with_derivative(c: &[f64], x: f64) -> (f64, f64) {
    let mut f = 0.0;
    let mut df = 0.0;
    for &coef in c.iter().rev() {
        df = df * x + f;
        f = f * x + coef;
    }
    (f, df)
}

/// Newton steps that are kept only while they shrink the residual.
fn polish(c: &[f64], mut x: f64) -> f64 {
    let (mut f, mut df) = eval_with_derivative(c, x);
    for _ in 0..NEWTON_STEPS {
        if f == 0.0 || df == 0.0 {
            break;
        }
        let next = x - f / df;
        let (nf, ndf) = eval_with_derivative(c, next);
        if nf.is_nan() || nf.abs() >= f.abs() {
            break;
        }
        x = next;
        f = nf;
        df = ndf;
    }
    x
}

/// `a·x² + b·x + c = 0` with `a != 0`, avoiding cancellation between `-b` and `√Δ`.
fn quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let disc = b * b - 4.0 * a * c;
    let scale = b * b + (4.0 * a * c).abs();

    if disc.abs() <= DISCRIMINANT_EPS * scale {
        // Tangent case: single root.
        return vec![-b / (2.0 * a)];
    }
    if disc < 0.0 {
        return Vec::new();
    }

    let q = -0.5 * (b + b.signum() * disc.sqrt());
    vec![q / a, c / q]
}

/// `a·x³ + b·x² + c·x + d = 0` with `a != 0`.
fn cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    let (b, c, d) = (b / a, c / a, d / a);
    let shift = b / 3.0;

    // Depressed form y³ + p·y + q with x = y - b/3.
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let disc = half_q * half_q + third_p * third_p * third_p;
    let scale = half_q * half_q + third_p.abs().powi(3);

    if p == 0.0 && q == 0.0 {
        return vec![-shift];
    }

    let ys = if disc > DISCRIMINANT_EPS * scale || p >= 0.0 {
        // One real root (Cardano).
        let sq = disc.max(0.0).sqrt();
        vec![(-half_q + sq).cbrt() + (-half_q - sq).cbrt()]
    } else {
        // Three real roots (trigonometric form).
        let r = 2.0 * (-third_p).sqrt();
        let arg = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
        let phi = arg.acos() / 3.0;
        (0_u8..3)
            .map(|k| r * (phi - TAU * f64::from(k) / 3.0).cos())
            .collect()
    };

    ys.into_iter().map(|y| y - shift).collect()
}

/// `a·x⁴ + b·x³ + c·x² + d·x + e = 0` with `a != 0`, by Ferrari's method.
fn quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> Vec<f64> {
    let (b, c, d, e) = (b / a, c / a, d / a, e / a);
    let shift = b / 4.0;

    // Depressed form y⁴ + p·y² + q·y + r with x = y - b/4.
    let b2 = b * b;
    let p = c - 3.0 * b2 / 8.0;
    let q = d - b * c / 2.0 + b2 * b / 8.0;
    let r = e - b * d / 4.0 + b2 * c / 16.0 - 3.0 * b2 * b2 / 256.0;

    let ys = if q.abs() <= DISCRIMINANT_EPS * (1.0 + p.abs() + r.abs()) {
        // Biquadratic: solve for z = y² first.
        quadratic(1.0, p, r)
            .into_iter()
            .filter(|&z| z >= -DISCRIMINANT_EPS * (1.0 + p.abs()))
            .flat_map(|z| {
                let y = z.max(0.0).sqrt();
                [y, -y]
            })
            .collect()
    } else {
        // The resolvent cubic always has a positive root when q != 0.
        let m = cubic(1.0, p, p * p / 4.0 - r, -q * q / 8.0)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        if m.is_nan() || m <= 0.0 {
            return Vec::new();
        }
        let s = (2.0 * m).sqrt();
        let base = p / 2.0 + m;
        let mut ys = quadratic(1.0, -s, base + q / (2.0 * s));
        ys.extend(quadratic(1.0, s, base - q / (2.0 * s)));
        ys
    };

    ys.into_iter().map(|y| y - shift).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArcMathError;

    const TOL: f64 = 1e-9;

    fn assert_roots(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "roots={actual:?}, expected={expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOL, "roots={actual:?}, expected={expected:?}");
        }
    }

    #[test]
    fn constant_has_no_roots() {
        assert!(solve_polynomial(&[3.0]).unwrap().is_empty());
        assert!(solve_polynomial(&[0.0, 0.0]).unwrap().is_empty());
        assert!(solve_polynomial(&[]).unwrap().is_empty());
    }

    #[test]
    fn linear_root() {
        assert_roots(&solve_polynomial(&[-6.0, 2.0]).unwrap(), &[3.0]);
    }

    #[test]
    fn zero_leading_terms_reduce_degree() {
        // 4 - 2x + 0x² + 0x³
        assert_roots(&solve_polynomial(&[4.0, -2.0, 0.0, 0.0]).unwrap(), &[2.0]);
    }

    #[test]
    fn quadratic_two_roots() {
        // (x - 1)(x - 3) = x² - 4x + 3
        assert_roots(&solve_polynomial(&[3.0, -4.0, 1.0]).unwrap(), &[1.0, 3.0]);
    }

    #[test]
    fn quadratic_double_root_reported_once() {
        // (x - 2)² = x² - 4x + 4
        assert_roots(&solve_polynomial(&[4.0, -4.0, 1.0]).unwrap(), &[2.0]);
    }

    #[test]
    fn quadratic_no_real_roots() {
        assert!(solve_polynomial(&[1.0, 0.0, 1.0]).unwrap().is_empty());
    }

    #[test]
    fn quadratic_without_cancellation() {
        // Roots 1e-8 and 1e8: the naive formula loses the small root.
        let roots = solve_polynomial(&[1.0, -(1e8 + 1e-8), 1.0]).unwrap();
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 1e-8).abs() < 1e-20, "small={}", roots[0]);
        assert!((roots[1] - 1e8).abs() < 1e-6, "large={}", roots[1]);
    }

    #[test]
    fn cubic_three_roots() {
        // (x + 1)(x - 2)(x - 5) = x³ - 6x² + 3x + 10
        assert_roots(&solve_polynomial(&[10.0, 3.0, -6.0, 1.0]).unwrap(), &[-1.0, 2.0, 5.0]);
    }

    #[test]
    fn cubic_one_root() {
        // (x - 1)(x² + 1) = x³ - x² + x - 1
        assert_roots(&solve_polynomial(&[-1.0, 1.0, -1.0, 1.0]).unwrap(), &[1.0]);
    }

    #[test]
    fn cubic_triple_root() {
        // (x - 2)³ = x³ - 6x² + 12x - 8
        assert_roots(&solve_polynomial(&[-8.0, 12.0, -6.0, 1.0]).unwrap(), &[2.0]);
    }

    #[test]
    fn quartic_biquadratic() {
        // (x-1)(x-2)(x-3)(x-4)
        assert_roots(
            &solve_polynomial(&[24.0, -50.0, 35.0, -10.0, 1.0]).unwrap(),
            &[1.0, 2.0, 3.0, 4.0],
        );
    }

    #[test]
    fn quartic_general() {
        // (x-1)(x-2)(x-3)(x+5) = x⁴ - x³ - 19x² + 49x - 30
        assert_roots(
            &solve_polynomial(&[-30.0, 49.0, -19.0, -1.0, 1.0]).unwrap(),
            &[-5.0, 1.0, 2.0, 3.0],
        );
    }

    #[test]
    fn quartic_without_real_roots() {
        assert!(solve_polynomial(&[1.0, 0.0, 0.0, 0.0, 1.0]).unwrap().is_empty());
        assert_roots(&solve_polynomial(&[-1.0, 0.0, 0.0, 0.0, 1.0]).unwrap(), &[-1.0, 1.0]);
    }

    #[test]
    fn degree_five_is_rejected() {
        let err = solve_polynomial(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            ArcMathError::Solver(SolverError::UnsupportedDegree(5))
        ));
    }

    #[test]
    fn non_finite_is_rejected() {
        let err = solve_polynomial(&[f64::NAN, 1.0]).unwrap_err();
        assert!(matches!(err, ArcMathError::Solver(SolverError::NonFinite)));
    }
}
