use nalgebra::{DMatrix, DVector};

/// Solves the square system `matrix · x = rhs`.
///
/// Returns `None` when the system is singular to within `tolerance`, judged
/// by the ratio of the smallest to the largest singular value. Callers are
/// expected to pass reasonably scaled matrices.
#[must_use]
pub fn solve_linear_system(
    matrix: DMatrix<f64>,
    rhs: &DVector<f64>,
    tolerance: f64,
) -> Option<DVector<f64>> {
    if matrix.nrows() != matrix.ncols() || matrix.nrows() != rhs.len() || rhs.is_empty() {
        return None;
    }

    let svd = matrix.svd(true, true);
    let largest = svd.singular_values.max();
    let smallest = svd.singular_values.min();
    if largest <= 0.0 || smallest / largest < tolerance {
        return None;
    }

    svd.solve(rhs, 0.0)
        .ok()
        .filter(|x| x.iter().all(|v| v.is_finite()))
}
