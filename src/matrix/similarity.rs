//! Row-versus-all-rows cosine scoring over row-normalized CSR matrices.

use rayon::prelude::*;
use sprs::CsMat;

/// Cosine similarity of `row` against every row of `matrix`.
///
/// The matrix must be L2-row-normalized, so each score is a plain sparse
/// dot product. Rows are scored in parallel and collected in row order,
/// which keeps the downstream tie-break (ascending row index) stable.
///
/// Returns `None` when `row` is out of range.
pub fn cosine_scores(matrix: &CsMat<f64>, row: usize) -> Option<Vec<f64>> {
    let query = matrix.outer_view(row)?;
    let scores = (0..matrix.rows())
        .into_par_iter()
        .map(|i| match matrix.outer_view(i) {
            Some(other) => other.dot(&query),
            None => 0.0,
        })
        .collect();
    Some(scores)
}
