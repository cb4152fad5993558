//! Sparse matrix artifact parsing.
//!
//! Matrices are persisted as JSON holding the raw CSR arrays. They are
//! validated and L2-row-normalized here, once, at load; every consumer
//! downstream only ever computes cosine scores against them.

use anyhow::{bail, Context, Result};
use sprs::CsMat;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

#[derive(Debug, serde::Deserialize)]
pub struct SparseMatrixFile {
    pub rows: usize,
    pub cols: usize,
    pub indptr: Vec<usize>,
    pub indices: Vec<usize>,
    pub data: Vec<f64>,
}

impl SparseMatrixFile {
    pub fn load(path: &Path) -> Result<SparseMatrixFile> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open matrix file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse matrix file {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.indptr.len() != self.rows + 1 {
            bail!(
                "indptr has {} entries, expected rows + 1 = {}",
                self.indptr.len(),
                self.rows + 1
            );
        }
        if self.indptr[0] != 0 {
            bail!("indptr must start at 0, found {}", self.indptr[0]);
        }
        if self.indptr[self.rows] != self.indices.len() {
            bail!(
                "indptr ends at {} but there are {} column indices",
                self.indptr[self.rows],
                self.indices.len()
            );
        }
        if self.indices.len() != self.data.len() {
            bail!(
                "{} column indices but {} values",
                self.indices.len(),
                self.data.len()
            );
        }
        for window in self.indptr.windows(2) {
            if window[1] < window[0] {
                bail!("indptr is not monotonically non-decreasing");
            }
            let row_indices = &self.indices[window[0]..window[1]];
            for pair in row_indices.windows(2) {
                if pair[1] <= pair[0] {
                    bail!("Column indices within a row must be strictly increasing");
                }
            }
            if let Some(&last) = row_indices.last() {
                if last >= self.cols {
                    bail!("Column index {} out of bounds for {} columns", last, self.cols);
                }
            }
        }
        if self.data.iter().any(|v| !v.is_finite()) {
            bail!("Matrix values must be finite");
        }
        Ok(())
    }

    /// Consume the raw arrays into a row-normalized CSR matrix.
    ///
    /// Rows are scaled to unit L2 norm so that cosine similarity reduces to
    /// a sparse dot product. All-zero rows are left as-is, they score 0.0
    /// against everything.
    pub fn into_row_normalized(mut self) -> Result<CsMat<f64>> {
        self.validate()?;
        l2_normalize_rows(&self.indptr, &mut self.data);
        Ok(CsMat::new(
            (self.rows, self.cols),
            self.indptr,
            self.indices,
            self.data,
        ))
    }
}

fn l2_normalize_rows(indptr: &[usize], data: &mut [f64]) {
    for window in indptr.windows(2) {
        let row = &mut data[window[0]..window[1]];
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }
    }
}

pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<CsMat<f64>> {
    let path = path.as_ref();
    let matrix = SparseMatrixFile::load(path)?
        .into_row_normalized()
        .with_context(|| format!("Invalid sparse matrix in {}", path.display()))?;
    info!(
        "Matrix {} has {} rows, {} columns, {} non-zeros.",
        path.display(),
        matrix.rows(),
        matrix.cols(),
        matrix.nnz()
    );
    Ok(matrix)
}
