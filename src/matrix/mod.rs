mod artifact;
mod similarity;

pub use artifact::{load_matrix, SparseMatrixFile};
pub use similarity::cosine_scores;
