use thiserror::Error;

/// Errors a recommendation query can fail with.
///
/// All of these are recoverable conditions reported to the caller; none is
/// fatal to the process. Misaligned or missing artifacts are a different
/// class entirely and refuse to load at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("song \"{name}\" by \"{artist}\" not found in the catalog")]
    NotFound { name: String, artist: String },

    #[error("track \"{track_id}\" has no row in the {matrix} matrix")]
    UnmappedItem {
        track_id: String,
        matrix: &'static str,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RecommendError {
    pub fn not_found(name: &str, artist: &str) -> RecommendError {
        RecommendError::NotFound {
            name: name.to_owned(),
            artist: artist.to_owned(),
        }
    }

    pub fn unmapped(track_id: &str, matrix: &'static str) -> RecommendError {
        RecommendError::UnmappedItem {
            track_id: track_id.to_owned(),
            matrix,
        }
    }
}
