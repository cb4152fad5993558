//! Test fixture creation for the six recommendation artifacts.
//!
//! The fixture catalog holds four songs with hand-checkable similarities:
//! songs 1 and 2 share the same listeners, song 4 has no interactions at
//! all, and the content features make song 2 the nearest neighbor of
//! song 1 with songs 3 and 4 tied behind it.

use super::constants::*;
use anyhow::Result;
use mixtape_server::config::{ArtifactFilesConfig, ArtifactPaths};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn catalog_csv() -> String {
    let mut csv = String::from("track_id,name,artist,year,duration_ms,preview_url\n");
    for (track_id, name, artist) in [
        (SONG_1_TRACK_ID, SONG_1_NAME, SONG_1_ARTIST),
        (SONG_2_TRACK_ID, SONG_2_NAME, SONG_2_ARTIST),
        (SONG_3_TRACK_ID, SONG_3_NAME, SONG_3_ARTIST),
        (SONG_4_TRACK_ID, SONG_4_NAME, SONG_4_ARTIST),
    ] {
        csv.push_str(&format!(
            "{},{},{},2020,200000,https://preview.example/{}\n",
            track_id, name, artist, track_id
        ));
    }
    csv
}

/// Content features: song 1 = (1, 0), song 2 = (2, 1), songs 3 and 4 = (1, 1).
fn content_features_json() -> String {
    json!({
        "rows": 4,
        "cols": 2,
        "indptr": [0, 1, 3, 5, 7],
        "indices": [0, 0, 1, 0, 1, 0, 1],
        "data": [1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    })
    .to_string()
}

/// Interactions over three listeners: songs 1 and 2 share listeners 0 and 1,
/// song 3 has listener 2 to itself, song 4 was never listened to.
fn interactions_json() -> String {
    json!({
        "rows": 4,
        "cols": 3,
        "indptr": [0, 2, 4, 5, 5],
        "indices": [0, 1, 0, 1, 2],
        "data": [1.0, 1.0, 1.0, 1.0, 1.0],
    })
    .to_string()
}

fn track_ids_json() -> String {
    json!([SONG_1_TRACK_ID, SONG_2_TRACK_ID, SONG_3_TRACK_ID, SONG_4_TRACK_ID]).to_string()
}

/// Creates a temporary data directory holding all six artifacts.
/// Returns (temp_dir, resolved_paths); the directory lives as long as the
/// returned `TempDir`.
pub fn create_test_artifacts() -> Result<(TempDir, ArtifactPaths)> {
    let dir = TempDir::new()?;
    let paths = ArtifactPaths::resolve(dir.path(), &ArtifactFilesConfig::default());

    fs::write(&paths.catalog, catalog_csv())?;
    fs::write(&paths.collab_catalog, catalog_csv())?;
    fs::write(&paths.track_ids, track_ids_json())?;
    fs::write(&paths.content_features, content_features_json())?;
    fs::write(&paths.interactions, interactions_json())?;
    // The hybrid encoding mirrors the content features in the fixtures
    fs::write(&paths.hybrid_features, content_features_json())?;

    Ok((dir, paths))
}
