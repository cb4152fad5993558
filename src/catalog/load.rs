//! Catalog loading from the tabular CSV artifact.

use super::{Catalog, Song};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

fn read_songs(path: &Path) -> Result<Vec<Song>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open catalog file {}", path.display()))?;
    let mut songs = vec![];
    for (line, record) in reader.deserialize().enumerate() {
        let song: Song = record.with_context(|| {
            format!("Invalid song record at line {} of {}", line + 2, path.display())
        })?;
        songs.push(song);
    }
    Ok(songs)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let songs = read_songs(path.as_ref())?;
    let catalog_result = Catalog::build(songs);
    let problems = catalog_result.problems;
    let catalog = catalog_result.catalog;

    if !problems.is_empty() {
        info!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            info!("- {:?}", problem);
        }
        info!("");
    }

    info!(
        "Catalog {} has {} songs.",
        path.as_ref().display(),
        catalog.len()
    );
    Ok(catalog)
}
