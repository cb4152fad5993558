//! Engine assembly from the on-disk artifacts.

use super::RecommenderEngine;
use crate::catalog::{load_catalog, load_track_index};
use crate::config::ArtifactPaths;
use crate::matrix::load_matrix;
use anyhow::{Context, Result};
use tracing::info;

/// Load the six artifacts and assemble the engine.
///
/// Any missing or malformed artifact, and any violated row-alignment
/// invariant between them, fails here so nothing ever serves from
/// partially loaded data.
pub fn load_engine(paths: &ArtifactPaths) -> Result<RecommenderEngine> {
    info!("Loading catalog...");
    let catalog = load_catalog(&paths.catalog).context("Failed to load catalog")?;

    info!("Loading content feature matrix...");
    let content_features =
        load_matrix(&paths.content_features).context("Failed to load content feature matrix")?;

    info!("Loading collaborative catalog...");
    let collab_catalog =
        load_catalog(&paths.collab_catalog).context("Failed to load collaborative catalog")?;

    info!("Loading track index...");
    let track_index =
        load_track_index(&paths.track_ids).context("Failed to load track index")?;

    info!("Loading interaction matrix...");
    let interactions =
        load_matrix(&paths.interactions).context("Failed to load interaction matrix")?;

    info!("Loading hybrid feature matrix...");
    let hybrid_features =
        load_matrix(&paths.hybrid_features).context("Failed to load hybrid feature matrix")?;

    let engine = RecommenderEngine::new(
        catalog,
        content_features,
        collab_catalog,
        track_index,
        interactions,
        hybrid_features,
    )
    .context("Artifacts are misaligned")?;

    info!(
        "Engine ready: {} songs, {} collaborative-eligible.",
        engine.catalog_len(),
        engine.collab_catalog_len()
    );
    Ok(engine)
}
