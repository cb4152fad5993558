use super::rank::rank_rows;
use super::scorer::{BlendedScorer, CosineScorer, Scorer};
use super::RecommendError;
use crate::catalog::{Catalog, Song, TrackIndex};
use anyhow::{bail, Result};
use sprs::CsMat;
use tracing::debug;

/// The recommendation engine.
///
/// Owns every loaded artifact for the lifetime of the process: the full
/// catalog with its content feature matrix, and the collaborative catalog
/// view with its track index, interaction matrix and hybrid feature
/// matrix. Everything is immutable after construction, so the engine can
/// be shared across threads without locking.
pub struct RecommenderEngine {
    catalog: Catalog,
    content_features: CsMat<f64>,
    collab_catalog: Catalog,
    track_index: TrackIndex,
    interactions: CsMat<f64>,
    hybrid_features: CsMat<f64>,
}

impl RecommenderEngine {
    /// Assemble an engine from loaded artifacts.
    ///
    /// The cross-artifact row-alignment invariants are checked here; a
    /// violation means the artifacts were produced from different catalog
    /// snapshots and the engine refuses to exist rather than serve
    /// misattributed recommendations.
    pub fn new(
        catalog: Catalog,
        content_features: CsMat<f64>,
        collab_catalog: Catalog,
        track_index: TrackIndex,
        interactions: CsMat<f64>,
        hybrid_features: CsMat<f64>,
    ) -> Result<RecommenderEngine> {
        if content_features.rows() != catalog.len() {
            bail!(
                "Content feature matrix has {} rows but the catalog has {} songs",
                content_features.rows(),
                catalog.len()
            );
        }
        if interactions.rows() != track_index.len() {
            bail!(
                "Interaction matrix has {} rows but the track index has {} entries",
                interactions.rows(),
                track_index.len()
            );
        }
        if hybrid_features.rows() != track_index.len() {
            bail!(
                "Hybrid feature matrix has {} rows but the track index has {} entries",
                hybrid_features.rows(),
                track_index.len()
            );
        }
        if collab_catalog.len() != track_index.len() {
            bail!(
                "Collaborative catalog has {} songs but the track index has {} entries",
                collab_catalog.len(),
                track_index.len()
            );
        }
        for id in track_index.ids() {
            if collab_catalog.row_of_track(id).is_none() {
                bail!("Track index entry \"{}\" is missing from the collaborative catalog", id);
            }
        }

        Ok(RecommenderEngine {
            catalog,
            content_features,
            collab_catalog,
            track_index,
            interactions,
            hybrid_features,
        })
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn collab_catalog_len(&self) -> usize {
        self.collab_catalog.len()
    }

    /// Songs similar to the query by content features alone.
    ///
    /// The first record is always the query song itself, followed by the
    /// `k` nearest songs in descending similarity.
    pub fn recommend_content(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
    ) -> Result<Vec<Song>, RecommendError> {
        validate_k(k)?;
        let row = self
            .catalog
            .lookup(song_name, artist_name)
            .ok_or_else(|| RecommendError::not_found(song_name, artist_name))?;

        debug!("Content query resolved to catalog row {}", row);
        let track_id = self
            .catalog
            .song(row)
            .map(|s| s.track_id.clone())
            .unwrap_or_default();
        let scorer = CosineScorer::new(&self.content_features);
        let ranked = rank_with(&scorer, row, k, &track_id, "content feature")?;
        Ok(self
            .catalog
            .rows(&ranked)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Songs similar to the query by observed co-listening.
    pub fn recommend_collaborative(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
    ) -> Result<Vec<Song>, RecommendError> {
        validate_k(k)?;
        let item_row = self.resolve_item_row(song_name, artist_name)?;

        debug!("Collaborative query resolved to item row {}", item_row);
        let track_id = self.track_index.id_at(item_row).unwrap_or_default().to_owned();
        let scorer = CosineScorer::new(&self.interactions);
        let ranked = rank_with(&scorer, item_row, k, &track_id, "interaction")?;
        self.item_rows_to_songs(&ranked)
    }

    /// Songs ranked by a linear blend of both similarity signals.
    ///
    /// `weight_content_based` is the fraction attributed to content
    /// similarity; 1.0 degenerates to pure content recommendations over
    /// the hybrid feature matrix, 0.0 to pure collaborative ones.
    pub fn recommend_hybrid(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
        weight_content_based: f64,
    ) -> Result<Vec<Song>, RecommendError> {
        validate_k(k)?;
        if !(0.0..=1.0).contains(&weight_content_based) {
            return Err(RecommendError::InvalidParameter(format!(
                "weight_content_based must be within [0, 1], got {}",
                weight_content_based
            )));
        }
        let item_row = self.resolve_item_row(song_name, artist_name)?;

        debug!(
            "Hybrid query resolved to item row {}, content weight {}",
            item_row, weight_content_based
        );
        let track_id = self.track_index.id_at(item_row).unwrap_or_default().to_owned();
        let scorer = BlendedScorer::new(
            &self.hybrid_features,
            &self.interactions,
            weight_content_based,
        );
        let ranked = rank_with(&scorer, item_row, k, &track_id, "hybrid feature")?;
        self.item_rows_to_songs(&ranked)
    }

    /// Resolve a query pair to its row in the interaction/hybrid matrices.
    fn resolve_item_row(
        &self,
        song_name: &str,
        artist_name: &str,
    ) -> Result<usize, RecommendError> {
        let catalog_row = self
            .collab_catalog
            .lookup(song_name, artist_name)
            .ok_or_else(|| RecommendError::not_found(song_name, artist_name))?;
        let track_id = &self
            .collab_catalog
            .song(catalog_row)
            .ok_or_else(|| RecommendError::not_found(song_name, artist_name))?
            .track_id;
        self.track_index
            .row_of(track_id)
            .ok_or_else(|| RecommendError::unmapped(track_id, "interaction"))
    }

    /// Join ranked interaction-matrix rows back to song records.
    fn item_rows_to_songs(&self, ranked: &[usize]) -> Result<Vec<Song>, RecommendError> {
        ranked
            .iter()
            .map(|&row| {
                let track_id = self
                    .track_index
                    .id_at(row)
                    .ok_or_else(|| RecommendError::unmapped("<out of range>", "interaction"))?;
                let catalog_row = self
                    .collab_catalog
                    .row_of_track(track_id)
                    .ok_or_else(|| RecommendError::unmapped(track_id, "interaction"))?;
                self.collab_catalog
                    .song(catalog_row)
                    .cloned()
                    .ok_or_else(|| RecommendError::unmapped(track_id, "interaction"))
            })
            .collect()
    }
}

fn rank_with<S: Scorer>(
    scorer: &S,
    row: usize,
    k: usize,
    track_id: &str,
    matrix: &'static str,
) -> Result<Vec<usize>, RecommendError> {
    let scores = scorer
        .score(row)
        .ok_or_else(|| RecommendError::unmapped(track_id, matrix))?;
    Ok(rank_rows(&scores, row, k))
}

fn validate_k(k: usize) -> Result<(), RecommendError> {
    if k < 1 {
        return Err(RecommendError::InvalidParameter(
            "k must be at least 1".to_owned(),
        ));
    }
    Ok(())
}
