use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ordered track-id sequence backing the interaction and hybrid matrices.
///
/// Position `i` in the sequence identifies the song occupying row `i` of
/// those matrices; the mapping is a bijection, duplicates are rejected at
/// load.
#[derive(Debug)]
pub struct TrackIndex {
    ids: Vec<String>,
    positions: HashMap<String, usize>,
}

impl TrackIndex {
    pub fn new(ids: Vec<String>) -> Result<TrackIndex> {
        let mut positions = HashMap::with_capacity(ids.len());
        for (row, id) in ids.iter().enumerate() {
            if positions.insert(id.clone(), row).is_some() {
                bail!("Duplicate track id \"{}\" in track index", id);
            }
        }
        Ok(TrackIndex { ids, positions })
    }

    pub fn row_of(&self, track_id: &str) -> Option<usize> {
        self.positions.get(track_id).copied()
    }

    pub fn id_at(&self, row: usize) -> Option<&str> {
        self.ids.get(row).map(|s| s.as_str())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Load the ordered track-id array artifact (a JSON string array).
pub fn load_track_index<P: AsRef<Path>>(path: P) -> Result<TrackIndex> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open track index file {}", path.display()))?;
    let ids: Vec<String> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse track index file {}", path.display()))?;
    TrackIndex::new(ids)
}
