use super::Song;
use std::collections::HashMap;

/// Non-fatal issues found while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    DuplicateNameArtist(String, String),
    DuplicateTrackId(String),
    EmptyPreviewUrl(String),
}

pub struct CatalogResult {
    pub catalog: Catalog,
    pub problems: Vec<Problem>,
}

/// Immutable in-memory song table.
///
/// Row indices follow the order songs were supplied in; the content feature
/// matrix is keyed by that same ordering.
#[derive(Debug)]
pub struct Catalog {
    songs: Vec<Song>,
    by_name_artist: HashMap<(String, String), usize>,
    by_track_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn build(songs: Vec<Song>) -> CatalogResult {
        let mut problems = vec![];
        let mut by_name_artist = HashMap::with_capacity(songs.len());
        let mut by_track_id = HashMap::with_capacity(songs.len());

        for (row, song) in songs.iter().enumerate() {
            let key = song.lookup_key();
            if by_name_artist.contains_key(&key) {
                problems.push(Problem::DuplicateNameArtist(
                    song.name.clone(),
                    song.artist.clone(),
                ));
            } else {
                by_name_artist.insert(key, row);
            }

            if by_track_id.contains_key(&song.track_id) {
                problems.push(Problem::DuplicateTrackId(song.track_id.clone()));
            } else {
                by_track_id.insert(song.track_id.clone(), row);
            }

            if song.preview_url.is_empty() {
                problems.push(Problem::EmptyPreviewUrl(song.track_id.clone()));
            }
        }

        CatalogResult {
            catalog: Catalog {
                songs,
                by_name_artist,
                by_track_id,
            },
            problems,
        }
    }

    /// Resolve a `(name, artist)` pair to its row index.
    ///
    /// Matching is case-insensitive; inputs are lowercased here so callers
    /// don't have to normalize.
    pub fn lookup(&self, name: &str, artist: &str) -> Option<usize> {
        self.by_name_artist
            .get(&(name.to_lowercase(), artist.to_lowercase()))
            .copied()
    }

    pub fn row_of_track(&self, track_id: &str) -> Option<usize> {
        self.by_track_id.get(track_id).copied()
    }

    pub fn song(&self, row: usize) -> Option<&Song> {
        self.songs.get(row)
    }

    /// Song records for `indices`, preserving the order of `indices`.
    ///
    /// Out-of-range indices are skipped; the engine validates row alignment
    /// at startup so this only trims genuinely absent rows.
    pub fn rows(&self, indices: &[usize]) -> Vec<&Song> {
        indices.iter().filter_map(|&i| self.songs.get(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
