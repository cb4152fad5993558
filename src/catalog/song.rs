use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Song {
    pub track_id: String,
    pub name: String,
    pub artist: String,
    pub year: Option<u16>,
    pub duration_ms: Option<u32>,
    pub preview_url: String,
}

impl Song {
    /// The case-normalized key songs are looked up by.
    pub fn lookup_key(&self) -> (String, String) {
        (self.name.to_lowercase(), self.artist.to_lowercase())
    }
}
