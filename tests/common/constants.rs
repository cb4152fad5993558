//! Shared constants for the test fixtures.
#![allow(dead_code)]

pub const SONG_1_NAME: &str = "Love Story";
pub const SONG_1_ARTIST: &str = "Taylor Swift";
pub const SONG_1_TRACK_ID: &str = "t-love-story";

pub const SONG_2_NAME: &str = "Blank Space";
pub const SONG_2_ARTIST: &str = "Taylor Swift";
pub const SONG_2_TRACK_ID: &str = "t-blank-space";

pub const SONG_3_NAME: &str = "Halo";
pub const SONG_3_ARTIST: &str = "Beyonce";
pub const SONG_3_TRACK_ID: &str = "t-halo";

/// Song with an all-zero interaction row.
pub const SONG_4_NAME: &str = "Lights Up";
pub const SONG_4_ARTIST: &str = "Harry Styles";
pub const SONG_4_TRACK_ID: &str = "t-lights-up";

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
