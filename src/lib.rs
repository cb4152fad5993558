//! Mixtape Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod matrix;
pub mod recommender;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, Song, TrackIndex};
pub use recommender::{load_engine, RecommendError, RecommenderEngine};
pub use server::{run_server, RequestsLoggingLevel};
