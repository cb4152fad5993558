use axum::extract::FromRef;

use crate::recommender::RecommenderEngine;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type SharedEngine = Arc<RecommenderEngine>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub engine: SharedEngine,
}

impl FromRef<ServerState> for SharedEngine {
    fn from_ref(input: &ServerState) -> Self {
        input.engine.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
