use anyhow::Result;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::info;

use crate::recommender::{RecommendError, RecommenderEngine};
use tower_http::services::ServeDir;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, state::*, RequestsLoggingLevel};

const DEFAULT_K: usize = 5;
const DEFAULT_CONTENT_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub songs: usize,
    pub collaborative_songs: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct RecommendationParams {
    pub song: String,
    pub artist: String,
    pub k: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct HybridRecommendationParams {
    pub song: String,
    pub artist: String,
    pub k: Option<usize>,
    pub weight_content_based: Option<f64>,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        songs: state.engine.catalog_len(),
        collaborative_songs: state.engine.collab_catalog_len(),
    };
    Json(stats)
}

fn error_response(err: RecommendError) -> Response {
    let status = match err {
        RecommendError::NotFound { .. } | RecommendError::UnmappedItem { .. } => {
            StatusCode::NOT_FOUND
        }
        RecommendError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string()).into_response()
}

async fn recommend_content(
    State(engine): State<SharedEngine>,
    Query(params): Query<RecommendationParams>,
) -> Response {
    let k = params.k.unwrap_or(DEFAULT_K);
    match engine.recommend_content(&params.song, &params.artist, k) {
        Ok(songs) => Json(songs).into_response(),
        Err(err) => error_response(err),
    }
}

async fn recommend_collaborative(
    State(engine): State<SharedEngine>,
    Query(params): Query<RecommendationParams>,
) -> Response {
    let k = params.k.unwrap_or(DEFAULT_K);
    match engine.recommend_collaborative(&params.song, &params.artist, k) {
        Ok(songs) => Json(songs).into_response(),
        Err(err) => error_response(err),
    }
}

async fn recommend_hybrid(
    State(engine): State<SharedEngine>,
    Query(params): Query<HybridRecommendationParams>,
) -> Response {
    let k = params.k.unwrap_or(DEFAULT_K);
    let weight = params.weight_content_based.unwrap_or(DEFAULT_CONTENT_WEIGHT);
    match engine.recommend_hybrid(&params.song, &params.artist, k, weight) {
        Ok(songs) => Json(songs).into_response(),
        Err(err) => error_response(err),
    }
}

pub fn make_app(config: ServerConfig, engine: Arc<RecommenderEngine>) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        engine,
    };

    let mut app = Router::new()
        .route("/", get(home))
        .route("/v1/recommendations/content", get(recommend_content))
        .route(
            "/v1/recommendations/collaborative",
            get(recommend_collaborative),
        )
        .route("/v1/recommendations/hybrid", get(recommend_hybrid))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    if let Some(frontend_dir_path) = config.frontend_dir_path {
        info!("Serving frontend from {}", frontend_dir_path);
        app = app.fallback_service(ServeDir::new(frontend_dir_path));
    }

    app.with_state(state)
}

pub async fn run_server(engine: Arc<RecommenderEngine>, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let app = make_app(config, engine);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
