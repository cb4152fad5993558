//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest and
//! provides methods for all mixtape-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn stats(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn recommend_content(&self, song: &str, artist: &str, k: usize) -> Response {
        self.client
            .get(format!("{}/v1/recommendations/content", self.base_url))
            .query(&[("song", song), ("artist", artist), ("k", &k.to_string())])
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn recommend_collaborative(&self, song: &str, artist: &str, k: usize) -> Response {
        self.client
            .get(format!(
                "{}/v1/recommendations/collaborative",
                self.base_url
            ))
            .query(&[("song", song), ("artist", artist), ("k", &k.to_string())])
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn recommend_hybrid(
        &self,
        song: &str,
        artist: &str,
        k: usize,
        weight_content_based: f64,
    ) -> Response {
        self.client
            .get(format!("{}/v1/recommendations/hybrid", self.base_url))
            .query(&[
                ("song", song),
                ("artist", artist),
                ("k", &k.to_string()),
                ("weight_content_based", &weight_content_based.to_string()),
            ])
            .send()
            .await
            .expect("Request failed")
    }
}
