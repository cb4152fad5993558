mod file_config;

pub use file_config::{ArtifactFilesConfig, FileConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

/// Resolved locations of the six artifacts the engine loads at startup.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub catalog: PathBuf,
    pub content_features: PathBuf,
    pub track_ids: PathBuf,
    pub collab_catalog: PathBuf,
    pub interactions: PathBuf,
    pub hybrid_features: PathBuf,
}

impl ArtifactPaths {
    /// Default artifact file names under `data_dir`, individually
    /// overridable from the TOML config.
    pub fn resolve(data_dir: &Path, files: &ArtifactFilesConfig) -> ArtifactPaths {
        let name = |custom: &Option<String>, default: &str| {
            data_dir.join(custom.as_deref().unwrap_or(default))
        };
        ArtifactPaths {
            catalog: name(&files.catalog, "catalog.csv"),
            content_features: name(&files.content_features, "content_features.json"),
            track_ids: name(&files.track_ids, "track_ids.json"),
            collab_catalog: name(&files.collab_catalog, "collab_catalog.csv"),
            interactions: name(&files.interactions, "interactions.json"),
            hybrid_features: name(&files.hybrid_features, "hybrid_features.json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub artifacts: ArtifactPaths,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("data_dir must be specified via --data-dir or in config file")
            })?;

        if !data_dir.exists() {
            bail!("Data directory does not exist: {:?}", data_dir);
        }
        if !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let artifacts =
            ArtifactPaths::resolve(&data_dir, &file.artifacts.unwrap_or_default());

        Ok(AppConfig {
            data_dir,
            artifacts,
            port,
            logging_level,
            frontend_dir_path,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
