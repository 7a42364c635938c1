//! CLI subcommands.

pub mod catalog;
pub mod seed;

use std::path::Path;

use foodhub_core::{Registry, RegistryOptions, SeedCatalog, validate_seed};
use thiserror::Error;
use tracing::info;

/// Errors loading a seed file.
#[derive(Debug, Error)]
pub enum SeedLoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("{count} validation errors found")]
    Invalid { count: usize },

    #[error(transparent)]
    Catalog(#[from] foodhub_core::CatalogError),
}

/// Read and parse a YAML seed file.
///
/// # Errors
///
/// Returns `SeedLoadError` if the file cannot be read or parsed.
pub async fn read_seed(path: &Path) -> Result<SeedCatalog, SeedLoadError> {
    let display = path.display().to_string();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedLoadError::Read {
            path: display.clone(),
            source,
        })?;
    serde_yaml::from_str(&content).map_err(|source| SeedLoadError::Parse {
        path: display,
        source,
    })
}

/// Build a registry from `path`, or from the demo seed when no path is given.
///
/// # Errors
///
/// Returns `SeedLoadError` if the seed cannot be loaded, is invalid, or
/// cannot be built.
pub async fn load_registry(path: Option<&Path>) -> Result<Registry, SeedLoadError> {
    let seed = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading seed file");
            read_seed(path).await?
        }
        None => SeedCatalog::demo(),
    };

    let errors = validate_seed(&seed);
    if !errors.is_empty() {
        for err in &errors {
            tracing::error!("  - {err}");
        }
        return Err(SeedLoadError::Invalid {
            count: errors.len(),
        });
    }

    Ok(Registry::from_seed(&seed, &RegistryOptions::default())?)
}
