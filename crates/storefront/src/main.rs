//! FoodHub Storefront - JSON catalog API for customers and vendors.
//!
//! This binary serves the storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - In-memory catalog from `foodhub-core`, seeded at startup from YAML or the
//!   built-in demo catalog
//! - In-memory sessions (tower-sessions) for vendor login
//!
//! Nothing is persisted: restarting the server resets the catalog to its seed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use foodhub_core::{Registry, SeedCatalog, validate_seed};
use foodhub_storefront::config::StorefrontConfig;
use foodhub_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that abort startup before the server binds.
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to read seed file {0}: {1}")]
    ReadSeed(String, std::io::Error),

    #[error("failed to parse seed file {0}: {1}")]
    ParseSeed(String, serde_yaml::Error),

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error(transparent)]
    Catalog(#[from] foodhub_core::CatalogError),
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Load the configured seed, falling back to the demo catalog.
fn load_seed(path: Option<&Path>) -> Result<SeedCatalog, StartupError> {
    let Some(path) = path else {
        tracing::info!("No seed file configured, using demo catalog");
        return Ok(SeedCatalog::demo());
    };

    let path_str = path.display().to_string();
    let contents =
        std::fs::read_to_string(path).map_err(|e| StartupError::ReadSeed(path_str.clone(), e))?;
    let seed: SeedCatalog = serde_yaml::from_str(&contents)
        .map_err(|e| StartupError::ParseSeed(path_str.clone(), e))?;
    tracing::info!(path = %path_str, shops = seed.shops.len(), "Seed file loaded");
    Ok(seed)
}

/// Build the registry from the configured seed.
fn build_registry(config: &StorefrontConfig) -> Result<Registry, StartupError> {
    let seed = load_seed(config.seed_path.as_deref())?;

    let problems = validate_seed(&seed);
    if !problems.is_empty() {
        for problem in &problems {
            tracing::error!(problem = %problem, "Seed validation failed");
        }
        return Err(StartupError::InvalidSeed(problems.join("; ")));
    }

    Ok(Registry::from_seed(&seed, &config.registry_options())?)
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "foodhub_storefront=info,foodhub_core=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let registry = build_registry(&config).expect("Failed to build catalog");
    tracing::info!(shops = registry.len(), "Catalog ready");

    let state = AppState::new(config.clone(), registry);

    let app = foodhub_storefront::app(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SEED_YAML: &str = r#"
shops:
  - id: k1
    name: Kanto Fishballs
    password: sauce
    status: Open
    categories:
      - name: Street Food
        items:
          - { id: f1, name: Fishball, price: "0.50" }
"#;

    fn temp_seed(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.yaml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_seed_defaults_to_demo() {
        let seed = load_seed(None).unwrap_or_default();
        assert_eq!(seed, SeedCatalog::demo());
    }

    #[test]
    fn test_load_seed_missing_file() {
        let result = load_seed(Some(Path::new("/nonexistent/foodhub-seed.yaml")));
        assert!(matches!(result, Err(StartupError::ReadSeed(..))));
    }

    #[test]
    fn test_load_seed_from_file() {
        let path = temp_seed("foodhub-storefront-seed", SEED_YAML);
        let seed = load_seed(Some(&path));
        std::fs::remove_file(&path).unwrap();

        let seed = seed.unwrap();
        assert_eq!(seed.shops.len(), 1);
        assert_eq!(seed.shops[0].id, "k1");
    }

    #[test]
    fn test_load_seed_unparseable_file() {
        let path = temp_seed("foodhub-storefront-bad-seed", "shops: [not, a, shop");
        let result = load_seed(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(StartupError::ParseSeed(..))));
    }

    #[test]
    fn test_build_registry_from_demo() {
        let registry = build_registry(&StorefrontConfig::default());
        assert!(matches!(registry, Ok(ref r) if r.len() == 2));
    }
}
