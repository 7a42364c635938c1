//! Seed file tools.
//!
//! Seeds are YAML documents describing shops, their categories and items.
//! The storefront builds its catalog from one at startup.

use std::path::Path;

use foodhub_core::{SeedCatalog, validate_seed};
use tracing::{error, info};

use super::read_seed;

/// Validate a YAML seed file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if validation
/// finds problems.
pub async fn validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    info!(path = %path.display(), "Validating seed file");
    let seed = read_seed(path).await?;

    let errors = validate_seed(&seed);
    if !errors.is_empty() {
        error!("Seed validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(format!("{} validation errors found", errors.len()).into());
    }

    let items: usize = seed
        .shops
        .iter()
        .flat_map(|shop| &shop.categories)
        .map(|category| category.items.len())
        .sum();
    info!("Seed is valid");
    info!("  Shops: {}", seed.shops.len());
    info!("  Items: {items}");
    Ok(())
}

/// The built-in demo seed as a YAML document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_yaml() -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&SeedCatalog::demo())
}

/// Print the built-in demo seed as YAML on stdout.
///
/// Only the document goes to stdout so the output can be redirected into a
/// seed file.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export() -> Result<(), Box<dyn std::error::Error>> {
    let yaml = export_yaml()?;
    #[allow(clippy::print_stdout)]
    {
        print!("{yaml}");
    }
    Ok(())
}
