//! Browse a catalog: list shops, print menus, search.
//!
//! Output goes through `tracing` at info level, one line per event.

use std::path::Path;

use foodhub_core::{ItemRecord, SearchResults, Shop};
use tracing::info;

use super::load_registry;

/// Spaces per tree level in menu output.
const INDENT: usize = 4;

/// Badge shown after an item's price.
const fn badge(item: &ItemRecord) -> &'static str {
    if item.available { "/" } else { "X" }
}

fn item_line(item: &ItemRecord) -> String {
    format!(
        "{} | {} — {} {}",
        item.id,
        item.name,
        item.price,
        badge(item)
    )
}

/// Render a shop's menu tree in pre-order followed by its recent updates.
///
/// The menu root carries the shop name at depth 0. Items are indented one
/// level below their category.
pub fn render_menu(shop: &Shop) -> Vec<String> {
    let mut lines = vec![format!("{} [{}]", shop.name(), shop.status())];

    for (node, depth) in shop.menu().preorder().skip(1) {
        lines.push(format!("{:indent$}{}", "", node.name(), indent = depth * INDENT));
        for item in node.items() {
            lines.push(format!(
                "{:indent$}{}",
                "",
                item_line(item),
                indent = (depth + 1) * INDENT
            ));
        }
    }

    lines.push("Recent updates:".to_string());
    if shop.log().is_empty() {
        lines.push(format!("{:INDENT$}(none)", ""));
    }
    lines.extend(
        shop.log()
            .recent_first()
            .map(|message| format!("{:INDENT$}{message}", "")),
    );
    lines
}

/// Render search results, shops first, then item hits grouped by shop.
pub fn render_search(results: &SearchResults) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No results for '{}'", results.query)];
    }

    let mut lines = Vec::new();
    if !results.shops.is_empty() {
        lines.push("Shops:".to_string());
        for shop in &results.shops {
            lines.push(format!("{:INDENT$}{} {} [{}]", "", shop.id, shop.name, shop.status));
        }
    }
    if !results.items.is_empty() {
        lines.push("Items:".to_string());
        for group in &results.items {
            lines.push(format!("{:INDENT$}{} ({})", "", group.shop_name, group.shop_id));
            for hit in &group.matches {
                lines.push(format!(
                    "{:indent$}{}: {}",
                    "",
                    hit.category,
                    item_line(&hit.item),
                    indent = 2 * INDENT
                ));
            }
        }
    }
    lines
}

/// List all shops with their status.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded.
pub async fn shops(seed: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(seed).await?;

    for summary in registry.summaries()? {
        info!("{} | {} [{}]", summary.id, summary.name, summary.status);
    }
    Ok(())
}

/// Print one shop's menu and updates.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded or the shop does not exist.
pub async fn menu(shop_id: &str, seed: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(seed).await?;
    let handle = registry
        .get(shop_id)
        .ok_or_else(|| format!("Shop not found: {shop_id}"))?;

    let shop = handle.read()?;
    let lines = render_menu(&shop);
    for line in lines {
        info!("{line}");
    }
    Ok(())
}

/// Search every shop and print the hits.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded.
pub async fn search(query: &str, seed: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(seed).await?;
    let results = registry.search(query)?;

    for line in render_search(&results) {
        info!("{line}");
    }
    Ok(())
}
