//! Books command: print the catalog with localized display names

use anyhow::{Context, Result};
use biverse_core::labels::usable_display_name;
use biverse_core::service::ContentService;
use biverse_core::{BookRegistry, EngineConfig, HttpContentService};
use std::collections::HashMap;

/// List the registry in catalog order, one localized name per book.
///
/// Name lookups degrade silently: an unreachable name service or a missing
/// entry falls back to the uppercased abbreviation, same as the page header.
pub async fn books(lang: Option<String>) -> Result<()> {
    let config = EngineConfig::from_env();
    let lang = lang.unwrap_or_else(|| config.default_main.clone());
    let service =
        HttpContentService::new(&config).context("Failed to build content-service client")?;
    let registry = BookRegistry::book_of_mormon();

    let names: HashMap<String, String> = match service.book_names(&lang).await {
        Ok(response) => response
            .books
            .into_iter()
            .map(|b| (b.abbr, b.name))
            .collect(),
        Err(err) => {
            tracing::debug!(%lang, %err, "book names unavailable, using abbreviations");
            HashMap::new()
        }
    };

    for book in registry.books() {
        let name = names
            .get(&book.abbreviation)
            .and_then(|n| usable_display_name(n))
            .map(str::to_string)
            .unwrap_or_else(|| book.abbreviation.to_uppercase());
        println!(
            "{:<8} {:<36} {:>3}",
            book.abbreviation, name, book.chapter_count
        );
    }

    Ok(())
}
