use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, bail};
use family_card::registry::memory::InMemoryRegistryBackend;
use family_card::utils::logging::console::{print_entries, print_list_summary, print_ring_summary};
use family_card::utils::logging::log_warning;
use family_card::{AccessRole, HouseholdRecord, RegistryConfig, RegistryListModel};
use log::info;
use serde::Deserialize;
use serde_json::Value;

/// Seed data for the in-memory backend
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FeedFile {
    config: RegistryConfig,
    households: Vec<HouseholdRecord>,
    /// Extra standard-feed documents, of any type
    documents: Vec<Value>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(feed_path) = args.next().map(PathBuf::from) else {
        bail!("usage: family-card <feed.json> [search term]");
    };
    let term = args.next().unwrap_or_default();

    let text = std::fs::read_to_string(&feed_path)
        .with_context(|| format!("Failed to read feed file {}", feed_path.display()))?;
    let feed: FeedFile = serde_json::from_str(&text)
        .with_context(|| format!("Invalid feed file {}", feed_path.display()))?;
    feed.config.validate().context("Invalid configuration in feed file")?;

    info!("{}", feed.config);
    info!(
        "Seeding {} households and {} extra documents",
        feed.households.len(),
        feed.documents.len()
    );

    let backend = feed
        .households
        .into_iter()
        .fold(InMemoryRegistryBackend::new(), InMemoryRegistryBackend::with_household);
    let backend = Arc::new(
        feed.documents
            .into_iter()
            .fold(backend, InMemoryRegistryBackend::with_document),
    );

    for role in [AccessRole::Privileged, AccessRole::Standard] {
        let mut model = RegistryListModel::with_config(Arc::clone(&backend), &feed.config);
        let start = Instant::now();
        model
            .load(role)
            .await
            .with_context(|| format!("Failed to load the list for {role:?}"))?;

        println!();
        print_list_summary(&format!("{role:?}"), model.entries(), start.elapsed());

        let visible = model.filter(&term);
        if visible.is_empty() {
            log_warning("No household cards match", Some(term.as_str()));
        }
        print_entries(visible);
        print_ring_summary(&model.ring_summary());
    }

    Ok(())
}
