//! `make-xml`: one full fetch-filter-render-store run.
//!
//! Any failure is returned to `main`, which exits non-zero. The stored feed
//! is only replaced after every page has been fetched.

use anyhow::Context;
use vinofeed_core::AppConfig;
use vinofeed_store::{FeedRun, StoreClientConfig, WooClient};
use vinofeed_xml::{generate_feed, FeedStore};

pub(crate) async fn run_make_xml(config: &AppConfig) -> anyhow::Result<FeedRun> {
    let client = WooClient::new(&StoreClientConfig::from_app_config(config))
        .context("failed to build store client")?;
    let store = FeedStore::new(&config.storage_dir);

    tracing::info!(
        store_url = %config.store_url,
        page_count_header = config.page_count_header.header_name(),
        "generating vivino feed"
    );

    let run = generate_feed(&client, &store)
        .await
        .with_context(|| format!("make-xml failed for {}", store.path().display()))?;

    println!(
        "wrote {} products to {}",
        run.rows.len(),
        store.path().display()
    );
    Ok(run)
}

#[cfg(test)]
#[path = "make_xml_test.rs"]
mod tests;
