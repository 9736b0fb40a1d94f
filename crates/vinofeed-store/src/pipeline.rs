//! Fetch-filter-transform loop that turns the store catalog into feed rows.

use vinofeed_core::{AttributeRoles, FeedRow};

use crate::error::StoreError;
use crate::filter::{exclusion_reason, resolve_price};
use crate::name::normalize_name;
use crate::source::ProductSource;
use crate::types::Product;

/// Products requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Result of one complete pipeline run.
#[derive(Debug, Default)]
pub struct FeedRun {
    /// Rows in store order: page by page, product by product.
    pub rows: Vec<FeedRow>,
    pub pages_fetched: u32,
    pub products_seen: usize,
    pub products_skipped: usize,
    /// Rows emitted without a product name because normalization failed.
    pub unnamed: usize,
}

/// Drives pagination over a [`ProductSource`] and accumulates feed rows.
///
/// Page 1 is fetched first and its reported page count decides how many
/// further pages are requested. Pages are fetched strictly one after another.
pub struct FeedPipeline<'a, S> {
    source: &'a S,
    roles: AttributeRoles,
    per_page: u32,
}

impl<'a, S> FeedPipeline<'a, S>
where
    S: ProductSource + Sync,
{
    #[must_use]
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            roles: AttributeRoles::default(),
            per_page: PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: AttributeRoles) -> Self {
        self.roles = roles;
        self
    }

    /// Fetches every page and returns the accumulated rows.
    ///
    /// **All-or-nothing**: a failure on any page discards the rows collected
    /// so far and returns the error. A partial feed would silently delist
    /// every product on the missing pages.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ProductSource::fetch_page`].
    pub async fn run(&self) -> Result<FeedRun, StoreError> {
        let mut run = FeedRun::default();

        let first = self.source.fetch_page(1, self.per_page).await?;
        let total_pages = first.total_pages;
        tracing::info!(total_pages, per_page = self.per_page, "fetched first page");
        self.accumulate(&mut run, first.products);

        for page in 2..=total_pages {
            tracing::info!(page, total_pages, "starting on page");
            let next = self.source.fetch_page(page, self.per_page).await?;
            self.accumulate(&mut run, next.products);
            tracing::info!(page, total_pages, "finished with page");
        }

        Ok(run)
    }

    fn accumulate(&self, run: &mut FeedRun, products: Vec<Product>) {
        run.pages_fetched += 1;
        for product in products {
            run.products_seen += 1;

            if let Some(reason) = exclusion_reason(&product) {
                tracing::debug!(
                    product_id = product.id,
                    name = %product.name,
                    %reason,
                    "skipping product"
                );
                run.products_skipped += 1;
                continue;
            }

            let row = build_row(&product, &self.roles);
            if row.product_name.is_none() {
                run.unnamed += 1;
            }
            run.rows.push(row);
        }
    }
}

/// Converts an included product into a feed row.
///
/// A normalization failure is logged with the raw name and yields a row
/// without a product name; it never aborts the run.
#[must_use]
pub fn build_row(product: &Product, roles: &AttributeRoles) -> FeedRow {
    let product_name = match normalize_name(product, roles) {
        Ok(name) => Some(name),
        Err(e) => {
            tracing::warn!(
                product_id = product.id,
                raw_name = %product.name,
                error = %e,
                "could not normalize product name"
            );
            None
        }
    };

    FeedRow::new(
        product_name,
        resolve_price(product),
        product.permalink.clone(),
        product.stock_quantity,
    )
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
