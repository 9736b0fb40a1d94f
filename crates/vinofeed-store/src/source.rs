//! The seam between the feed pipeline and wherever products come from.

use std::future::Future;

use crate::error::StoreError;
use crate::types::ProductPage;

/// A paginated product listing.
///
/// [`crate::WooClient`] is the production implementation; tests substitute
/// in-memory sources.
pub trait ProductSource {
    /// Fetches one 1-based page of `per_page` products.
    fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<ProductPage, StoreError>> + Send;
}
