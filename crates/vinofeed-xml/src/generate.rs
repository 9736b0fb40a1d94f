//! The full fetch-render-store run shared by `make-xml` and the scheduler.

use vinofeed_store::{FeedPipeline, FeedRun, ProductSource};

use crate::error::GenerateError;
use crate::storage::FeedStore;

/// Runs the pipeline over `source` and replaces the stored feed with the
/// result.
///
/// The stored feed is left untouched unless every page was fetched and the
/// document rendered.
///
/// # Errors
///
/// [`GenerateError::Fetch`] when any page fails and [`GenerateError::Write`]
/// when the feed cannot be rendered or stored.
pub async fn generate_feed<S>(source: &S, store: &FeedStore) -> Result<FeedRun, GenerateError>
where
    S: ProductSource + Sync,
{
    let run = FeedPipeline::new(source).run().await?;
    store.publish(&run.rows)?;

    tracing::info!(
        pages = run.pages_fetched,
        seen = run.products_seen,
        skipped = run.products_skipped,
        rows = run.rows.len(),
        unnamed = run.unnamed,
        "vivino feed generated"
    );
    Ok(run)
}
