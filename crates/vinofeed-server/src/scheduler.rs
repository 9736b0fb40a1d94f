//! Background feed regeneration.
//!
//! When a cron schedule is configured, a job rebuilds `vivinofeed.xml` from
//! the store catalog on that schedule. The HTTP route keeps serving the
//! previous file until a run succeeds.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use vinofeed_store::WooClient;
use vinofeed_xml::{generate_feed, FeedStore};

/// Builds and starts the background job scheduler.
///
/// With `schedule == None` no job is registered and the feed only changes
/// when `vinofeed-cli make-xml` runs. Returns the running [`JobScheduler`]
/// handle, which must be kept alive for the lifetime of the process.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the cron expression is invalid, or the scheduler fails to start.
pub async fn build_scheduler(
    client: Arc<WooClient>,
    store: FeedStore,
    schedule: Option<&str>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    match schedule {
        Some(schedule) => {
            register_feed_job(&scheduler, schedule, client, store).await?;
            tracing::info!(schedule, "scheduler: feed regeneration registered");
        }
        None => tracing::info!("scheduler: VINOFEED_SCHEDULE not set; no feed job registered"),
    }

    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_feed_job(
    scheduler: &JobScheduler,
    schedule: &str,
    client: Arc<WooClient>,
    store: FeedStore,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let client = Arc::clone(&client);
        let store = store.clone();

        Box::pin(async move {
            tracing::info!("scheduler: starting feed regeneration");
            regenerate_feed(&client, &store).await;
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}

/// One scheduled run. Failures are logged and the previous feed is kept.
async fn regenerate_feed(client: &WooClient, store: &FeedStore) {
    if let Err(e) = generate_feed(client, store).await {
        tracing::error!(error = %e, "scheduler: feed regeneration failed");
    }
}
