//! Background catalog refresh.
//!
//! One refresh is spawned at startup and a repeated job re-runs it every
//! `refresh_interval_secs`. The two are independent: the first tick does not
//! wait for the startup refresh, and overlaps are absorbed by the service's
//! in-flight guard.

use std::sync::Arc;
use std::time::Duration;

use storefront_core::AppConfig;
use storefront_ingest::{CatalogService, RefreshOutcome};
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Spawns the startup refresh and starts the periodic refresh job.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process; dropping it stops the periodic job.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    catalog: Arc<CatalogService>,
    config: &AppConfig,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_refresh_job(
        &scheduler,
        Arc::clone(&catalog),
        Duration::from_secs(config.refresh_interval_secs),
    )
    .await?;

    scheduler.start().await?;

    tokio::spawn(async move {
        tracing::info!("scheduler: running startup catalog refresh");
        log_outcome(&catalog.refresh().await);
    });

    Ok(scheduler)
}

async fn register_refresh_job(
    scheduler: &JobScheduler,
    catalog: Arc<CatalogService>,
    interval: Duration,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let catalog = Arc::clone(&catalog);

        Box::pin(async move {
            tracing::debug!("scheduler: periodic catalog refresh");
            log_outcome(&catalog.refresh().await);
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(
        interval_secs = interval.as_secs(),
        "scheduler: registered catalog refresh job"
    );
    Ok(())
}

fn log_outcome(outcome: &RefreshOutcome) {
    match outcome {
        RefreshOutcome::Published { generation, entries, .. } => {
            tracing::debug!(generation, entries, "scheduler: refresh published");
        }
        RefreshOutcome::FellBack { source, .. } => {
            tracing::debug!(%source, "scheduler: refresh fell back");
        }
        RefreshOutcome::AlreadyRunning => {
            tracing::info!("scheduler: previous refresh still running; tick skipped");
        }
    }
}
