use std::{sync::Arc, time::Duration};

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::checker::AccountChecker};

/// Starts the account check scheduler
///
/// This scheduler runs a poll cycle every `sleep_duration_minutes` and, per
/// account, decides whether to re-check the ban status, send a periodic
/// update, or skip. The job repeats until process shutdown; a failed cycle
/// is logged and the next one runs on schedule.
///
/// # Arguments
/// - `checker`: The account checker, shared with the job
/// - `sleep_duration_minutes`: Minutes between poll cycles
pub async fn start_scheduler(
    checker: Arc<AccountChecker>,
    sleep_duration_minutes: u64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let interval = Duration::from_secs(sleep_duration_minutes * 60);

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let checker = checker.clone();

        Box::pin(async move {
            tracing::info!("Starting periodic account check");
            if let Err(e) = checker.run_cycle().await {
                tracing::error!("Error running account check cycle: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Account check scheduler started");

    Ok(())
}
