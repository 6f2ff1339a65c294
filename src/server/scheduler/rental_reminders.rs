use std::sync::Arc;

use chrono::{Days, Local};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::reminder::{ReminderSender, RentalReminderService},
};

/// Starts the rental reminder scheduler
///
/// Runs on `cron` (six fields, seconds first) and sends reminders for every
/// RESERVED rental starting the next day.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Schedule of the job, daily at 08:00 by default
/// - `sender`: Delivery channel for the reminders
/// - `manager_email`: Recipient of the handover reminders
pub async fn start_scheduler(
    db: DatabaseConnection,
    cron: String,
    sender: Arc<dyn ReminderSender>,
    manager_email: String,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let sender = sender.clone();
        let manager_email = manager_email.clone();

        Box::pin(async move {
            if let Err(e) = send_reminders(&db, sender, &manager_email).await {
                tracing::error!("Error sending rental reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Rental reminder scheduler started ({})", cron);

    Ok(())
}

/// Sends reminders for rentals starting tomorrow
async fn send_reminders(
    db: &DatabaseConnection,
    sender: Arc<dyn ReminderSender>,
    manager_email: &str,
) -> Result<(), AppError> {
    let tomorrow = Local::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::InternalError("Date overflow computing tomorrow".to_string()))?;

    RentalReminderService::new(db, sender, manager_email)
        .send_for_date(tomorrow)
        .await?;

    Ok(())
}
