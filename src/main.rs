mod model;
mod server;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::rental_reminders,
    service::reminder::LogReminderSender,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    // Start rental reminder scheduler
    let scheduler_db = db.clone();
    let reminder_cron = config.reminder_cron.clone();
    let manager_email = config.manager_email.clone();
    tokio::spawn(async move {
        if let Err(e) = rental_reminders::start_scheduler(
            scheduler_db,
            reminder_cron,
            Arc::new(LogReminderSender),
            manager_email,
        )
        .await
        {
            tracing::error!("Rental reminder scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
