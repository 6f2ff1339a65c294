use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_REMINDER_CRON: &str = "0 0 8 * * *";
const DEFAULT_MANAGER_EMAIL: &str = "manager@rental.local";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Six-field cron expression for the daily rental reminder job.
    pub reminder_cron: String,
    /// Recipient of the car handover reminders.
    pub manager_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address,
            reminder_cron: optional_var("REMINDER_CRON", DEFAULT_REMINDER_CRON),
            manager_email: optional_var("MANAGER_EMAIL", DEFAULT_MANAGER_EMAIL),
        })
    }
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
