//! Rental reminder messages.
//!
//! The day before a rental starts, the customer is reminded to pick the car up and
//! the manager is reminded to prepare the handover. Messages are built from the
//! reservation details and handed to a `ReminderSender`; the shipped sender writes
//! them to the log.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::reservation::ReservationRepository, error::AppError,
    model::reservation::ReservationDetails,
};

const CUSTOMER_REMINDER_FROM: &str = "noreply@rental.local";
const MANAGER_REMINDER_FROM: &str = "system@rental.local";

/// A plain-text message ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Delivery channel for reminders.
#[async_trait]
pub trait ReminderSender: Send + Sync {
    async fn send(&self, reminder: &Reminder) -> Result<(), AppError>;
}

/// Sender that records every reminder in the application log.
pub struct LogReminderSender;

#[async_trait]
impl ReminderSender for LogReminderSender {
    async fn send(&self, reminder: &Reminder) -> Result<(), AppError> {
        tracing::info!(
            to = %reminder.to,
            from = %reminder.from,
            subject = %reminder.subject,
            "{}",
            reminder.body
        );

        Ok(())
    }
}

pub struct RentalReminderService<'a> {
    db: &'a DatabaseConnection,
    sender: Arc<dyn ReminderSender>,
    manager_email: &'a str,
}

impl<'a> RentalReminderService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        sender: Arc<dyn ReminderSender>,
        manager_email: &'a str,
    ) -> Self {
        Self {
            db,
            sender,
            manager_email,
        }
    }

    /// Sends customer and manager reminders for RESERVED rentals starting on `date`.
    ///
    /// A failed delivery is logged and does not stop the remaining reminders.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of reminders delivered
    /// - `Err(AppError::DbErr)` - Reservations could not be loaded
    pub async fn send_for_date(&self, date: NaiveDate) -> Result<usize, AppError> {
        let rentals = ReservationRepository::new(self.db)
            .get_starting_on(date, ReservationStatus::Reserved)
            .await?;

        let mut delivered = 0;
        for rental in &rentals {
            let reminders = [
                customer_reminder(rental),
                manager_reminder(rental, self.manager_email),
            ];

            for reminder in &reminders {
                match self.sender.send(reminder).await {
                    Ok(()) => delivered += 1,
                    Err(e) => tracing::error!(
                        "Failed to send reminder for reservation {} to {}: {}",
                        rental.reservation.id,
                        reminder.to,
                        e
                    ),
                }
            }
        }

        tracing::info!(
            "Sent {} reminders for {} rentals starting {}",
            delivered,
            rentals.len(),
            date
        );

        Ok(delivered)
    }
}

/// Builds the pickup reminder addressed to the customer.
pub fn customer_reminder(rental: &ReservationDetails) -> Reminder {
    let body = format!(
        "Hi {}!\n\n\
         We remind you about tomorrow's car rental!\n\n\
         Car: {} {}\n\
         Reservation id: {}\n\n\
         Please arrive on time with your documents:\n\
         - driving license number: {}\n\n\
         If you have any questions, please contact us.\n\n\
         Best regards,\n\
         Rental Team!",
        rental.customer.first_name,
        rental.car.producer,
        rental.car.model,
        rental.reservation.id,
        rental.customer.driving_license_number,
    );

    Reminder {
        to: rental.customer.email.clone(),
        from: CUSTOMER_REMINDER_FROM.to_string(),
        subject: "Car rental reminder".to_string(),
        body,
    }
}

/// Builds the handover reminder addressed to the manager.
pub fn manager_reminder(rental: &ReservationDetails, manager_email: &str) -> Reminder {
    let body = format!(
        "Hi,\n\n\
         Reminder about tomorrow's car release:\n\n\
         Customer: {}\n\
         - phone number: {}\n\
         - driving license number: {}\n\
         Car: {} {} (registration number: {})\n\
         Reservation id: {}\n\n\
         Rental System!",
        rental.customer.full_name(),
        rental.customer.phone_number,
        rental.customer.driving_license_number,
        rental.car.producer,
        rental.car.model,
        rental.car.registration_number,
        rental.reservation.id,
    );

    Reminder {
        to: manager_email.to_string(),
        from: MANAGER_REMINDER_FROM.to_string(),
        subject: "Car handover reminder".to_string(),
        body,
    }
}
