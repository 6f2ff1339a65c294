pub mod rental_reminders;
