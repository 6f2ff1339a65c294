//! Business logic layer.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! business rules (uniqueness, referential checks, reservation lifecycle), own the
//! database transactions, and translate repository results into `AppError`s.

pub mod car;
pub mod customer;
pub mod employee;
pub mod position;
pub mod reminder;
pub mod reservation;

#[cfg(test)]
mod test;
