//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON shapes accepted and returned by the controllers.
//! Request DTOs derive `Validate` so that field-level rules are checked before a
//! request reaches the service layer.

pub mod api;
pub mod car;
pub mod customer;
pub mod employee;
pub mod position;
pub mod reservation;
pub mod validation;
