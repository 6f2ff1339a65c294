//! HTTP handlers.
//!
//! Handlers validate request DTOs, convert them into server parameter types, call
//! the owning service and convert the result back into DTOs. Every handler returns
//! `Result<impl IntoResponse, AppError>` so failures share one JSON error shape.

pub mod car;
pub mod customer;
pub mod employee;
pub mod position;
pub mod reservation;

#[cfg(test)]
mod test;

use axum::extract::FromRequest;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::pagination::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
};

/// JSON body extractor answering malformed input with a 400 `ErrorDto`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Page selection accepted by every listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page, 1 to 100 (default: 10)
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Converts the query into a page request, rejecting sizes outside 1..=100.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.size) {
            return Err(AppError::BadRequest(format!(
                "Page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(PageRequest::new(self.page, self.size))
    }
}

/// Rejects path IDs below 1.
pub fn require_positive_id(id: i32) -> Result<i32, AppError> {
    if id < 1 {
        return Err(AppError::BadRequest(format!(
            "Id must be greater than zero, got {}",
            id
        )));
    }

    Ok(id)
}
