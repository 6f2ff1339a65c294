//! Custom field validators used by the request DTOs.

use std::borrow::Cow;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use validator::ValidationError;

/// Earliest accepted production year for a rental car.
pub const MIN_YEAR_OF_PRODUCTION: i32 = 2000;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be blank"));
    }
    Ok(())
}

/// Accepts exactly nine ASCII digits.
pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    if value.len() != 9 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error("phone_number", "must consist of exactly 9 digits"));
    }
    Ok(())
}

/// Accepts years between 2000 and the current year inclusive.
pub fn year_of_production(value: i32) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if !(MIN_YEAR_OF_PRODUCTION..=current_year).contains(&value) {
        return Err(error(
            "year_of_production",
            "must be between 2000 and the current year",
        ));
    }
    Ok(())
}

/// Rejects zero and negative amounts.
pub fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(error("positive", "must be greater than zero"));
    }
    Ok(())
}

/// Joins validation failures into one `field: message` list for error responses.
pub fn describe(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                if field == "__all__" {
                    message
                } else {
                    format!("{}: {}", field, message)
                }
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
