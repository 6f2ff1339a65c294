use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::model::validation::positive_amount;

/// Date format used by reservation request and response bodies.
pub const RESERVATION_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatusDto {
    Reserved,
    Rented,
    Finished,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub car_id: i32,
    pub customer_id: i32,
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    #[schema(value_type = String, example = "20-04-2025")]
    pub start_date: NaiveDate,
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    #[schema(value_type = String, example = "25-04-2025")]
    pub end_date: NaiveDate,
    #[schema(value_type = String, example = "1000.00")]
    pub total_amount: Decimal,
    pub status: ReservationStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreateReservationDto {
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub car_id: i32,
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub customer_id: i32,
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    #[schema(value_type = String, example = "20-04-2025")]
    pub start_date: NaiveDate,
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    #[schema(value_type = String, example = "25-04-2025")]
    pub end_date: NaiveDate,
    #[schema(value_type = String, example = "1000.00")]
    #[validate(custom(function = "positive_amount"))]
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdateReservationDto {
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub id: i32,
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub car_id: i32,
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub customer_id: i32,
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    #[schema(value_type = String, example = "20-04-2025")]
    pub start_date: NaiveDate,
    #[serde(
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    #[schema(value_type = String, example = "25-04-2025")]
    pub end_date: NaiveDate,
    #[schema(value_type = String, example = "1000.00")]
    #[validate(custom(function = "positive_amount"))]
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeReservationStatusDto {
    pub status: ReservationStatusDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedReservationsDto {
    pub reservations: Vec<ReservationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::new("date_order")
            .with_message(Cow::Borrowed("End date must not be before start date")));
    }
    Ok(())
}

fn validate_create_dates(dto: &CreateReservationDto) -> Result<(), ValidationError> {
    validate_date_order(dto.start_date, dto.end_date)
}

fn validate_update_dates(dto: &UpdateReservationDto) -> Result<(), ValidationError> {
    validate_date_order(dto.start_date, dto.end_date)
}

fn serialize_date<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.format(RESERVATION_DATE_FORMAT).to_string())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&value, RESERVATION_DATE_FORMAT).map_err(|_| {
        D::Error::custom(format!(
            "invalid date '{}', expected format dd-MM-yyyy",
            value
        ))
    })
}
