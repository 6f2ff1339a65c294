use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{not_blank, positive_amount, year_of_production};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarDto {
    pub id: i32,
    pub producer: String,
    pub model: String,
    pub year_of_production: i32,
    pub registration_number: String,
    #[schema(value_type = String, example = "199.99")]
    pub price_per_day: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateCarDto {
    #[validate(custom(function = "not_blank"))]
    pub producer: String,
    #[validate(custom(function = "not_blank"))]
    pub model: String,
    #[validate(custom(function = "year_of_production"))]
    pub year_of_production: i32,
    #[validate(
        custom(function = "not_blank"),
        length(max = 10, message = "must be at most 10 characters")
    )]
    pub registration_number: String,
    #[schema(value_type = String, example = "199.99")]
    #[validate(custom(function = "positive_amount"))]
    pub price_per_day: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateCarDto {
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub id: i32,
    #[validate(custom(function = "not_blank"))]
    pub producer: String,
    #[validate(custom(function = "not_blank"))]
    pub model: String,
    #[validate(custom(function = "year_of_production"))]
    pub year_of_production: i32,
    #[validate(
        custom(function = "not_blank"),
        length(max = 10, message = "must be at most 10 characters")
    )]
    pub registration_number: String,
    #[schema(value_type = String, example = "199.99")]
    #[validate(custom(function = "positive_amount"))]
    pub price_per_day: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCarsDto {
    pub cars: Vec<CarDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
