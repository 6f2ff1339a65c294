use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{not_blank, phone_number};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position_id: i32,
    pub position_name: String,
    pub phone_number: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateEmployeeDto {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub position_id: i32,
    #[validate(custom(function = "phone_number"))]
    pub phone_number: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateEmployeeDto {
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub id: i32,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub position_id: i32,
    #[validate(custom(function = "phone_number"))]
    pub phone_number: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedEmployeesDto {
    pub employees: Vec<EmployeeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
