use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerDto, PaginatedCustomersDto, UpdateCustomerDto},
    },
    server::{
        controller::{require_positive_id, AppJson, PaginationParams},
        error::AppError,
        model::customer::{CreateCustomerParams, CustomerSearchParams, UpdateCustomerParams},
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerSearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Create a customer.
///
/// Email, phone number and driving license number must each be unused.
///
/// # Returns
/// - `201 Created` - The created customer
/// - `400 Bad Request` - Invalid customer data
/// - `409 Conflict` - A unique field is already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Successfully created customer", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 409, description = "Unique field already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = CustomerService::new(&state.db);

    let customer = service
        .create(CreateCustomerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/customers",
    tag = CUSTOMER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved customers", body = PaginatedCustomersDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customers = service
        .get_paginated(pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(customers.into_dto())))
}

/// Search customers by first and last name.
#[utoipa::path(
    get,
    path = "/customers/search",
    tag = CUSTOMER_TAG,
    params(CustomerSearchQuery, PaginationParams),
    responses(
        (status = 200, description = "Successfully searched customers", body = PaginatedCustomersDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerSearchQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let params = CustomerSearchParams {
        first_name: query.first_name.filter(|n| !n.trim().is_empty()),
        last_name: query.last_name.filter(|n| !n.trim().is_empty()),
    };
    let customers = service
        .search(params, pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(customers.into_dto())))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved customer", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = CustomerService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(customer) => Ok((StatusCode::OK, Json(customer.into_dto()))),
        None => Err(customer_not_found(id)),
    }
}

#[utoipa::path(
    put,
    path = "/customers",
    tag = CUSTOMER_TAG,
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Successfully updated customer", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Unique field already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = payload.id;
    let service = CustomerService::new(&state.db);

    match service
        .update(UpdateCustomerParams::from_dto(payload))
        .await?
    {
        Some(customer) => Ok((StatusCode::OK, Json(customer.into_dto()))),
        None => Err(customer_not_found(id)),
    }
}

/// Delete a customer without reservations.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted customer"),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Customer has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = CustomerService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(customer_not_found(id))
    }
}

fn customer_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Customer not found with id: {}", id))
}
