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
        employee::{CreateEmployeeDto, EmployeeDto, PaginatedEmployeesDto, UpdateEmployeeDto},
    },
    server::{
        controller::{require_positive_id, AppJson, PaginationParams},
        error::AppError,
        model::employee::{CreateEmployeeParams, EmployeeSearchParams, UpdateEmployeeParams},
        service::employee::EmployeeService,
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeSearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Position name
    pub position: Option<String>,
}

/// Create an employee in an existing position.
///
/// # Returns
/// - `201 Created` - The created employee
/// - `400 Bad Request` - Invalid employee data
/// - `404 Not Found` - Position not found
/// - `409 Conflict` - Email or phone number already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/employees",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = EmployeeDto),
        (status = 400, description = "Invalid employee data", body = ErrorDto),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 409, description = "Email or phone number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = EmployeeService::new(&state.db);

    let employee = service
        .create(CreateEmployeeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(employee.into_dto())))
}

#[utoipa::path(
    get,
    path = "/employees",
    tag = EMPLOYEE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved employees", body = PaginatedEmployeesDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    let employees = service
        .get_paginated(pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(employees.into_dto())))
}

/// Search employees by name and position name.
#[utoipa::path(
    get,
    path = "/employees/search",
    tag = EMPLOYEE_TAG,
    params(EmployeeSearchQuery, PaginationParams),
    responses(
        (status = 200, description = "Successfully searched employees", body = PaginatedEmployeesDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeSearchQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmployeeService::new(&state.db);

    let params = EmployeeSearchParams {
        first_name: query.first_name.filter(|n| !n.trim().is_empty()),
        last_name: query.last_name.filter(|n| !n.trim().is_empty()),
        position: query.position.filter(|p| !p.trim().is_empty()),
    };
    let employees = service
        .search(params, pagination.into_page_request()?)
        .await?;

    Ok((StatusCode::OK, Json(employees.into_dto())))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved employee", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = EmployeeService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(employee) => Ok((StatusCode::OK, Json(employee.into_dto()))),
        None => Err(employee_not_found(id)),
    }
}

#[utoipa::path(
    put,
    path = "/employees",
    tag = EMPLOYEE_TAG,
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Successfully updated employee", body = EmployeeDto),
        (status = 400, description = "Invalid employee data", body = ErrorDto),
        (status = 404, description = "Employee or position not found", body = ErrorDto),
        (status = 409, description = "Email or phone number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = payload.id;
    let service = EmployeeService::new(&state.db);

    match service
        .update(UpdateEmployeeParams::from_dto(payload))
        .await?
    {
        Some(employee) => Ok((StatusCode::OK, Json(employee.into_dto()))),
        None => Err(employee_not_found(id)),
    }
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted employee"),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;
    let service = EmployeeService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(employee_not_found(id))
    }
}

fn employee_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Employee not found with id: {}", id))
}
