use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        position::{CreatePositionDto, PositionDto},
    },
    server::{
        controller::AppJson, error::AppError, service::position::PositionService,
        state::AppState,
    },
};

/// Tag for grouping position endpoints in OpenAPI documentation
pub static POSITION_TAG: &str = "position";

/// Create a job position.
#[utoipa::path(
    post,
    path = "/positions",
    tag = POSITION_TAG,
    request_body = CreatePositionDto,
    responses(
        (status = 201, description = "Successfully created position", body = PositionDto),
        (status = 400, description = "Invalid position name", body = ErrorDto),
        (status = 409, description = "Position already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_position(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePositionDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = PositionService::new(&state.db);

    let position = service.create(payload.name.trim().to_string()).await?;

    Ok((StatusCode::CREATED, Json(position.into_dto())))
}

/// Get all positions ordered by name.
#[utoipa::path(
    get,
    path = "/positions",
    tag = POSITION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved positions", body = Vec<PositionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_positions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PositionService::new(&state.db);

    let positions: Vec<PositionDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(positions)))
}
