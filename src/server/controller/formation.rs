use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        formation::{CreateFormationDto, FormationDto, UpdateFormationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::formation::{CreateFormationParam, Formation, UpdateFormationParam},
        service::formation::FormationService,
        state::AppState,
    },
};

/// Tag for grouping formation endpoints in OpenAPI documentation
pub static FORMATION_TAG: &str = "formation";

#[derive(Deserialize, IntoParams)]
pub struct FormationQuery {
    /// Exact software name; `all` or absent lists every formation
    pub software: Option<String>,
}

/// Create a new formation.
///
/// Stores a catalog entry together with its per-day schedule. The business code
/// `formationId` must be unique.
///
/// # Access Control
/// - `Admin` - Only admins can create formations
///
/// # Returns
/// - `201 Created` - The stored formation
/// - `400 Bad Request` - Missing required field, or `formationId` already exists
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/formations",
    tag = FORMATION_TAG,
    request_body = CreateFormationDto,
    responses(
        (status = 201, description = "Successfully created formation", body = FormationDto),
        (status = 400, description = "Invalid formation data or duplicate formation ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_formation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFormationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateFormationParam::from_dto(payload, Some(user.id))?;

    let formation = FormationService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(formation.into_dto())))
}

/// List formations, newest first.
///
/// Public endpoint used by the catalog pages.
#[utoipa::path(
    get,
    path = "/formations",
    tag = FORMATION_TAG,
    params(FormationQuery),
    responses(
        (status = 200, description = "Successfully retrieved formations", body = Vec<FormationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_formations(
    State(state): State<AppState>,
    Query(query): Query<FormationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let formations = FormationService::new(&state.db)
        .get_all(query.software)
        .await?;

    let dtos: Vec<FormationDto> = formations.into_iter().map(Formation::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a formation by ID. Public endpoint.
#[utoipa::path(
    get,
    path = "/formations/{id}",
    tag = FORMATION_TAG,
    params(
        ("id" = i32, Path, description = "Formation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved formation", body = FormationDto),
        (status = 404, description = "Formation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_formation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let formation = FormationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Formation not found".to_string()))?;

    Ok((StatusCode::OK, Json(formation.into_dto())))
}

/// Update a formation.
///
/// Merges the provided fields; a provided `schedule` replaces the whole program.
///
/// # Access Control
/// - `Admin` - Only admins can update formations
#[utoipa::path(
    put,
    path = "/formations/{id}",
    tag = FORMATION_TAG,
    params(
        ("id" = i32, Path, description = "Formation ID")
    ),
    request_body = UpdateFormationDto,
    responses(
        (status = 200, description = "Successfully updated formation", body = FormationDto),
        (status = 400, description = "Invalid formation data or duplicate formation ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Formation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_formation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFormationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateFormationParam::from_dto(payload)?;

    let formation = FormationService::new(&state.db)
        .update(id, param)
        .await?
        .ok_or_else(|| AppError::NotFound("Formation not found".to_string()))?;

    Ok((StatusCode::OK, Json(formation.into_dto())))
}

/// Delete a formation and its schedule.
///
/// # Access Control
/// - `Admin` - Only admins can delete formations
#[utoipa::path(
    delete,
    path = "/formations/{id}",
    tag = FORMATION_TAG,
    params(
        ("id" = i32, Path, description = "Formation ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted formation", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Formation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_formation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !FormationService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Formation not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Formation deleted successfully")),
    ))
}
