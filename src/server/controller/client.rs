use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        client::{ClientDto, CreateClientDto, UpdateClientDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::client::{Client, CreateClientParam, UpdateClientParam},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Create a new client.
///
/// Stores a client of the training center. The business code `clientId` must be
/// unique.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The stored client
/// - `400 Bad Request` - Missing required field, or `clientId` already exists
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Successfully created client", body = ClientDto),
        (status = 400, description = "Invalid client data or duplicate client ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let param = CreateClientParam::from_dto(payload, Some(user.id))?;

    let client = ClientService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// List all clients, newest first.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClientDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let clients = ClientService::new(&state.db).get_all().await?;

    let dtos: Vec<ClientDto> = clients.into_iter().map(Client::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a client by ID.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let client = ClientService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Update a client.
///
/// Merges the provided fields into the stored client; absent fields are left
/// untouched.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The updated client
/// - `400 Bad Request` - Blank required field, or `clientId` already exists
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Client not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = ClientDto),
        (status = 400, description = "Invalid client data or duplicate client ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let param = UpdateClientParam::from_dto(payload)?;

    let client = ClientService::new(&state.db)
        .update(id, param)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Delete a client.
///
/// PDF records referencing the client are kept; their client summary becomes null.
///
/// # Access Control
/// - `Admin` - Only admins can delete clients
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted client", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !ClientService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Client not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Client deleted")),
    ))
}
