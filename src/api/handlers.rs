use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, instrument};

use super::dtos::{CreateUserRequest, UserResponse};
use super::error::ApiError;
use crate::clients::RegistryClient;

#[instrument(skip(client))]
pub async fn list_users(
    State(client): State<RegistryClient>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Handling GET /users");
    let users = client.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(client, payload))]
pub async fn create_user(
    State(client): State<RegistryClient>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    debug!("Handling POST /users");
    let Json(payload) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    client.create_user(payload.into()).await?;
    Ok(StatusCode::CREATED)
}
