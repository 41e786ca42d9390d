use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use inkpost_application::{CreateUserInput, UpdateUserInput};
use inkpost_domain::UserId;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse, UserSearchQuery};
use crate::error::ApiResult;
use crate::state::AppState;

use super::parse_uuid;

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/search?keyword= - Case-insensitive match on email or name.
pub async fn search_users_handler(
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .search_users(query.keyword.as_deref())
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.get_user(user_id_from_path(&id)?).await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn get_user_by_user_id_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user_by_user_id(user_id.as_str())
        .await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .user_service
        .create_user(CreateUserInput::try_from(payload)?)
        .await?;

    tracing::info!(user_id = %user.user_id, "user created by administrator");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(user_id_from_path(&id)?, UpdateUserInput::try_from(payload)?)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user_id = user_id_from_path(&id)?;
    state.user_service.delete_user(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn user_id_from_path(value: &str) -> Result<UserId, inkpost_core::AppError> {
    parse_uuid(value, "user").map(UserId::from_uuid)
}
