use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use inkpost_application::{CreateRoleInput, UpdateRoleInput};

use crate::dto::{CreateRoleRequest, RoleMenusPayload, RoleResponse, UpdateRoleRequest};
use crate::error::ApiResult;
use crate::state::AppState;

use super::parse_uuid;

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state
        .role_service
        .create_role(CreateRoleInput::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let id = parse_uuid(&role_id, "role")?;
    let role = state
        .role_service
        .update_role(id, UpdateRoleInput::from(payload))
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .role_service
        .delete_role(parse_uuid(&role_id, "role")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn role_menus_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<RoleMenusPayload>> {
    let menu_ids = state
        .role_service
        .role_menu_ids(parse_uuid(&role_id, "role")?)
        .await?;

    Ok(Json(RoleMenusPayload { menu_ids }))
}

/// PUT /api/roles/{id}/menus - Replace the role's menu set.
pub async fn replace_role_menus_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    Json(payload): Json<RoleMenusPayload>,
) -> ApiResult<Json<RoleMenusPayload>> {
    let menu_ids = state
        .role_service
        .replace_role_menus(parse_uuid(&role_id, "role")?, &payload.menu_ids)
        .await?;

    Ok(Json(RoleMenusPayload { menu_ids }))
}
