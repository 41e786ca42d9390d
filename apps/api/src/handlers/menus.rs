use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use inkpost_application::{CreateMenuInput, MenuPosition};
use inkpost_core::AppError;
use inkpost_domain::{MenuAttributes, MenuId};

use crate::dto::{
    CreateMenuRequest, DeletedMenusResponse, MenuResponse, MenuSortEntryRequest, MenuSortResponse,
    MenuTreeResponse, UpdateMenuRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/menus/user/{user_id} - Role-scoped forest of a user.
pub async fn user_menu_tree_handler(
    State(state): State<AppState>,
    Path(user_ref): Path<String>,
) -> ApiResult<Json<Vec<MenuTreeResponse>>> {
    let forest = state
        .menu_service
        .menus_for_user(user_ref.as_str())
        .await?
        .into_iter()
        .map(MenuTreeResponse::from)
        .collect();

    Ok(Json(forest))
}

/// GET /api/menus - Administrative forest of every menu.
pub async fn menu_tree_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MenuTreeResponse>>> {
    let forest = state
        .menu_service
        .full_tree()
        .await?
        .into_iter()
        .map(MenuTreeResponse::from)
        .collect();

    Ok(Json(forest))
}

/// GET /api/menus/list - Flat menu rows ordered by sort order.
pub async fn list_menus_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MenuResponse>>> {
    let menus = state
        .menu_service
        .list_menus()
        .await?
        .into_iter()
        .map(MenuResponse::from)
        .collect();

    Ok(Json(menus))
}

pub async fn create_menu_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuRequest>,
) -> ApiResult<(StatusCode, Json<MenuResponse>)> {
    let input = CreateMenuInput::try_from(payload)?;
    let menu = state.menu_service.create_menu(input).await?;

    Ok((StatusCode::CREATED, Json(MenuResponse::from(menu))))
}

pub async fn update_menu_handler(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    Json(payload): Json<UpdateMenuRequest>,
) -> ApiResult<Json<MenuResponse>> {
    let id = MenuId::parse(menu_id.as_str())
        .ok_or_else(|| AppError::NotFound(format!("menu '{menu_id}' does not exist")))?;
    let attributes = MenuAttributes::try_from(payload)?;
    let menu = state.menu_service.update_menu(id, attributes).await?;

    Ok(Json(MenuResponse::from(menu)))
}

/// DELETE /api/menus/{id} - Delete a menu together with its descendants.
pub async fn delete_menu_handler(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> ApiResult<Json<DeletedMenusResponse>> {
    let not_found = || AppError::NotFound(format!("menu '{menu_id}' does not exist"));

    let id = MenuId::parse(menu_id.as_str()).ok_or_else(not_found)?;
    let deleted_menu_ids = state
        .menu_service
        .delete_menu(id)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        menu = %menu_id,
        deleted = deleted_menu_ids.len(),
        "menu subtree deleted"
    );

    Ok(Json(DeletedMenusResponse { deleted_menu_ids }))
}

/// PUT /api/menus/sort - Bulk reposition. Unknown entries are skipped.
pub async fn sort_menus_handler(
    State(state): State<AppState>,
    Json(payload): Json<Vec<MenuSortEntryRequest>>,
) -> ApiResult<Json<MenuSortResponse>> {
    let positions = payload.into_iter().map(MenuPosition::from).collect();
    let updated = state.menu_service.reorder_menus(positions).await?;

    Ok(Json(MenuSortResponse {
        updated: u32::try_from(updated).unwrap_or(u32::MAX),
    }))
}
