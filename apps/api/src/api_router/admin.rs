use axum::Router;
use axum::routing::{get, put};

use crate::handlers::{menus, organizations, roles, users};
use crate::state::AppState;

pub(super) fn build_menu_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/menus",
            get(menus::menu_tree_handler).post(menus::create_menu_handler),
        )
        .route("/api/menus/list", get(menus::list_menus_handler))
        .route("/api/menus/sort", put(menus::sort_menus_handler))
        .route(
            "/api/menus/user/{user_id}",
            get(menus::user_menu_tree_handler),
        )
        .route(
            "/api/menus/{id}",
            put(menus::update_menu_handler).delete(menus::delete_menu_handler),
        )
}

pub(super) fn build_role_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/roles",
            get(roles::list_roles_handler).post(roles::create_role_handler),
        )
        .route(
            "/api/roles/{id}",
            put(roles::update_role_handler).delete(roles::delete_role_handler),
        )
        .route(
            "/api/roles/{id}/menus",
            get(roles::role_menus_handler).put(roles::replace_role_menus_handler),
        )
}

pub(super) fn build_user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route("/api/users/search", get(users::search_users_handler))
        .route(
            "/api/users/by-user-id/{user_id}",
            get(users::get_user_by_user_id_handler),
        )
        .route(
            "/api/users/{id}",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
}

pub(super) fn build_organization_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/organizations",
            get(organizations::list_organizations_handler)
                .post(organizations::create_organization_handler),
        )
        .route(
            "/api/organizations/{id}",
            get(organizations::get_organization_handler)
                .put(organizations::update_organization_handler)
                .delete(organizations::delete_organization_handler),
        )
}
