use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use inkpost_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{auth, handlers, middleware};

mod admin;
mod cors;

pub fn build_router(app_state: AppState, frontend_urls: &[String]) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_urls)?;

    let protected_routes = Router::new()
        .route("/api/auth/me", get(auth::me_handler))
        .merge(admin::build_menu_routes())
        .merge(admin::build_role_routes())
        .merge(admin::build_user_routes())
        .merge(admin::build_organization_routes())
        .route_layer(from_fn(middleware::require_auth));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/logout", post(auth::logout_handler))
        .route(
            "/api/stats/visit",
            post(handlers::stats::record_visit_handler),
        )
        .route(
            "/api/stats/overview",
            get(handlers::stats::overview_handler),
        )
        .route(
            "/api/stats/recent",
            get(handlers::stats::recent_stats_handler),
        );

    Ok(Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(from_fn_with_state(
            app_state.clone(),
            middleware::authenticate_request,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
