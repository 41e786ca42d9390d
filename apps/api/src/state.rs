use inkpost_application::{
    AuthService, MenuService, OrganizationService, RoleService, SiteStatsService, UserService,
};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub role_service: RoleService,
    pub menu_service: MenuService,
    pub organization_service: OrganizationService,
    pub site_stats_service: SiteStatsService,
    pub postgres_pool: PgPool,
    pub redis_client: Option<redis::Client>,
    pub cookie_secure: bool,
    pub token_lifetime_seconds: u64,
}
