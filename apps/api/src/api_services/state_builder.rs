use std::sync::Arc;

use inkpost_application::{
    AuthService, MenuRepository, MenuService, OrganizationRepository, OrganizationService,
    PasswordHasher, RoleRepository, RoleService, SessionTokenCodec, SiteStatsService,
    UserRepository, UserService, VisitorRegistry,
};
use inkpost_core::AppError;
use inkpost_infrastructure::{
    Argon2PasswordHasher, InMemoryVisitorRegistry, JwtSessionTokenCodec, PostgresMenuRepository,
    PostgresOrganizationRepository, PostgresRoleRepository, PostgresSiteStatsRepository,
    PostgresUserRepository, RedisVisitorRegistry,
};
use sqlx::PgPool;

use crate::api_config::ApiConfig;
use crate::state::AppState;

use super::redis::build_redis_client;

const VISITOR_KEY_PREFIX: &str = "inkpost:visitors";

pub fn build_app_state(pool: PgPool, config: &ApiConfig) -> Result<AppState, AppError> {
    let redis_client = config
        .redis_url
        .as_deref()
        .map(build_redis_client)
        .transpose()?;

    let user_repository: Arc<dyn UserRepository> =
        Arc::new(PostgresUserRepository::new(pool.clone()));
    let role_repository: Arc<dyn RoleRepository> =
        Arc::new(PostgresRoleRepository::new(pool.clone()));
    let menu_repository: Arc<dyn MenuRepository> =
        Arc::new(PostgresMenuRepository::new(pool.clone()));
    let organization_repository: Arc<dyn OrganizationRepository> =
        Arc::new(PostgresOrganizationRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let token_codec: Arc<dyn SessionTokenCodec> = Arc::new(JwtSessionTokenCodec::new(
        config.jwt_secret.as_str(),
        config.jwt_expiration_seconds,
    )?);

    let visitor_registry: Arc<dyn VisitorRegistry> = match redis_client.clone() {
        Some(client) => {
            tracing::info!("visitor dedup backed by redis");
            Arc::new(RedisVisitorRegistry::new(client, VISITOR_KEY_PREFIX))
        }
        None => {
            tracing::info!("visitor dedup is process-local, REDIS_URL not set");
            Arc::new(InMemoryVisitorRegistry::new())
        }
    };

    Ok(AppState {
        auth_service: AuthService::new(
            user_repository.clone(),
            role_repository.clone(),
            password_hasher.clone(),
            token_codec,
        ),
        user_service: UserService::new(
            user_repository.clone(),
            role_repository.clone(),
            organization_repository.clone(),
            password_hasher,
        ),
        role_service: RoleService::new(role_repository),
        menu_service: MenuService::new(menu_repository, user_repository),
        organization_service: OrganizationService::new(organization_repository),
        site_stats_service: SiteStatsService::new(
            Arc::new(PostgresSiteStatsRepository::new(pool.clone())),
            visitor_registry,
        ),
        postgres_pool: pool,
        redis_client,
        cookie_secure: config.cookie_secure,
        token_lifetime_seconds: config.jwt_expiration_seconds,
    })
}
