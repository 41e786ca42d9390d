//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_visitor_registry;
mod jwt_session_token_codec;
mod postgres_menu_repository;
mod postgres_organization_repository;
mod postgres_role_repository;
mod postgres_site_stats_repository;
mod postgres_user_repository;
mod redis_visitor_registry;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_visitor_registry::InMemoryVisitorRegistry;
pub use jwt_session_token_codec::{
    DEFAULT_TOKEN_LIFETIME_SECONDS, JwtSessionTokenCodec, MIN_JWT_SECRET_LENGTH,
};
pub use postgres_menu_repository::PostgresMenuRepository;
pub use postgres_organization_repository::PostgresOrganizationRepository;
pub use postgres_role_repository::PostgresRoleRepository;
pub use postgres_site_stats_repository::PostgresSiteStatsRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use redis_visitor_registry::RedisVisitorRegistry;
