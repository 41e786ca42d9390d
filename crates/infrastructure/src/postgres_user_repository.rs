//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use inkpost_application::{NewUser, UserRecord, UserRepository};
use inkpost_core::{AppError, AppResult};
use inkpost_domain::{AccountStatus, UserId};

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Column list shared by every user query. Expects `users u LEFT JOIN roles r`.
const USER_COLUMNS: &str = r#"
    u.id, u.user_id, u.email, u.password_hash, u.name, u.role_id, r.name AS role_name,
    u.org_id, u.organization, u.avatar, u.bio, u.website, u.job_title, u.phone,
    u.status, u.session_version, u.last_login_at, u.created_at, u.updated_at
"#;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: uuid::Uuid,
    user_id: String,
    email: String,
    password_hash: String,
    name: Option<String>,
    role_id: Option<String>,
    role_name: Option<String>,
    org_id: Option<String>,
    organization: Option<String>,
    avatar: Option<String>,
    bio: Option<String>,
    website: Option<String>,
    job_title: Option<String>,
    phone: Option<String>,
    status: i16,
    session_version: i32,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::from_uuid(row.id),
            user_id: row.user_id,
            email: row.email,
            password_hash: row.password_hash,
            name: row.name,
            role_id: row.role_id,
            role_name: row.role_name,
            org_id: row.org_id,
            organization: row.organization,
            avatar: row.avatar,
            bio: row.bio,
            website: row.website,
            job_title: row.job_title,
            phone: row.phone,
            status: AccountStatus::from_code(row.status)?,
            session_version: row.session_version,
            last_login_at: row.last_login_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

mod account;
mod lookup;


#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        self.list_users_impl(None).await
    }

    async fn search_users(&self, keyword: &str) -> AppResult<Vec<UserRecord>> {
        self.list_users_impl(Some(keyword)).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        self.find_one_impl("LOWER(u.email) = LOWER($1)", email, "email")
            .await
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>> {
        self.find_by_id_impl(id).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserRecord>> {
        self.find_one_impl("u.user_id = $1", user_id, "user id")
            .await
    }

    async fn create_user(&self, user: NewUser) -> AppResult<UserRecord> {
        self.create_user_impl(user).await
    }

    async fn save_user(&self, user: &UserRecord) -> AppResult<UserRecord> {
        self.save_user_impl(user).await
    }

    async fn delete_user(&self, id: UserId) -> AppResult<bool> {
        self.delete_user_impl(id).await
    }

    async fn bump_session_version(&self, id: UserId, stamp_login: bool) -> AppResult<i32> {
        self.bump_session_version_impl(id, stamp_login).await
    }
}

fn user_conflict_or_internal(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(
            "an account with this email or user id already exists".to_owned(),
        );
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}
