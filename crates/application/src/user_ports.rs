//! User persistence and credential ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use inkpost_core::AppResult;
use inkpost_domain::{AccountStatus, UserId};

/// User record returned by repository queries.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Internal identifier.
    pub id: UserId,
    /// Stable external identifier, for example `jane-doe`.
    pub user_id: String,
    /// Canonical lower-cased email address.
    pub email: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Display name.
    pub name: Option<String>,
    /// Key of the assigned role.
    pub role_id: Option<String>,
    /// Name of the assigned role, resolved by the repository.
    pub role_name: Option<String>,
    /// Key of the organization the user belongs to.
    pub org_id: Option<String>,
    /// Organization display name kept alongside the key.
    pub organization: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Personal website.
    pub website: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Whether the account may sign in.
    pub status: AccountStatus,
    /// Version a session token must carry to authenticate.
    pub session_version: i32,
    /// Time of the last successful login.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Profile fields shared by create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name.
    pub name: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Personal website.
    pub website: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// Fully resolved user row to insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Internal identifier.
    pub id: UserId,
    /// External identifier, unique.
    pub user_id: String,
    /// Canonical email, unique.
    pub email: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Role key.
    pub role_id: Option<String>,
    /// Organization key.
    pub org_id: Option<String>,
    /// Organization display name.
    pub organization: Option<String>,
    /// Profile fields.
    pub profile: UserProfile,
    /// Initial account status.
    pub status: AccountStatus,
}

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists every user, oldest first.
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Lists users whose email or name contains `keyword`, case-insensitively.
    async fn search_users(&self, keyword: &str) -> AppResult<Vec<UserRecord>>;

    /// Finds a user by canonical email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// Finds a user by internal identifier.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>>;

    /// Finds a user by external identifier.
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserRecord>>;

    /// Inserts a user. Fails with `Conflict` when the email or external id is taken.
    async fn create_user(&self, user: NewUser) -> AppResult<UserRecord>;

    /// Overwrites every mutable column of an existing user.
    async fn save_user(&self, user: &UserRecord) -> AppResult<UserRecord>;

    /// Deletes a user. Returns `false` when no row matched.
    async fn delete_user(&self, id: UserId) -> AppResult<bool>;

    /// Atomically increments the session version and returns the new value.
    ///
    /// When `stamp_login` is set the last login time is updated in the same statement.
    async fn bump_session_version(&self, id: UserId, stamp_login: bool) -> AppResult<i32>;
}

/// Port for password hashing operations.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}
