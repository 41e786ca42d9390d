//! Role persistence port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use inkpost_core::AppResult;

/// Role record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    /// Internal identifier.
    pub id: Uuid,
    /// Unique role key referenced by users, for example `admin`.
    pub role_id: String,
    /// Unique display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Repository port for roles and their menu assignments.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists every role.
    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>>;

    /// Finds a role by internal identifier.
    async fn find_role(&self, id: Uuid) -> AppResult<Option<RoleRecord>>;

    /// Finds a role by its key.
    async fn find_role_by_key(&self, role_id: &str) -> AppResult<Option<RoleRecord>>;

    /// Finds a role by display name.
    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<RoleRecord>>;

    /// Inserts a role. Fails with `Conflict` when the key or name is taken.
    async fn create_role(&self, role: RoleRecord) -> AppResult<RoleRecord>;

    /// Updates name and description.
    async fn save_role(&self, role: &RoleRecord) -> AppResult<RoleRecord>;

    /// Deletes a role, clearing it from users and dropping its menu assignments.
    async fn delete_role(&self, id: Uuid) -> AppResult<bool>;

    /// Returns the external ids of the menus assigned to a role.
    async fn list_role_menu_ids(&self, id: Uuid) -> AppResult<Vec<String>>;

    /// Replaces the role's menu set with the existing menus among `menu_ids`.
    async fn replace_role_menus(&self, id: Uuid, menu_ids: &[String]) -> AppResult<()>;
}
