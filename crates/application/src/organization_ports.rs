//! Organization persistence port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use inkpost_core::AppResult;

/// Organization record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRecord {
    /// Internal identifier.
    pub id: Uuid,
    /// Unique external key.
    pub org_id: String,
    /// External key of the parent organization.
    pub parent_org_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Repository port for organizations.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Lists every organization.
    async fn list_organizations(&self) -> AppResult<Vec<OrganizationRecord>>;

    /// Finds an organization by internal identifier.
    async fn find_organization(&self, id: Uuid) -> AppResult<Option<OrganizationRecord>>;

    /// Finds an organization by external key.
    async fn find_organization_by_key(&self, org_id: &str)
    -> AppResult<Option<OrganizationRecord>>;

    /// Inserts an organization. Fails with `Conflict` when the key is taken.
    async fn create_organization(
        &self,
        organization: OrganizationRecord,
    ) -> AppResult<OrganizationRecord>;

    /// Updates parent, name and description.
    async fn save_organization(
        &self,
        organization: &OrganizationRecord,
    ) -> AppResult<OrganizationRecord>;

    /// Deletes an organization. Returns `false` when no row matched.
    async fn delete_organization(&self, id: Uuid) -> AppResult<bool>;
}
