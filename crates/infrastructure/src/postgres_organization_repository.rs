//! PostgreSQL-backed organization repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use inkpost_application::{OrganizationRecord, OrganizationRepository};
use inkpost_core::{AppError, AppResult};

/// PostgreSQL implementation of the organization repository port.
#[derive(Clone)]
pub struct PostgresOrganizationRepository {
    pool: PgPool,
}

impl PostgresOrganizationRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrganizationRow {
    id: Uuid,
    org_id: String,
    parent_org_id: Option<String>,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrganizationRow> for OrganizationRecord {
    fn from(row: OrganizationRow) -> Self {
        Self {
            id: row.id,
            org_id: row.org_id,
            parent_org_id: row.parent_org_id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn list_organizations(&self) -> AppResult<Vec<OrganizationRecord>> {
        let rows = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, org_id, parent_org_id, name, description, created_at, updated_at
            FROM organizations
            ORDER BY created_at, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list organizations: {error}")))?;

        Ok(rows.into_iter().map(OrganizationRecord::from).collect())
    }

    async fn find_organization(&self, id: Uuid) -> AppResult<Option<OrganizationRecord>> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, org_id, parent_org_id, name, description, created_at, updated_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find organization: {error}")))?;

        Ok(row.map(OrganizationRecord::from))
    }

    async fn find_organization_by_key(
        &self,
        org_id: &str,
    ) -> AppResult<Option<OrganizationRecord>> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, org_id, parent_org_id, name, description, created_at, updated_at
            FROM organizations
            WHERE org_id = $1
            "#,
        )
        .bind(org_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find organization: {error}")))?;

        Ok(row.map(OrganizationRecord::from))
    }

    async fn create_organization(
        &self,
        organization: OrganizationRecord,
    ) -> AppResult<OrganizationRecord> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            INSERT INTO organizations (
                id, org_id, parent_org_id, name, description, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, org_id, parent_org_id, name, description, created_at, updated_at
            "#,
        )
        .bind(organization.id)
        .bind(&organization.org_id)
        .bind(&organization.parent_org_id)
        .bind(&organization.name)
        .bind(&organization.description)
        .bind(organization.created_at)
        .bind(organization.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            if let sqlx::Error::Database(ref database_error) = error
                && database_error.code().as_deref() == Some("23505")
            {
                return AppError::Conflict(format!(
                    "organization id '{}' already exists",
                    organization.org_id
                ));
            }

            AppError::Internal(format!("failed to create organization: {error}"))
        })?;

        Ok(row.into())
    }

    async fn save_organization(
        &self,
        organization: &OrganizationRecord,
    ) -> AppResult<OrganizationRecord> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            UPDATE organizations
            SET parent_org_id = $2, name = $3, description = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, org_id, parent_org_id, name, description, created_at, updated_at
            "#,
        )
        .bind(organization.id)
        .bind(&organization.parent_org_id)
        .bind(&organization.name)
        .bind(&organization.description)
        .bind(organization.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update organization: {error}")))?;

        row.map(OrganizationRecord::from).ok_or_else(|| {
            AppError::NotFound(format!("organization '{}' does not exist", organization.id))
        })
    }

    async fn delete_organization(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to delete organization: {error}"))
            })?;

        Ok(result.rows_affected() > 0)
    }
}
